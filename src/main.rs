//! hcroi-engine CLI
//!
//! Evaluates a workforce snapshot and prints the report as JSON.
//!
//! ```text
//! hcroi-engine <snapshot.json|snapshot.yaml> [YYYY-MM]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hcroi_engine::adapters::storage::{
    FileSnapshotReader, InMemoryEmployeeRepository, InMemoryWeightProfileHistory,
};
use hcroi_engine::application::handlers::{
    ActiveWeightsView, DeriveWeightsCommand, DeriveWeightsHandler, EvaluateWorkforceHandler,
    EvaluateWorkforceQuery, GetActiveWeightsHandler, SetWeightsCommand, SetWeightsHandler,
    WorkforceReport,
};
use hcroi_engine::config::{AppConfig, RuntimeConfig};
use hcroi_engine::domain::foundation::Period;
use hcroi_engine::domain::weighting::WeightRegistry;
use hcroi_engine::ports::SnapshotReader;

/// hcroi-engine - workforce weighting and risk classification
#[derive(Parser, Debug)]
#[command(name = "hcroi-engine")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workforce snapshot (.json, .yaml or .yml)
    snapshot: PathBuf,

    /// Reporting period (YYYY-MM); defaults to the snapshot's period
    #[arg(value_parser = Period::from_str)]
    period: Option<Period>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOutput {
    weights: ActiveWeightsView,
    report: WorkforceReport,
}

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&runtime.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the report.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if runtime.log_json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

async fn run(config: AppConfig, snapshot_path: PathBuf, period: Option<Period>) -> Result<()> {
    let snapshot = FileSnapshotReader::new()
        .read(&snapshot_path)
        .await
        .with_context(|| format!("failed to read snapshot {}", snapshot_path.display()))?;
    info!(
        path = %snapshot_path.display(),
        employees = snapshot.employees.len(),
        criteria = snapshot.criteria.len(),
        "Loaded snapshot"
    );

    let criteria = if snapshot.criteria.is_empty() {
        config
            .weighting
            .criteria()
            .context("invalid default criteria")?
    } else {
        snapshot.criteria.clone()
    };

    let registry = Arc::new(
        WeightRegistry::bootstrap(criteria.clone()).context("failed to bootstrap weights")?,
    );
    let history = Arc::new(InMemoryWeightProfileHistory::new());

    if let Some(judgments) = snapshot.judgments {
        DeriveWeightsHandler::new(
            registry.clone(),
            history.clone(),
            config.weighting.inconsistency_policy,
        )
        .handle(DeriveWeightsCommand {
            criteria,
            judgments,
            method: config.weighting.priority_method,
        })
        .await
        .context("failed to derive weights from judgments")?;
    } else if let Some(weights) = snapshot.weights {
        SetWeightsHandler::new(registry.clone(), history.clone())
            .handle(SetWeightsCommand { criteria, weights })
            .await
            .context("failed to set manual weights")?;
    }

    let employees = Arc::new(InMemoryEmployeeRepository::with_employees(snapshot.employees));
    let report = EvaluateWorkforceHandler::new(
        employees,
        registry.clone(),
        Arc::new(config.evaluator().context("invalid scoring configuration")?),
        config.dashboard.watch_list_limit,
    )
    .with_trend_months(config.dashboard.trend_months)
    .handle(EvaluateWorkforceQuery {
        period: period.or(snapshot.period),
        estimated_rates: snapshot.estimated_rates,
    })
    .await
    .context("failed to evaluate workforce")?;

    let output = CliOutput {
        weights: GetActiveWeightsHandler::new(registry).handle(),
        report,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.runtime);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(config, cli.snapshot, cli.period).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = format!("{:#}", e), "Evaluation failed");
            ExitCode::FAILURE
        }
    }
}
