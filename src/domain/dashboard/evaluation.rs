use serde::Serialize;

use crate::domain::classification::{
    ClassificationEngine, ClassificationInput, ClassificationResult,
};
use crate::domain::foundation::{EmployeeId, Period};
use crate::domain::scoring::{
    Employee, RevenueSource, ScoreEngine, ScoreResult, ScoringError, TrendAggregator,
    TrendSummary,
};
use crate::domain::weighting::WeightProfile;

/// One employee's full evaluation for a reporting period.
///
/// Dashboard views are built from a slice of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEvaluation {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub period: Period,
    pub score: ScoreResult,
    pub trend: TrendSummary,
    pub classification: ClassificationResult,
    /// Target of the period's record, if one exists.
    pub target_sales: Option<f64>,
}

impl EmployeeEvaluation {
    /// Revenue backed by a recorded period, excluding estimates.
    pub fn measured_revenue(&self) -> Option<f64> {
        match self.score.revenue_source {
            Some(RevenueSource::Measured) => self.score.current_revenue,
            _ => None,
        }
    }
}

/// Runs score, trend and classification for one employee.
#[derive(Debug, Clone)]
pub struct EmployeeEvaluator {
    score_engine: ScoreEngine,
    trend_aggregator: TrendAggregator,
    classification_engine: ClassificationEngine,
}

impl EmployeeEvaluator {
    pub fn new(
        score_engine: ScoreEngine,
        trend_aggregator: TrendAggregator,
        classification_engine: ClassificationEngine,
    ) -> Self {
        Self {
            score_engine,
            trend_aggregator,
            classification_engine,
        }
    }

    pub fn score_engine(&self) -> &ScoreEngine {
        &self.score_engine
    }

    pub fn classification_engine(&self) -> &ClassificationEngine {
        &self.classification_engine
    }

    /// Evaluates `period` against every earlier recorded period.
    ///
    /// `estimated_rate` is only used when `period` has no record.
    pub fn evaluate(
        &self,
        profile: &WeightProfile,
        employee: &Employee,
        period: Period,
        estimated_rate: Option<f64>,
    ) -> Result<EmployeeEvaluation, ScoringError> {
        let mut series: Vec<ScoreResult> = employee
            .records()
            .take_while(|record| record.period < period)
            .map(|record| {
                self.score_engine.evaluate(
                    profile,
                    &employee.financials_at(record.period),
                    Some(record),
                    record.period,
                    None,
                )
            })
            .collect();

        let current = self.score_engine.evaluate(
            profile,
            &employee.financials_at(period),
            employee.record_for(period),
            period,
            estimated_rate,
        );
        series.push(current.clone());

        let trend = self.trend_aggregator.summarize(&series)?;
        let input = ClassificationInput::new(&current, &trend, employee.unresolved_alert_count());
        let classification = self.classification_engine.classify(&input);

        Ok(EmployeeEvaluation {
            employee_id: employee.id(),
            employee_name: employee.name().to_string(),
            period,
            target_sales: employee.record_for(period).map(|r| r.target_sales),
            score: current,
            trend,
            classification,
        })
    }
}
