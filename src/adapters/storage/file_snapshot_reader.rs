//! File-based Snapshot Reader Adapter
//!
//! Reads a workforce snapshot from a JSON or YAML file. The format is chosen
//! by file extension (`.yaml`/`.yml` for YAML, anything else JSON).
//!
//! ```json
//! {
//!   "period": "2024-06",
//!   "criteria": ["Sales", { "name": "Attendance", "description": "On time" }],
//!   "judgments": [3.0],
//!   "employees": [{
//!     "name": "Kim",
//!     "currentSalary": 36000000,
//!     "subScores": { "Sales": 850, "Attendance": 700 },
//!     "scoreChanges": [{ "criterion": "Sales", "change": -30, "effectiveFrom": "2024-06" }],
//!     "records": [{ "period": "2024-06", "targetSales": 5000000, "achievedSales": 4200000 }]
//!   }]
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tokio::fs;

use crate::domain::foundation::{DomainError, EmployeeId, ErrorCode, Period};
use crate::domain::scoring::{
    Alert, AlertType, Employee, EmployeeFinancials, PerformanceRecord,
};
use crate::domain::weighting::Criterion;
use crate::ports::{SnapshotReader, WorkforceSnapshot};

/// Reads snapshots from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileSnapshotReader;

impl FileSnapshotReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> Result<SnapshotDto, DomainError> {
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let parsed: Result<SnapshotDto, String> = if is_yaml {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Malformed snapshot: {}", reason))
                .with_detail("path", path.display().to_string())
        })
    }
}

#[async_trait]
impl SnapshotReader for FileSnapshotReader {
    async fn read(&self, path: &Path) -> Result<WorkforceSnapshot, DomainError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Cannot read snapshot: {}", e))
                .with_detail("path", path.display().to_string())
        })?;

        Self::parse(path, &content)?.into_snapshot()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// File format
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDto {
    criteria: Vec<CriterionDto>,
    #[serde(default)]
    judgments: Option<Vec<f64>>,
    #[serde(default)]
    weights: Option<Vec<f64>>,
    #[serde(default)]
    period: Option<Period>,
    #[serde(default)]
    employees: Vec<EmployeeDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CriterionDto {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        description: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeDto {
    #[serde(default)]
    id: Option<EmployeeId>,
    name: String,
    current_salary: f64,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    sub_scores: BTreeMap<String, f64>,
    #[serde(default)]
    estimated_rate: Option<f64>,
    #[serde(default)]
    score_changes: Vec<ScoreChangeDto>,
    #[serde(default)]
    records: Vec<RecordDto>,
    #[serde(default)]
    alerts: Vec<AlertDto>,
}

/// Applied in file order on top of `subScores`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreChangeDto {
    criterion: String,
    change: f64,
    effective_from: Period,
    #[serde(default)]
    reason: String,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDto {
    period: Period,
    target_sales: f64,
    achieved_sales: f64,
    #[serde(default)]
    profit: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertDto {
    alert_type: AlertType,
    #[serde(default)]
    message: String,
    #[serde(default)]
    resolved: bool,
}

impl SnapshotDto {
    fn into_snapshot(self) -> Result<WorkforceSnapshot, DomainError> {
        if self.judgments.is_some() && self.weights.is_some() {
            return Err(DomainError::validation(
                "weights",
                "Snapshot may carry judgments or weights, not both",
            ));
        }

        let criteria = self
            .criteria
            .into_iter()
            .enumerate()
            .map(|(i, dto)| {
                let order = i as u32 + 1;
                match dto {
                    CriterionDto::Name(name) => Criterion::new(name, "", order),
                    CriterionDto::Full { name, description } => {
                        Criterion::new(name, description, order)
                    }
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut employees = Vec::with_capacity(self.employees.len());
        let mut estimated_rates = HashMap::new();
        for dto in self.employees {
            let rate = dto.estimated_rate;
            let employee = dto.into_employee()?;
            if let Some(rate) = rate {
                estimated_rates.insert(employee.id(), rate);
            }
            employees.push(employee);
        }

        Ok(WorkforceSnapshot {
            criteria,
            judgments: self.judgments,
            weights: self.weights,
            period: self.period,
            estimated_rates,
            employees,
        })
    }
}

impl EmployeeDto {
    fn into_employee(self) -> Result<Employee, DomainError> {
        let financials = EmployeeFinancials::new(self.current_salary, self.sub_scores)?;
        let mut employee =
            Employee::new(self.id.unwrap_or_default(), self.name, financials)?;

        for dto in self.score_changes {
            employee.adjust_sub_score(dto.criterion, dto.change, dto.effective_from, dto.reason)?;
        }

        for record in self.records {
            employee.record_performance(PerformanceRecord::new(
                record.period,
                record.target_sales,
                record.achieved_sales,
                record.profit,
            )?);
        }

        for dto in self.alerts {
            let mut alert = Alert::new(dto.alert_type, dto.message);
            if dto.resolved {
                alert.resolved = true;
                alert.resolved_at = Some(alert.created_at);
            }
            employee.raise_alert(alert);
        }

        if !self.active {
            employee.deactivate();
        }
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).await.unwrap();
        path
    }

    const JSON: &str = r#"{
        "period": "2024-06",
        "criteria": ["Sales", { "name": "Attendance", "description": "On time" }],
        "judgments": [3.0],
        "employees": [{
            "name": "Kim",
            "currentSalary": 36000000,
            "subScores": { "Sales": 880, "Attendance": 700 },
            "scoreChanges": [
                { "criterion": "Sales", "change": -30, "effectiveFrom": "2024-06", "reason": "Late report" }
            ],
            "records": [
                { "period": "2024-05", "targetSales": 5000000, "achievedSales": 5200000 },
                { "period": "2024-06", "targetSales": 5000000, "achievedSales": 4200000, "profit": 300000 }
            ],
            "alerts": [
                { "alertType": "LOW_HCROI", "message": "below red" },
                { "alertType": "LOW_SCORE", "resolved": true }
            ]
        }, {
            "id": "6f1c1f7e-9a8b-4a53-9f0a-2a5e3b1c0d11",
            "name": "Lee",
            "currentSalary": 30000000,
            "estimatedRate": 80
        }]
    }"#;

    #[tokio::test]
    async fn test_reads_json_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "snapshot.json", JSON).await;

        let snapshot = FileSnapshotReader::new().read(&path).await.unwrap();

        assert_eq!(snapshot.period, Some("2024-06".parse().unwrap()));
        assert_eq!(snapshot.criteria.len(), 2);
        assert_eq!(snapshot.criteria[1].name, "Attendance");
        assert_eq!(snapshot.criteria[1].display_order, 2);
        assert_eq!(snapshot.judgments, Some(vec![3.0]));
        assert_eq!(snapshot.weights, None);
        assert_eq!(snapshot.employees.len(), 2);

        let kim = &snapshot.employees[0];
        assert_eq!(kim.records().count(), 2);
        assert_eq!(kim.unresolved_alert_count(), 1);
        let june = kim.record_for("2024-06".parse().unwrap()).unwrap();
        assert_eq!(june.profit, 300_000.0);
        assert_eq!(kim.financials().sub_score("Sales"), Some(850.0));
        assert_eq!(kim.score_changes()[0].reason, "Late report");
        let may = kim.financials_at("2024-05".parse().unwrap());
        assert_eq!(may.sub_score("Sales"), Some(880.0));

        let lee = &snapshot.employees[1];
        assert_eq!(
            lee.id().to_string(),
            "6f1c1f7e-9a8b-4a53-9f0a-2a5e3b1c0d11"
        );
        assert_eq!(snapshot.estimated_rates.get(&lee.id()), Some(&80.0));
        assert_eq!(snapshot.latest_period(), Some("2024-06".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_reads_yaml_snapshot() {
        let dir = TempDir::new().unwrap();
        let yaml = r#"
criteria: [Sales, Attendance]
weights: [0.6, 0.4]
employees:
  - name: Park
    currentSalary: 24000000
    active: false
    subScores:
      Sales: 900
"#;
        let path = write(&dir, "snapshot.yaml", yaml).await;

        let snapshot = FileSnapshotReader::new().read(&path).await.unwrap();

        assert_eq!(snapshot.weights, Some(vec![0.6, 0.4]));
        assert_eq!(snapshot.period, None);
        assert!(!snapshot.employees[0].is_active());
        assert_eq!(snapshot.employees[0].financials().sub_score("Sales"), Some(900.0));
    }

    #[tokio::test]
    async fn test_missing_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let result = FileSnapshotReader::new()
            .read(&dir.path().join("absent.json"))
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn test_malformed_file_is_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ \"criteria\": ").await;

        let err = FileSnapshotReader::new().read(&path).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.details.contains_key("path"));
    }

    #[tokio::test]
    async fn test_rejects_judgments_with_weights() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "both.json",
            r#"{ "criteria": ["A", "B"], "judgments": [2.0], "weights": [0.5, 0.5] }"#,
        )
        .await;

        let err = FileSnapshotReader::new().read(&path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_out_of_order_score_changes_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "changes.json",
            r#"{ "criteria": ["A"], "employees": [{
                "name": "X",
                "currentSalary": 1000,
                "subScores": { "A": 500 },
                "scoreChanges": [
                    { "criterion": "A", "change": 10, "effectiveFrom": "2024-05" },
                    { "criterion": "A", "change": 10, "effectiveFrom": "2024-04" }
                ]
            }] }"#,
        )
        .await;

        let err = FileSnapshotReader::new().read(&path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn test_invalid_salary_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "salary.json",
            r#"{ "criteria": ["A"], "employees": [{ "name": "X", "currentSalary": 0 }] }"#,
        )
        .await;

        let err = FileSnapshotReader::new().read(&path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
