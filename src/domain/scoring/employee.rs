//! Employee aggregate - Salary, criterion sub-scores, monthly records and alerts.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::domain::foundation::{EmployeeId, Period, Timestamp, ValidationError};

/// Upper bound of a criterion sub-score.
pub const MAX_SUB_SCORE: f64 = 1000.0;

/// Sales figures for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub period: Period,
    pub target_sales: f64,
    pub achieved_sales: f64,
    pub profit: f64,
    pub recorded_at: Timestamp,
}

impl PerformanceRecord {
    pub fn new(
        period: Period,
        target_sales: f64,
        achieved_sales: f64,
        profit: f64,
    ) -> Result<Self, ValidationError> {
        ensure_non_negative("target_sales", target_sales)?;
        ensure_non_negative("achieved_sales", achieved_sales)?;
        if !profit.is_finite() {
            return Err(ValidationError::invalid_format("profit", "must be a finite number"));
        }

        Ok(Self {
            period,
            target_sales,
            achieved_sales,
            profit,
            recorded_at: Timestamp::now(),
        })
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
    }
    Ok(())
}

/// Salary and criterion sub-scores (0..=1000 per criterion name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFinancials {
    current_salary: f64,
    sub_scores: BTreeMap<String, f64>,
}

impl EmployeeFinancials {
    pub fn new(
        current_salary: f64,
        sub_scores: BTreeMap<String, f64>,
    ) -> Result<Self, ValidationError> {
        if !current_salary.is_finite() || current_salary <= 0.0 {
            return Err(ValidationError::out_of_range(
                "current_salary",
                f64::MIN_POSITIVE,
                f64::MAX,
                current_salary,
            ));
        }
        for (name, value) in &sub_scores {
            validate_sub_score(name, *value)?;
        }
        Ok(Self {
            current_salary,
            sub_scores,
        })
    }

    pub fn current_salary(&self) -> f64 {
        self.current_salary
    }

    pub fn sub_score(&self, criterion: &str) -> Option<f64> {
        self.sub_scores.get(criterion).copied()
    }

    pub fn sub_scores(&self) -> &BTreeMap<String, f64> {
        &self.sub_scores
    }

    /// Sets one criterion's sub-score, returning the old value.
    pub fn set_sub_score(
        &mut self,
        criterion: impl Into<String>,
        value: f64,
    ) -> Result<Option<f64>, ValidationError> {
        let criterion = criterion.into();
        validate_sub_score(&criterion, value)?;
        Ok(self.sub_scores.insert(criterion, value))
    }
}

fn validate_sub_score(name: &str, value: f64) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("sub_score.criterion"));
    }
    if !value.is_finite() || !(0.0..=MAX_SUB_SCORE).contains(&value) {
        return Err(ValidationError::out_of_range(
            format!("sub_score.{}", name),
            0.0,
            MAX_SUB_SCORE,
            value,
        ));
    }
    Ok(())
}

/// A dated adjustment of one criterion's sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreChange {
    pub criterion: String,
    /// First period the new score applies to.
    pub effective_from: Period,
    /// `None` when the criterion had no sub-score before.
    pub previous_score: Option<f64>,
    pub change: f64,
    pub new_score: f64,
    #[serde(default)]
    pub reason: String,
    pub changed_at: Timestamp,
}

/// Kind of alert raised against an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    LowHcroi,
    LowScore,
    Underperformance,
}

/// An alert raised against an employee; only unresolved alerts count toward
/// the critical tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub alert_type: AlertType,
    pub message: String,
    #[serde(default)]
    pub resolved: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub resolved_at: Option<Timestamp>,
}

impl Alert {
    pub fn new(alert_type: AlertType, message: impl Into<String>) -> Self {
        Self {
            alert_type,
            message: message.into(),
            resolved: false,
            created_at: Timestamp::now(),
            resolved_at: None,
        }
    }
}

/// An evaluated employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    active: bool,
    financials: EmployeeFinancials,
    records: BTreeMap<Period, PerformanceRecord>,
    #[serde(default)]
    score_changes: Vec<ScoreChange>,
    alerts: Vec<Alert>,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        financials: EmployeeFinancials,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("employee.name"));
        }
        Ok(Self {
            id,
            name,
            active: true,
            financials,
            records: BTreeMap::new(),
            score_changes: Vec::new(),
            alerts: Vec::new(),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn financials(&self) -> &EmployeeFinancials {
        &self.financials
    }

    pub fn financials_mut(&mut self) -> &mut EmployeeFinancials {
        &mut self.financials
    }

    /// Adds `change` to a criterion's sub-score from `effective_from` on.
    ///
    /// A criterion without a sub-score starts from 0. Adjustments are kept in
    /// non-decreasing `effective_from` order; an earlier one is refused.
    ///
    /// # Errors
    /// - `InvalidFormat` if `change` is not finite or `effective_from`
    ///   precedes the latest adjustment
    /// - `OutOfRange` if the new score leaves 0..=1000
    pub fn adjust_sub_score(
        &mut self,
        criterion: impl Into<String>,
        change: f64,
        effective_from: Period,
        reason: impl Into<String>,
    ) -> Result<ScoreChange, ValidationError> {
        let criterion = criterion.into();
        if !change.is_finite() {
            return Err(ValidationError::invalid_format(
                "score_change.change",
                "must be a finite number",
            ));
        }
        if let Some(latest) = self.score_changes.last() {
            if effective_from < latest.effective_from {
                return Err(ValidationError::invalid_format(
                    "score_change.effective_from",
                    format!("must not precede {}", latest.effective_from),
                ));
            }
        }

        let previous_score = self.financials.sub_score(&criterion);
        let new_score = previous_score.unwrap_or(0.0) + change;
        self.financials.set_sub_score(criterion.clone(), new_score)?;

        let entry = ScoreChange {
            criterion,
            effective_from,
            previous_score,
            change,
            new_score,
            reason: reason.into(),
            changed_at: Timestamp::now(),
        };
        self.score_changes.push(entry.clone());
        Ok(entry)
    }

    /// Sub-score adjustments, oldest first.
    pub fn score_changes(&self) -> &[ScoreChange] {
        &self.score_changes
    }

    /// Financials with the sub-scores in effect during `period`.
    ///
    /// Adjustments effective after `period` are rolled back.
    pub fn financials_at(&self, period: Period) -> Cow<'_, EmployeeFinancials> {
        let mut later = self
            .score_changes
            .iter()
            .rev()
            .take_while(|c| c.effective_from > period)
            .peekable();
        if later.peek().is_none() {
            return Cow::Borrowed(&self.financials);
        }

        let mut financials = self.financials.clone();
        for change in later {
            match change.previous_score {
                Some(score) => {
                    financials.sub_scores.insert(change.criterion.clone(), score);
                }
                None => {
                    financials.sub_scores.remove(&change.criterion);
                }
            }
        }
        Cow::Owned(financials)
    }

    /// Stores a record, replacing any record for the same period.
    ///
    /// Returns the replaced record, if any.
    pub fn record_performance(&mut self, record: PerformanceRecord) -> Option<PerformanceRecord> {
        self.records.insert(record.period, record)
    }

    pub fn record_for(&self, period: Period) -> Option<&PerformanceRecord> {
        self.records.get(&period)
    }

    /// Records in chronological order.
    pub fn records(&self) -> impl Iterator<Item = &PerformanceRecord> {
        self.records.values()
    }

    pub fn latest_period(&self) -> Option<Period> {
        self.records.keys().next_back().copied()
    }

    pub fn raise_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// Marks every open alert of the given type resolved. Returns how many changed.
    pub fn resolve_alerts(&mut self, alert_type: AlertType) -> usize {
        let now = Timestamp::now();
        let mut resolved = 0;
        for alert in self
            .alerts
            .iter_mut()
            .filter(|a| !a.resolved && a.alert_type == alert_type)
        {
            alert.resolved = true;
            alert.resolved_at = Some(now);
            resolved += 1;
        }
        resolved
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unresolved_alert_count(&self) -> u32 {
        self.alerts.iter().filter(|a| !a.resolved).count() as u32
    }
}
