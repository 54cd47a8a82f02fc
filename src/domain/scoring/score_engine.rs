//! Score Engine - Composite score, HCROI and break-even sales per period.
//!
//! ```text
//! compositeScore  = Σ weight_i × subScore_i
//! breakEvenSales  = currentSalary / 12 × costMultiplier
//! achievementRate = achieved / target × 100
//! hcroi           = revenue / breakEvenSales
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Period, ValidationError};
use crate::domain::weighting::WeightProfile;

use super::{Employee, EmployeeFinancials, PerformanceRecord};

/// Where the period's revenue figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueSource {
    /// Achieved sales of the period's record.
    Measured,
    /// Break-even sales scaled by a supplied achievement rate.
    Estimated,
}

/// Derived evaluation of one employee for one period. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub period: Period,
    pub composite_score: f64,
    /// Per-criterion `weight × subScore`.
    pub weighted_scores: BTreeMap<String, f64>,
    /// Criteria of the profile without a sub-score; they contributed 0.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_criteria: Vec<String>,
    pub hcroi: Option<f64>,
    pub break_even_sales: f64,
    pub achievement_rate: Option<f64>,
    pub current_revenue: Option<f64>,
    pub revenue_source: Option<RevenueSource>,
}

/// Stateless calculator parameterized by the cost multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEngine {
    cost_multiplier: f64,
}

impl ScoreEngine {
    /// Creates an engine; the multiplier must be finite and positive.
    pub fn new(cost_multiplier: f64) -> Result<Self, ValidationError> {
        if !cost_multiplier.is_finite() || cost_multiplier <= 0.0 {
            return Err(ValidationError::out_of_range(
                "cost_multiplier",
                f64::MIN_POSITIVE,
                f64::MAX,
                cost_multiplier,
            ));
        }
        Ok(Self { cost_multiplier })
    }

    pub fn cost_multiplier(&self) -> f64 {
        self.cost_multiplier
    }

    /// Monthly sales needed to cover the salary cost.
    pub fn break_even_sales(&self, current_salary: f64) -> f64 {
        current_salary / 12.0 * self.cost_multiplier
    }

    /// `achieved / target × 100`, or `None` for a zero target.
    pub fn achievement_rate(record: &PerformanceRecord) -> Option<f64> {
        if record.target_sales == 0.0 {
            return None;
        }
        Some(record.achieved_sales / record.target_sales * 100.0)
    }

    /// `revenue / breakEvenSales`, 0 when break-even is 0.
    pub fn hcroi(revenue: f64, break_even_sales: f64) -> f64 {
        if break_even_sales == 0.0 {
            return 0.0;
        }
        revenue / break_even_sales
    }

    /// Weighted sum of sub-scores; missing criteria contribute 0.
    pub fn composite_score(
        profile: &WeightProfile,
        financials: &EmployeeFinancials,
    ) -> (f64, BTreeMap<String, f64>, Vec<String>) {
        let mut weighted = BTreeMap::new();
        let mut missing = Vec::new();
        let mut total = 0.0;

        for (criterion, weight) in profile.entries() {
            match financials.sub_score(&criterion.name) {
                Some(sub_score) => {
                    let contribution = weight * sub_score;
                    total += contribution;
                    weighted.insert(criterion.name.clone(), contribution);
                }
                None => {
                    weighted.insert(criterion.name.clone(), 0.0);
                    missing.push(criterion.name.clone());
                }
            }
        }

        (total, weighted, missing)
    }

    /// Scores an employee for a period from its recorded sales, if any.
    pub fn score(&self, profile: &WeightProfile, employee: &Employee, period: Period) -> ScoreResult {
        self.evaluate(
            profile,
            &employee.financials_at(period),
            employee.record_for(period),
            period,
            None,
        )
    }

    /// Like [`score`](Self::score), but falls back to an estimated revenue
    /// from `estimated_rate` (percent) when the period has no record.
    pub fn score_with_rate(
        &self,
        profile: &WeightProfile,
        employee: &Employee,
        period: Period,
        estimated_rate: f64,
    ) -> ScoreResult {
        self.evaluate(
            profile,
            &employee.financials_at(period),
            employee.record_for(period),
            period,
            Some(estimated_rate),
        )
    }

    /// Scores every recorded period, oldest first, each with the sub-scores
    /// in effect at the time.
    pub fn score_history(&self, profile: &WeightProfile, employee: &Employee) -> Vec<ScoreResult> {
        employee
            .records()
            .map(|record| {
                self.evaluate(
                    profile,
                    &employee.financials_at(record.period),
                    Some(record),
                    record.period,
                    None,
                )
            })
            .collect()
    }

    /// Core computation over explicit inputs.
    pub fn evaluate(
        &self,
        profile: &WeightProfile,
        financials: &EmployeeFinancials,
        record: Option<&PerformanceRecord>,
        period: Period,
        estimated_rate: Option<f64>,
    ) -> ScoreResult {
        let (composite_score, weighted_scores, missing_criteria) =
            Self::composite_score(profile, financials);
        let break_even_sales = self.break_even_sales(financials.current_salary());

        let achievement_rate = record.and_then(Self::achievement_rate);

        let (current_revenue, revenue_source) = match (record, estimated_rate) {
            (Some(record), _) => (Some(record.achieved_sales), Some(RevenueSource::Measured)),
            (None, Some(rate)) if rate.is_finite() => (
                Some(break_even_sales * rate / 100.0),
                Some(RevenueSource::Estimated),
            ),
            _ => (None, None),
        };

        let hcroi = current_revenue.map(|revenue| Self::hcroi(revenue, break_even_sales));

        ScoreResult {
            period,
            composite_score,
            weighted_scores,
            missing_criteria,
            hcroi,
            break_even_sales,
            achievement_rate,
            current_revenue,
            revenue_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmployeeId;
    use crate::domain::weighting::Criterion;

    const EPS: f64 = 1e-6;

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    fn profile() -> WeightProfile {
        WeightProfile::manual(
            Criterion::from_names(&["Sales", "Attendance", "Other"]).unwrap(),
            vec![0.5, 0.3, 0.2],
        )
        .unwrap()
    }

    fn employee(salary: f64, scores: &[(&str, f64)]) -> Employee {
        let scores = scores
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>();
        let financials = EmployeeFinancials::new(salary, scores).unwrap();
        Employee::new(EmployeeId::new(), "Lee", financials).unwrap()
    }

    #[test]
    fn break_even_uses_monthly_salary_and_multiplier() {
        let engine = ScoreEngine::new(1.5).unwrap();
        assert!((engine.break_even_sales(36_000_000.0) - 4_500_000.0).abs() < EPS);
    }

    #[test]
    fn estimated_rate_yields_revenue_and_hcroi() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(36_000_000.0, &[]);

        let result = engine.score_with_rate(&profile(), &e, period("2024-06"), 80.0);

        assert!((result.break_even_sales - 4_500_000.0).abs() < EPS);
        assert!((result.current_revenue.unwrap() - 3_600_000.0).abs() < EPS);
        assert!((result.hcroi.unwrap() - 0.8).abs() < EPS);
        assert_eq!(result.revenue_source, Some(RevenueSource::Estimated));
        assert_eq!(result.achievement_rate, None);
    }

    #[test]
    fn measured_sales_win_over_estimate() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let mut e = employee(36_000_000.0, &[]);
        e.record_performance(
            PerformanceRecord::new(period("2024-06"), 5_000_000.0, 5_400_000.0, 0.0).unwrap(),
        );

        let result = engine.score_with_rate(&profile(), &e, period("2024-06"), 10.0);

        assert_eq!(result.current_revenue, Some(5_400_000.0));
        assert!((result.hcroi.unwrap() - 1.2).abs() < EPS);
        assert!((result.achievement_rate.unwrap() - 108.0).abs() < EPS);
        assert_eq!(result.revenue_source, Some(RevenueSource::Measured));
    }

    #[test]
    fn zero_target_gives_null_achievement_rate() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let mut e = employee(12_000_000.0, &[]);
        e.record_performance(PerformanceRecord::new(period("2024-02"), 0.0, 500.0, 0.0).unwrap());

        let result = engine.score(&profile(), &e, period("2024-02"));

        assert_eq!(result.achievement_rate, None);
        assert!(result.hcroi.is_some());
    }

    #[test]
    fn no_record_and_no_rate_gives_null_revenue() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(12_000_000.0, &[("Sales", 500.0)]);

        let result = engine.score(&profile(), &e, period("2024-02"));

        assert_eq!(result.current_revenue, None);
        assert_eq!(result.hcroi, None);
        assert_eq!(result.achievement_rate, None);
        assert_eq!(result.revenue_source, None);
    }

    #[test]
    fn composite_score_weights_sub_scores() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(
            12_000_000.0,
            &[("Sales", 800.0), ("Attendance", 900.0), ("Other", 500.0)],
        );

        let result = engine.score(&profile(), &e, period("2024-01"));

        // 0.5*800 + 0.3*900 + 0.2*500
        assert!((result.composite_score - 770.0).abs() < EPS);
        assert!((result.weighted_scores["Attendance"] - 270.0).abs() < EPS);
        assert!(result.missing_criteria.is_empty());
    }

    #[test]
    fn missing_sub_score_contributes_zero() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(12_000_000.0, &[("Sales", 1000.0)]);

        let result = engine.score(&profile(), &e, period("2024-01"));

        assert!((result.composite_score - 500.0).abs() < EPS);
        assert_eq!(result.missing_criteria, vec!["Attendance", "Other"]);
    }

    #[test]
    fn sub_scores_outside_profile_are_ignored() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(12_000_000.0, &[("Leadership", 1000.0)]);

        let result = engine.score(&profile(), &e, period("2024-01"));
        assert_eq!(result.composite_score, 0.0);
    }

    #[test]
    fn zero_break_even_gives_zero_hcroi() {
        assert_eq!(ScoreEngine::hcroi(100.0, 0.0), 0.0);
    }

    #[test]
    fn engine_rejects_bad_multiplier() {
        assert!(ScoreEngine::new(0.0).is_err());
        assert!(ScoreEngine::new(-1.5).is_err());
        assert!(ScoreEngine::new(f64::INFINITY).is_err());
    }

    #[test]
    fn history_covers_each_recorded_period() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let mut e = employee(12_000_000.0, &[]);
        for p in ["2024-03", "2024-01", "2024-02"] {
            e.record_performance(PerformanceRecord::new(period(p), 100.0, 100.0, 0.0).unwrap());
        }

        let history = engine.score_history(&profile(), &e);
        let periods: Vec<String> = history.iter().map(|r| r.period.to_string()).collect();
        assert_eq!(periods, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn history_uses_sub_scores_in_effect_each_period() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let mut e = employee(12_000_000.0, &[("Sales", 800.0)]);
        for p in ["2024-01", "2024-02", "2024-03"] {
            e.record_performance(PerformanceRecord::new(period(p), 100.0, 100.0, 0.0).unwrap());
        }
        e.adjust_sub_score("Sales", 100.0, period("2024-02"), "Promotion").unwrap();
        e.adjust_sub_score("Sales", -200.0, period("2024-03"), "Complaint").unwrap();

        let scores: Vec<f64> = engine
            .score_history(&profile(), &e)
            .iter()
            .map(|r| r.composite_score)
            .collect();

        // Sales weight 0.5: 800, 900, 700.
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 400.0).abs() < EPS);
        assert!((scores[1] - 450.0).abs() < EPS);
        assert!((scores[2] - 350.0).abs() < EPS);
    }

    #[test]
    fn score_result_serializes_camel_case() {
        let engine = ScoreEngine::new(1.5).unwrap();
        let e = employee(12_000_000.0, &[]);
        let json = serde_json::to_value(engine.score(&profile(), &e, period("2024-01"))).unwrap();

        assert_eq!(json["period"], "2024-01");
        assert!(json.get("compositeScore").is_some());
        assert!(json.get("breakEvenSales").is_some());
        assert!(json["hcroi"].is_null());
    }
}
