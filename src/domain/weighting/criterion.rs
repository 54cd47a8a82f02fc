//! Evaluation criterion value object.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// A named evaluation criterion, e.g. "Sales Performance".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub display_order: u32,
}

impl Criterion {
    /// Creates a criterion, rejecting blank names.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        display_order: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("criterion.name"));
        }
        Ok(Self {
            name,
            description: description.into(),
            display_order,
        })
    }

    /// Builds criteria from bare names, numbering display order from 1.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, ValidationError> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Criterion::new(name.as_ref(), "", i as u32 + 1))
            .collect()
    }
}

/// Ensures the list is non-empty and names are unique.
pub fn validate_criteria(criteria: &[Criterion]) -> Result<(), ValidationError> {
    if criteria.is_empty() {
        return Err(ValidationError::empty_field("criteria"));
    }

    let mut seen = HashSet::new();
    for criterion in criteria {
        if criterion.name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.name"));
        }
        if !seen.insert(criterion.name.as_str()) {
            return Err(ValidationError::invalid_format(
                "criteria",
                format!("duplicate criterion name '{}'", criterion.name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_trims_name() {
        let c = Criterion::new("  Attendance ", "punctuality", 2).unwrap();
        assert_eq!(c.name, "Attendance");
        assert_eq!(c.display_order, 2);
    }

    #[test]
    fn criterion_rejects_blank_name() {
        assert!(Criterion::new("   ", "", 1).is_err());
    }

    #[test]
    fn from_names_numbers_from_one() {
        let criteria = Criterion::from_names(&["Sales", "Attendance", "Other"]).unwrap();
        let orders: Vec<u32> = criteria.iter().map(|c| c.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn validate_rejects_duplicates() {
        let criteria = Criterion::from_names(&["Sales", "Sales"]).unwrap();
        let err = validate_criteria(&criteria).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn validate_rejects_empty_list() {
        assert!(validate_criteria(&[]).is_err());
    }

    #[test]
    fn criterion_serializes_camel_case() {
        let c = Criterion::new("Sales", "", 1).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("displayOrder"));
    }
}
