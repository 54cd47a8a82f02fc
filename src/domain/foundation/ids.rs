//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Creates a new random EmployeeId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an EmployeeId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a stored weight profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightProfileId(Uuid);

impl WeightProfileId {
    /// Creates a new random WeightProfileId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a WeightProfileId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WeightProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WeightProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WeightProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_generates_unique_values() {
        let id1 = EmployeeId::new();
        let id2 = EmployeeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn employee_id_from_str_roundtrips() {
        let original = EmployeeId::new();
        let parsed: EmployeeId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn employee_id_from_str_rejects_garbage() {
        assert!("not-a-uuid".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn employee_id_serializes_as_bare_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = EmployeeId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn weight_profile_id_preserves_uuid() {
        let uuid = Uuid::new_v4();
        let id = WeightProfileId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
