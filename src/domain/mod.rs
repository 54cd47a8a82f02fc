//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, periods, timestamps, errors)
//! - `weighting` - AHP pairwise judgments, weight profiles and the active-weight registry
//! - `scoring` - Employees, composite score, HCROI, break-even sales and trends
//! - `classification` - Risk tiers assigned by ordered rules
//! - `dashboard` - Per-employee evaluations and workforce views

pub mod classification;
pub mod dashboard;
pub mod foundation;
pub mod scoring;
pub mod weighting;
