//! Weighting module - AHP-derived and manual criterion weights.
//!
//! # Components
//!
//! - `PairwiseMatrix` - reciprocal judgment matrix
//! - `AhpSolver` - priority vector and consistency ratio
//! - `WeightProfile` - versioned weight vector with provenance
//! - `WeightRegistry` - the single active profile behind an atomic swap

mod ahp_solver;
mod criterion;
mod errors;
mod pairwise_matrix;
mod registry;
mod weight_profile;

pub use ahp_solver::{
    AhpResult, AhpSolver, PriorityMethod, CONSISTENCY_THRESHOLD, DEGENERATE_WEIGHT_EPSILON,
};
pub use criterion::{validate_criteria, Criterion};
pub use errors::WeightingError;
pub use pairwise_matrix::{PairwiseMatrix, RECIPROCAL_TOLERANCE};
pub use registry::{Activation, InconsistencyPolicy, WeightRegistry};
pub use weight_profile::{ProfileSource, WeightProfile, WEIGHT_SUM_TOLERANCE};
