//! Weighting command and query handlers.

// Command handlers
mod derive_weights;
mod set_weights;

// Query handlers
mod get_active_weights;

pub use derive_weights::{DeriveWeightsCommand, DeriveWeightsHandler, DeriveWeightsResult};
pub use get_active_weights::{ActiveWeightsView, CriterionWeight, GetActiveWeightsHandler};
pub use set_weights::{SetWeightsCommand, SetWeightsHandler, SetWeightsResult};
