//! Weight registry - Holds the single active weight profile.
//!
//! Readers clone an `Arc` snapshot; writers build a complete new profile and
//! swap it in under the write guard, so a reader never sees a half-updated
//! weight vector.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;

use super::{Criterion, WeightProfile, WeightingError};

/// What to do with judgments whose consistency ratio fails the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InconsistencyPolicy {
    /// Activate anyway and log a warning.
    #[default]
    Warn,
    /// Refuse with `InconsistentJudgments`; the active profile is kept.
    Reject,
}

/// Result of swapping in a new profile.
#[derive(Debug, Clone)]
pub struct Activation {
    pub active: Arc<WeightProfile>,
    pub replaced: Arc<WeightProfile>,
}

/// Atomic-swap holder of the active [`WeightProfile`].
#[derive(Debug)]
pub struct WeightRegistry {
    active: RwLock<Arc<WeightProfile>>,
    /// Serializes `activate_with` callers across their commit step.
    writer: Mutex<()>,
}

impl WeightRegistry {
    /// Creates a registry with the given initial profile.
    pub fn new(initial: WeightProfile) -> Self {
        Self {
            active: RwLock::new(Arc::new(initial)),
            writer: Mutex::new(()),
        }
    }

    /// Creates a registry holding equal weights over `criteria`.
    pub fn bootstrap(criteria: Vec<Criterion>) -> Result<Self, WeightingError> {
        Ok(Self::new(WeightProfile::equal_weights(criteria)?))
    }

    /// Returns the currently active profile.
    pub fn active(&self) -> Arc<WeightProfile> {
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the active profile after `commit` accepts the outgoing one.
    ///
    /// `commit` receives the profile about to be replaced. If it fails, the
    /// active profile is left untouched and its error is returned. Callers of
    /// this method are serialized, so the profile handed to `commit` is the
    /// one that gets replaced.
    pub async fn activate_with<F, Fut, E>(
        &self,
        profile: WeightProfile,
        commit: F,
    ) -> Result<Activation, E>
    where
        F: FnOnce(Arc<WeightProfile>) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let _writer = self.writer.lock().await;
        commit(self.active()).await?;
        Ok(self.activate(profile))
    }

    /// Replaces the active profile, assigning it the next version.
    pub fn activate(&self, profile: WeightProfile) -> Activation {
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);

        let next_version = guard.version() + 1;
        let next = Arc::new(profile.with_version(next_version));
        let replaced = std::mem::replace(&mut *guard, Arc::clone(&next));

        Activation {
            active: next,
            replaced,
        }
    }
}
