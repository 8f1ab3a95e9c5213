//! Run persistence
//!
//! Features:
//! - `GameRun` records (immutable once created)
//! - Submission validation
//! - `RunStore` trait with an in-memory implementation

pub mod store;

pub use store::MemoryRunStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One submitted play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRun {
    #[serde(default)]
    pub id: u64,
    pub player_name: String,
    pub score: u32,
    /// Absent in score-only query results
    #[serde(default)]
    pub duration_seconds: u32,
    /// Unix timestamp (ms)
    pub created_at: i64,
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("wrong type for field: {0}")]
    InvalidField(&'static str),
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("invalid score: {0}")]
    NegativeScore(i64),
    #[error("invalid duration: {0}")]
    NegativeDuration(i64),
    #[error("value out of range: {0}")]
    OutOfRange(i64),
}

/// A validated submission, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSubmission {
    pub player_name: String,
    pub score: u32,
    pub duration_seconds: u32,
}

impl RunSubmission {
    /// Validate raw submission values. The name is trimmed.
    pub fn new(player_name: &str, score: i64, duration_seconds: i64) -> Result<Self, SubmitError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(SubmitError::EmptyPlayerName);
        }
        if score < 0 {
            return Err(SubmitError::NegativeScore(score));
        }
        if duration_seconds < 0 {
            return Err(SubmitError::NegativeDuration(duration_seconds));
        }
        let score = u32::try_from(score).map_err(|_| SubmitError::OutOfRange(score))?;
        let duration_seconds =
            u32::try_from(duration_seconds).map_err(|_| SubmitError::OutOfRange(duration_seconds))?;

        Ok(Self {
            player_name: player_name.to_string(),
            score,
            duration_seconds,
        })
    }
}

/// Storage backend for runs
pub trait RunStore {
    /// Validate and store a run, returning the created record
    fn submit_run(
        &mut self,
        player_name: &str,
        score: i64,
        duration_seconds: i64,
    ) -> Result<GameRun, SubmitError>;

    /// All stored runs in insertion order
    fn runs(&self) -> &[GameRun];
}
