//! Session state and core simulation types
//!
//! Everything one play attempt owns lives in [`SessionState`].

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting on the start screen
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; score is frozen
    GameOver,
}

/// Complete state of one play session (serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Whole seconds survived
    pub score: u32,
    /// Timestamp (ms) of `start`
    pub started_at: f64,
    /// Timestamp (ms) of the most recent spawn (or `start`)
    pub last_spawn_at: f64,
    /// Timestamp (ms) of the collision that ended the run
    pub ended_at: Option<f64>,
    /// Current scroll speed (px/tick)
    pub speed: f32,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub actor: Actor,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh idle session
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            score: 0,
            started_at: 0.0,
            last_spawn_at: 0.0,
            ended_at: None,
            speed: 0.0,
            obstacles: Vec::new(),
            actor: Actor::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Seconds survived, for run submission
    pub fn duration_seconds(&self) -> u32 {
        self.score
    }

    /// Score for a given elapsed time (floor of whole seconds)
    pub fn score_for_elapsed(elapsed_ms: f64) -> u32 {
        (elapsed_ms.max(0.0) / 1000.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let state = SessionState::new();
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.actor.is_grounded());
    }

    #[test]
    fn test_score_floors() {
        assert_eq!(SessionState::score_for_elapsed(0.0), 0);
        assert_eq!(SessionState::score_for_elapsed(999.0), 0);
        assert_eq!(SessionState::score_for_elapsed(3000.0), 3);
        assert_eq!(SessionState::score_for_elapsed(3999.0), 3);
        assert_eq!(SessionState::score_for_elapsed(-50.0), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let state = SessionState::new();
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
