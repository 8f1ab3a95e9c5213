//! Dog Dash - A single-lane obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `tuning`: Data-driven game balance and variants
//! - `renderer`: Scene extraction and Canvas 2D backend
//! - `input`: Raw input events to session commands
//! - `persistence`: Run submission and storage
//! - `leaderboard`: Ranking queries over stored runs
//! - `api`: Backend routing and browser client
//! - `platform`: Browser/native platform abstraction

pub mod api;
pub mod input;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use leaderboard::{PlayerStats, cumulative_leaderboard, player_runs, top_runs};
pub use persistence::{GameRun, MemoryRunStore, RunStore, SubmitError};
pub use settings::Settings;
pub use tuning::{Tuning, Variant};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 300.0;
    /// Height of the ground band at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Height of the grass strip drawn on top of the ground
    pub const GRASS_HEIGHT: f32 = 10.0;

    /// Actor defaults
    pub const ACTOR_START_X: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;

    /// Default result counts for leaderboard queries
    pub const DEFAULT_TOP_RUNS_LIMIT: usize = 10;
    pub const DEFAULT_CUMULATIVE_LIMIT: usize = 10;
    pub const DEFAULT_PLAYER_RUNS_LIMIT: usize = 20;
}

/// Y coordinate at which an entity of the given height rests on the ground
#[inline]
pub fn ground_y(height: f32) -> f32 {
    consts::CANVAS_HEIGHT - consts::GROUND_HEIGHT - height
}
