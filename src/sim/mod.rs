//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Timestamps come in from the caller, never read here
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod world;

pub use actor::{Actor, MoveIntent};
pub use clock::{Clock, FrameClock, ManualClock, SystemClock};
pub use collision::{Aabb, collides, first_hit};
pub use obstacle::{CATALOG, Obstacle, ObstacleKind};
pub use session::Session;
pub use spawner::{SpawnCheck, Spawner};
pub use state::{SessionPhase, SessionState};
pub use tick::{TickReport, tick};
pub use world::advance;
