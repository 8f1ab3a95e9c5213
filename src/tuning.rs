//! Data-driven game balance
//!
//! One physics engine serves both game variants; the differences live here.

use serde::{Deserialize, Serialize};

/// Game variant (selects a tuning preset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Jump-only runner
    #[default]
    Classic,
    /// Runner with left/right movement and a forgiving hitbox
    FreeRoam,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::FreeRoam => "Free Roam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "free-roam" | "freeroam" | "free roam" => Some(Variant::FreeRoam),
            _ => None,
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Classic => Tuning::classic(),
            Variant::FreeRoam => Tuning::free_roam(),
        }
    }
}

/// Simulation parameter set. Units are pixels per tick and milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_force: f32,
    /// Scroll speed at score 0
    pub initial_speed: f32,
    /// Pixels shrunk from every edge of both boxes before testing overlap
    pub hit_padding: f32,
    /// Bounds of the randomized spawn interval
    pub spawn_min_ms: f64,
    pub spawn_max_ms: f64,
    /// Capability flag for the left/right variant
    pub horizontal_movement: bool,
    /// Horizontal displacement per tick while a move intent is held
    pub move_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    pub fn classic() -> Self {
        Self {
            gravity: 0.6,
            jump_force: -12.0,
            initial_speed: 3.0,
            hit_padding: 0.0,
            spawn_min_ms: 1000.0,
            spawn_max_ms: 2500.0,
            horizontal_movement: false,
            move_speed: 0.0,
        }
    }

    pub fn free_roam() -> Self {
        Self {
            gravity: 0.6,
            jump_force: -12.0,
            initial_speed: 4.0,
            hit_padding: 5.0,
            spawn_min_ms: 1000.0,
            spawn_max_ms: 2500.0,
            horizontal_movement: true,
            move_speed: 5.0,
        }
    }

    /// Scroll speed for a given score (linear ramp)
    pub fn speed_for_score(&self, score: u32) -> f32 {
        self.initial_speed + score as f32 / 10.0
    }
}
