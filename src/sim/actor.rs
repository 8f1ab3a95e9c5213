//! Player physics
//!
//! Per-tick integration (not dt-scaled): gravity, jump impulse, ground clamp
//! and the optional left/right movement of the free-roam variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ground_y;

/// Held horizontal movement intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// -1, 0 or 1
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// The player-controlled dog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub is_jumping: bool,
    #[serde(default)]
    pub intent: MoveIntent,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ACTOR_START_X, ground_y(ACTOR_HEIGHT)),
            size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            vel: Vec2::ZERO,
            is_jumping: false,
            intent: MoveIntent::default(),
        }
    }
}

impl Actor {
    /// Resting y for this actor
    pub fn ground_y(&self) -> f32 {
        ground_y(self.size.y)
    }

    pub fn is_grounded(&self) -> bool {
        self.pos.y == self.ground_y() && self.vel.y == 0.0
    }

    /// Apply gravity for one tick and clamp to the ground line
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos.y += self.vel.y;

        let ground = self.ground_y();
        if self.pos.y > ground {
            self.pos.y = ground;
            self.vel.y = 0.0;
            self.is_jumping = false;
        }
    }

    /// Move by the held intent and keep the actor on the canvas
    pub fn integrate_horizontal(&mut self, move_speed: f32) {
        self.vel.x = self.intent.direction() * move_speed;
        self.pos.x = (self.pos.x + self.vel.x).clamp(0.0, CANVAS_WIDTH - self.size.x);
    }

    /// Start a jump. Ignored while airborne, so a held button cannot stack velocity.
    /// Returns whether the jump took effect.
    pub fn jump(&mut self, jump_force: f32) -> bool {
        if self.is_jumping {
            return false;
        }
        self.vel.y = jump_force;
        self.is_jumping = true;
        true
    }
}
