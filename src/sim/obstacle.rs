//! Obstacle entities and the static obstacle catalog

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize};

/// Static description of one obstacle type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleKind {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    /// CSS color string
    pub color: &'static str,
    /// Emoji drawn in place of the hitbox
    pub label: &'static str,
}

/// Every obstacle the spawner can pick from
pub const CATALOG: [ObstacleKind; 5] = [
    ObstacleKind { name: "Turkey", width: 45.0, height: 45.0, color: "#8D6E63", label: "🦃" },
    ObstacleKind { name: "Pie", width: 45.0, height: 30.0, color: "#E67E22", label: "🥧" },
    ObstacleKind { name: "Corn", width: 30.0, height: 60.0, color: "#F1C40F", label: "🌽" },
    ObstacleKind { name: "Leaves", width: 50.0, height: 50.0, color: "#D35400", label: "🍂" },
    ObstacleKind { name: "Hat", width: 45.0, height: 45.0, color: "#2C3E50", label: "🎩" },
];

/// A live obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Index into [`CATALOG`]
    #[serde(deserialize_with = "catalog_index")]
    pub kind: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once the obstacle is behind the player (not scored)
    #[serde(default)]
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, kind: usize, pos: Vec2) -> Self {
        let entry = &CATALOG[kind];
        Self {
            id,
            kind,
            pos,
            size: Vec2::new(entry.width, entry.height),
            passed: false,
        }
    }

    /// Catalog entry this obstacle was spawned from
    pub fn catalog_entry(&self) -> &'static ObstacleKind {
        &CATALOG[self.kind]
    }

    pub fn label(&self) -> &'static str {
        self.catalog_entry().label
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully scrolled past the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() < 0.0
    }
}

/// Reject catalog indices that do not exist
fn catalog_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let kind = usize::deserialize(deserializer)?;
    if kind < CATALOG.len() {
        Ok(kind)
    } else {
        Err(serde::de::Error::custom(format!("unknown obstacle kind {}", kind)))
    }
}
