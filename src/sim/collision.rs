//! Axis-aligned bounding-box collision
//!
//! Both boxes are shrunk inward by `padding` on every edge before testing,
//! which lets sprites overlap visually a little before the run ends.

use glam::Vec2;

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap after shrinking both boxes by `padding`
    pub fn overlaps(&self, other: &Aabb, padding: f32) -> bool {
        let p = padding;
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x + p < b_max.x - p
            && a_max.x - p > other.min.x + p
            && self.min.y + p < b_max.y - p
            && a_max.y - p > other.min.y + p
    }
}

impl From<&Actor> for Aabb {
    fn from(actor: &Actor) -> Self {
        Aabb::new(actor.pos, actor.size)
    }
}

impl From<&Obstacle> for Aabb {
    fn from(obstacle: &Obstacle) -> Self {
        Aabb::new(obstacle.pos, obstacle.size)
    }
}

/// Actor vs one obstacle
pub fn collides(actor: &Actor, obstacle: &Obstacle, padding: f32) -> bool {
    Aabb::from(actor).overlaps(&Aabb::from(obstacle), padding)
}

/// First obstacle (in spawn order) the actor hits, if any
pub fn first_hit<'a>(actor: &Actor, obstacles: &'a [Obstacle], padding: f32) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| collides(actor, o, padding))
}
