//! Stochastic obstacle spawner
//!
//! The threshold is redrawn on every check, so spawns form a renewal process
//! with inter-arrival times bounded by the configured interval.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{CATALOG, Obstacle};
use crate::consts::CANVAS_WIDTH;
use crate::ground_y;

/// Outcome of a spawn check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnCheck {
    pub spawned: bool,
    /// Value to store as the new last-spawn timestamp
    pub last_spawn_at: f64,
}

/// Seeded obstacle generator
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseed, restarting the random sequence and entity ids
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Spawn into `obstacles` if more time than a freshly drawn interval in
    /// `[min_interval, max_interval)` has passed since `last_spawn_at`.
    pub fn maybe_spawn(
        &mut self,
        obstacles: &mut Vec<Obstacle>,
        now: f64,
        last_spawn_at: f64,
        min_interval: f64,
        max_interval: f64,
    ) -> SpawnCheck {
        let threshold = if max_interval > min_interval {
            self.rng.random_range(min_interval..max_interval)
        } else {
            min_interval
        };

        if now - last_spawn_at > threshold {
            let obstacle = self.spawn();
            log::debug!(
                "Spawned {} #{} at t={:.0}",
                obstacle.catalog_entry().name,
                obstacle.id,
                now
            );
            obstacles.push(obstacle);
            SpawnCheck {
                spawned: true,
                last_spawn_at: now,
            }
        } else {
            SpawnCheck {
                spawned: false,
                last_spawn_at,
            }
        }
    }

    /// Create an obstacle of a uniformly chosen type at the right edge, resting on the ground
    pub fn spawn(&mut self) -> Obstacle {
        let kind = self.rng.random_range(0..CATALOG.len());
        let id = self.next_id;
        self.next_id += 1;
        let pos = Vec2::new(CANVAS_WIDTH, ground_y(CATALOG[kind].height));
        Obstacle::new(id, kind, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spawn_below_min_interval() {
        let mut spawner = Spawner::new(7);
        let mut obstacles = Vec::new();
        for t in 0..=1000 {
            let check = spawner.maybe_spawn(&mut obstacles, t as f64, 0.0, 1000.0, 2500.0);
            assert!(!check.spawned);
            assert_eq!(check.last_spawn_at, 0.0);
        }
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_always_spawns_past_max_interval() {
        let mut spawner = Spawner::new(7);
        let mut obstacles = Vec::new();
        for i in 0..50 {
            let check = spawner.maybe_spawn(&mut obstacles, 2500.0, 0.0, 1000.0, 2500.0);
            assert!(check.spawned);
            assert_eq!(check.last_spawn_at, 2500.0);
            assert_eq!(obstacles.len(), i + 1);
        }
    }

    #[test]
    fn test_spawn_placement() {
        let mut spawner = Spawner::new(42);
        for _ in 0..20 {
            let obs = spawner.spawn();
            assert_eq!(obs.pos.x, CANVAS_WIDTH);
            assert_eq!(obs.pos.y + obs.size.y, ground_y(0.0));
            assert!(obs.kind < CATALOG.len());
        }
    }

    #[test]
    fn test_ids_follow_spawn_order() {
        let mut spawner = Spawner::new(1);
        let ids: Vec<u32> = (0..5).map(|_| spawner.spawn().id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_interarrival_bounds() {
        // Checking every ms, each gap must land in [min, max]
        let mut spawner = Spawner::new(99);
        let mut obstacles = Vec::new();
        let mut last = 0.0;
        let mut spawn_times = Vec::new();
        for t in 1..60_000 {
            let check = spawner.maybe_spawn(&mut obstacles, t as f64, last, 1000.0, 2500.0);
            if check.spawned {
                spawn_times.push(t as f64 - last);
            }
            last = check.last_spawn_at;
        }
        assert!(spawn_times.len() > 20);
        for gap in spawn_times {
            assert!(gap > 1000.0 && gap <= 2500.0, "gap {} out of range", gap);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = Spawner::new(1234);
        let mut b = Spawner::new(1234);
        for _ in 0..20 {
            assert_eq!(a.spawn(), b.spawn());
        }
        a.reseed(1234);
        assert_eq!(a.spawn().id, 1);
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_threshold_redrawn_on_every_check() {
        fn kinds_after(spawner: &mut Spawner) -> Vec<usize> {
            let mut obstacles = Vec::new();
            for _ in 0..16 {
                spawner.maybe_spawn(&mut obstacles, 5000.0, 0.0, 1000.0, 2500.0);
            }
            obstacles.iter().map(|o| o.kind).collect()
        }

        let mut a = Spawner::new(2024);
        let mut b = Spawner::new(2024);
        assert_eq!(kinds_after(&mut a), kinds_after(&mut b));

        // A check that does not spawn still consumes a draw
        let mut a = Spawner::new(2024);
        let mut b = Spawner::new(2024);
        let check = a.maybe_spawn(&mut Vec::new(), 500.0, 0.0, 1000.0, 2500.0);
        assert!(!check.spawned);
        assert_ne!(kinds_after(&mut a), kinds_after(&mut b));
    }

    #[test]
    fn test_all_kinds_reachable() {
        let mut spawner = Spawner::new(5);
        let mut seen = [false; CATALOG.len()];
        for _ in 0..500 {
            seen[spawner.spawn().kind] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
