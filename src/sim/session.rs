//! Session controller
//!
//! Single owner of the session state, the seeded spawner and the tuning.
//! The driving loop calls [`Session::tick`] once per frame and renders
//! afterwards; the controller does no scheduling of its own.

use super::actor::{Actor, MoveIntent};
use super::spawner::Spawner;
use super::state::{SessionPhase, SessionState};
use super::tick::{TickReport, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    spawner: Spawner,
    tuning: Tuning,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: SessionState::new(),
            spawner: Spawner::new(seed),
            tuning,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Swap tuning (variant change). Only allowed outside a run.
    pub fn set_tuning(&mut self, tuning: Tuning) -> bool {
        if self.state.is_running() {
            log::warn!("Tuning change ignored while running");
            return false;
        }
        self.tuning = tuning;
        true
    }

    /// Restart the random sequence (e.g. a new seed per run)
    pub fn reseed(&mut self, seed: u64) {
        self.spawner.reseed(seed);
    }

    /// Begin a run at `now` (ms). Rejected while already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.state.is_running() {
            log::debug!("start ignored: session already running");
            return false;
        }

        self.state = SessionState {
            phase: SessionPhase::Running,
            score: 0,
            started_at: now,
            last_spawn_at: now,
            ended_at: None,
            speed: self.tuning.initial_speed,
            obstacles: Vec::new(),
            actor: Actor::default(),
        };
        log::info!("Run started (seed {})", self.spawner.seed());
        true
    }

    /// Advance one frame. Ignored unless running.
    pub fn tick(&mut self, now: f64) -> TickReport {
        tick(&mut self.state, &mut self.spawner, &self.tuning, now)
    }

    /// Back to the start screen from any phase
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        log::info!("Session reset");
    }

    /// Jump request from input. Only honored while running.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state.actor.jump(self.tuning.jump_force)
    }

    /// Held left/right intents. Only honored while running, and only when the
    /// variant allows horizontal movement.
    pub fn set_move_intent(&mut self, intent: MoveIntent) -> bool {
        if !self.state.is_running() || !self.tuning.horizontal_movement {
            return false;
        }
        self.state.actor.intent = intent;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use glam::Vec2;

    #[test]
    fn test_start_tick_score() {
        let mut session = Session::new(Tuning::classic(), 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.start(0.0));
        assert_eq!(session.phase(), SessionPhase::Running);

        session.tick(3000.0);
        assert_eq!(session.score(), 3);
        session.state.obstacles.clear();
        session.tick(3999.0);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_start_rejected_while_running() {
        let mut session = Session::new(Tuning::classic(), 1);
        assert!(session.start(100.0));
        session.tick(1100.0);
        assert!(!session.start(5000.0));
        assert_eq!(session.state().started_at, 100.0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = Session::new(Tuning::classic(), 1);
        session.start(0.0);
        session
            .state
            .obstacles
            .push(Obstacle::new(77, 0, Vec2::new(60.0, crate::ground_y(45.0))));
        session.tick(2000.0);
        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert_eq!(session.score(), 2);

        assert!(session.start(10_000.0));
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.score(), 0);
        assert!(session.state().obstacles.is_empty());
        assert_eq!(session.state().speed, Tuning::classic().initial_speed);
        assert_eq!(session.state().last_spawn_at, 10_000.0);
        assert!(session.state().actor.is_grounded());
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut session = Session::new(Tuning::classic(), 1);
        session.start(0.0);
        session.jump();
        session.tick(16.0);
        session.reset();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
        assert!(session.state().obstacles.is_empty());
        assert_eq!(session.state().actor, Actor::default());

        session.reset();
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_jump_only_while_running() {
        let mut session = Session::new(Tuning::classic(), 1);
        assert!(!session.jump());
        session.start(0.0);
        assert!(session.jump());
        assert_eq!(session.state().actor.vel.y, -12.0);
        assert!(!session.jump());
        assert_eq!(session.state().actor.vel.y, -12.0);
    }

    #[test]
    fn test_move_intent_requires_capability() {
        let mut session = Session::new(Tuning::classic(), 1);
        session.start(0.0);
        session.set_move_intent(MoveIntent { left: false, right: true });
        session.tick(16.0);
        assert_eq!(session.state().actor.pos.x, crate::consts::ACTOR_START_X);

        let mut session = Session::new(Tuning::free_roam(), 1);
        session.start(0.0);
        session.set_move_intent(MoveIntent { left: false, right: true });
        session.tick(16.0);
        assert_eq!(session.state().actor.pos.x, crate::consts::ACTOR_START_X + 5.0);
    }

    #[test]
    fn test_move_intent_only_while_running() {
        let right = MoveIntent { left: false, right: true };
        let mut session = Session::new(Tuning::free_roam(), 1);
        assert!(!session.set_move_intent(right));
        assert_eq!(session.state().actor.intent, MoveIntent::default());

        session.start(0.0);
        assert!(session.set_move_intent(right));

        session.state.obstacles.push(Obstacle::new(8, 0, Vec2::new(70.0, crate::ground_y(45.0))));
        session.tick(16.0);
        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert!(!session.set_move_intent(MoveIntent::default()));
        assert_eq!(session.state().actor.intent, right);
    }

    #[test]
    fn test_tuning_locked_while_running() {
        let mut session = Session::new(Tuning::classic(), 1);
        session.start(0.0);
        assert!(!session.set_tuning(Tuning::free_roam()));
        session.reset();
        assert!(session.set_tuning(Tuning::free_roam()));
        assert!(session.tuning().horizontal_movement);
    }

    #[test]
    fn test_jumping_over_an_obstacle() {
        // Obstacle approaching; jump at the right moment and survive it
        let mut session = Session::new(Tuning::classic(), 5);
        session.start(0.0);
        session
            .state
            .obstacles
            .push(Obstacle::new(50, 1, Vec2::new(200.0, crate::ground_y(30.0))));

        let mut t = 0.0;
        let mut jumped = false;
        while session.state().obstacles.iter().any(|o| o.id == 50) {
            t += 1.0;
            let gap = session.state().obstacles[0].pos.x - (session.state().actor.pos.x + 40.0);
            if !jumped && gap < 10.0 {
                jumped = session.jump();
            }
            // Keep other spawns out of the way
            session.state.last_spawn_at = t;
            session.tick(t);
            assert_eq!(session.phase(), SessionPhase::Running, "hit at t={}", t);
        }
        assert!(jumped);
    }
}
