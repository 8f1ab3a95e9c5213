//! Frame tick
//!
//! Advances a running session by one frame. Stages run in a fixed order:
//! score/speed, actor physics, spawning, world step, collision.

use super::collision::first_hit;
use super::spawner::Spawner;
use super::state::{SessionPhase, SessionState};
use super::world;
use crate::tuning::Tuning;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Phase after the tick
    pub phase: SessionPhase,
    pub spawned: bool,
    pub culled: usize,
    /// Id of the obstacle that ended the run
    pub hit: Option<u32>,
}

/// Advance the session to timestamp `now` (ms). Ignored unless running.
pub fn tick(state: &mut SessionState, spawner: &mut Spawner, tuning: &Tuning, now: f64) -> TickReport {
    if state.phase != SessionPhase::Running {
        log::trace!("tick ignored in {:?}", state.phase);
        return TickReport {
            phase: state.phase,
            ..Default::default()
        };
    }

    // Score and difficulty are pure functions of elapsed time
    state.score = SessionState::score_for_elapsed(now - state.started_at);
    state.speed = tuning.speed_for_score(state.score);

    state.actor.integrate(tuning.gravity);
    if tuning.horizontal_movement {
        state.actor.integrate_horizontal(tuning.move_speed);
    }

    let check = spawner.maybe_spawn(
        &mut state.obstacles,
        now,
        state.last_spawn_at,
        tuning.spawn_min_ms,
        tuning.spawn_max_ms,
    );
    state.last_spawn_at = check.last_spawn_at;

    let culled = world::advance(&mut state.obstacles, state.speed);
    world::mark_passed(&mut state.obstacles, state.actor.pos.x);

    let hit = first_hit(&state.actor, &state.obstacles, tuning.hit_padding).map(|o| o.id);
    if let Some(id) = hit {
        state.phase = SessionPhase::GameOver;
        state.ended_at = Some(now);
        log::info!("Game over: hit obstacle #{} with score {}", id, state.score);
    }

    TickReport {
        phase: state.phase,
        spawned: check.spawned,
        culled,
        hit,
    }
}
