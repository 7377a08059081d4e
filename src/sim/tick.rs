//! Fixed-step simulation tick
//!
//! One tick: actor physics, obstacle scroll, collision and scoring, then
//! recycling. Recycling comes last so a building is scored before its
//! `passed` flag is reset. Nothing moves unless the session is running.

use super::collision::evaluate;
use super::state::{GameEvent, GameState, Termination};

/// Advance the game state by one frame
///
/// Returns the events raised during the tick, in the order they happened.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !state.is_running() {
        return events;
    }
    state.time_ticks += 1;

    let floor = state.floor();
    if let Some(cause) = state.actor.advance(floor, state.tuning.gravity) {
        events.push(state.terminate(cause));
        return events;
    }

    state.obstacles.scroll(state.tuning.scroll_speed);

    let eval = evaluate(&state.actor, &mut state.obstacles);
    if eval.passed > 0 {
        state.score += u64::from(eval.passed);
        log::debug!("Passed {} building(s), score {}", eval.passed, state.score);
        events.push(GameEvent::Scored { score: state.score });
    }

    state.obstacles.recycle_front(&mut state.rng);
    if eval.contact.is_some() {
        events.push(state.terminate(Termination::Building));
    }

    events
}
