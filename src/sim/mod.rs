//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (obstacle pool order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacles;
pub mod scale;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Evaluation, Rect, evaluate};
pub use obstacles::{GapRange, Obstacle, ObstaclePool};
pub use scale::Scale;
pub use state::{GameEvent, GamePhase, GameState, Termination, Tuning};
pub use tick::tick;
