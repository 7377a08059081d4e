//! Skyline Flyer - an endless side-scrolling obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, obstacle recycling, collisions, score)
//! - `game`: Frame driver wiring the simulation to a clock, a display and a surface
//! - `renderer`: Drawing primitives and per-frame draw submission
//! - `platform`: Browser/native collaborator abstraction
//! - `input`: Jump key latch
//! - `settings`: Data-driven game tuning

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::{JumpLatch, JumpMode};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied each tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -8.0;
    /// Obstacle scroll speed (px/tick)
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Random gap range between a recycled obstacle and the last one
    pub const GAP_MIN: f32 = 200.0;
    pub const GAP_MAX: f32 = 500.0;

    /// Viewport height below which sizes are scaled down
    pub const SCALE_REFERENCE_HEIGHT: f32 = 500.0;

    /// Actor defaults (unscaled)
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_Y: f32 = 250.0;
    pub const ACTOR_WIDTH: f32 = 50.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;

    /// Obstacle defaults (unscaled)
    pub const OBSTACLE_COUNT: usize = 12;
    pub const OBSTACLE_WIDTH: f32 = 90.0;
    pub const OBSTACLE_HEIGHT: f32 = 1400.0;

    /// Authored course: x is a raw screen offset, y is scaled at construction
    pub const OBSTACLE_LAYOUT: [(f32, f32); OBSTACLE_COUNT] = [
        (500.0, 450.0),
        (700.0, 400.0),
        (850.0, 350.0),
        (900.0, 350.0),
        (1050.0, 150.0),
        (2500.0, 450.0),
        (2900.0, 400.0),
        (3150.0, 350.0),
        (3900.0, 450.0),
        (4200.0, 400.0),
        (4400.0, 200.0),
        (4700.0, 150.0),
    ];

    /// HUD
    pub const SCORE_TEXT_X: f32 = 20.0;
    pub const SCORE_TEXT_Y: f32 = 40.0;
    pub const SCORE_FONT: &str = "24px Arial";

    /// Termination messages
    pub const GROUND_MESSAGE: &str = "You crashed into the ground!";
    pub const BUILDING_MESSAGE: &str = "You crashed into a building!";
}
