//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web, a manual clock natively)
//! - Screen toggling (start / running / game over)
//! - Drawing (canvas 2D on web, see [`crate::renderer`])

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{LogDisplay, ManualClock};

/// Identifies one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i64);

/// Schedules the next frame callback
pub trait FrameClock {
    /// Ask for one callback at the next display refresh
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a callback that has not fired yet
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Which screen the player sees
///
/// Only called on transitions, never per frame.
pub trait Display {
    fn show_start(&mut self);
    fn show_running(&mut self);
    fn show_game_over(&mut self, score: u64, message: &str);
}
