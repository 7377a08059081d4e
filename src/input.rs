//! Jump input latch
//!
//! Keyboard auto-repeat delivers key-down events continuously while a key is
//! held. The latch decides which of those become jumps.

use serde::{Deserialize, Serialize};

/// How held jump keys are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpMode {
    /// One jump per physical press; repeats are ignored until release
    #[default]
    Edge,
    /// Every key-down jumps, auto-repeat included
    Repeat,
}

/// Tracks whether the jump key is held
#[derive(Debug, Clone, Default)]
pub struct JumpLatch {
    mode: JumpMode,
    held: bool,
}

impl JumpLatch {
    pub fn new(mode: JumpMode) -> Self {
        Self { mode, held: false }
    }

    /// Jump key went down; returns true if this should fire a jump
    pub fn key_down(&mut self) -> bool {
        let fire = match self.mode {
            JumpMode::Edge => !self.held,
            JumpMode::Repeat => true,
        };
        self.held = true;
        fire
    }

    /// Jump key released
    pub fn key_up(&mut self) {
        self.held = false;
    }

    /// Touches have no repeat; every touch-start fires
    pub fn touch_start(&mut self) -> bool {
        true
    }

    /// Forget a held key (e.g. on session start or focus loss)
    pub fn release(&mut self) {
        self.held = false;
    }
}
