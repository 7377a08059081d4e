//! Native collaborators without a window

use std::collections::BTreeSet;

use super::{Display, FrameClock, FrameHandle};

/// Frame clock driven by hand: the caller decides when a requested frame fires
#[derive(Debug, Default)]
pub struct ManualClock {
    next_id: i64,
    /// Requested and not yet fired or cancelled
    pending: BTreeSet<i64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks still scheduled
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Take the oldest scheduled callback, as if the display refreshed
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.pop_first().map(FrameHandle)
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.pending.insert(self.next_id);
        FrameHandle(self.next_id)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle.0);
    }
}

/// Screen transitions recorded by [`LogDisplay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Start,
    Running,
    GameOver { score: u64, message: String },
}

/// Display that logs transitions and remembers them
#[derive(Debug, Default)]
pub struct LogDisplay {
    pub history: Vec<Screen>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Screen> {
        self.history.last()
    }
}

impl Display for LogDisplay {
    fn show_start(&mut self) {
        log::info!("[screen] start");
        self.history.push(Screen::Start);
    }

    fn show_running(&mut self) {
        log::info!("[screen] running");
        self.history.push(Screen::Running);
    }

    fn show_game_over(&mut self, score: u64, message: &str) {
        log::info!("[screen] game over: {message} Score: {score}");
        self.history.push(Screen::GameOver {
            score,
            message: message.to_string(),
        });
    }
}
