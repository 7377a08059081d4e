//! Frame driver
//!
//! Owns the session together with its collaborators and the single
//! outstanding frame handle. Exactly one tick chain exists at a time:
//! starting a run cancels whatever frame is pending before scheduling a new one.

use crate::input::JumpLatch;
use crate::platform::{Display, FrameClock, FrameHandle};
use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Game instance holding all state
pub struct Game<C: FrameClock, D: Display> {
    pub state: GameState,
    clock: C,
    display: D,
    latch: JumpLatch,
    /// The one scheduled frame, if any
    pending: Option<FrameHandle>,
}

impl<C: FrameClock, D: Display> Game<C, D> {
    /// Wrap an idle session and show the start screen
    pub fn new(state: GameState, settings: &Settings, clock: C, mut display: D) -> Self {
        display.show_start();
        Self {
            state,
            clock,
            display,
            latch: JumpLatch::new(settings.jump_mode),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Start or retry a run
    pub fn start(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
        self.state.start();
        self.latch.release();
        self.display.show_running();
        self.pending = Some(self.clock.request_frame());
    }

    /// A scheduled frame fired: tick, surface any game over, draw, reschedule
    ///
    /// Callbacks for anything but the pending handle are stale and ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, surface: &mut impl RenderSurface) -> Vec<GameEvent> {
        if self.pending != Some(handle) {
            log::debug!("Ignoring stale frame {:?}", handle);
            return Vec::new();
        }
        self.pending = None;

        let events = tick(&mut self.state);
        for event in &events {
            if let GameEvent::Terminated { cause, score } = event {
                self.display.show_game_over(*score, cause.message());
            }
        }

        draw_frame(&self.state, surface);

        // The loop keeps running after a crash to redraw the frozen scene
        self.pending = Some(self.clock.request_frame());
        events
    }

    /// Jump key pressed (including auto-repeat)
    ///
    /// Returns true if a jump was applied.
    pub fn key_down(&mut self) -> bool {
        self.latch.key_down() && self.state.jump()
    }

    pub fn key_up(&mut self) {
        self.latch.key_up();
    }

    pub fn touch_start(&mut self) -> bool {
        self.latch.touch_start() && self.state.jump()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::JumpMode;
    use crate::platform::headless::Screen;
    use crate::platform::{LogDisplay, ManualClock};
    use crate::renderer::DrawList;
    use crate::sim::{GamePhase, Termination};

    fn game(settings: &Settings) -> Game<ManualClock, LogDisplay> {
        let state = GameState::new(Vec2::new(1280.0, 720.0), settings, 99).expect("valid settings");
        Game::new(state, settings, ManualClock::new(), LogDisplay::new())
    }

    /// Fire the next scheduled frame
    fn step(game: &mut Game<ManualClock, LogDisplay>, surface: &mut DrawList) -> Vec<GameEvent> {
        match game.clock_mut().fire() {
            Some(handle) => game.on_frame(handle, surface),
            None => Vec::new(),
        }
    }

    #[test]
    fn test_new_shows_start_and_schedules_nothing() {
        let game = game(&Settings::default());
        assert_eq!(game.display().current(), Some(&Screen::Start));
        assert_eq!(game.pending(), None);
        assert_eq!(game.clock().pending(), 0);
        assert_eq!(game.state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_start_schedules_one_frame() {
        let mut game = game(&Settings::default());
        game.start();
        assert_eq!(game.display().current(), Some(&Screen::Running));
        assert_eq!(game.clock().pending(), 1);
        assert!(game.pending().is_some());
    }

    #[test]
    fn test_restart_replaces_pending_frame() {
        let mut game = game(&Settings::default());
        game.start();
        let first = game.pending();
        game.start();
        game.start();
        assert_eq!(game.clock().pending(), 1);
        assert_ne!(game.pending(), first);
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut game = game(&Settings::default());
        let mut surface = DrawList::new();
        game.start();
        let stale = game.pending().expect("scheduled");
        game.start();

        assert!(game.on_frame(stale, &mut surface).is_empty());
        assert_eq!(surface.frames(), 0);
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_frame_ticks_draws_and_reschedules() {
        let mut game = game(&Settings::default());
        let mut surface = DrawList::new();
        game.start();

        step(&mut game, &mut surface);
        assert_eq!(game.state.time_ticks, 1);
        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.text(), Some("Score: 0"));
        assert_eq!(game.clock().pending(), 1);
    }

    #[test]
    fn test_crash_shows_game_over_and_keeps_drawing() {
        let mut game = game(&Settings::default());
        let mut surface = DrawList::new();
        game.start();

        for _ in 0..200 {
            step(&mut game, &mut surface);
        }

        assert_eq!(game.state.phase, GamePhase::Over);
        assert_eq!(
            game.display().current(),
            Some(&Screen::GameOver {
                score: 0,
                message: Termination::Ground.message().to_string()
            })
        );
        // Shown once, not every frozen frame
        let overs = game
            .display()
            .history
            .iter()
            .filter(|s| matches!(s, Screen::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        assert_eq!(surface.frames(), 200);
        assert_eq!(game.clock().pending(), 1);
    }

    #[test]
    fn test_retry_resets_session() {
        let mut game = game(&Settings::default());
        let mut surface = DrawList::new();
        game.start();
        for _ in 0..200 {
            step(&mut game, &mut surface);
        }
        assert_eq!(game.state.phase, GamePhase::Over);

        game.start();
        assert_eq!(game.state.phase, GamePhase::Running);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.actor.pos, Vec2::new(100.0, 250.0));
        assert_eq!(game.state.obstacles.front().pos.x, 500.0);
        assert_eq!(game.clock().pending(), 1);
    }

    #[test]
    fn test_jump_requires_running() {
        let mut game = game(&Settings::default());
        assert!(!game.key_down());
        game.key_up();
        assert!(!game.touch_start());

        game.start();
        assert!(game.key_down());
        assert_eq!(game.state.actor.vel.y, -8.0);
    }

    #[test]
    fn test_held_key_jumps_once_in_edge_mode() {
        let mut game = game(&Settings::default());
        game.start();
        assert!(game.key_down());
        assert!(!game.key_down());
        game.key_up();
        assert!(game.key_down());
    }

    #[test]
    fn test_held_key_repeats_in_repeat_mode() {
        let settings = Settings {
            jump_mode: JumpMode::Repeat,
            ..Settings::default()
        };
        let mut game = game(&settings);
        game.start();
        assert!(game.key_down());
        assert!(game.key_down());
    }

    #[test]
    fn test_start_releases_held_key() {
        let mut game = game(&Settings::default());
        game.start();
        assert!(game.key_down());
        // Key still held across a retry
        game.start();
        assert!(game.key_down());
    }
}
