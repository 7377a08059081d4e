//! Game state and core simulation types
//!
//! The session exclusively owns the actor, the obstacle pool, the score and
//! the RNG. It is the only place the running flag changes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::{GapRange, ObstaclePool};
use super::scale::Scale;
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Running,
    /// Crashed; frozen until the next start
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Ground,
    Building,
}

impl Termination {
    pub fn message(&self) -> &'static str {
        match self {
            Termination::Ground => GROUND_MESSAGE,
            Termination::Building => BUILDING_MESSAGE,
        }
    }
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score went up; carries the new total
    Scored { score: u64 },
    /// Run ended
    Terminated { cause: Termination, score: u64 },
}

/// Physics tuning resolved from settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub scroll_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
        }
    }
}

/// Complete game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub actor: Actor,
    pub obstacles: ObstaclePool,
    pub tuning: Tuning,
    /// Viewport size at construction; `viewport.y` is the floor
    pub viewport: Vec2,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create an idle session sized to the viewport
    ///
    /// Settings are validated first; values that would break the course are rejected.
    pub fn new(viewport: Vec2, settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let scale = Scale::new(viewport.y);
        let gap = GapRange {
            min: settings.gap_min,
            max: settings.gap_max,
        };
        Ok(Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            actor: Actor::new(&scale),
            obstacles: ObstaclePool::new(scale, gap),
            tuning: Tuning {
                gravity: settings.gravity,
                jump_velocity: settings.jump_velocity,
                scroll_speed: settings.scroll_speed,
            },
            viewport,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn floor(&self) -> f32 {
        self.viewport.y
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin (or restart) a run from the authored course
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_ticks = 0;
        self.actor.reset();
        self.obstacles.reset_all();
        log::info!("Run started");
    }

    /// End the run; one-way until the next `start`
    pub fn terminate(&mut self, cause: Termination) -> GameEvent {
        self.phase = GamePhase::Over;
        log::info!("Run over after {} ticks: {} (score {})", self.time_ticks, cause.message(), self.score);
        GameEvent::Terminated {
            cause,
            score: self.score,
        }
    }

    /// Apply a jump impulse; ignored unless running
    ///
    /// Returns true if the impulse was applied.
    pub fn jump(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.actor.apply_impulse(self.tuning.jump_velocity);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Vec2::new(1280.0, 720.0), &Settings::default(), 42).expect("default settings")
    }

    #[test]
    fn test_new_rejects_inverted_gap_range() {
        let settings = Settings {
            gap_min: 600.0,
            gap_max: 500.0,
            ..Settings::default()
        };
        let result = GameState::new(Vec2::new(1280.0, 720.0), &settings, 42);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_new_is_idle() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.floor(), 720.0);
    }

    #[test]
    fn test_jump_ignored_unless_running() {
        let mut state = state();
        assert!(!state.jump());
        assert_eq!(state.actor.vel.y, 0.0);

        state.start();
        assert!(state.jump());
        assert_eq!(state.actor.vel.y, JUMP_VELOCITY);

        state.terminate(Termination::Ground);
        state.actor.vel.y = 0.0;
        assert!(!state.jump());
        assert_eq!(state.actor.vel.y, 0.0);
    }

    #[test]
    fn test_terminate_reports_cause_and_score() {
        let mut state = state();
        state.start();
        state.score = 7;
        let event = state.terminate(Termination::Building);
        assert_eq!(
            event,
            GameEvent::Terminated {
                cause: Termination::Building,
                score: 7
            }
        );
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_termination_messages() {
        assert_eq!(Termination::Ground.message(), "You crashed into the ground!");
        assert_eq!(Termination::Building.message(), "You crashed into a building!");
    }
}
