//! The player-controlled flyer
//!
//! Only the vertical axis moves: gravity pulls the actor down, jumps push it up,
//! and the course scrolls past a fixed horizontal position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::scale::Scale;
use super::state::Termination;
use crate::consts::*;

/// The flyer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// `vel.x` is always zero; the course moves instead
    pub vel: Vec2,
    pub size: Vec2,
    /// Position restored on every session start
    start_pos: Vec2,
}

impl Actor {
    pub fn new(scale: &Scale) -> Self {
        let start_pos = Vec2::new(scale.apply(ACTOR_X), scale.apply(ACTOR_Y));
        Self {
            pos: start_pos,
            vel: Vec2::ZERO,
            size: Vec2::new(scale.apply(ACTOR_WIDTH), scale.apply(ACTOR_HEIGHT)),
            start_pos,
        }
    }

    /// Advance one tick under gravity
    ///
    /// Returns `Some(Termination::Ground)` when the actor lands on the floor.
    /// The ceiling clamps without ending the session.
    pub fn advance(&mut self, floor: f32, gravity: f32) -> Option<Termination> {
        let mut contact = None;

        self.pos.y += self.vel.y;

        if self.pos.y + self.size.y + self.vel.y <= floor {
            self.vel.y += gravity;
        } else {
            self.vel.y = 0.0;
            self.pos.y = floor - self.size.y;
            contact = Some(Termination::Ground);
        }

        // Ceiling: push back down so the actor doesn't stick
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = gravity;
        }

        contact
    }

    /// Kick the actor upward
    pub fn apply_impulse(&mut self, jump_velocity: f32) {
        self.vel.y = jump_velocity;
    }

    /// Restore the starting height and drop all velocity
    pub fn reset(&mut self) {
        self.pos.y = self.start_pos.y;
        self.vel = Vec2::ZERO;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(&Scale::new(600.0))
    }

    #[test]
    fn test_new_uses_authored_layout() {
        let a = actor();
        assert_eq!(a.pos, Vec2::new(100.0, 250.0));
        assert_eq!(a.size, Vec2::new(50.0, 40.0));
        assert_eq!(a.vel, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_accumulates_in_air() {
        let mut a = actor();
        assert!(a.advance(600.0, GRAVITY).is_none());
        assert_eq!(a.pos.y, 250.0);
        assert_eq!(a.vel.y, 0.5);

        assert!(a.advance(600.0, GRAVITY).is_none());
        assert_eq!(a.pos.y, 250.5);
        assert_eq!(a.vel.y, 1.0);
    }

    #[test]
    fn test_ground_contact_clamps_and_terminates() {
        let mut a = actor();
        let floor = 600.0;
        // Resting just above the floor, falling fast enough to overshoot
        a.pos.y = floor - a.size.y - 1.0;
        a.vel.y = 3.0;

        let contact = a.advance(floor, GRAVITY);
        assert_eq!(contact, Some(Termination::Ground));
        assert_eq!(a.pos.y, floor - a.size.y);
        assert_eq!(a.vel.y, 0.0);
    }

    #[test]
    fn test_ceiling_clamps_without_terminating() {
        let mut a = actor();
        a.pos.y = 4.0;
        a.apply_impulse(JUMP_VELOCITY);

        assert!(a.advance(600.0, GRAVITY).is_none());
        assert_eq!(a.pos.y, 0.0);
        assert_eq!(a.vel.y, GRAVITY);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut a = actor();
        a.pos.y = 17.0;
        a.vel.y = -3.0;
        a.reset();
        assert_eq!(a.pos, Vec2::new(100.0, 250.0));
        assert_eq!(a.vel, Vec2::ZERO);
    }
}
