//! Collision detection and scoring
//!
//! Axis-aligned rectangles only. Touching edges never count as contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::ObstaclePool;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Result of one evaluation pass over the pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Obstacles newly passed this tick
    pub passed: u32,
    /// Pool index (front = 0) of the first obstacle the actor hit
    pub contact: Option<usize>,
}

/// Test the actor against every obstacle in pool order
///
/// Contact testing stops at the first hit; pass detection runs for every
/// obstacle regardless, marking each newly passed obstacle.
pub fn evaluate(actor: &Actor, pool: &mut ObstaclePool) -> Evaluation {
    let actor_rect = actor.rect();
    let mut eval = Evaluation::default();

    for (i, obstacle) in pool.iter_mut().enumerate() {
        if eval.contact.is_none() && actor_rect.overlaps(&obstacle.rect()) {
            eval.contact = Some(i);
        }

        if !obstacle.passed && obstacle.right() < actor.pos.x {
            obstacle.passed = true;
            eval.passed += 1;
        }
    }

    eval
}
