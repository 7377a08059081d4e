//! Obstacle pool - the recycled building course
//!
//! A fixed ring of buildings scrolls left. Once the frontmost building is
//! entirely off-screen it is moved behind the last one at a random gap,
//! so twelve records make an unbounded course without reallocating.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::scale::Scale;
use crate::consts::*;

/// A single building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once the actor has flown past it
    pub passed: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Gap range for recycled obstacles (unscaled)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRange {
    pub min: f32,
    pub max: f32,
}

impl Default for GapRange {
    fn default() -> Self {
        Self {
            min: GAP_MIN,
            max: GAP_MAX,
        }
    }
}

/// Fixed-capacity ring of obstacles, ordered by ascending x from `head`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: [Obstacle; OBSTACLE_COUNT],
    /// Index of the frontmost (lowest-x) obstacle
    head: usize,
    /// Authored positions restored by `reset_all`
    layout: [Vec2; OBSTACLE_COUNT],
    scale: Scale,
    gap: GapRange,
}

impl ObstaclePool {
    /// Build the authored course for this viewport
    pub fn new(scale: Scale, gap: GapRange) -> Self {
        let layout = OBSTACLE_LAYOUT.map(|(x, y)| Vec2::new(x, scale.apply(y)));
        let size = Vec2::new(scale.apply(OBSTACLE_WIDTH), scale.apply(OBSTACLE_HEIGHT));
        let slots = layout.map(|pos| Obstacle {
            pos,
            size,
            passed: false,
        });
        Self {
            slots,
            head: 0,
            layout,
            scale,
            gap,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Obstacle at logical position `i` (0 = front)
    #[inline]
    fn slot_index(&self, i: usize) -> usize {
        (self.head + i) % OBSTACLE_COUNT
    }

    pub fn front(&self) -> &Obstacle {
        &self.slots[self.head]
    }

    pub fn back(&self) -> &Obstacle {
        &self.slots[self.slot_index(OBSTACLE_COUNT - 1)]
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        (0..OBSTACLE_COUNT).map(move |i| &self.slots[self.slot_index(i)])
    }

    /// Iterate front to back, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        let (tail, front) = self.slots.split_at_mut(self.head);
        front.iter_mut().chain(tail.iter_mut())
    }

    /// Scroll every obstacle left by `speed`, then recycle the front if it left the screen
    ///
    /// Returns true if an obstacle was recycled.
    pub fn advance(&mut self, speed: f32, rng: &mut Pcg32) -> bool {
        self.scroll(speed);
        self.recycle_front(rng)
    }

    /// Scroll every obstacle left by `speed` without recycling
    pub fn scroll(&mut self, speed: f32) {
        for obstacle in self.slots.iter_mut() {
            obstacle.pos.x -= speed;
        }
    }

    /// Move an exhausted front obstacle behind the last one
    ///
    /// Only the front is examined: the ring stays sorted, so nothing else
    /// can be off-screen first. Returns true if an obstacle was recycled.
    pub fn recycle_front(&mut self, rng: &mut Pcg32) -> bool {
        if self.front().right() >= 0.0 {
            return false;
        }

        let last_x = self.back().pos.x;
        let gap = self.scale.apply(rng.random_range(self.gap.min..=self.gap.max));

        let head = self.head;
        let recycled = &mut self.slots[head];
        recycled.pos.x = last_x + gap;
        recycled.passed = false;
        self.head = (head + 1) % OBSTACLE_COUNT;

        log::debug!("Recycled obstacle to x={:.1} (gap {:.1})", last_x + gap, gap);
        true
    }

    /// Restore every obstacle to its authored position and clear `passed`
    pub fn reset_all(&mut self) {
        self.head = 0;
        for (slot, pos) in self.slots.iter_mut().zip(self.layout) {
            slot.pos = pos;
            slot.passed = false;
        }
    }

    /// Check the front-to-back ordering holds
    pub fn is_sorted(&self) -> bool {
        let xs: Vec<f32> = self.iter().map(|o| o.pos.x).collect();
        xs.windows(2).all(|w| w[0] <= w[1])
    }
}
