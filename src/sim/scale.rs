//! Responsive size scaling
//!
//! Small viewports shrink every authored size proportionally to their height.
//! The factor is fixed when the session is constructed; resizing later has no effect.

use serde::{Deserialize, Serialize};

use crate::consts::SCALE_REFERENCE_HEIGHT;

/// Viewport-height-derived scale for authored sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    viewport_height: f32,
}

impl Scale {
    pub fn new(viewport_height: f32) -> Self {
        Self { viewport_height }
    }

    /// Scale an authored size for this viewport
    ///
    /// Sizes pass through unchanged at or above the reference height,
    /// otherwise they are shrunk proportionally and rounded up.
    #[inline]
    pub fn apply(&self, size: f32) -> f32 {
        if self.viewport_height >= SCALE_REFERENCE_HEIGHT {
            size
        } else {
            (size * self.viewport_height / SCALE_REFERENCE_HEIGHT).ceil()
        }
    }
}
