//! Per-frame draw submission

use super::{Color, RenderSurface, Sprite};
use crate::consts::{SCORE_FONT, SCORE_TEXT_X, SCORE_TEXT_Y};
use crate::sim::GameState;

const BUILDING_COLOR: Color = Color::BLACK;
const SCORE_COLOR: Color = Color::WHITE;

/// Draw the whole scene: player, score HUD, buildings
///
/// Runs in every phase, so a crashed run stays on screen behind the game-over overlay.
pub fn draw_frame(state: &GameState, surface: &mut impl RenderSurface) {
    surface.clear();
    surface.draw_sprite(Sprite::Player, state.actor.rect());
    surface.draw_text(
        &format!("Score: {}", state.score),
        SCORE_TEXT_X,
        SCORE_TEXT_Y,
        SCORE_FONT,
        SCORE_COLOR,
    );
    for obstacle in state.obstacles.iter() {
        surface.fill_rect(obstacle.rect(), BUILDING_COLOR);
    }
}
