//! Scene extraction
//!
//! Converts session state into a flat list of 2D draw commands. Pure, so the
//! layout can be tested without a canvas.

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::SessionState;

/// Ground band color
pub const GROUND_COLOR: &str = "#8D6E63";
/// Grass strip color
pub const GRASS_COLOR: &str = "#2E7D32";
/// Dog fallback color while the sprite is loading
pub const ACTOR_COLOR: &str = "#00C3FF";
/// Debug hitbox outline color
pub const HITBOX_COLOR: &str = "red";
/// Obstacle label font
pub const LABEL_FONT: &str = "40px Arial";
/// Lift of the label baseline above the obstacle bottom
const LABEL_BASELINE_INSET: f32 = 5.0;

/// One canvas operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { width: f32, height: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: &'static str },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, color: &'static str },
    /// Player sprite; backends fill `fallback` if the image is not ready
    Sprite { x: f32, y: f32, w: f32, h: f32, fallback: &'static str },
    /// Centered text at baseline `y`
    Text { text: &'static str, x: f32, y: f32, font: &'static str },
}

/// Build the draw list for one frame
pub fn build_scene(state: &SessionState, settings: &Settings) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(4 + state.obstacles.len() * 2);
    let ground_top = CANVAS_HEIGHT - GROUND_HEIGHT;

    cmds.push(DrawCmd::Clear {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });
    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: ground_top,
        w: CANVAS_WIDTH,
        h: GROUND_HEIGHT,
        color: GROUND_COLOR,
    });
    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: ground_top,
        w: CANVAS_WIDTH,
        h: GRASS_HEIGHT,
        color: GRASS_COLOR,
    });

    let actor = &state.actor;
    cmds.push(DrawCmd::Sprite {
        x: actor.pos.x,
        y: actor.pos.y,
        w: actor.size.x,
        h: actor.size.y,
        fallback: ACTOR_COLOR,
    });
    if settings.show_hitboxes {
        cmds.push(DrawCmd::StrokeRect {
            x: actor.pos.x,
            y: actor.pos.y,
            w: actor.size.x,
            h: actor.size.y,
            color: HITBOX_COLOR,
        });
    }

    for obstacle in &state.obstacles {
        cmds.push(DrawCmd::Text {
            text: obstacle.label(),
            x: obstacle.pos.x + obstacle.size.x / 2.0,
            y: obstacle.pos.y + obstacle.size.y - LABEL_BASELINE_INSET,
            font: LABEL_FONT,
        });
        if settings.show_hitboxes {
            cmds.push(DrawCmd::StrokeRect {
                x: obstacle.pos.x,
                y: obstacle.pos.y,
                w: obstacle.size.x,
                h: obstacle.size.y,
                color: HITBOX_COLOR,
            });
        }
    }

    cmds
}
