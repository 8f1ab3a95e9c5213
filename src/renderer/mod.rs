//! Rendering module
//!
//! The simulation never reads anything back from here. `scene` turns a
//! session into draw commands; a [`Renderer`] backend executes them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, build_scene};

use crate::settings::Settings;
use crate::sim::SessionState;

/// Draw-command sink
pub trait Renderer {
    fn render(&mut self, cmds: &[DrawCmd]);
}

/// Extract and draw one frame
pub fn render_frame(renderer: &mut impl Renderer, state: &SessionState, settings: &Settings) {
    renderer.render(&build_scene(state, settings));
}
