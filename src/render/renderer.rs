// src/render/renderer.rs
// the renderer owns the chain, its animator and the draw style. The host calls
// `update` once per frame, `draw` from the view and `handle_tap` on input.

use nannou::prelude::*;
use tracing::{debug, info};

use crate::animation::Animator;
use crate::draw::{node_commands, stroke_weight, DrawCommand, DrawStyle};
use crate::models::ChainCursor;

#[derive(Debug, Default)]
pub struct Renderer {
    animator: Animator,
    cursor: ChainCursor,
    style: DrawStyle,
}

impl Renderer {
    /// Advances the animation if a tick is due at `now` (seconds). The
    /// animator stops whenever a node completes; the next node waits for a tap.
    /// Returns true when a tick ran.
    pub fn update(&mut self, now: f32) -> bool {
        let cursor = &mut self.cursor;
        let mut completed = None;
        let ticked = self
            .animator
            .animate(now, || cursor.update(|scale| completed = Some(scale)));

        if let Some(scale) = completed {
            self.animator.stop();
            debug!(
                scale,
                next = self.cursor.current_index(),
                dir = self.cursor.direction(),
                "node animation complete"
            );
        }
        ticked
    }

    /// Starts the node under the cursor. Ignored while a node is moving.
    /// Returns true when the tap was accepted.
    pub fn handle_tap(&mut self) -> bool {
        let animator = &mut self.animator;
        let mut accepted = false;
        self.cursor.start_updating(|| {
            animator.start();
            accepted = true;
        });

        if accepted {
            info!(node = self.cursor.current_index(), "tap");
        } else {
            debug!(node = self.cursor.current_index(), "tap ignored, node busy");
        }
        accepted
    }

    /// Every node's commands for a `w` x `h` window, root first.
    pub fn frame_commands(&self, w: f32, h: f32) -> Vec<DrawCommand> {
        self.cursor
            .chain()
            .iter()
            .flat_map(|node| node_commands(node.index, node.state.scale(), w, h))
            .collect()
    }

    pub fn draw(&self, draw: &Draw, rect: Rect) {
        draw.background().color(self.style.background);

        let style = DrawStyle {
            stroke_weight: stroke_weight(rect.w(), rect.h()),
            ..self.style.clone()
        };
        for command in self.frame_commands(rect.w(), rect.h()) {
            command.draw(draw, &style, rect);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    pub fn cursor(&self) -> &ChainCursor {
        &self.cursor
    }
}
