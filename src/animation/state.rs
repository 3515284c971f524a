// src/animation/state.rs
//
// Per-node animation progress. `dir == 0` means idle.

use crate::config::SCALE_GAP;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    scale: f32,
    prev_scale: f32,
    dir: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick. Once progress has moved a full unit away from
    /// `prev_scale` it snaps to the end value, goes idle and reports the
    /// committed scale through `on_complete`.
    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) {
        self.scale += SCALE_GAP * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            on_complete(self.prev_scale);
        }
    }

    /// Toggles direction from the last committed end and calls `on_start`.
    /// Ignored while already moving.
    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        if self.dir == 0.0 {
            self.dir = 1.0 - 2.0 * self.prev_scale;
            on_start();
        }
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn dir(&self) -> f32 {
        self.dir
    }
}
