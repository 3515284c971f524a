// src/animation/animator.rs
//
// Tick gate for the chain animation. Instead of sleeping between ticks it
// keeps a deadline against the host clock, the host loop keeps redrawing and
// each frame asks whether a tick is due.

use std::time::Duration;

use crate::config::REDRAW_DELAY;

#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    next_tick: Option<f32>,
    delay: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(REDRAW_DELAY)
    }
}

impl Animator {
    pub fn new(delay: Duration) -> Self {
        Self {
            animated: false,
            next_tick: None,
            delay: delay.as_secs_f32(),
        }
    }

    /// Runs `cb` if animating and the next tick is due at `now` (seconds).
    /// Returns true when a tick ran.
    pub fn animate<F: FnOnce()>(&mut self, now: f32, cb: F) -> bool {
        if !self.animated {
            return false;
        }
        if let Some(due) = self.next_tick {
            if now < due {
                return false;
            }
        }
        cb();
        // stop() may have been requested from inside the callback
        if self.animated {
            self.next_tick = Some(now + self.delay);
        }
        true
    }

    /// Starts ticking, first tick due immediately. No-op if already running.
    pub fn start(&mut self) {
        if !self.animated {
            self.animated = true;
            self.next_tick = None;
        }
    }

    pub fn stop(&mut self) {
        self.animated = false;
        self.next_tick = None;
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }
}
