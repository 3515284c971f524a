// src/config/constants.rs
//
// Fixed animation and layout constants

use std::time::Duration;

// Chain layout
pub const NODES: usize = 5;
pub const PARTS: usize = 2;

// Animation timing
pub const SCALE_GAP: f32 = 0.02 / PARTS as f32;
pub const REDRAW_DELAY: Duration = Duration::from_millis(20);

// Geometry, all relative to the window size
pub const STROKE_FACTOR: f32 = 90.0;
pub const SPRING_SIZE_FACTOR: f32 = 7.0;
pub const SPRING_X_FACTOR: f32 = 5.0;
pub const BALL_SIZE_FACTOR: f32 = 10.0;

// Palette: #3F51B5 on #BDBDBD
pub const FORE_COLOR: [u8; 3] = [0x3F, 0x51, 0xB5];
pub const BACK_COLOR: [u8; 3] = [0xBD, 0xBD, 0xBD];
