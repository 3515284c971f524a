// src/draw/mod.rs
// Screen-space draw commands and their mapping onto a nannou Draw

pub mod spring_ball;
pub use spring_ball::{node_commands, stroke_weight};

use nannou::prelude::*;

use crate::config::{BACK_COLOR, FORE_COLOR};

// DrawCommand is a single drawing operation in screen space
// (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: Point2, end: Point2 },
    Circle { center: Point2, radius: f32 },
}

impl DrawCommand {
    pub fn translate(self, offset: Vec2) -> Self {
        match self {
            DrawCommand::Line { start, end } => DrawCommand::Line {
                start: start + offset,
                end: end + offset,
            },
            DrawCommand::Circle { center, radius } => DrawCommand::Circle {
                center: center + offset,
                radius,
            },
        }
    }

    pub fn draw(&self, draw: &Draw, style: &DrawStyle, rect: Rect) {
        match self {
            DrawCommand::Line { start, end } => {
                draw.line()
                    .start(to_window(rect, *start))
                    .end(to_window(rect, *end))
                    .stroke_weight(style.stroke_weight)
                    .color(style.color)
                    .caps_round();
            }
            DrawCommand::Circle { center, radius } => {
                let center = to_window(rect, *center);
                draw.ellipse()
                    .x_y(center.x, center.y)
                    .radius(*radius)
                    .color(style.color);
            }
        }
    }
}

/// Maps a screen-space point onto nannou's centred, y-up window coordinates.
pub fn to_window(rect: Rect, point: Point2) -> Point2 {
    pt2(rect.left() + point.x, rect.top() - point.y)
}

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgb,
    pub background: Rgb,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: hex_color(FORE_COLOR),
            background: hex_color(BACK_COLOR),
            stroke_weight: 1.0,
        }
    }
}

pub fn hex_color([r, g, b]: [u8; 3]) -> Rgb {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_points_not_radius() {
        let offset = vec2(10.0, 20.0);
        let line = DrawCommand::Line {
            start: pt2(0.0, 0.0),
            end: pt2(5.0, 0.0),
        };
        assert_eq!(
            line.translate(offset),
            DrawCommand::Line {
                start: pt2(10.0, 20.0),
                end: pt2(15.0, 20.0),
            }
        );

        let circle = DrawCommand::Circle {
            center: pt2(1.0, 1.0),
            radius: 3.0,
        };
        assert_eq!(
            circle.translate(offset),
            DrawCommand::Circle {
                center: pt2(11.0, 21.0),
                radius: 3.0,
            }
        );
    }

    #[test]
    fn test_to_window_flips_y() {
        let rect = Rect::from_w_h(200.0, 100.0);
        assert_eq!(to_window(rect, pt2(0.0, 0.0)), pt2(-100.0, 50.0));
        assert_eq!(to_window(rect, pt2(200.0, 100.0)), pt2(100.0, -50.0));
        assert_eq!(to_window(rect, pt2(100.0, 50.0)), pt2(0.0, 0.0));
    }

    #[test]
    fn test_hex_color() {
        let color = hex_color([0xFF, 0x00, 0x33]);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!((color.blue - 0.2).abs() < 1e-6);
    }
}
