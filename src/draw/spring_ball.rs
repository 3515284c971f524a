// src/draw/spring_ball.rs
//
// Geometry for one spring + ball node. Everything is computed in screen
// space (origin top-left, y down) and sized from the window dimensions.

use nannou::prelude::*;

use crate::config::{
    BALL_SIZE_FACTOR, NODES, PARTS, SPRING_SIZE_FACTOR, SPRING_X_FACTOR, STROKE_FACTOR,
};
use crate::draw::DrawCommand;
use crate::utilities::{divide_scale, sinify};

pub fn stroke_weight(w: f32, h: f32) -> f32 {
    w.min(h) / STROKE_FACTOR
}

/// Vertical spacing between node anchors.
pub fn node_gap(h: f32) -> f32 {
    h / (NODES + 1) as f32
}

/// Screen-space anchor of node `index`: nodes are spaced evenly down the left edge.
pub fn node_origin(index: usize, h: f32) -> Point2 {
    pt2(0.0, node_gap(h) * (index + 1) as f32)
}

/// Spring and ball at the given progress. The eased curve rises then falls,
/// so the spring stretches out first, the ball rolls out, and both return.
/// Heights are capped by the node gap so wide windows don't overlap rows.
pub fn spring_ball(w: f32, h: f32, scale: f32) -> Vec<DrawCommand> {
    let gap = node_gap(h);
    let spring_size = (w / SPRING_SIZE_FACTOR).min(gap);
    let spring_x = w / SPRING_X_FACTOR;
    let ball_r = (w / BALL_SIZE_FACTOR).min(gap / 2.0);

    let sf = sinify(scale);
    let sf1 = divide_scale(sf, 0, PARTS);
    let sf2 = divide_scale(sf, 1, PARTS);

    let ball_x = w - spring_x - 2.0 * ball_r;
    let spring_curr_x = spring_x * sf1;
    let ball_curr_x = ball_x * sf2;

    vec![
        DrawCommand::Line {
            start: pt2(0.0, 0.0),
            end: pt2(spring_curr_x, 0.0),
        },
        DrawCommand::Line {
            start: pt2(spring_curr_x, 0.0),
            end: pt2(spring_curr_x, -spring_size),
        },
        DrawCommand::Circle {
            center: pt2(spring_x + ball_curr_x, 0.0),
            radius: ball_r,
        },
    ]
}

/// All commands for node `index` in a `w` x `h` window.
pub fn node_commands(index: usize, scale: f32, w: f32, h: f32) -> Vec<DrawCommand> {
    let origin = node_origin(index, h);
    spring_ball(w, h, scale)
        .into_iter()
        .map(|command| command.translate(origin))
        .collect()
}
