//! Shape generation for 2D primitives
//!
//! Every function appends triangles (three vertices each) to `out`.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::Rect;

/// Axis-aligned filled rectangle
pub fn rect(out: &mut Vec<Vertex>, r: Rect, color: [f32; 4]) {
    let (x0, y0) = (r.pos.x, r.pos.y);
    let (x1, y1) = (r.right(), r.bottom());

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Hollow circle
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        out.push(Vertex::new(inner1.x, inner1.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(inner2.x, inner2.y, color));

        out.push(Vertex::new(inner2.x, inner2.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(outer2.x, outer2.y, color));
    }
}

/// Top-down car: body, cockpit, windscreen, four wheels and lights.
///
/// `facing_up` cars (the player) show red taillights at the bottom; oncoming
/// traffic shows yellow headlights at the top.
pub fn car(out: &mut Vec<Vertex>, body: Rect, color: [f32; 4], facing_up: bool) {
    let Vec2 { x, y } = body.pos;
    let Vec2 { x: w, y: h } = body.size;

    rect(out, body, color);
    rect(out, Rect::new(x + 5.0, y + 15.0, w - 10.0, 25.0), colors::COCKPIT);
    rect(out, Rect::new(x + 8.0, y + 18.0, w - 16.0, 8.0), colors::WINDOW);

    for wheel_y in [y + 10.0, y + h - 25.0] {
        rect(out, Rect::new(x - 3.0, wheel_y, 6.0, 15.0), colors::WHEEL);
        rect(out, Rect::new(x + w - 3.0, wheel_y, 6.0, 15.0), colors::WHEEL);
    }

    let (light_y, light_color) = if facing_up {
        (y + h - 5.0, colors::TAILLIGHT)
    } else {
        (y, colors::HEADLIGHT)
    };
    rect(out, Rect::new(x + 5.0, light_y, 10.0, 5.0), light_color);
    rect(out, Rect::new(x + w - 15.0, light_y, 10.0, 5.0), light_color);
}
