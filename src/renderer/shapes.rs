//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in surface coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};

/// Segments used for round joins and caps
const JOIN_SEGMENTS: u32 = 10;

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), 0.0, color, segments)
}

/// Generate vertices for a filled ellipse rotated by `angle`
pub fn ellipse(center: Vec2, radii: Vec2, angle: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let rot = Vec2::from_angle(angle);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = center + rot.rotate(Vec2::new(radii.x * theta1.cos(), radii.y * theta1.sin()));
        let p2 = center + rot.rotate(Vec2::new(radii.x * theta2.cos(), radii.y * theta2.sin()));
        push_triangle(&mut vertices, center, p1, p2, color);
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(center: Vec2, inner_radius: f32, outer_radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let d1 = Vec2::from_angle((i as f32 / segments as f32) * TAU);
        let d2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * TAU);

        let inner1 = center + d1 * inner_radius;
        let outer1 = center + d1 * outer_radius;
        let inner2 = center + d2 * inner_radius;
        let outer2 = center + d2 * outer_radius;

        push_triangle(&mut vertices, inner1, outer1, inner2, color);
        push_triangle(&mut vertices, inner2, outer1, outer2, color);
    }

    vertices
}

/// Generate vertices for a stroked polyline with round joins and caps
pub fn thick_polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * 6);
    let mut prev_dir: Option<Vec2> = None;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = (b - a).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        let perp = dir.perp() * half;

        push_triangle(&mut vertices, a + perp, a - perp, b + perp, color);
        push_triangle(&mut vertices, b + perp, a - perp, b - perp, color);

        // Round join wherever the stroke turns, round cap at the start
        let turns = prev_dir.is_none_or(|p| p.dot(dir) < 0.999);
        if turns {
            vertices.extend(circle(a, half, color, JOIN_SEGMENTS));
        }
        prev_dir = Some(dir);
    }

    if let Some(&end) = points.last() {
        vertices.extend(circle(end, half, color, JOIN_SEGMENTS));
    }

    vertices
}

/// Generate vertices for the mouse sprite facing `angle` (radians, surface space)
pub fn mouse_sprite(center: Vec2, angle: f32, radius: f32) -> Vec<Vertex> {
    let forward = Vec2::from_angle(angle);
    let side = forward.perp();
    let mut vertices = Vec::new();

    // Tail trails behind the body
    let tail_root = center - forward * radius * 0.9;
    let tail_tip = center - forward * radius * 2.2 + side * radius * 0.4;
    let tail_half = side * radius * 0.08;
    push_triangle(&mut vertices, tail_root + tail_half, tail_root - tail_half, tail_tip, colors::MOUSE_EAR);

    // Body is an ellipse stretched along the heading
    vertices.extend(ellipse(center, Vec2::new(radius, radius * 0.7), angle, colors::MOUSE_BODY, 16));

    // Snout
    let nose = center + forward * radius * 1.6;
    push_triangle(
        &mut vertices,
        center + forward * radius * 0.6 + side * radius * 0.45,
        center + forward * radius * 0.6 - side * radius * 0.45,
        nose,
        colors::MOUSE_BODY,
    );

    // Ears and eyes on both sides
    for sign in [1.0, -1.0] {
        let ear = center + forward * radius * 0.35 + side * radius * 0.65 * sign;
        vertices.extend(circle(ear, radius * 0.38, colors::MOUSE_EAR, 10));
        let eye = center + forward * radius * 0.9 + side * radius * 0.22 * sign;
        vertices.extend(circle(eye, radius * 0.1, colors::MOUSE_EYE, 6));
    }
    vertices.extend(circle(nose, radius * 0.12, colors::MOUSE_EYE, 6));

    vertices
}
