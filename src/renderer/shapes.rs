//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in court pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Number of translucent layers used to fake a blurred glow
const GLOW_LAYERS: u32 = 4;

fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.pos.x, r.pos.y);
    let (x1, y1) = (r.pos.x + r.size.x, r.pos.y + r.size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle outline with the stroke centered on
/// the edge
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = thickness / 2.0;
    let (x0, y0) = (r.pos.x - half, r.pos.y - half);
    let outer_w = r.size.x + thickness;
    let outer_h = r.size.y + thickness;

    let edges = [
        Rect::new(x0, y0, outer_w, thickness),
        Rect::new(x0, y0 + outer_h - thickness, outer_w, thickness),
        Rect::new(x0, y0 + thickness, thickness, outer_h - 2.0 * thickness),
        Rect::new(
            x0 + outer_w - thickness,
            y0 + thickness,
            thickness,
            outer_h - 2.0 * thickness,
        ),
    ];

    edges.iter().flat_map(|e| rect(e, color)).collect()
}

/// Soft halo around a rectangle: stacked, growing, fading rectangles
pub fn rect_glow(r: &Rect, blur: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((GLOW_LAYERS * 6) as usize);

    for layer in (1..=GLOW_LAYERS).rev() {
        let t = layer as f32 / GLOW_LAYERS as f32;
        let grow = blur * t;
        let alpha = 0.25 * (1.0 - t) + 0.05;
        let halo = Rect {
            pos: r.pos - Vec2::splat(grow),
            size: r.size + Vec2::splat(grow * 2.0),
        };
        vertices.extend(rect(&halo, with_alpha(color, alpha)));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let (s1, c1) = theta1.sin_cos();
        let (s2, c2) = theta2.sin_cos();
        let inner1 = center + Vec2::new(c1, s1) * inner_radius;
        let outer1 = center + Vec2::new(c1, s1) * outer_radius;
        let inner2 = center + Vec2::new(c2, s2) * inner_radius;
        let outer2 = center + Vec2::new(c2, s2) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Soft halo around a circle: concentric rings fading outward
pub fn circle_glow(center: Vec2, radius: f32, blur: f32, color: [f32; 4]) -> Vec<Vertex> {
    let step = blur / GLOW_LAYERS as f32;
    let mut vertices = Vec::new();

    for layer in 0..GLOW_LAYERS {
        let inner = radius + step * layer as f32;
        let t = (layer + 1) as f32 / GLOW_LAYERS as f32;
        let alpha = 0.35 * (1.0 - t) + 0.05;
        vertices.extend(ring(center, inner, inner + step, with_alpha(color, alpha), 24));
    }

    vertices
}
