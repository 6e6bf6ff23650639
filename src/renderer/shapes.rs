//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex};

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 24;

/// A filled shape submitted to a display surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        center: Vec2,
        size: Vec2,
        color: Color,
    },
}

impl Shape {
    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. } | Shape::Rect { center, .. } => center,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Shape::Circle { color, .. } | Shape::Rect { color, .. } => color,
        }
    }

    /// Triangle-list vertices covering the shape
    pub fn tessellate(&self) -> Vec<Vertex> {
        match *self {
            Shape::Circle {
                center,
                radius,
                color,
            } => circle(center, radius, color, CIRCLE_SEGMENTS),
            Shape::Rect {
                center,
                size,
                color,
            } => rect(center, size, color),
        }
    }
}

/// Generate vertices for a filled circle (triangle fan as a list)
pub fn circle(center: Vec2, radius: f32, color: Color, segments: usize) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(segments * 3);

    for i in 0..segments {
        let theta1 = TAU * i as f32 / segments as f32;
        let theta2 = TAU * (i + 1) as f32 / segments as f32;

        let p1 = center + Vec2::new(theta1.cos(), theta1.sin()) * radius;
        let p2 = center + Vec2::new(theta2.cos(), theta2.sin()) * radius;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(center: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let half = size / 2.0;
    let (l, r) = (center.x - half.x, center.x + half.x);
    let (t, b) = (center.y - half.y, center.y + half.y);

    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}
