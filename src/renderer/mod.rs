//! Scene building for display surfaces
//!
//! Game state becomes a list of filled shapes; surfaces that upload geometry
//! can tessellate them into a flat vertex batch.

pub mod shapes;
pub mod vertex;

pub use shapes::Shape;
pub use vertex::{Color, Vertex, colors};

use crate::sim::GameState;

/// Shapes for one frame: ball, paddle, then every live brick
pub fn scene(state: &GameState) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(state.bricks.len() + 2);

    shapes.push(Shape::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });
    shapes.push(Shape::Rect {
        center: state.paddle.pos,
        size: state.paddle.size,
        color: colors::PADDLE,
    });
    shapes.extend(state.bricks.iter().map(|brick| Shape::Rect {
        center: brick.pos,
        size: brick.size,
        color: colors::BRICK,
    }));

    shapes
}

/// Tessellate every shape into one triangle list
pub fn vertex_batch(shapes: &[Shape]) -> Vec<Vertex> {
    shapes.iter().flat_map(Shape::tessellate).collect()
}
