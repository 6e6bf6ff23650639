//! Collision detection and response
//!
//! Responses never reflect arbitrary vectors: they only choose the sign of a
//! velocity component, so the ball keeps its per-axis speed.

use super::geom::{Edges, is_intersecting};
use super::state::{Ball, Brick, Paddle};

/// Velocity component changed by a brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Outcome of a ball hitting a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    /// Axis whose velocity was flipped
    pub axis: Axis,
    /// Ball entered through the brick's left side (smaller left overlap)
    pub from_left: bool,
    /// Ball entered through the brick's top side (smaller top overlap)
    pub from_top: bool,
}

/// Bounce the ball up off the paddle
///
/// The horizontal direction follows which half of the paddle was hit, which
/// lets the player steer the ball. Returns whether a hit occurred.
pub fn resolve_paddle_ball(paddle: &Paddle, ball: &mut Ball) -> bool {
    if !is_intersecting(paddle, &*ball) {
        return false;
    }

    ball.vel.y = -ball.speed;
    ball.vel.x = if ball.x() < paddle.x() {
        -ball.speed
    } else {
        ball.speed
    };

    true
}

/// Destroy the brick and deflect the ball along the shallower axis
///
/// The entry side on each axis is the one with the smaller overlap. The axis
/// with the smaller of the two minimal overlaps gets its velocity set away
/// from the brick; the other component is left untouched.
pub fn resolve_brick_ball(brick: &mut Brick, ball: &mut Ball) -> Option<BrickHit> {
    if !is_intersecting(&*brick, &*ball) {
        return None;
    }

    brick.destroyed = true;

    let overlap = ball.bounds().overlap(&brick.bounds());

    let from_left = overlap.left < overlap.right;
    let from_top = overlap.top < overlap.bottom;

    let min_x = if from_left { overlap.left } else { overlap.right };
    let min_y = if from_top { overlap.top } else { overlap.bottom };

    let axis = if min_x < min_y {
        ball.vel.x = if from_left { -ball.speed } else { ball.speed };
        Axis::Horizontal
    } else {
        ball.vel.y = if from_top { -ball.speed } else { ball.speed };
        Axis::Vertical
    };

    Some(BrickHit {
        axis,
        from_left,
        from_top,
    })
}
