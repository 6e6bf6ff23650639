//! Axis-aligned bounds shared by every entity
//!
//! Entities are described by a center and half extents. A ball is treated as
//! its bounding square for edge purposes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Penetration depth of one box into another, measured from each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Mover's right edge past the target's left edge
    pub left: f32,
    /// Target's right edge past the mover's left edge
    pub right: f32,
    /// Mover's bottom edge past the target's top edge
    pub top: f32,
    /// Target's bottom edge past the mover's top edge
    pub bottom: f32,
}

impl Bounds {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box around a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center, Vec2::splat(radius))
    }

    /// Box from a full width/height size
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size / 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Overlap of `self` (the mover) into `target`
    ///
    /// Values are only meaningful when the boxes intersect.
    pub fn overlap(&self, target: &Bounds) -> Overlap {
        Overlap {
            left: self.right() - target.left(),
            right: target.right() - self.left(),
            top: self.bottom() - target.top(),
            bottom: target.bottom() - self.top(),
        }
    }
}

/// Edge queries for anything with axis-aligned bounds
pub trait Edges {
    fn bounds(&self) -> Bounds;

    fn x(&self) -> f32 {
        self.bounds().center.x
    }

    fn y(&self) -> f32 {
        self.bounds().center.y
    }

    fn left(&self) -> f32 {
        self.bounds().left()
    }

    fn right(&self) -> f32 {
        self.bounds().right()
    }

    fn top(&self) -> f32 {
        self.bounds().top()
    }

    fn bottom(&self) -> f32 {
        self.bounds().bottom()
    }
}

impl Edges for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// True when both horizontal and vertical extents overlap
///
/// Comparisons are inclusive, so touching edges count as intersecting.
pub fn is_intersecting<A: Edges + ?Sized, B: Edges + ?Sized>(a: &A, b: &B) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}
