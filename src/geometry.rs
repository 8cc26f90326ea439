//! Axis-aligned rectangle tests in centimetres.
//!
//! Items only turn in quarter steps, so every footprint stays an
//! axis-aligned box and the tests reduce to edge comparisons.

use serde::{Deserialize, Serialize};

use crate::types::Rotation;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width_cm: f64,
    pub depth_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, size: Size) -> Self {
        Rect {
            left: x,
            top: y,
            right: x + size.width_cm,
            bottom: y + size.depth_cm,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Edges inclusive.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

/// Footprint after rotation: width and depth swap on quarter turns.
pub fn size_under_rotation(footprint: Size, rotation: Rotation) -> Size {
    if rotation.swaps_axes() {
        Size {
            width_cm: footprint.depth_cm,
            depth_cm: footprint.width_cm,
        }
    } else {
        footprint
    }
}

/// True if `a`, inflated by `margin`, reaches into `b`.
/// Touching (shared edge or corner) is NOT counted as overlap.
pub fn rect_overlap(a: &Rect, b: &Rect, margin: f64) -> bool {
    !(a.right + margin <= b.left
        || b.right + margin <= a.left
        || a.bottom + margin <= b.top
        || b.bottom + margin <= a.top)
}

/// True if `inner`, shrunk by `margin` on every side, lies within (or on)
/// the edges of `outer`.
pub fn rect_contains(inner: &Rect, outer: &Rect, margin: f64) -> bool {
    inner.left + margin >= outer.left
        && inner.top + margin >= outer.top
        && inner.right - margin <= outer.right
        && inner.bottom - margin <= outer.bottom
}

/// Straight-line distance between the nearest boundary points.
///
/// Each axis contributes only when the rectangles are separated along it,
/// so interpenetrating rectangles report 0 just like touching ones.
pub fn rect_gap(a: &Rect, b: &Rect) -> f64 {
    let dx = axis_gap(a.left, a.right, b.left, b.right);
    let dy = axis_gap(a.top, a.bottom, b.top, b.bottom);
    (dx * dx + dy * dy).sqrt()
}

fn axis_gap(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> f64 {
    if a_hi < b_lo {
        b_lo - a_hi
    } else if b_hi < a_lo {
        a_lo - b_hi
    } else {
        0.0
    }
}

/// Round to the nearest multiple of `grid`, halves rounding up.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid + 0.5).floor() * grid
}
