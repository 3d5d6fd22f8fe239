//! Axis-aligned integer rectangles.
//!
//! `Rect` is the only geometric primitive in the engine. Everything spatial
//! (object footprints, floor bounds, touch fields) is an axis-aligned
//! rectangle in integer pixel coordinates.
//!
//! ## Overlap Convention
//!
//! `intersects` uses strict inequalities: two rects that merely share an
//! edge do **not** overlap. Collision and touch checks both rely on this
//! fixed convention.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: origin at `(x, y)`, extending `width` right
/// and `height` down.
///
/// ```
/// use rust_trpg::core::Rect;
///
/// let a = Rect::new(0, 0, 32, 32);
/// let b = Rect::new(32, 0, 32, 32);
///
/// // Edge-touching is not overlap.
/// assert!(!a.intersects(&b));
/// assert!(a.intersects(&Rect::new(31, 0, 32, 32)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, rounded toward the origin.
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// True if `other` lies entirely inside this rect (edges may coincide).
    #[must_use]
    pub const fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Strict AABB overlap test. Edge-touching counts as non-overlapping.
    #[must_use]
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rect covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Grow (or shrink, for negative amounts) by `dx`/`dy` in total,
    /// keeping the center fixed. Half the growth goes to each side.
    #[must_use]
    pub const fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x - dx / 2,
            self.y - dy / 2,
            self.width + dx,
            self.height + dy,
        )
    }

    /// Translate in place by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Move the origin to `(x, y)` in place, preserving size.
    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
