//! Spatial objects: positioned, bounded entities with capability flags.
//!
//! `SpatialObject` is the single positional-entity record for everything
//! placed in the world - scenery, pickups, exit markers, and player
//! bodies alike. Behavior differences are carried by the kind tag and the
//! capability flags, not by a type hierarchy.
//!
//! ## Position Snapshots
//!
//! Every position mutation first captures the current rect as the
//! "previous" rect. [`SpatialObject::undo`] restores exactly that one
//! snapshot; a second move before undo discards the first snapshot. Floor
//! movement resolution relies on this to revert a single blocked axis.

use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, Rect};

use super::kind::ObjectKind;

/// A positioned, bounded entity on a floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialObject {
    /// Unique instance identity. Collision and touch checks exclude
    /// self-comparison by id, never by pointer.
    pub id: ObjectId,

    /// Logical kind tag (drives touch effects and exit registration).
    pub kind: ObjectKind,

    /// Display name, from the content tables.
    pub name: String,

    /// Current footprint.
    rect: Rect,

    /// Single-slot snapshot of the footprint before the last mutation.
    prev_rect: Rect,

    /// Z-order bucket: collision partitioning and paint order.
    pub layer: i32,

    /// Render height (may exceed the footprint depth for tall sprites).
    pub height: i32,

    /// Blocks movement on its layer.
    pub solid: bool,

    /// Drawn, and eligible to be touched.
    pub visible: bool,

    /// Reacts to touch at all.
    pub interactable: bool,
}

impl SpatialObject {
    /// Total touch-field inflation on each axis (half per side).
    pub const TOUCH_FIELD_X: i32 = 4;
    pub const TOUCH_FIELD_Y: i32 = 4;

    /// Create an object at the given footprint with all capability flags
    /// set. Prototypes normally do this via
    /// [`ObjectPrototype::instantiate`](super::ObjectPrototype::instantiate).
    #[must_use]
    pub fn new(id: ObjectId, kind: ObjectKind, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            rect,
            prev_rect: rect,
            layer: 1,
            height: rect.height,
            solid: true,
            visible: true,
            interactable: true,
        }
    }

    /// Current footprint.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Origin of the current footprint.
    #[must_use]
    pub const fn pos(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }

    /// Translate by `(dx, dy)`, snapshotting the current footprint first.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.prev_rect = self.rect;
        self.rect.translate(dx, dy);
    }

    /// Move the origin to `(x, y)`, snapshotting the current footprint first.
    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.prev_rect = self.rect;
        self.rect.set_pos(x, y);
    }

    /// Restore the footprint from the last snapshot (exactly one level
    /// deep). Undoing twice without an intervening move is a no-op.
    pub fn undo(&mut self) {
        self.rect = self.prev_rect;
    }

    /// True iff `other` is a different instance on the same layer whose
    /// footprint strictly overlaps this one's.
    #[must_use]
    pub fn is_colliding(&self, other: &SpatialObject) -> bool {
        self.layer == other.layer && self.id != other.id && self.rect.intersects(&other.rect)
    }

    /// Near-adjacency check: this object's footprint inflated by the touch
    /// field against `other`'s footprint. The candidate must be visible
    /// and interactable; same-layer and self-exclusion rules apply as for
    /// collision.
    #[must_use]
    pub fn is_touching(&self, other: &SpatialObject) -> bool {
        self.layer == other.layer
            && self.id != other.id
            && other.visible
            && other.interactable
            && self
                .rect
                .inflate(Self::TOUCH_FIELD_X, Self::TOUCH_FIELD_Y)
                .intersects(&other.rect)
    }
}

impl std::fmt::Display for SpatialObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.name, self.id, self.rect)
    }
}
