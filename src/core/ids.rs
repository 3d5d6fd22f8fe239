//! Identifier newtypes.
//!
//! Floors and placed objects are identified by opaque numeric ids.
//! `FloorId` values come from the content tables; `ObjectId` values are
//! allocated by the [`ContentRegistry`](crate::objects::ContentRegistry)
//! whenever a prototype is instantiated, so every placed copy has a
//! distinct identity even when its kind and position coincide with
//! another's.

use serde::{Deserialize, Serialize};

/// Identifier for a floor (one level/room of the world).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FloorId(pub u32);

impl FloorId {
    /// Create a new floor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FloorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor({})", self.0)
    }
}

/// Unique identifier for a placed object instance.
///
/// Placed copies are independent entities; two instances of the same
/// prototype never share an `ObjectId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Create a new object ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}
