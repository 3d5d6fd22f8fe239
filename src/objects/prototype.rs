//! Object prototypes: templates that placements are copied from.
//!
//! A prototype is built once from the content tables. Every placement
//! instantiates a fully owned, independent copy - mutating one instance
//! never affects the prototype or any other instance.

use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, Rect};

use super::kind::ObjectKind;
use super::object::SpatialObject;

/// Template for one kind of placeable object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPrototype {
    pub kind: ObjectKind,
    pub name: String,
    /// Footprint width in pixels.
    pub width: i32,
    /// Footprint depth in pixels (the collision extent on y).
    pub depth: i32,
    /// Render height; defaults to the footprint depth.
    pub height: i32,
    pub solid: bool,
    pub visible: bool,
    pub interactable: bool,
}

impl ObjectPrototype {
    /// Create a prototype with all capability flags set and the render
    /// height equal to the footprint depth.
    #[must_use]
    pub fn new(kind: ObjectKind, name: impl Into<String>, width: i32, depth: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            width,
            depth,
            height: depth,
            solid: true,
            visible: true,
            interactable: true,
        }
    }

    /// Set the render height.
    #[must_use]
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Set whether the object blocks movement.
    #[must_use]
    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Set whether the object is drawn and touchable.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set whether the object reacts to touch.
    #[must_use]
    pub fn with_interactable(mut self, interactable: bool) -> Self {
        self.interactable = interactable;
        self
    }

    /// Instantiate an independent copy at the origin, on layer 1.
    ///
    /// The caller supplies the instance identity; the
    /// [`ContentRegistry`](super::ContentRegistry) allocates one per
    /// placement.
    #[must_use]
    pub fn instantiate(&self, id: ObjectId) -> SpatialObject {
        let mut object = SpatialObject::new(
            id,
            self.kind,
            self.name.clone(),
            Rect::new(0, 0, self.width, self.depth),
        );
        object.height = self.height;
        object.solid = self.solid;
        object.visible = self.visible;
        object.interactable = self.interactable;
        object
    }
}
