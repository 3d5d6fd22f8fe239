//! Core engine types: geometry, directions, identifiers.
//!
//! This module contains the fundamental building blocks that are
//! content-agnostic. The engine never interprets floor or object ids -
//! they are opaque identifiers assigned at content-load time.

pub mod direction;
pub mod ids;
pub mod rect;

pub use direction::Direction;
pub use ids::{FloorId, ObjectId};
pub use rect::Rect;
