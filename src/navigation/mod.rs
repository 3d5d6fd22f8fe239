//! Navigation system: the directed graph linking floors.
//!
//! ## Key Types
//!
//! - `MapLink`: a directed, optionally lockable/hidden edge under one
//!   canonical direction
//! - `NavigationGraph`: per-location ordered link lists, with reversible
//!   mirroring and explicit two-sided lock updates
//! - `NavigationError`: recoverable traversal failures (invalid
//!   direction, no such exit, locked)

pub mod graph;
pub mod link;

pub use graph::{NavigationError, NavigationGraph};
pub use link::MapLink;
