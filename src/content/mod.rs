//! Content loading: thin adapters from tabular rows to world state.
//!
//! The engine consumes three tables, delivered as already-parsed rows by
//! the file I/O collaborator:
//!
//! - prototype rows → [`ContentRegistry`](crate::objects::ContentRegistry)
//! - layout rows (layered tile grids) → floors
//! - link rows → the navigation graph
//!
//! All loaders are fatal on malformed content: a `ContentLoadError`
//! aborts startup before play begins.

pub mod error;
pub mod floors;
pub mod links;
pub mod rows;

pub use error::ContentLoadError;
pub use floors::{build_floors, load_prototypes, TILE_DEPTH, TILE_WIDTH};
pub use links::load_links;
pub use rows::{parse_flag, LayoutRow, LinkRow, PrototypeRow};
