//! Floor system: layered object containers and movement resolution.
//!
//! A floor holds the placed objects for one level/room, answers
//! collision/touch queries in a deterministic order, and resolves player
//! movement one axis at a time so diagonal input slides along walls.

pub mod floor;

pub use floor::{Floor, FloorError, QueryHits};
