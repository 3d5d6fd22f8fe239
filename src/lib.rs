//! # rust-trpg
//!
//! A tile-based RPG world engine: floors, collision resolution, and map
//! navigation.
//!
//! ## Design Principles
//!
//! 1. **Axis-Separated Movement**: A displacement is resolved one axis at
//!    a time, each axis reverted independently on a collision or bounds
//!    violation. Diagonal input into a wall slides along it instead of
//!    freezing the whole move.
//!
//! 2. **Capability Flags Over Hierarchy**: Everything placed in the world
//!    is one `SpatialObject` record with a kind tag and explicit
//!    solid/visible/interactable flags - no virtual dispatch.
//!
//! 3. **Explicit Ownership**: Prototypes live in a `ContentRegistry`
//!    value owned by the session; every placement is an independent copy.
//!    There is no hidden global state.
//!
//! 4. **Recoverable Refusals**: "Locked", "no such exit", and "no key"
//!    are result values carried back to the orchestration layer and
//!    surfaced as player messages; the simulation continues regardless.
//!
//! ## Modules
//!
//! - `core`: Geometry, canonical directions, id newtypes
//! - `objects`: Kinds, spatial objects, players, prototypes, registry
//! - `floor`: Per-level containers, queries, movement resolution
//! - `navigation`: Map links and the directed navigation graph
//! - `session`: Per-tick orchestration and touch effects
//! - `content`: Tabular loaders for prototypes, layouts, and links
//!
//! ## Concurrency
//!
//! Single-threaded, cooperative: the world advances only inside discrete
//! simulation ticks, and every mutation happens between observations.
//! The render cadence may outrun the tick timer; it only ever sees the
//! last committed state.

pub mod content;
pub mod core;
pub mod floor;
pub mod navigation;
pub mod objects;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Direction, FloorId, ObjectId, Rect};

pub use crate::objects::{
    ContentRegistry, ObjectKind, ObjectPrototype, Player, SpatialObject, UnknownPrototype,
};

pub use crate::floor::{Floor, FloorError, QueryHits};

pub use crate::navigation::{MapLink, NavigationError, NavigationGraph};

pub use crate::session::{GameSession, MessageLog, SessionError, SessionState, StatusMessage};

pub use crate::content::{
    build_floors, load_links, load_prototypes, ContentLoadError, LayoutRow, LinkRow, PrototypeRow,
};
