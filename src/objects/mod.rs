//! Object system: kinds, spatial objects, players, prototypes, registry.
//!
//! ## Key Types
//!
//! - `ObjectKind`: enumerated kind tag (scenery, pickups, doors, exits)
//! - `SpatialObject`: a positioned entity with capability flags and a
//!   one-level position snapshot for rollback
//! - `Player`: a spatial body plus inventory counters and HP
//! - `ObjectPrototype`: the template a placement is copied from
//! - `ContentRegistry`: prototype lookup and instance-id allocation

pub mod kind;
pub mod object;
pub mod player;
pub mod prototype;
pub mod registry;

pub use kind::ObjectKind;
pub use object::SpatialObject;
pub use player::Player;
pub use prototype::ObjectPrototype;
pub use registry::{ContentRegistry, UnknownPrototype};
