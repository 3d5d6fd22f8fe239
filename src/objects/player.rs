//! Player state: a spatial body plus inventory and health.

use serde::{Deserialize, Serialize};

use super::object::SpatialObject;

/// A player in the world.
///
/// The body is an ordinary [`SpatialObject`]; floors resolve its movement
/// exactly like any other object's. Inventory counters and HP are the
/// player-specific payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique name; floors key their player registry on it.
    pub name: String,

    /// The positioned body.
    pub body: SpatialObject,

    /// Treasure collected.
    pub treasure: u32,

    /// Ordinary keys held.
    pub keys: u32,

    /// Boss keys held.
    pub boss_keys: u32,

    /// Hit points.
    pub hp: i32,
}

impl Player {
    /// Starting hit points.
    pub const DEFAULT_HP: i32 = 10;

    /// Create a player from an instantiated body.
    ///
    /// Players always live on layer 1.
    #[must_use]
    pub fn new(name: impl Into<String>, mut body: SpatialObject) -> Self {
        let name = name.into();
        body.layer = 1;
        body.name = name.clone();
        Self {
            name,
            body,
            treasure: 0,
            keys: 0,
            boss_keys: 0,
            hp: Self::DEFAULT_HP,
        }
    }
}
