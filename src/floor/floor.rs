//! Floor container and movement resolution.
//!
//! A `Floor` is one level/room of the world: layered object collections,
//! a player registry, a monster collection, and the exit markers that
//! trigger traversal. It answers collision and touch queries and resolves
//! player movement one axis at a time.
//!
//! ## Ordering
//!
//! Each layer bucket is kept sorted by y-coordinate ascending; buckets
//! themselves iterate in layer order. This composite (layer, y) order
//! drives both paint order and the deterministic scan order that queries
//! report matches in.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Direction, FloorId, ObjectId, Rect};
use crate::objects::{ContentRegistry, ObjectKind, Player, SpatialObject, UnknownPrototype};

/// Result collection for collision/touch scans. Matches rarely exceed a
/// handful, so these stay on the stack.
pub type QueryHits = SmallVec<[ObjectId; 8]>;

/// Floor operation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FloorError {
    /// The named player is not registered on this floor.
    UnknownPlayer { name: String, floor: FloorId },
    /// No placed object with this identity on this floor.
    UnknownObject(ObjectId),
    /// A swap referenced an unregistered prototype (corrupt content).
    Prototype(UnknownPrototype),
}

impl std::fmt::Display for FloorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorError::UnknownPlayer { name, floor } => {
                write!(f, "player '{name}' is not on {floor}")
            }
            FloorError::UnknownObject(id) => write!(f, "no object {id} on this floor"),
            FloorError::Prototype(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FloorError {}

impl From<UnknownPrototype> for FloorError {
    fn from(e: UnknownPrototype) -> Self {
        FloorError::Prototype(e)
    }
}

/// One level/room of the world.
#[derive(Clone, Debug)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    /// Skin the render collaborator should resolve tiles against.
    pub skin_name: String,
    bounds: Rect,
    layers: BTreeMap<i32, Vec<SpatialObject>>,
    players: FxHashMap<String, Player>,
    monsters: Vec<SpatialObject>,
    exits: FxHashMap<Direction, ObjectId>,
}

impl Floor {
    /// Create an empty floor with a degenerate bounding rect at the
    /// origin; bounds grow by union as objects are added.
    #[must_use]
    pub fn new(id: FloorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            skin_name: "default".to_string(),
            bounds: Rect::new(0, 0, 0, 0),
            layers: BTreeMap::new(),
            players: FxHashMap::default(),
            monsters: Vec::new(),
            exits: FxHashMap::default(),
        }
    }

    /// Set the render skin name.
    #[must_use]
    pub fn with_skin(mut self, skin_name: impl Into<String>) -> Self {
        self.skin_name = skin_name.into();
        self
    }

    /// The bounding rect, grown to cover every placed object.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Insert an object into its layer bucket, keeping the bucket sorted
    /// by y ascending, and grow the floor bounds to cover it. Exit-marker
    /// kinds are registered in the exit map under their direction.
    pub fn add_object(&mut self, object: SpatialObject) {
        self.bounds = self.bounds.union(&object.rect());

        if let Some(direction) = object.kind.exit_direction() {
            self.exits.insert(direction, object.id);
        }

        debug!(floor = %self.id, object = %object, "placed object");

        let bucket = self.layers.entry(object.layer).or_default();
        bucket.push(object);
        bucket.sort_by_key(|o| o.rect().y);
    }

    /// Remove an object by identity. Returns the removed object, or
    /// `None` if no object with that id is placed here.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SpatialObject> {
        for bucket in self.layers.values_mut() {
            if let Some(index) = bucket.iter().position(|o| o.id == id) {
                return Some(bucket.remove(index));
            }
        }
        None
    }

    /// Replace an object with a fresh instance of `new_kind` at the old
    /// object's exact position and layer. Identity changes, position does
    /// not. Returns the replacement's id.
    pub fn swap_object(
        &mut self,
        id: ObjectId,
        new_kind: ObjectKind,
        registry: &mut ContentRegistry,
    ) -> Result<ObjectId, FloorError> {
        let old = self
            .remove_object(id)
            .ok_or(FloorError::UnknownObject(id))?;

        let mut replacement = registry.instantiate_kind(new_kind)?;
        let (x, y) = old.pos();
        replacement.set_pos(x, y);
        replacement.layer = old.layer;
        let new_id = replacement.id;
        self.add_object(replacement);
        Ok(new_id)
    }

    /// Look up a placed object by identity.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SpatialObject> {
        self.layers
            .values()
            .flat_map(|bucket| bucket.iter())
            .find(|o| o.id == id)
    }

    /// Total number of placed objects across all layers.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Layer ids in ascending order.
    pub fn layer_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.layers.keys().copied()
    }

    /// The objects in one layer, in maintained (y ascending) order.
    #[must_use]
    pub fn objects_in_layer(&self, layer: i32) -> &[SpatialObject] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All placed objects in composite (layer, y) order - the paint
    /// order the render collaborator consumes.
    pub fn iter_objects(&self) -> impl Iterator<Item = &SpatialObject> {
        self.layers.values().flat_map(|bucket| bucket.iter())
    }

    /// The exit marker object for a direction, if one is placed.
    #[must_use]
    pub fn exit_marker(&self, direction: Direction) -> Option<&SpatialObject> {
        self.exits.get(&direction).and_then(|&id| self.object(id))
    }

    /// Add a monster to the floor.
    pub fn add_monster(&mut self, monster: SpatialObject) {
        self.monsters.push(monster);
    }

    /// The monster collection.
    #[must_use]
    pub fn monsters(&self) -> &[SpatialObject] {
        &self.monsters
    }

    /// Register a player on this floor and position it.
    ///
    /// With an entry direction whose marker is placed, the player lands
    /// centered on the marker but pushed just inside the floor past it,
    /// offset by the touch-field margin plus one so the exit does not
    /// immediately re-trigger. Otherwise the player lands at the floor
    /// center.
    pub fn add_player(&mut self, mut player: Player, entry: Option<Direction>) {
        let body = player.body.rect();
        let (mut x, mut y) = {
            let (cx, cy) = self.bounds.center();
            (cx - body.width / 2, cy - body.height / 2)
        };

        if let Some(marker) = entry.and_then(|d| self.exit_marker(d).map(|m| (d, m.rect()))) {
            let (direction, exit_rect) = marker;
            x = exit_rect.center().0 - body.width / 2;
            y = exit_rect.center().1 - body.height / 2;
            match direction {
                Direction::North => {
                    y = exit_rect.bottom() + SpatialObject::TOUCH_FIELD_Y + 1;
                }
                Direction::South => {
                    y = exit_rect.y - body.height - SpatialObject::TOUCH_FIELD_Y - 1;
                }
                Direction::West => {
                    x = exit_rect.right() + SpatialObject::TOUCH_FIELD_X + 1;
                }
                Direction::East => {
                    x = exit_rect.x - body.width - SpatialObject::TOUCH_FIELD_X - 1;
                }
                // Stairs drop the player straight onto the marker.
                Direction::Up | Direction::Down => {}
            }
        }

        debug!(floor = %self.id, player = %player.name, x, y, "player enters");
        player.body.set_pos(x, y);
        self.players.insert(player.name.clone(), player);
    }

    /// Remove and return a player, for transfer to another floor.
    pub fn take_player(&mut self, name: &str) -> Option<Player> {
        self.players.remove(name)
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Look up a player mutably.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Objects on the target's layer whose footprint strictly overlaps
    /// the target's, in maintained scan order.
    #[must_use]
    pub fn colliding_objects(&self, target: &SpatialObject) -> QueryHits {
        self.objects_in_layer(target.layer)
            .iter()
            .filter(|o| o.is_colliding(target))
            .map(|o| o.id)
            .collect()
    }

    /// Visible, interactable objects on the target's layer within the
    /// target's touch field, in maintained scan order.
    #[must_use]
    pub fn touching_objects(&self, target: &SpatialObject) -> QueryHits {
        self.objects_in_layer(target.layer)
            .iter()
            .filter(|o| target.is_touching(o))
            .map(|o| o.id)
            .collect()
    }

    /// Resolve a player translation one axis at a time, never diagonally
    /// as a single step.
    ///
    /// Each axis is attempted independently: translate, then revert just
    /// that axis if the body leaves the floor bounds or collides with any
    /// solid object on its layer. A diagonal move into a wall therefore
    /// slides along it instead of freezing entirely.
    pub fn move_player(&mut self, name: &str, dx: i32, dy: i32) -> Result<(), FloorError> {
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| FloorError::UnknownPlayer {
                name: name.to_string(),
                floor: self.id,
            })?;

        let bounds = self.bounds;
        let bucket = self
            .layers
            .get(&player.body.layer)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let blocked = |body: &SpatialObject| {
            !bounds.contains(&body.rect())
                || bucket.iter().any(|o| o.solid && o.is_colliding(body))
        };

        if dx != 0 {
            player.body.move_by(dx, 0);
            if blocked(&player.body) {
                player.body.undo();
            }
        }

        if dy != 0 {
            player.body.move_by(0, dy);
            if blocked(&player.body) {
                player.body.undo();
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': bounds={}, objects={}, players={}, monsters={}",
            self.id,
            self.name,
            self.bounds,
            self.object_count(),
            self.players.len(),
            self.monsters.len()
        )
    }
}
