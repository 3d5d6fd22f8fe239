//! Per-tick simulation orchestration.
//!
//! `GameSession` owns all mutable world state: the floor registry, the
//! navigation graph, the content registry, and the current player. Each
//! input delta is delegated to the current floor for movement resolution,
//! after which touch-triggered side effects (pickups, doors, exits) are
//! applied; exit touches invoke the navigation-graph traversal check and
//! may switch floors.
//!
//! ## Failure Semantics
//!
//! Traversal and interaction refusals (locked, no exit, no key) surface
//! as status messages and never stop the simulation. Unknown-prototype
//! lookups abort the operation that triggered them - they indicate
//! corrupt content. Any unexpected fault inside a tick is logged at the
//! tick boundary and that tick becomes a no-op; one bad tick never
//! terminates the session.

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::core::{Direction, FloorId, ObjectId};
use crate::floor::{Floor, FloorError};
use crate::navigation::{NavigationError, NavigationGraph};
use crate::objects::{ContentRegistry, ObjectKind, Player, UnknownPrototype};

use super::messages::MessageLog;

/// Session lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// World built, no simulation running yet.
    Ready,
    /// Ticks and input are being processed.
    Playing,
    /// Simulation suspended; state repaints but does not advance.
    Paused,
    /// Terminal state.
    GameOver,
}

/// Session operation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A floor id did not resolve in the floor registry.
    UnknownFloor(FloorId),
    /// The current player is missing from the current floor.
    UnknownPlayer(String),
    /// No object with this identity on the current floor.
    UnknownObject(ObjectId),
    /// An unregistered prototype was referenced (corrupt content).
    Prototype(UnknownPrototype),
    /// A recoverable traversal refusal.
    Navigation(NavigationError),
    /// No player has been added to the session.
    NoPlayer,
    /// The session is not in the `Playing` state.
    NotPlaying,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownFloor(id) => write!(f, "no floor registered for {id}"),
            SessionError::UnknownPlayer(name) => write!(f, "player '{name}' not found"),
            SessionError::UnknownObject(id) => write!(f, "no object {id} on the current floor"),
            SessionError::Prototype(e) => write!(f, "{e}"),
            SessionError::Navigation(e) => write!(f, "{e}"),
            SessionError::NoPlayer => write!(f, "no player in the session"),
            SessionError::NotPlaying => write!(f, "the session is not playing"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<NavigationError> for SessionError {
    fn from(e: NavigationError) -> Self {
        SessionError::Navigation(e)
    }
}

impl From<UnknownPrototype> for SessionError {
    fn from(e: UnknownPrototype) -> Self {
        SessionError::Prototype(e)
    }
}

impl From<FloorError> for SessionError {
    fn from(e: FloorError) -> Self {
        match e {
            FloorError::UnknownPlayer { name, .. } => SessionError::UnknownPlayer(name),
            FloorError::UnknownObject(id) => SessionError::UnknownObject(id),
            FloorError::Prototype(p) => SessionError::Prototype(p),
        }
    }
}

/// The running game: floors, navigation graph, player, tick counter.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub name: String,
    state: SessionState,
    tick_count: u64,
    registry: ContentRegistry,
    floors: FxHashMap<FloorId, Floor>,
    graph: NavigationGraph,
    current_floor: FloorId,
    player_name: Option<String>,
    messages: MessageLog,
}

impl GameSession {
    /// Every how many ticks damage-over-time hazards re-apply.
    pub const DOT_DAMAGE_RATE: u64 = 3;

    /// HP lost per overlapping trap at each damage tick.
    pub const TRAP_DAMAGE: i32 = 1;

    /// Create a session over a built world.
    ///
    /// Fails if `start_floor` does not resolve in the floor registry; the
    /// session maintains that invariant from then on.
    pub fn new(
        name: impl Into<String>,
        registry: ContentRegistry,
        floors: FxHashMap<FloorId, Floor>,
        graph: NavigationGraph,
        start_floor: FloorId,
    ) -> Result<Self, SessionError> {
        if !floors.contains_key(&start_floor) {
            return Err(SessionError::UnknownFloor(start_floor));
        }
        Ok(Self {
            name: name.into(),
            state: SessionState::Ready,
            tick_count: 0,
            registry,
            floors,
            graph,
            current_floor: start_floor,
            player_name: None,
            messages: MessageLog::new(),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Monotonically increasing tick counter (drives animation frames).
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Id of the floor the player is on.
    #[must_use]
    pub const fn current_floor_id(&self) -> FloorId {
        self.current_floor
    }

    /// The floor the player is on.
    ///
    /// Panics if the session invariant (current floor always registered)
    /// has been broken.
    #[must_use]
    pub fn current_floor(&self) -> &Floor {
        self.floors
            .get(&self.current_floor)
            .expect("current floor not in the floor registry")
    }

    /// Look up any floor by id.
    #[must_use]
    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.get(&id)
    }

    /// The navigation graph.
    #[must_use]
    pub const fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    /// Mutable navigation graph access, for play-time lock updates.
    pub fn graph_mut(&mut self) -> &mut NavigationGraph {
        &mut self.graph
    }

    /// The prototype registry.
    #[must_use]
    pub const fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// The current player, if one has been added.
    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        let name = self.player_name.as_deref()?;
        self.current_floor().player(name)
    }

    /// Mutable access to the current player (inventory grants, scripted
    /// repositioning).
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        let name = self.player_name.clone()?;
        self.floors.get_mut(&self.current_floor)?.player_mut(&name)
    }

    /// Live status messages, oldest first.
    #[must_use]
    pub const fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Instantiate a player from the `Player` prototype.
    pub fn create_player(&mut self, name: impl Into<String>) -> Result<Player, SessionError> {
        let body = self.registry.instantiate_kind(ObjectKind::Player)?;
        Ok(Player::new(name, body))
    }

    /// Register the player on the current floor (at its center) and make
    /// it the session's player.
    pub fn add_player(&mut self, player: Player) -> Result<(), SessionError> {
        let floor = self
            .floors
            .get_mut(&self.current_floor)
            .ok_or(SessionError::UnknownFloor(self.current_floor))?;
        self.player_name = Some(player.name.clone());
        floor.add_player(player, None);
        Ok(())
    }

    /// Begin the simulation. Requires a player.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.player_name.is_none() {
            return Err(SessionError::NoPlayer);
        }
        info!(session = %self.name, "session starts");
        self.state = SessionState::Playing;
        Ok(())
    }

    /// Suspend the simulation; `tick` and `move_player` become no-ops.
    pub fn pause(&mut self) {
        if self.state == SessionState::Playing {
            self.state = SessionState::Paused;
        }
    }

    /// Resume a paused simulation.
    pub fn resume(&mut self) {
        if self.state == SessionState::Paused {
            self.state = SessionState::Playing;
        }
    }

    /// End the session.
    pub fn end(&mut self) {
        self.state = SessionState::GameOver;
    }

    /// Advance the simulation by one tick.
    ///
    /// Expires old status messages and, every
    /// [`DOT_DAMAGE_RATE`](Self::DOT_DAMAGE_RATE)-th tick, re-applies
    /// hazard damage from overlapping traps. A fault inside the tick body
    /// is logged here and the tick becomes a no-op.
    pub fn tick(&mut self) {
        if self.state != SessionState::Playing {
            return;
        }
        self.tick_count += 1;
        self.messages.expire(self.tick_count);

        if let Err(e) = self.apply_hazards() {
            warn!(tick = self.tick_count, error = %e, "tick fault, skipping");
        }
    }

    fn apply_hazards(&mut self) -> Result<(), SessionError> {
        if self.tick_count % Self::DOT_DAMAGE_RATE != 0 {
            return Ok(());
        }
        let name = self.player_name.clone().ok_or(SessionError::NoPlayer)?;
        let floor = self
            .floors
            .get_mut(&self.current_floor)
            .ok_or(SessionError::UnknownFloor(self.current_floor))?;

        let body = floor
            .player(&name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.clone()))?
            .body
            .clone();

        let traps = floor
            .colliding_objects(&body)
            .iter()
            .filter(|&&id| floor.object(id).map(|o| o.kind) == Some(ObjectKind::Trap))
            .count() as i32;

        if traps > 0 {
            let player = floor
                .player_mut(&name)
                .ok_or(SessionError::UnknownPlayer(name))?;
            player.hp -= traps * Self::TRAP_DAMAGE;
            self.messages
                .push("You stepped on a trap!", self.tick_count);
        }
        Ok(())
    }

    /// Move the player by an input delta and apply touch effects.
    ///
    /// Movement is resolved per axis by the current floor. Afterwards,
    /// each touched object gets exactly one kind-specific effect: exits
    /// run the traversal check, pickups increment inventory counters and
    /// remove themselves, chests and doors consume keys. Refusals become
    /// status messages; the call still succeeds.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> Result<(), SessionError> {
        if self.state != SessionState::Playing {
            return Err(SessionError::NotPlaying);
        }
        let name = self.player_name.clone().ok_or(SessionError::NoPlayer)?;
        let now = self.tick_count;

        let touched: Vec<(ObjectId, ObjectKind)> = {
            let floor = self
                .floors
                .get_mut(&self.current_floor)
                .ok_or(SessionError::UnknownFloor(self.current_floor))?;
            floor.move_player(&name, dx, dy)?;

            let body = floor
                .player(&name)
                .ok_or_else(|| SessionError::UnknownPlayer(name.clone()))?
                .body
                .clone();
            floor
                .touching_objects(&body)
                .iter()
                .filter_map(|&id| floor.object(id).map(|o| (id, o.kind)))
                .collect()
        };

        for (id, kind) in touched {
            match kind {
                ObjectKind::Exit(direction) => match self.traverse(direction) {
                    // The rest of the touched objects belong to the
                    // departed floor.
                    Ok(()) => break,
                    Err(SessionError::Navigation(e)) => self.messages.push(e.to_string(), now),
                    Err(e) => return Err(e),
                },
                ObjectKind::Treasure => {
                    self.collect(id, &name, "You found some treasure!", |p| p.treasure += 1)?;
                }
                ObjectKind::Key => {
                    self.collect(id, &name, "You found a key!", |p| p.keys += 1)?;
                }
                ObjectKind::BossKey => {
                    self.collect(id, &name, "You found a boss key!", |p| p.boss_keys += 1)?;
                }
                ObjectKind::TreasureChest => {
                    if self.spend_key(&name)? {
                        self.collect(id, &name, "You opened the chest!", |_| {})?;
                    } else {
                        self.messages.push("You don't have a key.", now);
                    }
                }
                ObjectKind::Door => {
                    if self.spend_key(&name)? {
                        let floor = self
                            .floors
                            .get_mut(&self.current_floor)
                            .ok_or(SessionError::UnknownFloor(self.current_floor))?;
                        floor.swap_object(id, ObjectKind::DoorOpen, &mut self.registry)?;
                        self.messages
                            .push("You opened the door with a key!", now);
                    } else {
                        self.messages.push("The door is locked!", now);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Traversal entry point for free-form direction strings (console
    /// input). Empty or unrecognized strings are refused as
    /// [`NavigationError::InvalidDirection`].
    pub fn check_exit(&mut self, direction: &str) -> Result<(), SessionError> {
        let trimmed = direction.trim();
        if trimmed.is_empty() {
            return Err(NavigationError::InvalidDirection(String::new()).into());
        }
        let direction = Direction::parse(trimmed)
            .ok_or_else(|| NavigationError::InvalidDirection(trimmed.to_string()))?;
        self.traverse(direction)
    }

    /// Validate and perform a floor switch: look up the outgoing link,
    /// refuse absent or locked ones, then move the player to the
    /// destination floor, entering beside the reverse-direction marker.
    fn traverse(&mut self, direction: Direction) -> Result<(), SessionError> {
        let (to, description) = {
            let link = self
                .graph
                .traverse(self.current_floor, direction)
                .map_err(SessionError::Navigation)?;
            (link.to, link.description.clone())
        };
        if !self.floors.contains_key(&to) {
            return Err(SessionError::UnknownFloor(to));
        }

        let name = self.player_name.clone().ok_or(SessionError::NoPlayer)?;
        let player = self
            .floors
            .get_mut(&self.current_floor)
            .ok_or(SessionError::UnknownFloor(self.current_floor))?
            .take_player(&name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.clone()))?;

        info!(
            from = %self.current_floor,
            %to,
            %direction,
            player = %name,
            "floor switch"
        );

        self.current_floor = to;
        self.floors
            .get_mut(&to)
            .ok_or(SessionError::UnknownFloor(to))?
            .add_player(player, Some(direction.opposite()));

        self.messages
            .push(format!("You go {direction} {description}..."), self.tick_count);
        Ok(())
    }

    /// Remove a touched pickup and apply its inventory effect.
    fn collect(
        &mut self,
        id: ObjectId,
        name: &str,
        message: &str,
        effect: impl FnOnce(&mut Player),
    ) -> Result<(), SessionError> {
        let floor = self
            .floors
            .get_mut(&self.current_floor)
            .ok_or(SessionError::UnknownFloor(self.current_floor))?;
        if floor.remove_object(id).is_none() {
            return Ok(());
        }
        let player = floor
            .player_mut(name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.to_string()))?;
        effect(player);
        self.messages.push(message, self.tick_count);
        Ok(())
    }

    /// Consume one ordinary key if the player holds any.
    fn spend_key(&mut self, name: &str) -> Result<bool, SessionError> {
        let player = self
            .floors
            .get_mut(&self.current_floor)
            .ok_or(SessionError::UnknownFloor(self.current_floor))?
            .player_mut(name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.to_string()))?;
        if player.keys == 0 {
            return Ok(false);
        }
        player.keys -= 1;
        Ok(true)
    }
}
