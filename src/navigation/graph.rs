//! The directed navigation graph over floor locations.
//!
//! `NavigationGraph` stores, per location, the ordered list of outgoing
//! [`MapLink`]s. Topology is immutable after load; lock and hidden flags
//! mutate during play.
//!
//! ## Mirroring
//!
//! Adding a reversible link also inserts a mirror record at the
//! destination. The forward and mirror links are independent records, so
//! lock updates are an explicit two-sided operation.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{Direction, FloorId};

use super::link::MapLink;

/// Recoverable traversal failures, surfaced to the player as short
/// messages. The simulation continues unaffected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// The direction string was empty or outside the canonical set.
    InvalidDirection(String),
    /// No outgoing link in that direction from the current location.
    NoSuchLink(Direction),
    /// The link exists but is locked; carries the descriptive refusal.
    Locked(String),
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::InvalidDirection(s) if s.is_empty() => {
                write!(f, "You need to specify a direction e.g. NORTH")
            }
            NavigationError::InvalidDirection(s) => {
                write!(f, "'{s}' is not a valid direction")
            }
            NavigationError::NoSuchLink(d) => write!(f, "You can't go {d} from here!"),
            NavigationError::Locked(reason) => write!(f, "You can't go that way - {reason}"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Directed multigraph of floor locations keyed by canonical direction.
#[derive(Clone, Debug, Default)]
pub struct NavigationGraph {
    links: FxHashMap<FloorId, Vec<MapLink>>,
}

impl NavigationGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a link under its "from" location. If the link is
    /// reversible, a mirror record (with its own `reversible` flag
    /// cleared) is synthesized and registered at the destination, so
    /// mirroring is exactly one level deep.
    pub fn add_link(&mut self, link: MapLink) {
        debug!(%link, "adding map link");

        if link.reversible {
            let mirror = link.reversed();
            self.links.entry(mirror.from).or_default().push(mirror);
        }
        self.links.entry(link.from).or_default().push(link);
    }

    /// The outgoing links from a location, in registration order.
    #[must_use]
    pub fn links_from(&self, location: FloorId) -> &[MapLink] {
        self.links.get(&location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The outgoing link from a location in one direction, if any.
    #[must_use]
    pub fn link(&self, location: FloorId, direction: Direction) -> Option<&MapLink> {
        self.links_from(location)
            .iter()
            .find(|l| l.direction == direction)
    }

    /// Unhidden outgoing directions from a location, for display.
    pub fn available_directions(&self, location: FloorId) -> impl Iterator<Item = Direction> + '_ {
        self.links_from(location)
            .iter()
            .filter(|l| !l.is_hidden())
            .map(|l| l.direction)
    }

    /// Number of locations with at least one outgoing link.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.links.len()
    }

    /// Lock or unlock the outgoing link from `location` in `direction`,
    /// and separately the matching reverse record at the destination.
    ///
    /// The forward and mirror links have no shared backing state, so both
    /// records are updated explicitly. If no outgoing link exists in that
    /// direction, a warning is logged and nothing changes.
    pub fn lock(&mut self, location: FloorId, direction: Direction, locked: bool) {
        let Some((to, reverse_direction)) = self
            .links
            .get_mut(&location)
            .and_then(|links| links.iter_mut().find(|l| l.direction == direction))
            .map(|l| {
                l.lock(locked);
                (l.to, l.direction.opposite())
            })
        else {
            warn!(%location, %direction, locked, "no link to lock");
            return;
        };

        if let Some(links) = self.links.get_mut(&to) {
            for l in links
                .iter_mut()
                .filter(|l| l.to == location && l.direction == reverse_direction)
            {
                l.lock(locked);
            }
        }
    }

    /// The traversal check: look up the outgoing link and refuse travel
    /// when it is absent or locked.
    pub fn traverse(
        &self,
        location: FloorId,
        direction: Direction,
    ) -> Result<&MapLink, NavigationError> {
        let link = self
            .link(location, direction)
            .ok_or(NavigationError::NoSuchLink(direction))?;

        if link.is_locked() {
            let reason = link
                .locked_description
                .clone()
                .unwrap_or_else(|| "it is locked".to_string());
            return Err(NavigationError::Locked(reason));
        }

        Ok(link)
    }
}
