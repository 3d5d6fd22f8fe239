//! Directed links between floor locations.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, FloorId};

/// A directed, optionally lockable/hidden edge between two floors.
///
/// Links are registered per "from" location under one canonical
/// direction. A reversible link causes the graph to synthesize a mirror
/// record at the destination; the two records are independent entities
/// with no shared backing state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLink {
    pub from: FloorId,
    pub to: FloorId,
    pub direction: Direction,
    /// Human-readable travel description ("along the dark corridor").
    pub description: String,
    /// Whether the locked flag is honored at all.
    pub is_lockable: bool,
    /// Stored lock state; only meaningful when `is_lockable`.
    pub locked: bool,
    /// Why travel is refused while locked.
    pub locked_description: Option<String>,
    /// Whether adding this link also creates the mirror record.
    pub reversible: bool,
    /// Hidden links exist but are not advertised.
    pub hidden: bool,
}

impl MapLink {
    /// Create a plain reversible, unlockable, unhidden link.
    #[must_use]
    pub fn new(
        from: FloorId,
        to: FloorId,
        direction: Direction,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            direction,
            description: description.into(),
            is_lockable: false,
            locked: false,
            locked_description: None,
            reversible: true,
            hidden: false,
        }
    }

    /// Make the link lockable, with its initial lock state and the
    /// message shown when travel is refused.
    #[must_use]
    pub fn lockable(mut self, locked: bool, locked_description: impl Into<String>) -> Self {
        self.is_lockable = true;
        self.locked = locked;
        self.locked_description = Some(locked_description.into());
        self
    }

    /// Make the link one-way (no mirror record is synthesized).
    #[must_use]
    pub fn one_way(mut self) -> Self {
        self.reversible = false;
        self
    }

    /// Hide the link from direction listings.
    #[must_use]
    pub fn concealed(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Whether travel is currently refused. Lockability gates the stored
    /// flag: a link that is not lockable is never locked, irrespective of
    /// the stored value.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.is_lockable && self.locked
    }

    /// Set the stored lock state.
    pub fn lock(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Whether the link is hidden from listings.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set the hidden state.
    pub fn hide(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The mirror record: ids swapped, direction opposed, same
    /// descriptive/lock metadata. The mirror's own `reversible` flag is
    /// cleared, so mirroring is exactly one level deep.
    #[must_use]
    pub fn reversed(&self) -> MapLink {
        MapLink {
            from: self.to,
            to: self.from,
            direction: self.direction.opposite(),
            description: self.description.clone(),
            is_lockable: self.is_lockable,
            locked: self.locked,
            locked_description: self.locked_description.clone(),
            reversible: false,
            hidden: self.hidden,
        }
    }
}

impl std::fmt::Display for MapLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Go {} from {} {} to {}.",
            self.direction, self.from, self.description, self.to
        )?;
        if self.is_locked() {
            if let Some(reason) = &self.locked_description {
                write!(f, " {reason}")?;
            }
        }
        if self.hidden {
            write!(f, " (hidden)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> MapLink {
        MapLink::new(FloorId::new(1), FloorId::new(2), Direction::East, "through the arch")
    }

    #[test]
    fn test_lockability_gates_the_locked_flag() {
        let mut l = link();
        l.lock(true);
        // Not lockable, so the stored flag is never honored.
        assert!(!l.is_locked());

        let mut l = link().lockable(false, "The gate is barred.");
        assert!(!l.is_locked());
        l.lock(true);
        assert!(l.is_locked());
        l.lock(false);
        assert!(!l.is_locked());
    }

    #[test]
    fn test_reversed_swaps_endpoints_and_direction() {
        let l = link().lockable(true, "The gate is barred.");
        let r = l.reversed();

        assert_eq!(r.from, FloorId::new(2));
        assert_eq!(r.to, FloorId::new(1));
        assert_eq!(r.direction, Direction::West);
        assert_eq!(r.description, l.description);
        assert!(r.is_lockable);
        assert!(r.locked);
        assert_eq!(r.locked_description, l.locked_description);
        assert!(!r.reversible);
    }

    #[test]
    fn test_one_way_and_concealed() {
        let l = link().one_way().concealed();
        assert!(!l.reversible);
        assert!(l.is_hidden());
    }
}
