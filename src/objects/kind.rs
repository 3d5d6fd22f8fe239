//! Object kind vocabulary.
//!
//! Each placed object carries an enumerated kind tag instead of a class
//! hierarchy. The session matches on the kind to decide touch effects
//! (pickups, doors, exits); everything else about an object's behavior is
//! expressed through its capability flags (solid/visible/interactable).

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// The logical kind of a placed object.
///
/// `Exit(direction)` marks the tiles that trigger floor traversal; the
/// remaining variants cover scenery, pickups, and openable obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Player,
    Wall,
    Grass,
    Tile,
    Tree,
    Crate,
    Bush,
    Treasure,
    TreasureChest,
    Door,
    DoorOpen,
    Key,
    BossKey,
    Trap,
    Boss,
    /// Exit marker: touching it attempts travel in the given direction.
    Exit(Direction),
}

impl ObjectKind {
    /// The travel direction for exit markers, `None` for everything else.
    #[must_use]
    pub const fn exit_direction(self) -> Option<Direction> {
        match self {
            ObjectKind::Exit(d) => Some(d),
            _ => None,
        }
    }

    /// True for closed doors that a key can open.
    #[must_use]
    pub const fn is_door(self) -> bool {
        matches!(self, ObjectKind::Door)
    }

    /// Parse a kind from its content-table name, case-insensitively.
    ///
    /// The six canonical direction names parse as exit markers.
    #[must_use]
    pub fn parse(s: &str) -> Option<ObjectKind> {
        if let Some(d) = Direction::parse(s) {
            return Some(ObjectKind::Exit(d));
        }
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "player" => ObjectKind::Player,
            "wall" => ObjectKind::Wall,
            "grass" => ObjectKind::Grass,
            "tile" => ObjectKind::Tile,
            "tree" => ObjectKind::Tree,
            "crate" => ObjectKind::Crate,
            "bush" => ObjectKind::Bush,
            "treasure" => ObjectKind::Treasure,
            "treasure chest" => ObjectKind::TreasureChest,
            "door" => ObjectKind::Door,
            "open door" => ObjectKind::DoorOpen,
            "key" => ObjectKind::Key,
            "boss key" => ObjectKind::BossKey,
            "trap" => ObjectKind::Trap,
            "boss" => ObjectKind::Boss,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectKind::Player => "player",
            ObjectKind::Wall => "wall",
            ObjectKind::Grass => "grass",
            ObjectKind::Tile => "tile",
            ObjectKind::Tree => "tree",
            ObjectKind::Crate => "crate",
            ObjectKind::Bush => "bush",
            ObjectKind::Treasure => "treasure",
            ObjectKind::TreasureChest => "treasure chest",
            ObjectKind::Door => "door",
            ObjectKind::DoorOpen => "open door",
            ObjectKind::Key => "key",
            ObjectKind::BossKey => "boss key",
            ObjectKind::Trap => "trap",
            ObjectKind::Boss => "boss",
            ObjectKind::Exit(d) => return write!(f, "{}", d.as_str().to_ascii_lowercase()),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions_as_exits() {
        assert_eq!(
            ObjectKind::parse("north"),
            Some(ObjectKind::Exit(Direction::North))
        );
        assert_eq!(
            ObjectKind::parse("DOWN"),
            Some(ObjectKind::Exit(Direction::Down))
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(ObjectKind::parse("treasure chest"), Some(ObjectKind::TreasureChest));
        assert_eq!(ObjectKind::parse("Boss Key"), Some(ObjectKind::BossKey));
        assert_eq!(ObjectKind::parse("slime"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [
            ObjectKind::Player,
            ObjectKind::TreasureChest,
            ObjectKind::DoorOpen,
            ObjectKind::Exit(Direction::West),
        ] {
            assert_eq!(ObjectKind::parse(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn test_exit_direction() {
        assert_eq!(
            ObjectKind::Exit(Direction::East).exit_direction(),
            Some(Direction::East)
        );
        assert_eq!(ObjectKind::Wall.exit_direction(), None);
    }
}
