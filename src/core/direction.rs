//! Canonical travel directions.
//!
//! The world uses a fixed six-direction vocabulary: the four compass
//! directions plus up/down for staircases and ladders. Every map link and
//! exit marker speaks this vocabulary; free-form direction strings only
//! exist at the content and input boundaries, where [`Direction::parse`]
//! converts them (or rejects them).

use serde::{Deserialize, Serialize};

/// One of the six canonical travel directions.
///
/// ```
/// use rust_trpg::core::Direction;
///
/// assert_eq!(Direction::East.opposite(), Direction::West);
/// assert_eq!(Direction::parse("north"), Some(Direction::North));
/// assert_eq!(Direction::parse("sideways"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// All six directions, in a fixed order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// The fixed bijection onto the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Parse a direction string, case-insensitively.
    ///
    /// Returns `None` for anything outside the canonical set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Direction> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.as_str()))
    }

    /// Upper-case name, as used in content tables and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
