//! Navigation graph construction from link-table rows.

use tracing::info;

use crate::core::{Direction, FloorId};
use crate::navigation::{MapLink, NavigationGraph};

use super::error::ContentLoadError;
use super::rows::{parse_flag, LinkRow};

/// Build a navigation graph from link rows.
///
/// Flag columns default to lockable=false, locked=false, reversible=true,
/// hidden=false when blank; unrecognized tokens load as false with a
/// logged warning. A direction outside the canonical set aborts loading.
pub fn load_links(rows: &[LinkRow]) -> Result<NavigationGraph, ContentLoadError> {
    let mut graph = NavigationGraph::new();

    for row in rows {
        let direction = Direction::parse(&row.direction)
            .ok_or_else(|| ContentLoadError::InvalidDirection(row.direction.clone()))?;

        let mut link = MapLink::new(
            FloorId::new(row.from),
            FloorId::new(row.to),
            direction,
            row.description.clone(),
        );
        link.is_lockable = parse_flag(&row.lockable, false, "lockable");
        link.locked = parse_flag(&row.locked, false, "locked");
        link.reversible = parse_flag(&row.reversible, true, "reversible");
        link.hidden = parse_flag(&row.hidden, false, "hidden");
        let locked_description = row.locked_description.trim();
        if !locked_description.is_empty() {
            link.locked_description = Some(locked_description.to_string());
        }

        info!(from = %link.from, to = %link.to, %direction, "loaded map link");
        graph.add_link(link);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(direction: &str) -> LinkRow {
        LinkRow {
            from: 1,
            to: 2,
            direction: direction.to_string(),
            description: "along the corridor".to_string(),
            lockable: String::new(),
            locked: String::new(),
            locked_description: String::new(),
            reversible: String::new(),
            hidden: String::new(),
        }
    }

    #[test]
    fn test_blank_flags_take_defaults() {
        let graph = load_links(&[row("EAST")]).unwrap();
        let link = graph.link(FloorId::new(1), Direction::East).unwrap();

        assert!(!link.is_lockable);
        assert!(!link.locked);
        assert!(link.reversible);
        assert!(!link.hidden);
        // reversible default produced the mirror
        assert!(graph.link(FloorId::new(2), Direction::West).is_some());
    }

    #[test]
    fn test_explicit_flags_are_honored() {
        let mut r = row("UP");
        r.lockable = "TRUE".to_string();
        r.locked = "true".to_string();
        r.locked_description = "A grate blocks the stairs.".to_string();
        r.reversible = "FALSE".to_string();

        let graph = load_links(&[r]).unwrap();
        let link = graph.link(FloorId::new(1), Direction::Up).unwrap();
        assert!(link.is_locked());
        assert_eq!(
            link.locked_description.as_deref(),
            Some("A grate blocks the stairs.")
        );
        assert!(graph.links_from(FloorId::new(2)).is_empty());
    }

    #[test]
    fn test_unrecognized_flag_token_loads_as_false() {
        let mut r = row("EAST");
        r.reversible = "maybe".to_string();

        let graph = load_links(&[r]).unwrap();
        assert!(!graph.link(FloorId::new(1), Direction::East).unwrap().reversible);
        assert!(graph.links_from(FloorId::new(2)).is_empty());
    }

    #[test]
    fn test_bad_direction_aborts_loading() {
        let err = load_links(&[row("SIDEWAYS")]).unwrap_err();
        assert_eq!(err, ContentLoadError::InvalidDirection("SIDEWAYS".to_string()));
    }
}
