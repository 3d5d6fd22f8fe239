//! Content pipeline tests: row deserialization and end-to-end world
//! construction.

use rust_trpg::content::{
    build_floors, load_links, load_prototypes, LayoutRow, LinkRow, PrototypeRow,
};
use rust_trpg::core::{Direction, FloorId};
use rust_trpg::objects::{ContentRegistry, ObjectKind};
use rust_trpg::session::GameSession;

/// Link rows arrive from tabular files; omitted flag columns must
/// deserialize as blanks and then take the documented defaults.
#[test]
fn test_link_row_deserializes_with_blank_flags() {
    let row: LinkRow = serde_json::from_str(
        r#"{"from": 1, "to": 2, "direction": "EAST", "description": "along the corridor"}"#,
    )
    .unwrap();

    assert!(row.lockable.is_empty());
    assert!(row.reversible.is_empty());

    let graph = load_links(&[row]).unwrap();
    let link = graph.link(FloorId::new(1), Direction::East).unwrap();
    assert!(!link.is_lockable);
    assert!(link.reversible);
    assert!(!link.hidden);
}

#[test]
fn test_prototype_row_deserializes_with_default_height() {
    let row: PrototypeRow = serde_json::from_str(
        r##"{
            "code": "#",
            "name": "wall",
            "kind": "wall",
            "width": 32,
            "depth": 32,
            "solid": "TRUE",
            "visible": "TRUE",
            "interactable": "FALSE"
        }"##,
    )
    .unwrap();
    assert_eq!(row.height, None);

    let mut registry = ContentRegistry::new();
    load_prototypes(&mut registry, &[row]).unwrap();
    let proto = registry.get('#').unwrap();
    assert_eq!(proto.height, 32);
    assert!(!proto.interactable);
}

#[test]
fn test_prototype_row_rejects_loose_flag_tokens() {
    let mut registry = ContentRegistry::new();
    let row = PrototypeRow {
        code: '#',
        name: "wall".to_string(),
        kind: "wall".to_string(),
        width: 32,
        depth: 32,
        height: None,
        solid: "yes".to_string(),
        visible: "TRUE".to_string(),
        interactable: "TRUE".to_string(),
    };
    assert!(load_prototypes(&mut registry, &[row]).is_err());
}

/// The whole pipeline: prototypes, layouts, and links into a running
/// session.
#[test]
fn test_world_builds_end_to_end() {
    let proto = |code: char, kind: &str, solid: &str| PrototypeRow {
        code,
        name: kind.to_string(),
        kind: kind.to_string(),
        width: 32,
        depth: 32,
        height: None,
        solid: solid.to_string(),
        visible: "TRUE".to_string(),
        interactable: "TRUE".to_string(),
    };
    let layout = |floor_id: u32, layer: i32, cells: &str| LayoutRow {
        floor_id,
        name: format!("floor {floor_id}"),
        skin: "dungeon".to_string(),
        layer,
        cells: cells.to_string(),
    };

    let mut registry = ContentRegistry::new();
    load_prototypes(
        &mut registry,
        &[
            proto('#', "wall", "TRUE"),
            proto('g', "grass", "FALSE"),
            proto('P', "player", "TRUE"),
            proto('U', "up", "FALSE"),
            proto('d', "down", "FALSE"),
        ],
    )
    .unwrap();

    let floors = build_floors(
        &mut registry,
        &[
            // Ground scenery on layer 0, structure on layer 1.
            layout(1, 0, "ggg"),
            layout(1, 0, "ggg"),
            layout(1, 1, "# U"),
            layout(2, 1, "# d"),
        ],
    )
    .unwrap();

    assert_eq!(floors.len(), 2);
    let floor1 = &floors[&FloorId::new(1)];
    assert_eq!(floor1.skin_name, "dungeon");
    assert_eq!(floor1.object_count(), 8);
    assert_eq!(floor1.layer_ids().collect::<Vec<_>>(), vec![0, 1]);
    assert!(floor1.exit_marker(Direction::Up).is_some());

    let graph = load_links(&[LinkRow {
        from: 1,
        to: 2,
        direction: "UP".to_string(),
        description: "up the ladder".to_string(),
        lockable: String::new(),
        locked: String::new(),
        locked_description: String::new(),
        reversible: String::new(),
        hidden: String::new(),
    }])
    .unwrap();

    let mut session = GameSession::new("quest", registry, floors, graph, FloorId::new(1)).unwrap();
    let player = session.create_player("keith").unwrap();
    session.add_player(player).unwrap();
    session.start().unwrap();

    // Ride the ladder up: the DOWN marker on floor 2 is the entrance.
    session.check_exit("up").unwrap();
    assert_eq!(session.current_floor_id(), FloorId::new(2));
    let marker = session
        .current_floor()
        .exit_marker(Direction::Down)
        .unwrap()
        .rect();
    let player = session.player().unwrap();
    assert_eq!(
        player.body.rect().center(),
        marker.center(),
        "stair entries land centered on the marker"
    );
}
