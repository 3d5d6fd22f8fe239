//! Axis-separated movement resolution tests.
//!
//! These verify the floor's collision-response contract:
//! - each axis of a displacement is resolved and reverted independently
//! - the floor bounding rect confines the player
//! - swaps preserve position while changing identity
//! - touch queries honor the visibility/interactability gates

use rust_trpg::core::{FloorId, ObjectId, Rect};
use rust_trpg::floor::Floor;
use rust_trpg::objects::{ContentRegistry, ObjectKind, ObjectPrototype, Player, SpatialObject};

fn wall(id: u32, x: i32, y: i32) -> SpatialObject {
    SpatialObject::new(
        ObjectId::new(id),
        ObjectKind::Wall,
        "wall",
        Rect::new(x, y, 32, 32),
    )
}

fn player_at(x: i32, y: i32) -> Player {
    let body = SpatialObject::new(
        ObjectId::new(1000),
        ObjectKind::Player,
        "player",
        Rect::new(x, y, 32, 32),
    );
    Player::new("keith", body)
}

/// A 6x6-tile arena (bounds 0..192) with walls pinned at two corners to
/// stretch the bounding rect, plus whatever obstacles a test adds.
fn arena() -> Floor {
    let mut floor = Floor::new(FloorId::new(1), "arena");
    floor.add_object(wall(1, 0, 0));
    floor.add_object(wall(2, 160, 160));
    floor
}

/// Diagonal movement into an east wall and a south wall blocks both axes.
#[test]
fn test_diagonal_into_corner_blocks_both_axes() {
    let mut floor = arena();
    floor.add_object(wall(10, 96, 64)); // directly east of the player
    floor.add_object(wall(11, 64, 96)); // directly south of the player

    floor.add_player(player_at(0, 0), None);
    floor.player_mut("keith").unwrap().body.set_pos(64, 64);

    floor.move_player("keith", 4, 4).unwrap();
    assert_eq!(floor.player("keith").unwrap().body.pos(), (64, 64));
}

/// With only an east obstruction, dx is reverted but dy applies in full -
/// the axes are independent.
#[test]
fn test_blocked_x_still_slides_on_y() {
    let mut floor = arena();
    floor.add_object(wall(10, 96, 64));

    floor.add_player(player_at(0, 0), None);
    floor.player_mut("keith").unwrap().body.set_pos(64, 64);

    floor.move_player("keith", 4, 4).unwrap();
    assert_eq!(floor.player("keith").unwrap().body.pos(), (64, 68));
}

/// An unobstructed diagonal applies both axes.
#[test]
fn test_free_diagonal_applies_both_axes() {
    let mut floor = arena();
    floor.add_player(player_at(0, 0), None);
    floor.player_mut("keith").unwrap().body.set_pos(64, 64);

    floor.move_player("keith", -4, 6).unwrap();
    assert_eq!(floor.player("keith").unwrap().body.pos(), (60, 70));
}

/// The floor bounding rect confines the player per axis.
#[test]
fn test_bounds_confine_per_axis() {
    let mut floor = arena();
    floor.add_player(player_at(0, 0), None);
    floor.player_mut("keith").unwrap().body.set_pos(0, 64);

    // x would leave the bounds, y would not.
    floor.move_player("keith", -4, 4).unwrap();
    assert_eq!(floor.player("keith").unwrap().body.pos(), (0, 68));
}

/// Non-solid objects never block movement.
#[test]
fn test_non_solid_objects_do_not_block() {
    let mut floor = arena();
    let mut treasure = SpatialObject::new(
        ObjectId::new(10),
        ObjectKind::Treasure,
        "treasure",
        Rect::new(96, 64, 32, 32),
    );
    treasure.solid = false;
    floor.add_object(treasure);

    floor.add_player(player_at(0, 0), None);
    floor.player_mut("keith").unwrap().body.set_pos(64, 64);

    floor.move_player("keith", 4, 0).unwrap();
    assert_eq!(floor.player("keith").unwrap().body.pos(), (68, 64));
}

/// Swapping produces a new instance at the old object's exact position,
/// and the old identity disappears from the layer list.
#[test]
fn test_swap_preserves_position_and_replaces_identity() {
    let mut registry = ContentRegistry::new();
    registry.register(
        'o',
        ObjectPrototype::new(ObjectKind::DoorOpen, "open door", 32, 32).with_solid(false),
    );

    let mut floor = arena();
    let door = SpatialObject::new(
        ObjectId::new(10),
        ObjectKind::Door,
        "door",
        Rect::new(96, 64, 32, 32),
    );
    floor.add_object(door);

    let new_id = floor
        .swap_object(ObjectId::new(10), ObjectKind::DoorOpen, &mut registry)
        .unwrap();

    assert!(floor.object(ObjectId::new(10)).is_none());
    let swapped = floor.object(new_id).unwrap();
    assert_eq!(swapped.kind, ObjectKind::DoorOpen);
    assert_eq!(swapped.pos(), (96, 64));
}

/// Touch queries exclude geometrically overlapping candidates that are
/// invisible or non-interactable.
#[test]
fn test_touching_objects_honors_capability_gates() {
    let mut floor = arena();

    let mut hidden = SpatialObject::new(
        ObjectId::new(10),
        ObjectKind::Key,
        "key",
        Rect::new(70, 64, 32, 32),
    );
    hidden.solid = false;
    hidden.visible = false;
    floor.add_object(hidden);

    let mut inert = SpatialObject::new(
        ObjectId::new(11),
        ObjectKind::Key,
        "key",
        Rect::new(64, 70, 32, 32),
    );
    inert.solid = false;
    inert.interactable = false;
    floor.add_object(inert);

    let mut live = SpatialObject::new(
        ObjectId::new(12),
        ObjectKind::Key,
        "key",
        Rect::new(70, 70, 32, 32),
    );
    live.solid = false;
    floor.add_object(live);

    let probe = SpatialObject::new(
        ObjectId::new(99),
        ObjectKind::Player,
        "probe",
        Rect::new(64, 64, 32, 32),
    );
    let hits = floor.touching_objects(&probe);
    assert_eq!(hits.as_slice(), &[ObjectId::new(12)]);
}

/// Query results follow the maintained (layer, y) order, so repeated
/// scans of an unchanged floor report identical sequences.
#[test]
fn test_query_order_is_deterministic() {
    let mut floor = arena();
    for (i, y) in [(10u32, 96), (11, 32), (12, 64)] {
        let mut o = SpatialObject::new(
            ObjectId::new(i),
            ObjectKind::Grass,
            "grass",
            Rect::new(64, y, 32, 32),
        );
        o.solid = false;
        floor.add_object(o);
    }

    let probe = SpatialObject::new(
        ObjectId::new(99),
        ObjectKind::Player,
        "probe",
        Rect::new(64, 0, 32, 160),
    );
    let first = floor.colliding_objects(&probe);
    let second = floor.colliding_objects(&probe);
    assert_eq!(first, second);
    assert_eq!(
        first.as_slice(),
        &[ObjectId::new(11), ObjectId::new(12), ObjectId::new(10)]
    );
}
