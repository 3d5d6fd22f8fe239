//! Prototype and floor construction from tabular rows.
//!
//! Layout grids place one prototype copy per non-blank cell, on a fixed
//! tile pitch. Rows for one floor arrive consecutively; the y cursor
//! resets whenever the floor id or the layer changes, so each layer is
//! its own grid over the same ground area.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::FloorId;
use crate::floor::Floor;
use crate::objects::{ContentRegistry, ObjectKind, ObjectPrototype};

use super::error::ContentLoadError;
use super::rows::{parse_strict_flag, LayoutRow, PrototypeRow};

/// Tile pitch of layout grids, in pixels.
pub const TILE_WIDTH: i32 = 32;
pub const TILE_DEPTH: i32 = 32;

/// Cells that place nothing.
const EMPTY_CELLS: [char; 2] = [' ', '_'];

/// Load prototype rows into a registry.
pub fn load_prototypes(
    registry: &mut ContentRegistry,
    rows: &[PrototypeRow],
) -> Result<(), ContentLoadError> {
    for row in rows {
        let kind = ObjectKind::parse(&row.kind).ok_or_else(|| {
            ContentLoadError::MalformedRow(format!("unknown kind '{}'", row.kind))
        })?;

        let mut proto = ObjectPrototype::new(kind, row.name.clone(), row.width, row.depth)
            .with_solid(parse_strict_flag(&row.solid, "solid")?)
            .with_visible(parse_strict_flag(&row.visible, "visible")?)
            .with_interactable(parse_strict_flag(&row.interactable, "interactable")?);
        if let Some(height) = row.height {
            proto = proto.with_height(height);
        }

        info!(code = %row.code, name = %proto.name, "loaded object prototype");
        registry.register(row.code, proto);
    }
    Ok(())
}

/// Build floors from layout rows, instantiating a prototype copy for
/// every non-blank cell.
pub fn build_floors(
    registry: &mut ContentRegistry,
    rows: &[LayoutRow],
) -> Result<FxHashMap<FloorId, Floor>, ContentLoadError> {
    let mut floors: FxHashMap<FloorId, Floor> = FxHashMap::default();
    let mut current: Option<(FloorId, i32)> = None;
    let mut y = 0;

    for row in rows {
        let floor_id = FloorId::new(row.floor_id);
        if current.map(|(id, _)| id) != Some(floor_id) {
            floors.entry(floor_id).or_insert_with(|| {
                let mut floor = Floor::new(floor_id, row.name.clone());
                if !row.skin.is_empty() {
                    floor = floor.with_skin(row.skin.clone());
                }
                floor
            });
            current = Some((floor_id, row.layer));
            y = 0;
        } else if current.map(|(_, layer)| layer) != Some(row.layer) {
            current = Some((floor_id, row.layer));
            y = 0;
        }

        let floor = floors
            .get_mut(&floor_id)
            .expect("floor inserted just above");

        for (x, code) in row.cells.chars().enumerate() {
            if EMPTY_CELLS.contains(&code) {
                continue;
            }
            let mut object = registry.instantiate(code)?;
            object.layer = row.layer;
            object.set_pos(x as i32 * TILE_WIDTH, y * TILE_DEPTH);
            floor.add_object(object);
        }
        y += 1;
    }

    for floor in floors.values() {
        info!(%floor, "built floor");
    }
    Ok(floors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn prototype_rows() -> Vec<PrototypeRow> {
        let strict = |kind: &str, code: char, solid: &str| PrototypeRow {
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
        vec![
            strict("wall", '#', "TRUE"),
            strict("treasure", 'T', "FALSE"),
            strict("west", 'W', "FALSE"),
        ]
    }

    #[test]
    fn test_load_prototypes_registers_by_code() {
        let mut registry = ContentRegistry::new();
        load_prototypes(&mut registry, &prototype_rows()).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get('#').unwrap().kind, ObjectKind::Wall);
        assert_eq!(
            registry.get('W').unwrap().kind,
            ObjectKind::Exit(Direction::West)
        );
    }

    #[test]
    fn test_load_prototypes_rejects_unknown_kind() {
        let mut registry = ContentRegistry::new();
        let mut rows = prototype_rows();
        rows[0].kind = "slime".to_string();
        let err = load_prototypes(&mut registry, &rows).unwrap_err();
        assert!(matches!(err, ContentLoadError::MalformedRow(_)));
    }

    fn layout_row(floor_id: u32, layer: i32, cells: &str) -> LayoutRow {
        LayoutRow {
            floor_id,
            name: "dungeon".to_string(),
            skin: String::new(),
            layer,
            cells: cells.to_string(),
        }
    }

    #[test]
    fn test_build_floors_places_on_tile_pitch() {
        let mut registry = ContentRegistry::new();
        load_prototypes(&mut registry, &prototype_rows()).unwrap();

        let floors = build_floors(
            &mut registry,
            &[layout_row(1, 1, "#__T#"), layout_row(1, 1, "#   #")],
        )
        .unwrap();

        let floor = &floors[&FloorId::new(1)];
        assert_eq!(floor.object_count(), 5);

        let treasure = floor
            .iter_objects()
            .find(|o| o.kind == ObjectKind::Treasure)
            .unwrap();
        assert_eq!(treasure.pos(), (3 * TILE_WIDTH, 0));

        let second_row_walls: Vec<_> = floor
            .iter_objects()
            .filter(|o| o.rect().y == TILE_DEPTH)
            .map(|o| o.rect().x)
            .collect();
        assert_eq!(second_row_walls, vec![0, 4 * TILE_WIDTH]);
    }

    #[test]
    fn test_build_floors_resets_y_per_layer_and_floor() {
        let mut registry = ContentRegistry::new();
        load_prototypes(&mut registry, &prototype_rows()).unwrap();

        let floors = build_floors(
            &mut registry,
            &[
                layout_row(1, 0, "#"),
                layout_row(1, 0, "#"),
                layout_row(1, 1, "T"),
                layout_row(2, 1, "#"),
            ],
        )
        .unwrap();

        let floor1 = &floors[&FloorId::new(1)];
        // Layer 1 restarted its y cursor at the top of the floor.
        let treasure = floor1
            .iter_objects()
            .find(|o| o.kind == ObjectKind::Treasure)
            .unwrap();
        assert_eq!(treasure.pos(), (0, 0));
        assert_eq!(treasure.layer, 1);

        assert_eq!(floors[&FloorId::new(2)].object_count(), 1);
    }

    #[test]
    fn test_build_floors_unknown_code_is_fatal() {
        let mut registry = ContentRegistry::new();
        load_prototypes(&mut registry, &prototype_rows()).unwrap();

        let err = build_floors(&mut registry, &[layout_row(1, 1, "#?#")]).unwrap_err();
        assert_eq!(err, ContentLoadError::UnknownCode('?'));
    }
}
