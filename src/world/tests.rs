//! World domain: unit tests for level parsing and validation.

use bevy::math::Vec2;

use super::{map_to_world, DataLoadError, LevelDefinition, TileKind};

const PALETTE: &str = r#"
    palette: {
        '.': (kind: Floor),
        '#': (kind: Wall, color: (0.3, 0.3, 0.35)),
        'T': (kind: Object, image: Some("images/objects/tree.png")),
    },
"#;

fn level_text(tiles: &[&str], entities: &[&str]) -> String {
    let quote = |rows: &[&str]| {
        rows.iter()
            .map(|row| format!("\"{}\"", row))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "(name: \"test\", tile_size: 32.0, {} tiles: [{}], entities: [{}])",
        PALETTE,
        quote(tiles),
        quote(entities)
    )
}

#[test]
fn test_parse_valid_level() {
    let text = level_text(
        &["#####", "#.T.#", "#####"],
        &[".....", ".P.E.", "....."],
    );
    let level = LevelDefinition::from_ron("test.ron", &text).expect("valid level");

    assert_eq!(level.name, "test");
    assert_eq!((level.width, level.height), (5, 3));
    assert_eq!(level.tiles.len(), 15);
    assert_eq!(level.player_start, (1, 1));
    assert_eq!(level.enemy_spawns, vec![(3, 1)]);

    let tree = level
        .tiles
        .iter()
        .find(|tile| tile.grid_pos == (2, 1))
        .expect("tree tile");
    assert_eq!(tree.def.kind, TileKind::Object);
    assert!(tree.def.kind.is_solid());
    assert_eq!(tree.def.image.as_deref(), Some("images/objects/tree.png"));
}

#[test]
fn test_grid_to_world_flips_y() {
    let text = level_text(&["..", ".."], &["P.", ".."]);
    let level = LevelDefinition::from_ron("test.ron", &text).expect("valid level");

    assert_eq!(level.grid_to_map(1, 1), Vec2::new(48.0, 48.0));
    assert_eq!(level.grid_to_world(1, 1), Vec2::new(48.0, -48.0));
    assert_eq!(level.player_world_start(), Vec2::new(16.0, -16.0));
    assert_eq!(map_to_world(Vec2::new(1200.0, 1200.0)), Vec2::new(1200.0, -1200.0));
}

#[test]
fn test_entity_grid_size_mismatch() {
    let text = level_text(&["...", "..."], &["P.."]);
    let err = LevelDefinition::from_ron("test.ron", &text).unwrap_err();
    assert!(matches!(
        err,
        DataLoadError::GridMismatch {
            layer: "entities",
            expected_height: 2,
            actual_height: 1,
            ..
        }
    ));
}

#[test]
fn test_ragged_tile_row() {
    let text = level_text(&["...", ".."], &["P..", "..."]);
    let err = LevelDefinition::from_ron("test.ron", &text).unwrap_err();
    assert!(matches!(
        err,
        DataLoadError::GridMismatch {
            layer: "tiles",
            actual_width: 2,
            ..
        }
    ));
}

#[test]
fn test_unknown_tile_character() {
    let text = level_text(&["..", ".?"], &["P.", ".."]);
    let err = LevelDefinition::from_ron("test.ron", &text).unwrap_err();
    assert!(matches!(
        err,
        DataLoadError::UnknownPaletteEntry {
            layer: "tile",
            character: '?',
            x: 1,
            y: 1,
        }
    ));
}

#[test]
fn test_unknown_entity_character() {
    let text = level_text(&[".."], &["PX"]);
    let err = LevelDefinition::from_ron("test.ron", &text).unwrap_err();
    assert!(matches!(
        err,
        DataLoadError::UnknownPaletteEntry {
            layer: "entity",
            character: 'X',
            ..
        }
    ));
}

#[test]
fn test_player_start_required_and_unique() {
    let missing = level_text(&[".."], &["E."]);
    assert!(matches!(
        LevelDefinition::from_ron("test.ron", &missing).unwrap_err(),
        DataLoadError::MissingPlayerStart(name) if name == "test"
    ));

    let twice = level_text(&[".."], &["PP"]);
    assert!(matches!(
        LevelDefinition::from_ron("test.ron", &twice).unwrap_err(),
        DataLoadError::DuplicatePlayerStart { x: 1, y: 0 }
    ));
}

#[test]
fn test_parse_error_names_file() {
    let err = LevelDefinition::from_ron("broken.ron", "(name: 3)").unwrap_err();
    assert!(matches!(err, DataLoadError::ParseError { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file() {
    let err = LevelDefinition::load("assets/data/levels/does_not_exist.ron").unwrap_err();
    assert!(matches!(err, DataLoadError::FileNotFound(_)));
}
