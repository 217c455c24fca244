//! Level construction from data definitions.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::{LevelDefinition, PlacedTile, TileKind};

/// Marker for all level geometry.
#[derive(Component)]
pub struct LevelGeometry;

/// Draw order of tile layers.
const FLOOR_Z: f32 = 0.0;
const WALL_Z: f32 = 0.5;
const OBJECT_Z: f32 = 1.0;

/// Spawn every tile of the level, with colliders on solid ones.
pub fn build_level_tiles(commands: &mut Commands, asset_server: &AssetServer, level: &LevelDefinition) {
    for tile in &level.tiles {
        spawn_tile(commands, asset_server, level, tile);
    }

    info!(
        "Built level '{}' ({}x{}, {} tiles)",
        level.name,
        level.width,
        level.height,
        level.tiles.len()
    );
}

fn spawn_tile(commands: &mut Commands, asset_server: &AssetServer, level: &LevelDefinition, tile: &PlacedTile) {
    let size = Vec2::splat(level.tile_size);
    let position = level.grid_to_world(tile.grid_pos.0, tile.grid_pos.1);

    let z = match tile.def.kind {
        TileKind::Floor => FLOOR_Z,
        TileKind::Wall => WALL_Z,
        TileKind::Object => OBJECT_Z,
    };

    let (r, g, b) = tile.def.color;
    let sprite = match &tile.def.image {
        Some(path) => Sprite {
            image: asset_server.load(path),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(Color::srgb(r, g, b), size),
    };

    let mut entity = commands.spawn((
        sprite,
        Transform::from_translation(position.extend(z)),
        LevelGeometry,
    ));

    if tile.def.kind.is_solid() {
        entity.insert((RigidBody::Fixed, Collider::cuboid(size.x / 2.0, size.y / 2.0)));
    }
}
