//! Level data loaded from RON files.
//!
//! A level is two character grids of equal size: a tile grid resolved
//! through the level's palette, and an entity grid marking where the
//! player and enemies start.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::DataLoadError;

// === Tile Types ===

/// What a tile is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TileKind {
    /// Walkable ground.
    Floor,
    /// Solid boundary.
    Wall,
    /// Solid decoration drawn above the floor (trees, rocks, crates).
    Object,
}

impl TileKind {
    /// Whether this tile blocks movement.
    pub fn is_solid(&self) -> bool {
        matches!(self, TileKind::Wall | TileKind::Object)
    }
}

fn default_tile_color() -> (f32, f32, f32) {
    (0.3, 0.5, 0.25)
}

/// Definition of a tile in the palette.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileDef {
    pub kind: TileKind,
    #[serde(default = "default_tile_color")]
    pub color: (f32, f32, f32),
    /// Image relative to `assets/`, drawn instead of the plain color
    #[serde(default)]
    pub image: Option<String>,
}

// === Entity Markers ===

/// Entity starts marked in the entity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMarker {
    Player,
    Enemy,
}

impl EntityMarker {
    /// Map an entity grid character. `Ok(None)` is an empty cell.
    fn from_char(c: char) -> Result<Option<Self>, char> {
        match c {
            'P' => Ok(Some(EntityMarker::Player)),
            'E' => Ok(Some(EntityMarker::Enemy)),
            '.' | ' ' => Ok(None),
            other => Err(other),
        }
    }
}

// === Level Definition ===

fn default_tile_size() -> f32 {
    64.0
}

/// Raw level definition as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinitionRaw {
    pub name: String,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    pub palette: HashMap<char, TileDef>,
    pub tiles: Vec<String>,
    pub entities: Vec<String>,
}

/// A tile placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub grid_pos: (usize, usize),
    pub def: TileDef,
}

/// Processed level definition with resolved tiles and spawn points.
#[derive(Debug, Clone)]
pub struct LevelDefinition {
    pub name: String,
    pub tile_size: f32,
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<PlacedTile>,
    /// Player start cell (x, y).
    pub player_start: (usize, usize),
    /// Enemy start cells (x, y), in grid reading order.
    pub enemy_spawns: Vec<(usize, usize)>,
}

/// Width and height of a grid, checked against `expected` when given.
fn grid_size(
    layer: &'static str,
    rows: &[String],
    expected: Option<(usize, usize)>,
) -> Result<(usize, usize), DataLoadError> {
    let height = rows.len();
    let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
    let (expected_width, expected_height) = expected.unwrap_or((width, height));

    let mismatch = |actual_width: usize, actual_height: usize| DataLoadError::GridMismatch {
        layer,
        expected_width,
        expected_height,
        actual_width,
        actual_height,
    };

    if width != expected_width || height != expected_height {
        return Err(mismatch(width, height));
    }
    if let Some(row) = rows.iter().find(|row| row.chars().count() != width) {
        return Err(mismatch(row.chars().count(), height));
    }
    Ok((width, height))
}

impl LevelDefinition {
    /// Resolve palette references and spawn markers.
    pub fn from_raw(raw: LevelDefinitionRaw) -> Result<Self, DataLoadError> {
        let (width, height) = grid_size("tiles", &raw.tiles, None)?;
        grid_size("entities", &raw.entities, Some((width, height)))?;

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in raw.tiles.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == ' ' {
                    continue;
                }
                let def = raw.palette.get(&c).ok_or_else(|| DataLoadError::UnknownPaletteEntry {
                    layer: "tile",
                    character: c,
                    x,
                    y,
                })?;
                tiles.push(PlacedTile {
                    grid_pos: (x, y),
                    def: def.clone(),
                });
            }
        }

        let mut player_start = None;
        let mut enemy_spawns = Vec::new();
        for (y, row) in raw.entities.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let marker = EntityMarker::from_char(c).map_err(|character| {
                    DataLoadError::UnknownPaletteEntry {
                        layer: "entity",
                        character,
                        x,
                        y,
                    }
                })?;
                match marker {
                    Some(EntityMarker::Player) if player_start.is_some() => {
                        return Err(DataLoadError::DuplicatePlayerStart { x, y });
                    }
                    Some(EntityMarker::Player) => player_start = Some((x, y)),
                    Some(EntityMarker::Enemy) => enemy_spawns.push((x, y)),
                    None => {}
                }
            }
        }

        let player_start = player_start.ok_or_else(|| DataLoadError::MissingPlayerStart(raw.name.clone()))?;

        Ok(Self {
            name: raw.name,
            tile_size: raw.tile_size,
            width,
            height,
            tiles,
            player_start,
            enemy_spawns,
        })
    }

    /// Parse and resolve a level from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let raw = ron::from_str::<LevelDefinitionRaw>(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// Read, parse and resolve a level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&display, &contents)
    }

    /// Center of a grid cell in map pixels (y grows down).
    pub fn grid_to_map(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) * self.tile_size,
            (y as f32 + 0.5) * self.tile_size,
        )
    }

    /// Center of a grid cell in world coordinates.
    pub fn grid_to_world(&self, x: usize, y: usize) -> Vec2 {
        map_to_world(self.grid_to_map(x, y))
    }

    /// Player start in world coordinates.
    pub fn player_world_start(&self) -> Vec2 {
        self.grid_to_world(self.player_start.0, self.player_start.1)
    }
}

/// Convert map pixels (y down) to world coordinates (y up).
pub fn map_to_world(map: Vec2) -> Vec2 {
    Vec2::new(map.x, -map.y)
}

/// The level being played.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel(pub LevelDefinition);
