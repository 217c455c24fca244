//! World module - level data and construction.

mod builder;
mod data;
mod error;
mod plugin;

#[cfg(test)]
mod tests;

pub use builder::LevelGeometry;
pub use data::{map_to_world, CurrentLevel, LevelDefinition, LevelDefinitionRaw, TileDef, TileKind};
pub use error::DataLoadError;
pub use plugin::{setup_level, WorldPlugin};
