//! Enemy animation sets discovered on disk.
//!
//! Each subdirectory of the enemy image directory is one animation set,
//! holding frames named by their index (`0.png`, `1.png`, ...).

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::GameConfig;

/// One enemy look: its frames in playback order.
#[derive(Debug, Clone)]
pub struct EnemyFrameSet {
    pub name: String,
    pub frames: Vec<Handle<Image>>,
}

/// Resource holding all discovered animation sets.
#[derive(Resource, Debug, Default)]
pub struct EnemyFrames {
    pub sets: Vec<EnemyFrameSet>,
}

impl EnemyFrames {
    /// A random animation set, if any were found.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&EnemyFrameSet> {
        self.sets.choose(rng)
    }
}

/// Sort frame file names by their numeric stem.
///
/// Names without a numeric stem are dropped.
pub fn order_frame_files(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut numbered: Vec<(u32, String)> = names
        .into_iter()
        .filter_map(|name| {
            let index = Path::new(&name).file_stem()?.to_str()?.parse::<u32>().ok();
            if index.is_none() {
                warn!("Skipping enemy frame with non-numeric name: {}", name);
            }
            index.map(|index| (index, name))
        })
        .collect();
    numbered.sort_by_key(|(index, _)| *index);
    numbered.into_iter().map(|(_, name)| name).collect()
}

/// Scan the enemy image directory and load every animation set.
pub fn load_enemy_frames(
    mut frames: ResMut<EnemyFrames>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    let relative_dir = Path::new(&config.world.enemy_images_dir);
    let enemies_dir = Path::new("assets").join(relative_dir);

    let Ok(entries) = fs::read_dir(&enemies_dir) else {
        warn!(
            "Enemy image directory not found: {:?}. Enemies will be drawn as quads.",
            enemies_dir
        );
        return;
    };

    let mut set_dirs: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    set_dirs.sort();

    for set_dir in set_dirs {
        let Some(name) = set_dir.file_name().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        let Ok(files) = fs::read_dir(&set_dir) else {
            error!("Failed to read enemy frames in {:?}", set_dir);
            continue;
        };
        let file_names = files
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string));

        let handles: Vec<Handle<Image>> = order_frame_files(file_names)
            .into_iter()
            .map(|file| asset_server.load(relative_dir.join(&name).join(file)))
            .collect();

        if handles.is_empty() {
            warn!("Enemy animation set '{}' has no frames", name);
            continue;
        }

        info!("Loaded enemy animation set: {} ({} frames)", name, handles.len());
        frames.sets.push(EnemyFrameSet { name, frames: handles });
    }

    info!("Loaded {} enemy animation sets", frames.sets.len());
}
