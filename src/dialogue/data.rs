//! Mission definitions loaded from RON.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::mission::{CompletionAction, MissionSequencer, MissionTiming};
use crate::world::DataLoadError;

/// One scripted conversation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionDefinition {
    pub lines: Vec<String>,
    #[serde(default)]
    pub on_complete: Option<CompletionAction>,
}

/// All known missions, keyed by id.
#[derive(Resource, Debug, Clone)]
pub struct MissionRegistry {
    pub missions: HashMap<String, MissionDefinition>,
}

impl Default for MissionRegistry {
    fn default() -> Self {
        let mut missions = HashMap::new();
        missions.insert(
            "intro".to_string(),
            MissionDefinition {
                lines: vec![
                    "Minh Han: What kind of studying do you call this?".to_string(),
                    "Thoi Dang: Mind your own business.".to_string(),
                    "Minh Han: Fine. Let's settle it with our fists!".to_string(),
                ],
                on_complete: None,
            },
        );
        missions.insert(
            "awakening".to_string(),
            MissionDefinition {
                lines: vec![
                    "Thoi Dang: Where is this? Why am I here?".to_string(),
                    "Thoi Dang: I have to find a way out of this place.".to_string(),
                ],
                on_complete: Some(CompletionAction::RestoreControl),
            },
        );
        Self { missions }
    }
}

impl MissionRegistry {
    /// Parse a registry from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let missions = ron::from_str::<HashMap<String, MissionDefinition>>(contents).map_err(|e| {
            DataLoadError::ParseError {
                path: path.to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(Self { missions })
    }

    /// Read and parse a registry file.
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

    pub fn get(&self, id: &str) -> Option<&MissionDefinition> {
        self.missions.get(id)
    }

    /// Build a sequencer for a mission.
    ///
    /// An unknown id produces an empty mission, which completes on its
    /// first update.
    pub fn sequencer(&self, id: &str, timing: MissionTiming) -> MissionSequencer {
        let Some(definition) = self.get(id) else {
            warn!("Unknown mission '{}', completing it immediately", id);
            return MissionSequencer::new(Vec::new(), timing);
        };

        let sequencer = MissionSequencer::new(definition.lines.clone(), timing);
        match definition.on_complete {
            Some(action) => sequencer.with_completion(action),
            None => sequencer,
        }
    }
}

/// Load missions at startup, keeping the built-in set on failure.
pub fn load_missions(mut commands: Commands, config: Res<crate::core::GameConfig>) {
    let registry = match MissionRegistry::load(&config.world.missions_path) {
        Ok(registry) => {
            info!("Loaded {} missions", registry.missions.len());
            registry
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Mission file {} not found. Using built-in missions.", path);
            MissionRegistry::default()
        }
        Err(e) => {
            error!("{}. Using built-in missions.", e);
            MissionRegistry::default()
        }
    };
    commands.insert_resource(registry);
}
