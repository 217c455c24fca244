//! Dialogue module - scripted missions that suspend gameplay.

mod controller;
mod data;
mod mission;
mod plugin;
mod typewriter;
mod ui;


pub use controller::{
    dialogue_frame, gameplay_frame, DialogueStep, FrameMode, GameMode, GameModeController, Mode,
};
pub use data::{MissionDefinition, MissionRegistry};
pub use mission::{CompletionAction, DialogueBoxStyle, MissionSequencer, MissionTiming};
pub use plugin::DialoguePlugin;
pub(crate) use controller::latch_frame_mode;
pub(crate) use plugin::run_dialogue;
pub use typewriter::Typewriter;
pub use ui::DialogueFont;
