//! Core game module - states, frame ordering, events and configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod input;
mod plugin;
mod states;

pub use config::*;
pub use events::*;
pub use input::FrameInput;
pub use plugin::CorePlugin;
pub use states::*;
