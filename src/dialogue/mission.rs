//! Mission sequencer - an ordered conversation shown line by line.

use std::time::Duration;

use bevy::math::{Rect, Vec2};
use serde::Deserialize;

use super::typewriter::Typewriter;
use crate::core::DialogueConfig;

/// What happens once a mission has shown its last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CompletionAction {
    /// Hand movement back to the player and any blocked enemies.
    RestoreControl,
}

/// Reveal and debounce timings for a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionTiming {
    /// Delay between two revealed characters
    pub reveal_interval: Duration,
    /// Minimum gap between two accepted advance inputs
    pub input_cooldown: Duration,
}

impl Default for MissionTiming {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(50),
            input_cooldown: Duration::from_millis(200),
        }
    }
}

impl From<&DialogueConfig> for MissionTiming {
    fn from(config: &DialogueConfig) -> Self {
        Self {
            reveal_interval: config.reveal_interval(),
            input_cooldown: config.input_cooldown(),
        }
    }
}

/// Proportions of the dialogue box relative to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogueBoxStyle {
    pub width_fraction: f32,
    pub height_fraction: f32,
    pub bottom_margin: f32,
}

impl Default for DialogueBoxStyle {
    fn default() -> Self {
        Self {
            width_fraction: 0.9,
            height_fraction: 0.2,
            bottom_margin: 20.0,
        }
    }
}

impl From<&DialogueConfig> for DialogueBoxStyle {
    fn from(config: &DialogueConfig) -> Self {
        Self {
            width_fraction: config.box_width_fraction,
            height_fraction: config.box_height_fraction,
            bottom_margin: config.bottom_margin,
        }
    }
}

impl DialogueBoxStyle {
    /// Box rectangle in screen pixels, origin top-left, y growing down.
    ///
    /// Centered horizontally and anchored `bottom_margin` above the
    /// bottom edge.
    pub fn layout(&self, screen: Vec2) -> Rect {
        let size = Vec2::new(
            screen.x * self.width_fraction,
            screen.y * self.height_fraction,
        );
        let min = Vec2::new(
            (screen.x - size.x) / 2.0,
            screen.y - size.y - self.bottom_margin,
        );
        Rect::from_corners(min, min + size)
    }
}

/// Drives a typewriter through an ordered list of lines.
///
/// The first accepted advance input on a partially revealed line only
/// finishes revealing it; the next one moves to the following line. Once
/// the cursor passes the last line the sequencer goes inactive for good
/// and hands out its completion action exactly once.
#[derive(Debug, Clone)]
pub struct MissionSequencer {
    lines: Vec<String>,
    current_index: usize,
    typewriter: Typewriter,
    input_cooldown: Duration,
    last_input: Option<Duration>,
    is_active: bool,
    on_complete: Option<CompletionAction>,
}

impl MissionSequencer {
    /// Create a sequencer positioned on the first line.
    ///
    /// An empty list yields a sequencer that is already inactive.
    pub fn new(lines: Vec<String>, timing: MissionTiming) -> Self {
        let first = lines.first().cloned().unwrap_or_default();
        Self {
            is_active: !lines.is_empty(),
            typewriter: Typewriter::new(first, timing.reveal_interval),
            lines,
            current_index: 0,
            input_cooldown: timing.input_cooldown,
            last_input: None,
            on_complete: None,
        }
    }

    /// Attach the action handed out when the mission finishes.
    pub fn with_completion(mut self, action: CompletionAction) -> Self {
        self.on_complete = Some(action);
        self
    }

    /// React to the advance key.
    ///
    /// Ignored while the cooldown since the last accepted press is running.
    /// Returns true when the press was accepted.
    pub fn handle_advance_input(&mut self, now: Duration) -> bool {
        if !self.is_active || self.current_index >= self.lines.len() {
            return false;
        }
        if let Some(last) = self.last_input {
            if now.saturating_sub(last) < self.input_cooldown {
                return false;
            }
        }
        self.last_input = Some(now);

        if !self.typewriter.is_line_fully_revealed() {
            self.typewriter.reveal_all();
        } else {
            self.current_index += 1;
            let next = self.lines.get(self.current_index).cloned().unwrap_or_default();
            self.typewriter.set_line(next);
        }
        true
    }

    /// Advance the typewriter and detect the end of the mission.
    ///
    /// Returns the completion action on the update that finishes the
    /// mission, and `None` on every other call.
    pub fn update(&mut self, now: Duration) -> Option<CompletionAction> {
        if self.current_index < self.lines.len() {
            self.typewriter.tick(now);
            return None;
        }

        self.is_active = false;
        self.on_complete.take()
    }

    /// Where the dialogue box goes on a screen of the given size.
    ///
    /// Nothing is drawn once the mission is over.
    pub fn layout(&self, screen: Vec2, style: &DialogueBoxStyle) -> Option<Rect> {
        self.is_active.then(|| style.layout(screen))
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn revealed_text(&self) -> &str {
        self.typewriter.revealed_text()
    }

    pub fn is_line_fully_revealed(&self) -> bool {
        self.typewriter.is_line_fully_revealed()
    }

    pub fn has_pending_completion(&self) -> bool {
        self.on_complete.is_some()
    }
}
