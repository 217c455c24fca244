//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Looping sprite animation.
#[derive(Component)]
pub struct FrameAnimation {
    pub frames: Vec<Handle<Image>>,
    pub index: usize,
    pub timer: Timer,
}

impl FrameAnimation {
    pub fn new(frames: Vec<Handle<Image>>, frame_time: f32) -> Self {
        Self {
            frames,
            index: 0,
            timer: Timer::from_seconds(frame_time, TimerMode::Repeating),
        }
    }

    /// Step to the next frame, wrapping around.
    pub fn advance(&mut self) -> Option<&Handle<Image>> {
        if self.frames.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.frames.len();
        self.frames.get(self.index)
    }
}
