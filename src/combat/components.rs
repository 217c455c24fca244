//! Combat-related components.

use bevy::prelude::*;

/// Health and defeat state of an enemy.
///
/// `defeated` only ever goes from false to true. A defeated enemy stays
/// in the world but takes no further part in combat.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyVitals {
    pub health: i32,
    pub defeated: bool,
}

impl EnemyVitals {
    pub fn new(health: i32) -> Self {
        Self {
            health,
            defeated: false,
        }
    }

    /// Apply one hit. Returns true if this hit defeated the enemy.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        if self.defeated {
            return false;
        }

        self.health -= damage;
        if self.health <= 0 {
            self.defeated = true;
            return true;
        }
        false
    }
}
