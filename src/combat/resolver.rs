//! Proximity attack resolution and the all-defeated latch.

use std::ops::DerefMut;

use bevy::prelude::*;

use super::components::EnemyVitals;
use crate::core::CombatConfig;

/// What a single attack did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome<K> {
    /// Living enemies within range that took damage
    pub hits: usize,
    /// Enemies whose defeat was caused by this attack
    pub newly_defeated: Vec<K>,
    /// The managed set just became fully defeated
    pub all_defeated: bool,
}

/// Resolves player attacks against the enemy set.
///
/// The all-defeated signal is latched: it can only be raised after the
/// resolver has been armed by a non-empty enemy population, and raising it
/// disarms the resolver until enemies are populated again.
#[derive(Resource, Debug, Clone)]
pub struct CombatResolver {
    pub damage: i32,
    /// Strict reach: enemies at exactly this distance are missed
    pub range: f32,
    armed: bool,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self {
            damage: 10,
            range: 100.0,
            armed: false,
        }
    }
}

impl From<&CombatConfig> for CombatResolver {
    fn from(config: &CombatConfig) -> Self {
        Self {
            damage: config.damage,
            range: config.range,
            armed: false,
        }
    }
}

impl CombatResolver {
    /// Allow the next full defeat of the enemy set to be reported.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Damage every living enemy within range of `player`.
    ///
    /// `enemies` yields a caller-chosen key, the enemy position and mutable
    /// access to its vitals.
    pub fn resolve_attack<K, V, I>(&mut self, player: Vec2, enemies: I) -> AttackOutcome<K>
    where
        I: IntoIterator<Item = (K, Vec2, V)>,
        V: DerefMut<Target = EnemyVitals>,
    {
        let mut outcome = AttackOutcome {
            hits: 0,
            newly_defeated: Vec::new(),
            all_defeated: false,
        };
        let mut managed = 0;
        let mut standing = 0;

        for (key, position, mut vitals) in enemies {
            managed += 1;
            if vitals.defeated {
                continue;
            }

            if player.distance(position) < self.range {
                outcome.hits += 1;
                if vitals.take_hit(self.damage) {
                    outcome.newly_defeated.push(key);
                }
            }

            if !vitals.defeated {
                standing += 1;
            }
        }

        if self.armed && managed > 0 && standing == 0 {
            self.armed = false;
            outcome.all_defeated = true;
        }

        outcome
    }
}
