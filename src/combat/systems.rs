//! Combat systems - attack input, defeat handling, scene hand-off.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::EnemyVitals;
use super::resolver::CombatResolver;
use crate::core::{AllEnemiesDefeated, FrameInput, FrameSet, GameConfig, MissionCompleted};
use crate::dialogue::{gameplay_frame, CompletionAction, GameModeController, MissionRegistry, MissionTiming};
use crate::enemies::Enemy;
use crate::player::{Blocked, Player};
use crate::world::map_to_world;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        .add_systems(Startup, init_resolver)
        .add_systems(Update, arm_on_new_enemies.in_set(FrameSet::Input))
        // Attack input is gameplay-only; dialogue frames never see it
        .add_systems(
            Update,
            (player_attack, start_new_scene)
                .chain()
                .run_if(gameplay_frame)
                .in_set(FrameSet::Simulate),
        )
        .add_systems(Update, apply_completion_actions.in_set(FrameSet::Present));
}

fn init_resolver(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(CombatResolver::from(&config.combat));
}

/// Arm the all-defeated latch once enemies exist.
fn arm_on_new_enemies(
    new_enemies: Query<(), Added<EnemyVitals>>,
    mut resolver: ResMut<CombatResolver>,
) {
    if new_enemies.is_empty() || resolver.is_armed() {
        return;
    }
    info!("Enemies populated, victory check armed");
    resolver.arm();
}

/// Resolve the attack action against all enemies.
fn player_attack(
    mut commands: Commands,
    input: Res<FrameInput>,
    mut resolver: ResMut<CombatResolver>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<(Entity, &Transform, &mut EnemyVitals), (With<Enemy>, Without<Player>)>,
    mut victory: EventWriter<AllEnemiesDefeated>,
) {
    if !input.attack {
        return;
    }
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };

    let outcome = resolver.resolve_attack(
        player_transform.translation.truncate(),
        enemy_query
            .iter_mut()
            .map(|(entity, transform, vitals)| (entity, transform.translation.truncate(), vitals)),
    );

    for &entity in &outcome.newly_defeated {
        info!("Enemy defeated: {:?}", entity);
        // Stays in the managed set, but no longer drawn or collided with
        commands
            .entity(entity)
            .insert(Visibility::Hidden)
            .remove::<(KinematicCharacterController, Collider)>();
    }

    if outcome.all_defeated {
        info!("All enemies defeated");
        victory.send(AllEnemiesDefeated);
    }
}

/// Move the player to the hand-off point and start the follow-up mission.
fn start_new_scene(
    mut commands: Commands,
    mut victory: EventReader<AllEnemiesDefeated>,
    config: Res<GameConfig>,
    registry: Res<MissionRegistry>,
    mut controller: ResMut<GameModeController>,
    mut player_query: Query<(Entity, &mut Transform), With<Player>>,
    enemy_query: Query<Entity, With<Enemy>>,
    mut pending: Local<bool>,
) {
    if !victory.is_empty() {
        victory.clear();
        *pending = true;
    }
    if !*pending {
        return;
    }
    let Ok((player, mut transform)) = player_query.get_single_mut() else {
        warn!("All enemies defeated but no player to hand off, scene change deferred");
        return;
    };
    *pending = false;

    let (x, y) = config.combat.handoff_position;
    let target = map_to_world(Vec2::new(x, y));
    transform.translation.x = target.x;
    transform.translation.y = target.y;
    commands.entity(player).insert(Blocked);
    for enemy in enemy_query.iter() {
        commands.entity(enemy).insert(Blocked);
    }

    let id = &config.combat.victory_mission;
    info!("Scene change: player moved to {:?}, starting mission '{}'", target, id);
    controller.start_mission(
        registry
            .sequencer(id, MissionTiming::from(&config.dialogue))
            .with_completion(CompletionAction::RestoreControl),
    );
}

/// Carry out what finished missions asked for.
fn apply_completion_actions(
    mut commands: Commands,
    mut completed: EventReader<MissionCompleted>,
    blocked: Query<Entity, With<Blocked>>,
) {
    for event in completed.read() {
        match event.action {
            CompletionAction::RestoreControl => {
                for entity in blocked.iter() {
                    commands.entity(entity).remove::<Blocked>();
                }
                info!("Control restored");
            }
        }
    }
}
