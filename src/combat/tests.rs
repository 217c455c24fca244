//! Combat domain: unit tests for attack resolution, the victory latch and the
//! scene hand-off through the frame pipeline.

use std::time::Duration;

use bevy::prelude::*;

use super::systems::setup_combat_systems;
use super::{AttackOutcome, CombatResolver, EnemyVitals};
use crate::core::{AllEnemiesDefeated, FrameInput, FrameSet, GameConfig, MissionCompleted};
use crate::dialogue::{
    dialogue_frame, latch_frame_mode, run_dialogue, CompletionAction, FrameMode,
    GameModeController, MissionRegistry, MissionTiming, Mode,
};
use crate::enemies::Enemy;
use crate::player::{Blocked, Player};
use crate::world::map_to_world;

fn armed_resolver() -> CombatResolver {
    let mut resolver = CombatResolver::default();
    resolver.arm();
    resolver
}

/// Attack with the player at the origin against `(position, vitals)` pairs.
fn attack(
    resolver: &mut CombatResolver,
    enemies: &mut [(Vec2, EnemyVitals)],
) -> AttackOutcome<usize> {
    resolver.resolve_attack(
        Vec2::ZERO,
        enemies
            .iter_mut()
            .enumerate()
            .map(|(i, (position, vitals))| (i, *position, vitals)),
    )
}

#[test]
fn test_three_enemies_defeated_in_one_attack() {
    let mut resolver = armed_resolver();
    let mut enemies = vec![
        (Vec2::new(10.0, 0.0), EnemyVitals::new(10)),
        (Vec2::new(0.0, 50.0), EnemyVitals::new(10)),
        (Vec2::new(-30.0, -30.0), EnemyVitals::new(10)),
    ];

    let outcome = attack(&mut resolver, &mut enemies);
    assert_eq!(outcome.hits, 3);
    assert_eq!(outcome.newly_defeated, vec![0, 1, 2]);
    assert!(outcome.all_defeated);
    assert!(enemies.iter().all(|(_, vitals)| vitals.defeated));

    // Already transitioned: no second event, no further damage
    let again = attack(&mut resolver, &mut enemies);
    assert_eq!(again.hits, 0);
    assert!(again.newly_defeated.is_empty());
    assert!(!again.all_defeated);
    assert!(enemies.iter().all(|(_, vitals)| vitals.health == 0));
}

#[test]
fn test_empty_set_never_wins() {
    let mut resolver = armed_resolver();
    let outcome = attack(&mut resolver, &mut []);
    assert!(!outcome.all_defeated);
    assert!(resolver.is_armed());

    // Not armed yet: even a fully defeated set stays quiet
    let mut unarmed = CombatResolver::default();
    let mut enemies = vec![(Vec2::new(5.0, 0.0), EnemyVitals::new(10))];
    let outcome = attack(&mut unarmed, &mut enemies);
    assert_eq!(outcome.newly_defeated, vec![0]);
    assert!(!outcome.all_defeated);
}

#[test]
fn test_range_is_strict() {
    let mut resolver = armed_resolver();
    let mut enemies = vec![
        (Vec2::new(100.0, 0.0), EnemyVitals::new(10)),
        (Vec2::new(99.9, 0.0), EnemyVitals::new(10)),
    ];

    let outcome = attack(&mut resolver, &mut enemies);
    assert_eq!(outcome.hits, 1);
    assert_eq!(enemies[0].1, EnemyVitals::new(10));
    assert!(enemies[1].1.defeated);
    assert!(!outcome.all_defeated);
}

#[test]
fn test_defeat_takes_several_hits() {
    let mut resolver = armed_resolver();
    let mut enemies = vec![(Vec2::new(20.0, 20.0), EnemyVitals::new(25))];

    assert!(!attack(&mut resolver, &mut enemies).all_defeated);
    assert_eq!(enemies[0].1.health, 15);
    assert!(!attack(&mut resolver, &mut enemies).all_defeated);
    assert_eq!(enemies[0].1.health, 5);

    let last = attack(&mut resolver, &mut enemies);
    assert_eq!(enemies[0].1.health, -5);
    assert!(enemies[0].1.defeated);
    assert!(last.all_defeated);
}

#[test]
fn test_defeated_enemy_is_untouched() {
    let mut vitals = EnemyVitals {
        health: 0,
        defeated: true,
    };
    assert!(!vitals.take_hit(10));
    assert_eq!(vitals.health, 0);
}

#[test]
fn test_far_enemy_keeps_victory_pending() {
    let mut resolver = armed_resolver();
    let mut enemies = vec![
        (Vec2::new(10.0, 0.0), EnemyVitals::new(10)),
        (Vec2::new(500.0, 0.0), EnemyVitals::new(10)),
    ];

    let first = attack(&mut resolver, &mut enemies);
    assert_eq!(first.newly_defeated, vec![0]);
    assert!(!first.all_defeated);

    // The survivor walks up and is finished off
    enemies[1].0 = Vec2::new(0.0, 40.0);
    let second = attack(&mut resolver, &mut enemies);
    assert_eq!(second.newly_defeated, vec![1]);
    assert!(second.all_defeated);
}

#[test]
fn test_rearm_allows_next_wave() {
    let mut resolver = armed_resolver();
    let mut wave = vec![(Vec2::ZERO, EnemyVitals::new(10))];
    assert!(attack(&mut resolver, &mut wave).all_defeated);
    assert!(!resolver.is_armed());

    resolver.arm();
    wave.push((Vec2::new(1.0, 1.0), EnemyVitals::new(10)));
    assert!(attack(&mut resolver, &mut wave).all_defeated);
}

/// App with the frame pipeline wired the way the plugins wire it, minus rendering.
fn frame_app() -> App {
    let mut app = App::new();
    app.add_event::<AllEnemiesDefeated>()
        .add_event::<MissionCompleted>()
        .init_resource::<Time>()
        .init_resource::<FrameInput>()
        .init_resource::<GameModeController>()
        .init_resource::<FrameMode>()
        .insert_resource(GameConfig::default())
        .insert_resource(MissionRegistry::default())
        .configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulate, FrameSet::Present).chain(),
        )
        .add_systems(Update, latch_frame_mode.in_set(FrameSet::Input))
        .add_systems(
            Update,
            run_dialogue.run_if(dialogue_frame).in_set(FrameSet::Simulate),
        );
    setup_combat_systems(&mut app);
    app
}

fn spawn_player(app: &mut App) -> Entity {
    app.world_mut().spawn((Player, Transform::default())).id()
}

fn spawn_enemy_near_player(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Enemy, EnemyVitals::new(10), Transform::from_xyz(30.0, 0.0, 0.0)))
        .id()
}

fn handoff_point() -> Vec2 {
    map_to_world(Vec2::new(1200.0, 1200.0))
}

#[test]
fn test_victory_hands_off_to_awakening_mission() {
    let mut app = frame_app();
    let player = spawn_player(&mut app);
    let enemy = spawn_enemy_near_player(&mut app);
    app.world_mut().resource_mut::<FrameInput>().attack = true;

    app.update();

    let world = app.world();
    assert!(world.get::<EnemyVitals>(enemy).unwrap().defeated);
    assert_eq!(
        world.get::<Transform>(player).unwrap().translation.truncate(),
        handoff_point()
    );
    assert!(world.get::<Blocked>(player).is_some());
    assert!(world.get::<Blocked>(enemy).is_some());

    let controller = world.resource::<GameModeController>();
    assert_eq!(controller.mode(), Mode::Dialogue);
    let sequencer = controller.active_sequencer().unwrap();
    let awakening = world.resource::<MissionRegistry>().get("awakening").unwrap();
    assert_eq!(sequencer.line_count(), awakening.lines.len());
    assert!(sequencer.has_pending_completion());
}

#[test]
fn test_attack_ignored_during_dialogue_frame() {
    let mut app = frame_app();
    let player = spawn_player(&mut app);
    let enemy = spawn_enemy_near_player(&mut app);
    let intro = MissionRegistry::default().sequencer("intro", MissionTiming::default());
    app.world_mut()
        .resource_mut::<GameModeController>()
        .start_mission(intro);
    app.world_mut().resource_mut::<FrameInput>().attack = true;

    app.update();

    let world = app.world();
    assert_eq!(*world.resource::<FrameMode>(), FrameMode(Mode::Dialogue));
    assert_eq!(world.get::<EnemyVitals>(enemy).unwrap(), &EnemyVitals::new(10));
    assert_eq!(world.get::<Transform>(player).unwrap().translation, Vec3::ZERO);
    assert!(world.get::<Blocked>(player).is_none());
    assert!(world.resource::<Events<AllEnemiesDefeated>>().is_empty());
    assert_eq!(world.resource::<GameModeController>().mode(), Mode::Dialogue);
}

#[test]
fn test_finished_awakening_mission_restores_control() {
    let mut app = frame_app();
    let player = spawn_player(&mut app);
    let enemy = spawn_enemy_near_player(&mut app);
    app.world_mut().resource_mut::<FrameInput>().attack = true;
    app.update();
    assert!(app.world().get::<Blocked>(player).is_some());

    *app.world_mut().resource_mut::<FrameInput>() = FrameInput {
        advance: true,
        ..default()
    };
    for _ in 0..20 {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(250));
        app.update();
        if app.world().resource::<GameModeController>().mode() == Mode::Gameplay {
            break;
        }
    }

    let world = app.world();
    assert_eq!(world.resource::<GameModeController>().mode(), Mode::Gameplay);
    assert!(world.get::<Blocked>(player).is_none());
    assert!(world.get::<Blocked>(enemy).is_none());
}

#[test]
fn test_completion_event_unblocks_everything() {
    let mut app = frame_app();
    let player = app.world_mut().spawn((Player, Transform::default(), Blocked)).id();
    let enemy = app.world_mut().spawn((Enemy, Transform::default(), Blocked)).id();
    app.world_mut().send_event(MissionCompleted {
        action: CompletionAction::RestoreControl,
    });

    app.update();

    assert!(app.world().get::<Blocked>(player).is_none());
    assert!(app.world().get::<Blocked>(enemy).is_none());
}

#[test]
fn test_victory_waits_for_player() {
    let mut app = frame_app();
    app.world_mut().send_event(AllEnemiesDefeated);
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameModeController>().mode(), Mode::Gameplay);

    let player = spawn_player(&mut app);
    app.update();

    assert_eq!(app.world().resource::<GameModeController>().mode(), Mode::Dialogue);
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.truncate(),
        handoff_point()
    );
    assert!(app.world().get::<Blocked>(player).is_some());
}
