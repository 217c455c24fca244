//! In-game HUD - enemy count and controls hint.
//!
//! Shown only while gameplay is in charge; any active dialogue hides it.

use bevy::prelude::*;

use crate::combat::EnemyVitals;
use crate::core::{FrameSet, GameState};
use crate::dialogue::{GameModeController, Mode};
use crate::enemies::Enemy;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the remaining-enemies bar fill.
#[derive(Component)]
pub struct EnemyBar;

/// Marker for the remaining-enemies counter.
#[derive(Component)]
pub struct EnemyCounter;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            (sync_hud_visibility, update_enemy_bar).in_set(FrameSet::Present),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            Visibility::Hidden,
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Enemies", Color::srgb(0.8, 0.2, 0.2));

            parent.spawn((
                Text::new("Move: WASD   Attack: Left click   Talk: Space"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}

/// Helper to spawn a labeled status bar with a counter.
fn spawn_bar(parent: &mut ChildBuilder, label: &str, color: Color) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(70.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        margin: UiRect::right(Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        EnemyBar,
                    ));
                });

            bar_parent.spawn((
                Text::new("0/0"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                EnemyCounter,
            ));
        });
}

/// Hide the HUD whenever a dialogue is running.
fn sync_hud_visibility(
    controller: Res<GameModeController>,
    mut hud_query: Query<&mut Visibility, With<HudRoot>>,
) {
    let target = match controller.mode() {
        Mode::Gameplay => Visibility::Inherited,
        Mode::Dialogue => Visibility::Hidden,
    };
    for mut visibility in hud_query.iter_mut() {
        visibility.set_if_neq(target);
    }
}

/// Update the bar and counter from the enemy set.
fn update_enemy_bar(
    enemy_query: Query<&EnemyVitals, With<Enemy>>,
    mut bar_query: Query<&mut Node, With<EnemyBar>>,
    mut counter_query: Query<&mut Text, With<EnemyCounter>>,
) {
    let total = enemy_query.iter().count();
    let standing = enemy_query.iter().filter(|vitals| !vitals.defeated).count();

    if let Ok(mut bar) = bar_query.get_single_mut() {
        let percentage = if total == 0 {
            0.0
        } else {
            standing as f32 / total as f32
        };
        bar.width = Val::Percent(percentage * 100.0);
    }

    if let Ok(mut counter) = counter_query.get_single_mut() {
        let label = format!("{}/{}", standing, total);
        if counter.0 != label {
            counter.0 = label;
        }
    }
}
