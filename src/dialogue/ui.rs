//! Dialogue box drawn on top of the world while a mission runs.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::controller::GameModeController;
use super::mission::DialogueBoxStyle;
use crate::core::GameConfig;

/// Font for dialogue text. Loading it is a hard startup requirement.
#[derive(Resource)]
pub struct DialogueFont(pub Handle<Font>);

/// Marker for the dialogue box container.
#[derive(Component)]
pub struct DialogueBox;

/// Marker for the dialogue text inside the box.
#[derive(Component)]
pub struct DialogueText;

/// Start loading the dialogue font.
pub fn load_dialogue_font(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    info!("Loading dialogue font {}", config.dialogue.font);
    commands.insert_resource(DialogueFont(asset_server.load(&config.dialogue.font)));
}

/// Spawn the (hidden) dialogue box.
pub fn spawn_dialogue_box(
    mut commands: Commands,
    font: Res<DialogueFont>,
    config: Res<GameConfig>,
) {
    let dialogue = &config.dialogue;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                border: UiRect::all(Val::Px(dialogue.border_width)),
                padding: UiRect::all(Val::Px(dialogue.text_padding)),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            BorderColor(Color::WHITE),
            Visibility::Hidden,
            DialogueBox,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font: font.0.clone(),
                    font_size: dialogue.font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                DialogueText,
            ));
        });
}

/// Place the box and copy the revealed text, or hide it with no mission.
pub fn render_dialogue_box(
    controller: Res<GameModeController>,
    config: Res<GameConfig>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut box_query: Query<(&mut Node, &mut Visibility), With<DialogueBox>>,
    mut text_query: Query<&mut Text, With<DialogueText>>,
) {
    let Ok((mut node, mut visibility)) = box_query.get_single_mut() else {
        return;
    };
    let Ok(window) = window_query.get_single() else {
        return;
    };

    let screen = Vec2::new(window.width(), window.height());
    let style = DialogueBoxStyle::from(&config.dialogue);

    let Some((sequencer, rect)) = controller
        .active_sequencer()
        .and_then(|sequencer| sequencer.layout(screen, &style).map(|rect| (sequencer, rect)))
    else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Inherited;
    node.left = Val::Px(rect.min.x);
    node.top = Val::Px(rect.min.y);
    node.width = Val::Px(rect.width());
    node.height = Val::Px(rect.height());

    if let Ok(mut text) = text_query.get_single_mut() {
        if text.0 != sequencer.revealed_text() {
            text.0 = sequencer.revealed_text().to_string();
        }
    }
}
