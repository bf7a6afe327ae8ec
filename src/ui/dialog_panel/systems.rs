// src/ui/dialog_panel/systems.rs
//
// Systems for spawning the dialog panel and applying open/close messages to it.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::player::events::DialogToggledEvent;

use super::components::{DialogBody, DialogPanel, DialogPanelSettings, DialogTitle};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.02, 0.05, 0.03, 0.92);
const BORDER_COLOR: Color = Color::srgb(0.2, 0.9, 0.4); // Terminal green
const TITLE_COLOR: Color = Color::srgb(0.2, 0.9, 0.4);
const TEXT_COLOR: Color = Color::WHITE;
const HINT_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
const CLOSE_HINT: &str = "[SPACE] close";

/// Spawn the (hidden) dialog panel, centered along the bottom edge.
pub fn spawn_dialog_panel(mut commands: Commands, settings: Res<DialogPanelSettings>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Name::new("Dialog Panel Anchor"),
        ))
        .with_children(|anchor| {
            anchor
                .spawn((
                    Node {
                        width: Val::Px(settings.panel_width),
                        padding: UiRect::all(Val::Px(settings.padding)),
                        border: UiRect::all(Val::Px(settings.border_width)),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    },
                    BackgroundColor(BACKGROUND_COLOR),
                    BorderColor::from(BORDER_COLOR),
                    Visibility::Hidden,
                    DialogPanel::default(),
                    Name::new("Dialog Panel"),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: settings.title_font_size,
                            ..default()
                        },
                        TextColor(TITLE_COLOR),
                        DialogTitle,
                    ));

                    panel.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: settings.text_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        DialogBody,
                    ));

                    panel.spawn((
                        Text::new(CLOSE_HINT),
                        TextFont {
                            font_size: settings.hint_font_size,
                            ..default()
                        },
                        TextColor(HINT_COLOR),
                    ));
                });
        });
}

/// Show or hide the panel as the session opens and closes terminals.
#[allow(clippy::type_complexity)]
pub fn apply_dialog_toggles(
    mut events: MessageReader<DialogToggledEvent>,
    mut panels: Query<(&mut DialogPanel, &mut Visibility)>,
    mut titles: Query<&mut Text, (With<DialogTitle>, Without<DialogBody>)>,
    mut bodies: Query<&mut Text, (With<DialogBody>, Without<DialogTitle>)>,
) {
    for event in events.read() {
        let Ok((mut panel, mut visibility)) = panels.single_mut() else {
            warn!("Dialog panel missing; dropping {:?}", event);
            continue;
        };

        match event {
            DialogToggledEvent::Opened { zone, title, text } => {
                for mut title_text in titles.iter_mut() {
                    title_text.0.clone_from(title);
                }
                for mut body_text in bodies.iter_mut() {
                    body_text.0.clone_from(text);
                }
                panel.zone = Some(*zone);
                *visibility = Visibility::Inherited;
            }
            DialogToggledEvent::Closed { zone } => {
                if panel.zone != Some(*zone) {
                    warn!("Closing zone {} but the panel showed {:?}", zone, panel.zone);
                }
                panel.zone = None;
                *visibility = Visibility::Hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct PendingToggles(Vec<DialogToggledEvent>);

    fn emit_pending(
        mut pending: ResMut<PendingToggles>,
        mut writer: MessageWriter<DialogToggledEvent>,
    ) {
        for event in pending.0.drain(..) {
            writer.write(event);
        }
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<DialogToggledEvent>()
            .insert_resource(DialogPanelSettings::default())
            .init_resource::<PendingToggles>()
            .add_systems(Startup, spawn_dialog_panel)
            .add_systems(Update, (emit_pending, apply_dialog_toggles).chain());
        app.update();
        app
    }

    fn send(app: &mut App, event: DialogToggledEvent) {
        app.world_mut()
            .resource_mut::<PendingToggles>()
            .0
            .push(event);
        app.update();
    }

    fn panel_state(app: &mut App) -> (Option<usize>, Visibility) {
        let world = app.world_mut();
        let mut query = world.query::<(&DialogPanel, &Visibility)>();
        let (panel, visibility) = query.single(world).expect("one dialog panel");
        (panel.zone, *visibility)
    }

    fn text_of<C: Component>(app: &mut App) -> String {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Text, With<C>>();
        query.single(world).expect("one text node").0.clone()
    }

    #[test]
    fn panel_starts_hidden() {
        let mut app = test_app();
        assert_eq!(panel_state(&mut app), (None, Visibility::Hidden));
    }

    #[test]
    fn open_then_close_updates_panel() {
        let mut app = test_app();

        send(
            &mut app,
            DialogToggledEvent::Opened {
                zone: 2,
                title: "GITHUB_LINK".to_string(),
                text: "Find my source code on my GitHub.".to_string(),
            },
        );
        assert_eq!(panel_state(&mut app), (Some(2), Visibility::Inherited));
        assert_eq!(text_of::<DialogTitle>(&mut app), "GITHUB_LINK");
        assert_eq!(
            text_of::<DialogBody>(&mut app),
            "Find my source code on my GitHub."
        );

        send(&mut app, DialogToggledEvent::Closed { zone: 2 });
        assert_eq!(panel_state(&mut app), (None, Visibility::Hidden));
    }
}
