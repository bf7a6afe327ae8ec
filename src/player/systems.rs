//! Systems feeding input into the session and advancing it once per frame.
use bevy::{
    input::touch::Touches,
    log::{debug, info},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{
    core::config::WalkConfig,
    player::{components::KeyBindings, events::DialogToggledEvent},
    render::sprite::scene_to_world,
    session::{DialogChange, Direction, InputKey, InteractionLoop, MovableBody},
    world::components::FollowCamera,
};

/// Builds the session from the loaded configuration.
pub fn init_session(mut commands: Commands, config: Res<WalkConfig>) {
    let session = InteractionLoop::new(config.session_setup());
    info!(
        "Session ready: {} terminals, player starts at ({:.0}, {:.0})",
        session.zones().len(),
        session.player().position().x,
        session.player().position().y,
    );
    commands.insert_resource(session);
}

/// Mirrors held keys into the session's input flags.
pub fn collect_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut session: ResMut<InteractionLoop>,
) {
    let input = session.input_mut();
    for direction in Direction::ALL {
        let keys = bindings.keys_for(direction);
        input.set_held(direction, keyboard.any_pressed(keys.iter().copied()));
    }

    // A tap shorter than a frame still registers as one press.
    let interact = bindings.interact.iter().copied();
    if keyboard.any_just_pressed(interact.clone()) {
        input.press(InputKey::Interact);
    }
    if !keyboard.any_pressed(interact) {
        input.release(InputKey::Interact);
    }
}

/// Records a click-to-move target from a left click or a new touch.
pub fn collect_pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<FollowCamera>>,
    mut session: ResMut<InteractionLoop>,
) {
    let Some(screen) = pointer_press(
        session.click_to_move().enabled,
        &mouse,
        &touches,
        windows.single().ok(),
    ) else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    match camera.viewport_to_world_2d(camera_transform, screen) {
        Ok(scene) => aim_at_scene_point(&mut session, scene),
        Err(err) => debug!("Ignoring pointer press: {:?}", err),
    }
}

/// Screen position of this frame's left click (or first new touch), if click-to-move is on.
fn pointer_press(
    enabled: bool,
    mouse: &ButtonInput<MouseButton>,
    touches: &Touches,
    window: Option<&Window>,
) -> Option<Vec2> {
    if !enabled {
        return None;
    }
    if mouse.just_pressed(MouseButton::Left) {
        window.and_then(Window::cursor_position)
    } else {
        touches.iter_just_pressed().next().map(|touch| touch.position())
    }
}

fn aim_at_scene_point(session: &mut InteractionLoop, scene: Vec2) {
    let target = scene_to_world(scene, session.world_size());
    debug!("Click-to-move target ({:.1}, {:.1})", target.x, target.y);
    session.input_mut().point_at(target);
}

/// Runs one session tick and announces dialog changes.
pub fn advance_session(
    mut session: ResMut<InteractionLoop>,
    mut toggles: MessageWriter<DialogToggledEvent>,
) {
    let outcome = session.tick();
    let Some(change) = outcome.dialog else {
        return;
    };

    match change {
        DialogChange::Opened { zone } => {
            let dialog = session.dialog();
            let (Some(title), Some(text)) = (dialog.title(), dialog.text()) else {
                return;
            };
            info!("Opened terminal {} (zone {})", title, zone);
            toggles.write(DialogToggledEvent::Opened {
                zone,
                title: title.to_string(),
                text: text.to_string(),
            });
        }
        DialogChange::Closed { zone } => {
            info!("Closed terminal dialog (zone {})", zone);
            toggles.write(DialogToggledEvent::Closed { zone });
        }
    }
}
