//! Systems for the world module.
use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    core::config::WalkConfig,
    render::sprite::world_to_scene,
    session::{InteractionLoop, MovableBody},
    world::components::FollowCamera,
};

/// Spawns the 2D camera, looking at the world center.
pub fn spawn_follow_camera(mut commands: Commands, config: Res<WalkConfig>) {
    commands.spawn((
        Camera2d,
        Transform::default(),
        FollowCamera::new(config.camera.follow_lerp),
        Name::new("Follow Camera"),
    ));
}

/// Eases the camera toward the player, keeping the view inside the world.
pub fn follow_player(
    session: Res<InteractionLoop>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok((camera, mut transform)) = cameras.single_mut() else {
        return;
    };
    let view = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::ZERO);

    let world = session.world_size();
    let target = world_to_scene(session.player().center(), world);
    let next = follow_step(transform.translation.truncate(), target, camera.lerp, view, world);
    transform.translation = next.extend(transform.translation.z);
}

/// One frame of camera easing in scene space, clamped so the view stays inside the world.
pub fn follow_step(current: Vec2, target: Vec2, lerp: f32, view: Vec2, world: Vec2) -> Vec2 {
    clamp_view_center(current.lerp(target, lerp), view, world)
}

/// A view larger than the world along an axis is centered on that axis.
pub fn clamp_view_center(center: Vec2, view: Vec2, world: Vec2) -> Vec2 {
    let clamp_axis = |value: f32, view: f32, world: f32| {
        if view >= world {
            0.0
        } else {
            let limit = (world - view) * 0.5;
            value.clamp(-limit, limit)
        }
    };
    Vec2::new(
        clamp_axis(center.x, view.x, world.x),
        clamp_axis(center.y, view.y, world.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vec2 = Vec2::new(1600.0, 1200.0);
    const VIEW: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn eases_a_tenth_of_the_way() {
        let next = follow_step(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.1, VIEW, WORLD);
        assert!(next.abs_diff_eq(Vec2::new(10.0, -5.0), 1e-5));
    }

    #[test]
    fn view_never_leaves_the_world() {
        let clamped = clamp_view_center(Vec2::new(-790.0, 590.0), VIEW, WORLD);
        assert_eq!(clamped, Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn oversized_view_is_centered() {
        let clamped = clamp_view_center(Vec2::new(120.0, -40.0), Vec2::new(2000.0, 600.0), WORLD);
        assert_eq!(clamped, Vec2::new(0.0, -40.0));
    }
}
