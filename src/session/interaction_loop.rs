//! The per-frame interaction loop: movement, click-to-move and the dialog toggle.
use bevy::{math::Vec2, prelude::Resource};

use super::{
    body::{MovableBody, PlayerBody},
    dialog::DialogState,
    input::InputState,
    zone::{ProximityTest, Zone},
};

/// Per-axis scale applied when two orthogonal directions are held.
pub const DIAGONAL_FACTOR: f32 = 0.7071;

/// Click-to-move stops once the target is closer than this.
pub const DEFAULT_ARRIVE_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickToMove {
    pub enabled: bool,
    pub arrive_threshold: f32,
}

impl Default for ClickToMove {
    fn default() -> Self {
        Self {
            enabled: true,
            arrive_threshold: DEFAULT_ARRIVE_THRESHOLD,
        }
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone)]
pub struct SessionSetup {
    pub world: Vec2,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub zones: Vec<Zone>,
    pub proximity: ProximityTest,
    pub click_to_move: ClickToMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChange {
    Opened { zone: usize },
    Closed { zone: usize },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub dialog: Option<DialogChange>,
    #[cfg_attr(not(test), allow(dead_code))]
    pub displacement: Vec2,
}

impl TickOutcome {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn moved(&self) -> bool {
        self.displacement != Vec2::ZERO
    }
}

/// Owns the player, the zones, the dialog and the input flags.
///
/// Input callbacks only write through [`InteractionLoop::input_mut`]; the
/// tick is the sole writer of player and dialog state.
#[derive(Resource, Debug, Clone)]
pub struct InteractionLoop {
    world: Vec2,
    player: PlayerBody,
    zones: Vec<Zone>,
    proximity: ProximityTest,
    click_to_move: ClickToMove,
    dialog: DialogState,
    input: InputState,
    frames: u64,
}

impl InteractionLoop {
    /// Starts with the player centered in the world and the dialog closed.
    pub fn new(setup: SessionSetup) -> Self {
        Self {
            world: setup.world,
            player: PlayerBody::centered_in(setup.world, setup.player_size, setup.player_speed),
            zones: setup.zones,
            proximity: setup.proximity,
            click_to_move: setup.click_to_move,
            dialog: DialogState::default(),
            input: InputState::default(),
            frames: 0,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        self.world
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    /// Teleports the player; the position is clamped to the world.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn place_player(&mut self, position: Vec2) {
        self.player.set_position(position);
        self.player.clamp_to_bounds(self.world);
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn click_to_move(&self) -> ClickToMove {
        self.click_to_move
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances one frame: pending interact first, then movement unless a dialog is open.
    pub fn tick(&mut self) -> TickOutcome {
        self.frames = self.frames.wrapping_add(1);

        let dialog = if self.input.take_interact() {
            self.toggle_interaction()
        } else {
            None
        };

        if self.dialog.is_active() {
            // Frozen in place; clicks made while reading are dropped.
            self.input.clear_pointer_target();
            return TickOutcome {
                dialog,
                displacement: Vec2::ZERO,
            };
        }

        let before = self.player.position();
        self.advance_movement();

        TickOutcome {
            dialog,
            displacement: self.player.position() - before,
        }
    }

    /// Closes an open dialog, or opens the first zone in range.
    pub fn toggle_interaction(&mut self) -> Option<DialogChange> {
        if let Some(zone) = self.dialog.close() {
            return Some(DialogChange::Closed { zone });
        }

        let body = self.player.rect();
        let index = self
            .zones
            .iter()
            .position(|zone| self.proximity.admits(body, zone))?;

        if !self.dialog.open(index, &self.zones[index]) {
            return None;
        }
        self.input.clear_pointer_target();
        Some(DialogChange::Opened { zone: index })
    }

    fn advance_movement(&mut self) {
        if self.input.any_direction_held() {
            self.input.clear_pointer_target();
            let delta = keyboard_displacement(self.input.held_axis(), self.player.speed());
            self.player.move_by(delta);
        } else if let Some(target) = self.input.pointer_target() {
            let step = self
                .click_to_move
                .enabled
                .then(|| {
                    let reachable = reachable_target(target, self.world, self.player.size());
                    steer_towards(
                        self.player.position(),
                        reachable,
                        self.player.speed(),
                        self.click_to_move.arrive_threshold,
                    )
                })
                .flatten();
            match step {
                Some(delta) => self.player.move_by(delta),
                None => self.input.clear_pointer_target(),
            }
        }

        self.player.clamp_to_bounds(self.world);
    }
}

/// Displacement for one frame of held keys; `axis` holds per-axis signs.
pub fn keyboard_displacement(axis: Vec2, speed: f32) -> Vec2 {
    let delta = axis * speed;
    if delta.x != 0.0 && delta.y != 0.0 {
        delta * DIAGONAL_FACTOR
    } else {
        delta
    }
}

/// One frame of travel from `from` toward `target` along `atan2(dy, dx)`.
///
/// Returns `None` once the remaining distance is under `arrive_threshold`, or
/// when no progress is possible (already on the target, or zero speed).
/// The step never overshoots the target.
pub fn steer_towards(from: Vec2, target: Vec2, speed: f32, arrive_threshold: f32) -> Option<Vec2> {
    let offset = target - from;
    let remaining = offset.length();
    if remaining < arrive_threshold || remaining <= f32::EPSILON || speed <= 0.0 {
        return None;
    }

    let bearing = offset.y.atan2(offset.x);
    Some(Vec2::from_angle(bearing) * speed.min(remaining))
}

fn reachable_target(target: Vec2, world: Vec2, size: Vec2) -> Vec2 {
    target.clamp(Vec2::ZERO, (world - size).max(Vec2::ZERO))
}
