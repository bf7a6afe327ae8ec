//! Resources for turning keyboard state into session input.
use bevy::prelude::*;

use crate::session::Direction;

/// Physical keys bound to each logical action. Any bound key counts.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub interact: Vec<KeyCode>,
}

impl KeyBindings {
    pub fn keys_for(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            down: vec![KeyCode::ArrowDown, KeyCode::KeyS],
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            interact: vec![KeyCode::Space, KeyCode::KeyE],
        }
    }
}
