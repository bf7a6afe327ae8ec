//! Input flags written by input callbacks and read by the frame tick.
use bevy::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Logical keys the session understands, independent of physical bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Move(Direction),
    Interact,
}

/// Held movement keys, the edge-triggered interact action and the last pointer target.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    interact_down: bool,
    interact_pending: bool,
    pointer_target: Option<Vec2>,
}

impl InputState {
    pub fn press(&mut self, key: InputKey) {
        match key {
            InputKey::Move(direction) => self.set_held(direction, true),
            InputKey::Interact => self.set_interact_down(true),
        }
    }

    pub fn release(&mut self, key: InputKey) {
        match key {
            InputKey::Move(direction) => self.set_held(direction, false),
            InputKey::Interact => self.set_interact_down(false),
        }
    }

    pub fn set_held(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn any_direction_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Arms the interact action only on the released → pressed transition.
    pub fn set_interact_down(&mut self, down: bool) {
        if down && !self.interact_down {
            self.interact_pending = true;
        }
        self.interact_down = down;
    }

    /// Consumes a pending interact press.
    pub fn take_interact(&mut self) -> bool {
        std::mem::take(&mut self.interact_pending)
    }

    /// Per-axis sign of the held keys. Left beats right and up beats down.
    pub fn held_axis(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    /// Records a click-to-move destination in world coordinates.
    pub fn point_at(&mut self, target: Vec2) {
        self.pointer_target = Some(target);
    }

    pub fn pointer_target(&self) -> Option<Vec2> {
        self.pointer_target
    }

    pub fn clear_pointer_target(&mut self) {
        self.pointer_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interact_fires_once_per_press() {
        let mut input = InputState::default();

        input.press(InputKey::Interact);
        input.press(InputKey::Interact);
        assert!(input.take_interact());
        assert!(!input.take_interact());

        input.release(InputKey::Interact);
        input.press(InputKey::Interact);
        assert!(input.take_interact());
    }

    #[test]
    fn tap_within_one_frame_still_fires() {
        let mut input = InputState::default();
        input.press(InputKey::Interact);
        input.release(InputKey::Interact);
        assert!(input.take_interact());
    }

    #[test]
    fn opposing_keys_resolve_with_precedence() {
        let mut input = InputState::default();
        for direction in Direction::ALL {
            input.press(InputKey::Move(direction));
        }
        assert_eq!(input.held_axis(), Vec2::new(-1.0, -1.0));

        input.release(InputKey::Move(Direction::Left));
        input.release(InputKey::Move(Direction::Up));
        assert_eq!(input.held_axis(), Vec2::new(1.0, 1.0));
        assert!(input.any_direction_held());
    }
}
