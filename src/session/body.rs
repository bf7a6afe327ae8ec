//! Movable body capability and the player's manual-AABB body.
use bevy::math::{Rect, Vec2};

/// Anything the session can move around the world and keep inside its bounds.
///
/// Positions are world coordinates of the body's top-left corner, with y
/// growing downward.
pub trait MovableBody {
    fn position(&self) -> Vec2;

    fn size(&self) -> Vec2;

    /// Translates the body without any bounds check.
    fn move_by(&mut self, delta: Vec2);

    /// Keeps the body inside `[0, world.x - w] × [0, world.y - h]`.
    fn clamp_to_bounds(&mut self, world: Vec2);

    fn center(&self) -> Vec2 {
        self.position() + self.size() * 0.5
    }

    fn rect(&self) -> Rect {
        let min = self.position();
        Rect::from_corners(min, min + self.size())
    }
}

/// The walking character.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    position: Vec2,
    size: Vec2,
    speed: f32,
}

impl PlayerBody {
    pub fn new(position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            position,
            size,
            speed: speed.max(0.0),
        }
    }

    /// Places the body so its center sits in the middle of the world.
    pub fn centered_in(world: Vec2, size: Vec2, speed: f32) -> Self {
        Self::new((world - size) * 0.5, size, speed)
    }

    /// Units travelled per frame along a single axis.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl MovableBody for PlayerBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn clamp_to_bounds(&mut self, world: Vec2) {
        let max = (world - self.size).max(Vec2::ZERO);
        self.position = self.position.clamp(Vec2::ZERO, max);
    }
}

/// Strict overlap of two rectangles; shared edges do not count.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_inside_world_minus_size() {
        let world = Vec2::new(800.0, 600.0);
        let mut body = PlayerBody::new(Vec2::new(790.0, -20.0), Vec2::splat(80.0), 4.0);

        body.clamp_to_bounds(world);

        assert_eq!(body.position(), Vec2::new(720.0, 0.0));
    }

    #[test]
    fn clamp_pins_oversized_body_to_origin() {
        let mut body = PlayerBody::new(Vec2::new(30.0, 30.0), Vec2::new(900.0, 50.0), 4.0);
        body.clamp_to_bounds(Vec2::new(800.0, 600.0));
        assert_eq!(body.position(), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn centered_body_reports_world_center() {
        let body = PlayerBody::centered_in(Vec2::new(1600.0, 1200.0), Vec2::splat(80.0), 4.0);
        assert_eq!(body.center(), Vec2::new(800.0, 600.0));
        assert_eq!(body.rect().size(), Vec2::splat(80.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        let c = Rect::new(9.5, 9.5, 20.0, 20.0);

        assert!(!rects_overlap(a, b));
        assert!(rects_overlap(a, c));
        assert!(rects_overlap(c, a));
    }
}
