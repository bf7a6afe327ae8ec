//! The render-adapter seam: what to draw each frame, independent of how it is drawn.
use bevy::prelude::*;

use crate::{
    assets::{AssetKind, AssetStatus},
    session::{InteractionLoop, MovableBody},
};

/// Flat colors used when an image failed to load.
pub const BACKGROUND_FALLBACK: Color = Color::srgb(0.35, 0.55, 0.35);
pub const TERMINAL_FALLBACK: Color = Color::srgb(0.15, 0.85, 0.45);
pub const PLAYER_FALLBACK: Color = Color::srgb(0.95, 0.45, 0.2);

/// Identifies a drawn entity; also used as the marker on the matching scene sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Background,
    Zone(usize),
    Player,
}

impl DrawKind {
    /// Stacking order: background below terminals below the player.
    pub fn depth(&self) -> f32 {
        match self {
            Self::Background => 0.0,
            Self::Zone(_) => 1.0,
            Self::Player => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    Image(AssetKind),
    Fallback(Color),
}

/// How an image is sized into its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFit {
    #[default]
    Stretch,
    /// Longer side fills the rectangle; aspect ratio kept, centered.
    Contain,
}

/// One entity to draw, in world coordinates (y down).
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub kind: DrawKind,
    pub rect: Rect,
    pub visual: Visual,
    pub fit: ImageFit,
}

pub trait RenderAdapter {
    /// Starts a new frame for a world of the given size.
    fn clear(&mut self, world_size: Vec2);

    fn draw(&mut self, drawable: &Drawable);
}

/// Emits one frame: background, terminals in order, then the player.
pub fn render_frame<R: RenderAdapter>(
    session: &InteractionLoop,
    assets: &AssetStatus,
    adapter: &mut R,
) {
    let world = session.world_size();
    adapter.clear(world);

    adapter.draw(&Drawable {
        kind: DrawKind::Background,
        rect: Rect::from_corners(Vec2::ZERO, world),
        visual: visual_for(assets, AssetKind::Background, BACKGROUND_FALLBACK),
        fit: ImageFit::Stretch,
    });

    let terminal = visual_for(assets, AssetKind::Terminal, TERMINAL_FALLBACK);
    for (index, zone) in session.zones().iter().enumerate() {
        adapter.draw(&Drawable {
            kind: DrawKind::Zone(index),
            rect: zone.rect(),
            visual: terminal,
            fit: ImageFit::Stretch,
        });
    }

    adapter.draw(&Drawable {
        kind: DrawKind::Player,
        rect: session.player().rect(),
        visual: visual_for(assets, AssetKind::Player, PLAYER_FALLBACK),
        fit: ImageFit::Contain,
    });
}

/// Largest size with the aspect ratio of `image` that fits inside `bounds`.
pub fn contain_size(bounds: Vec2, image: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return bounds;
    }
    image * (bounds.x / image.x).min(bounds.y / image.y)
}

fn visual_for(assets: &AssetStatus, kind: AssetKind, fallback: Color) -> Visual {
    if assets.is_loaded(kind) {
        Visual::Image(kind)
    } else {
        Visual::Fallback(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_fits_the_longer_side() {
        let bounds = Vec2::splat(80.0);

        assert_eq!(contain_size(bounds, Vec2::new(64.0, 32.0)), Vec2::new(80.0, 40.0));
        assert_eq!(contain_size(bounds, Vec2::new(30.0, 60.0)), Vec2::new(40.0, 80.0));
        assert_eq!(contain_size(bounds, Vec2::splat(16.0)), bounds);
    }

    #[test]
    fn contain_keeps_bounds_for_empty_images() {
        assert_eq!(
            contain_size(Vec2::splat(80.0), Vec2::ZERO),
            Vec2::splat(80.0)
        );
    }
}
