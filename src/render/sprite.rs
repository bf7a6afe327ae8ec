//! Engine-driven adapter: draw calls become `Transform`/`Sprite` writes on scene entities.
use bevy::prelude::*;

use super::adapter::{contain_size, DrawKind, Drawable, ImageFit, RenderAdapter, Visual};
use crate::assets::AssetHandles;

pub type SceneSpriteQuery<'w, 's> =
    Query<'w, 's, (&'static DrawKind, &'static mut Transform, &'static mut Sprite)>;

/// Converts a world point (origin top-left, y down) into scene space (origin centered, y up).
pub fn world_to_scene(point: Vec2, world_size: Vec2) -> Vec2 {
    Vec2::new(point.x - world_size.x * 0.5, world_size.y * 0.5 - point.y)
}

pub fn scene_to_world(point: Vec2, world_size: Vec2) -> Vec2 {
    Vec2::new(point.x + world_size.x * 0.5, world_size.y * 0.5 - point.y)
}

pub struct SpriteAdapter<'a, 'w, 's> {
    handles: &'a AssetHandles,
    images: &'a Assets<Image>,
    sprites: &'a mut SceneSpriteQuery<'w, 's>,
    world_size: Vec2,
}

impl<'a, 'w, 's> SpriteAdapter<'a, 'w, 's> {
    pub fn new(
        handles: &'a AssetHandles,
        images: &'a Assets<Image>,
        sprites: &'a mut SceneSpriteQuery<'w, 's>,
    ) -> Self {
        Self {
            handles,
            images,
            sprites,
            world_size: Vec2::ZERO,
        }
    }

    /// On-screen size; placeholders always fill the whole rectangle.
    fn display_size(&self, drawable: &Drawable) -> Vec2 {
        let bounds = drawable.rect.size();
        match (drawable.visual, drawable.fit) {
            (Visual::Image(asset), ImageFit::Contain) => self
                .images
                .get(self.handles.get(asset))
                .map_or(bounds, |image| contain_size(bounds, image.size_f32())),
            _ => bounds,
        }
    }
}

impl RenderAdapter for SpriteAdapter<'_, '_, '_> {
    fn clear(&mut self, world_size: Vec2) {
        self.world_size = world_size;
    }

    fn draw(&mut self, drawable: &Drawable) {
        let size = Some(self.display_size(drawable));
        let Some((kind, mut transform, mut sprite)) = self
            .sprites
            .iter_mut()
            .find(|(kind, _, _)| **kind == drawable.kind)
        else {
            return;
        };

        let center = world_to_scene(drawable.rect.center(), self.world_size);
        let translation = center.extend(kind.depth());
        if transform.translation != translation {
            transform.translation = translation;
        }

        let (image, color) = match drawable.visual {
            Visual::Image(asset) => (self.handles.get(asset).clone(), Color::WHITE),
            Visual::Fallback(color) => (Handle::default(), color),
        };
        if sprite.custom_size != size || sprite.image != image || sprite.color != color {
            sprite.custom_size = size;
            sprite.image = image;
            sprite.color = color;
        }
    }
}
