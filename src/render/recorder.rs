//! Headless canvas adapter that records draw calls instead of touching the engine.
use bevy::math::Vec2;
#[cfg(feature = "core_debug")]
use serde::Serialize;

use super::adapter::{DrawKind, Drawable, RenderAdapter, Visual};

#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    world_size: Option<Vec2>,
    drawn: Vec<Drawable>,
}

impl FrameRecorder {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn world_size(&self) -> Option<Vec2> {
        self.world_size
    }

    pub fn drawn(&self) -> &[Drawable] {
        &self.drawn
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn find(&self, kind: DrawKind) -> Option<&Drawable> {
        self.drawn.iter().find(|drawable| drawable.kind == kind)
    }

    /// JSON dump of the last frame, one object per draw call.
    #[cfg(feature = "core_debug")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<DrawRecord> = self.drawn.iter().map(DrawRecord::from).collect();
        serde_json::to_string(&records)
    }
}

impl RenderAdapter for FrameRecorder {
    fn clear(&mut self, world_size: Vec2) {
        self.world_size = Some(world_size);
        self.drawn.clear();
    }

    fn draw(&mut self, drawable: &Drawable) {
        self.drawn.push(drawable.clone());
    }
}

#[cfg(feature = "core_debug")]
#[derive(Debug, Serialize)]
struct DrawRecord {
    kind: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    visual: String,
}

#[cfg(feature = "core_debug")]
impl From<&Drawable> for DrawRecord {
    fn from(drawable: &Drawable) -> Self {
        let kind = match drawable.kind {
            DrawKind::Background => "background".to_string(),
            DrawKind::Zone(index) => format!("zone{}", index),
            DrawKind::Player => "player".to_string(),
        };
        let visual = match drawable.visual {
            Visual::Image(asset) => format!("image:{}", asset),
            Visual::Fallback(color) => format!("fill:{}", color.to_srgba().to_hex()),
        };
        let size = drawable.rect.size();
        Self {
            kind,
            x: drawable.rect.min.x,
            y: drawable.rect.min.y,
            width: size.x,
            height: size.y,
            visual,
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Rect;

    use super::*;
    use crate::{
        assets::{
            components::{AssetLoadFailure, LoadResult},
            AssetKind, AssetStatus,
        },
        core::config::WalkConfig,
        render::adapter::{render_frame, ImageFit, PLAYER_FALLBACK},
        session::{InteractionLoop, MovableBody},
    };

    fn session() -> InteractionLoop {
        InteractionLoop::new(WalkConfig::default().session_setup())
    }

    #[test]
    fn frame_draws_background_zones_then_player() {
        let session = session();
        let mut recorder = FrameRecorder::default();

        render_frame(&session, &AssetStatus::all_loaded(), &mut recorder);

        let kinds: Vec<_> = recorder.drawn().iter().map(|drawable| drawable.kind).collect();
        assert_eq!(
            kinds,
            [
                DrawKind::Background,
                DrawKind::Zone(0),
                DrawKind::Zone(1),
                DrawKind::Zone(2),
                DrawKind::Player,
            ]
        );
        assert_eq!(recorder.world_size(), Some(session.world_size()));
        assert_eq!(
            recorder.find(DrawKind::Zone(0)).map(|drawable| drawable.rect),
            Some(Rect::new(126.0, 126.0, 174.0, 174.0))
        );
        assert_eq!(
            recorder.find(DrawKind::Player).map(|drawable| drawable.visual),
            Some(Visual::Image(AssetKind::Player))
        );
        assert_eq!(
            recorder.find(DrawKind::Player).map(|drawable| drawable.fit),
            Some(ImageFit::Contain)
        );
        assert_eq!(
            recorder.find(DrawKind::Background).map(|drawable| drawable.fit),
            Some(ImageFit::Stretch)
        );
    }

    #[test]
    fn failed_image_falls_back_without_touching_the_session() {
        let session = session();
        let before = session.player().rect();
        let status = AssetStatus::new(
            LoadResult::Failed(AssetLoadFailure {
                kind: AssetKind::Player,
                path: "player.png".to_string(),
                reason: "Path not found".to_string(),
            }),
            LoadResult::Loaded,
            LoadResult::Loaded,
        );
        let mut recorder = FrameRecorder::default();

        render_frame(&session, &status, &mut recorder);

        let player = recorder.find(DrawKind::Player).expect("player drawn");
        assert_eq!(player.visual, Visual::Fallback(PLAYER_FALLBACK));
        assert_eq!(player.rect, before);
        assert_eq!(session.player().rect(), before);
        assert_eq!(
            recorder.find(DrawKind::Zone(1)).map(|drawable| drawable.visual),
            Some(Visual::Image(AssetKind::Terminal))
        );
    }

    #[test]
    fn clear_starts_a_fresh_frame() {
        let session = session();
        let mut recorder = FrameRecorder::default();

        render_frame(&session, &AssetStatus::all_loaded(), &mut recorder);
        render_frame(&session, &AssetStatus::all_loaded(), &mut recorder);

        assert_eq!(recorder.drawn().len(), 5);
    }
}
