//! Interactive hotspots ("terminals") and the closeness test used to reach them.
use bevy::math::{Rect, Vec2};

use super::body::rects_overlap;

/// Default side length of a terminal, in world units.
pub const TERMINAL_SIZE: f32 = 48.0;

/// Default center-to-center reach for [`ProximityTest::Radius`].
pub const DEFAULT_INTERACTION_RADIUS: f32 = 60.0;

/// A fixed hotspot with the dialog content it reveals.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    position: Vec2,
    size: Vec2,
    title: String,
    text: String,
}

impl Zone {
    pub fn new(
        position: Vec2,
        size: Vec2,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            position,
            size,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Zone of `size` whose center sits on `center`.
    pub fn centered_at(
        center: Vec2,
        size: Vec2,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(center - size * 0.5, size, title, text)
    }

    /// Top-left corner in world coordinates.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The three portfolio terminals, laid out by center relative to the world size.
pub fn default_zones(world: Vec2) -> Vec<Zone> {
    let size = Vec2::splat(TERMINAL_SIZE);
    vec![
        Zone::centered_at(
            Vec2::new(150.0, 150.0),
            size,
            "ABOUT_ME.TXT",
            "I am an indie dev. I build systems and break things.",
        ),
        Zone::centered_at(
            Vec2::new(world.x - 200.0, 200.0),
            size,
            "DEVLOG_01",
            "Week 1: Migrated to Phaser.js for better game features and performance!",
        ),
        Zone::centered_at(
            Vec2::new(world.x / 2.0 - 30.0, world.y - 200.0),
            size,
            "GITHUB_LINK",
            "Find my source code on my GitHub.",
        ),
    ]
}

/// Decides whether the player is close enough to a zone to interact with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProximityTest {
    /// Center-to-center distance strictly below `threshold`.
    Radius { threshold: f32 },
    /// The player's rectangle overlaps the zone's rectangle.
    Overlap,
}

impl Default for ProximityTest {
    fn default() -> Self {
        Self::Radius {
            threshold: DEFAULT_INTERACTION_RADIUS,
        }
    }
}

impl ProximityTest {
    pub fn admits(&self, body: Rect, zone: &Zone) -> bool {
        match *self {
            Self::Radius { threshold } => body.center().distance(zone.center()) < threshold,
            Self::Overlap => rects_overlap(body, zone.rect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_centered_at(center: Vec2) -> Rect {
        Rect::from_center_size(center, Vec2::splat(80.0))
    }

    #[test]
    fn radius_admits_body_on_zone_center() {
        let zone = Zone::new(Vec2::new(150.0, 150.0), Vec2::splat(48.0), "A", "a");
        let test = ProximityTest::default();

        assert!(test.admits(body_centered_at(zone.center()), &zone));
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        let zone = Zone::new(Vec2::new(150.0, 150.0), Vec2::splat(48.0), "A", "a");
        let test = ProximityTest::Radius { threshold: 60.0 };

        let near = body_centered_at(zone.center() + Vec2::new(59.0, 0.0));
        let at_threshold = body_centered_at(zone.center() + Vec2::new(60.0, 0.0));
        let beyond = body_centered_at(zone.center() + Vec2::new(0.0, 61.0));

        assert!(test.admits(near, &zone));
        assert!(!test.admits(at_threshold, &zone));
        assert!(!test.admits(beyond, &zone));
    }

    #[test]
    fn overlap_uses_rectangles_not_centers() {
        let zone = Zone::new(Vec2::new(100.0, 100.0), Vec2::splat(48.0), "A", "a");
        let test = ProximityTest::Overlap;

        // Centers are more than 60 apart, but the rectangles still intersect.
        let grazing = Rect::from_corners(Vec2::new(147.0, 100.0), Vec2::new(227.0, 180.0));
        let touching = Rect::from_corners(Vec2::new(148.0, 100.0), Vec2::new(228.0, 180.0));

        assert!(test.admits(grazing, &zone));
        assert!(!test.admits(touching, &zone));
    }

    #[test]
    fn default_layout_follows_world_size() {
        let zones = default_zones(Vec2::new(1600.0, 1200.0));

        let titles: Vec<_> = zones.iter().map(Zone::title).collect();
        assert_eq!(titles, ["ABOUT_ME.TXT", "DEVLOG_01", "GITHUB_LINK"]);
        assert_eq!(zones[0].center(), Vec2::new(150.0, 150.0));
        assert_eq!(zones[1].center(), Vec2::new(1400.0, 200.0));
        assert_eq!(zones[2].center(), Vec2::new(770.0, 1000.0));
        assert_eq!(zones[0].position(), Vec2::new(126.0, 126.0));
        assert!(zones.iter().all(|zone| zone.size() == Vec2::splat(TERMINAL_SIZE)));
    }
}
