//! Resources describing the three images and how their loads resolved.
use std::fmt;

use bevy::prelude::*;

/// The fixed set of images the walk draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Player,
    Terminal,
    Background,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Player, AssetKind::Terminal, AssetKind::Background];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Terminal => "terminal",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Handles for the in-flight (or finished) image loads.
#[derive(Resource, Debug, Clone)]
pub struct AssetHandles {
    pub player: Handle<Image>,
    pub terminal: Handle<Image>,
    pub background: Handle<Image>,
}

impl AssetHandles {
    pub fn get(&self, kind: AssetKind) -> &Handle<Image> {
        match kind {
            AssetKind::Player => &self.player,
            AssetKind::Terminal => &self.terminal,
            AssetKind::Background => &self.background,
        }
    }
}

/// Why an image could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadFailure {
    pub kind: AssetKind,
    pub path: String,
    pub reason: String,
}

impl fmt::Display for AssetLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to load {} image '{}': {}",
            self.kind, self.path, self.reason
        )
    }
}

impl std::error::Error for AssetLoadFailure {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Loaded,
    Failed(AssetLoadFailure),
}

impl LoadResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Resolved once, before the walk loop starts.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct AssetStatus {
    player: LoadResult,
    terminal: LoadResult,
    background: LoadResult,
}

impl AssetStatus {
    pub fn new(player: LoadResult, terminal: LoadResult, background: LoadResult) -> Self {
        Self {
            player,
            terminal,
            background,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn all_loaded() -> Self {
        Self::new(LoadResult::Loaded, LoadResult::Loaded, LoadResult::Loaded)
    }

    pub fn get(&self, kind: AssetKind) -> &LoadResult {
        match kind {
            AssetKind::Player => &self.player,
            AssetKind::Terminal => &self.terminal,
            AssetKind::Background => &self.background,
        }
    }

    pub fn is_loaded(&self, kind: AssetKind) -> bool {
        self.get(kind).is_loaded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssetLoadFailure> {
        AssetKind::ALL
            .into_iter()
            .filter_map(|kind| match self.get(kind) {
                LoadResult::Failed(failure) => Some(failure),
                LoadResult::Loaded => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(kind: AssetKind, path: &str) -> LoadResult {
        LoadResult::Failed(AssetLoadFailure {
            kind,
            path: path.to_string(),
            reason: "Path not found".to_string(),
        })
    }

    #[test]
    fn failures_are_listed_in_kind_order() {
        let status = AssetStatus::new(
            LoadResult::Loaded,
            failed(AssetKind::Terminal, "terminal.png"),
            failed(AssetKind::Background, "dirtandgrasstileset.png"),
        );

        let kinds: Vec<_> = status.failures().map(|failure| failure.kind).collect();
        assert_eq!(kinds, [AssetKind::Terminal, AssetKind::Background]);
        assert!(status.is_loaded(AssetKind::Player));
        assert!(!status.is_loaded(AssetKind::Terminal));
    }

    #[test]
    fn failure_message_names_kind_and_path() {
        let LoadResult::Failed(failure) = failed(AssetKind::Player, "player.png") else {
            panic!("expected failure");
        };
        let message = failure.to_string();
        assert!(message.contains("player image 'player.png'"));
        assert!(message.contains("Path not found"));
    }
}
