//! Startup configuration
//!
//! Everything is fixed at compile time; these types only gather the defaults
//! in one place so the app and tests build from the same values.

use std::path::PathBuf;
use std::time::Duration;

use crate::frame_gate::DEFAULT_FRAME_INTERVAL;
use crate::physics::{InitialConditions, Parameters};

/// Visible half-height of the world in simulation units
pub const VIEW_HALF_HEIGHT: f32 = 100.0;

/// Background quad size in world units
pub const BACKGROUND_SIZE: [f32; 2] = [800.0, 600.0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Coulomb Interaction".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Sprite images, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub background: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            positive: dir.join("positive.png"),
            negative: dir.join("negative.png"),
            background: dir.join("space.png"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    pub params: Parameters,
    pub initial: InitialConditions,
    pub frame_interval: FrameInterval,
}

/// Frame gate threshold, 120 Hz unless overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInterval(pub Duration);

impl Default for FrameInterval {
    fn default() -> Self {
        Self(DEFAULT_FRAME_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_resolve_inside_the_crate() {
        let assets = AssetPaths::default();
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        assert_eq!(assets.positive, dir.join("positive.png"));
        assert_eq!(assets.negative, dir.join("negative.png"));
        assert_eq!(assets.background, dir.join("space.png"));
    }

    #[test]
    fn default_window_is_800_by_600() {
        let window = WindowConfig::default();
        assert_eq!((window.width, window.height), (800, 600));
        assert_eq!(BACKGROUND_SIZE, [window.width as f32, window.height as f32]);
    }

    #[test]
    fn default_config_uses_120hz_gate() {
        let config = SimConfig::default();
        assert_eq!(config.frame_interval.0, DEFAULT_FRAME_INTERVAL);
        assert_eq!(config.params, Parameters::default());
    }
}
