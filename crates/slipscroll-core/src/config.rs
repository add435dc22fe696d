//! Configuration
//!
//! Two layers: [`ScrollOptions`] is the constructor input for one instance
//! (targets plus callbacks, not serializable), and [`ScrollSettings`] is the
//! persistent tuning block loaded from `~/.config/slipscroll/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::TargetRef;
use crate::events::EventCallback;

/// Constructor input for a scroll instance.
///
/// `target` is the fixed-position container whose geometry is pinned;
/// `scrollable_elm` is the element translated to simulate scroll. Both
/// accept a node handle or a selector string.
pub struct ScrollOptions {
    pub target: TargetRef,
    pub scrollable_elm: TargetRef,
    /// Position interpolation factor, (0, 1].
    pub scroll_ease: f64,
    /// Speed interpolation factor, (0, 1].
    pub speed_ease: f64,
    /// Whether the instance self-drives its render loop.
    pub auto_render: bool,
    /// Fired once after successful initialization.
    pub on_init: Option<EventCallback>,
    /// Fired after every render tick.
    pub on_render: Option<EventCallback>,
    /// Opaque consumer tag, stored verbatim and never interpreted.
    pub id: Option<String>,
}

impl ScrollOptions {
    /// Options with default easing for the given target pair.
    pub fn new(target: impl Into<TargetRef>, scrollable_elm: impl Into<TargetRef>) -> Self {
        let settings = ScrollSettings::default();
        Self {
            target: target.into(),
            scrollable_elm: scrollable_elm.into(),
            scroll_ease: settings.scroll_ease,
            speed_ease: settings.speed_ease,
            auto_render: settings.auto_render,
            on_init: None,
            on_render: None,
            id: None,
        }
    }

    /// Options carrying the easing values from a settings block.
    pub fn from_settings(
        target: impl Into<TargetRef>,
        scrollable_elm: impl Into<TargetRef>,
        settings: &ScrollSettings,
    ) -> Self {
        Self {
            scroll_ease: settings.scroll_ease,
            speed_ease: settings.speed_ease,
            auto_render: settings.auto_render,
            ..Self::new(target, scrollable_elm)
        }
    }
}

/// Persistent engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Position interpolation factor
    #[serde(default = "default_scroll_ease")]
    pub scroll_ease: f64,
    /// Speed interpolation factor
    #[serde(default = "default_speed_ease")]
    pub speed_ease: f64,
    /// Self-drive the render loop
    #[serde(default = "default_true")]
    pub auto_render: bool,
    /// Render loop frame rate (0 = ~60)
    #[serde(default = "default_fps")]
    pub fps: u16,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scroll_ease: default_scroll_ease(),
            speed_ease: default_speed_ease(),
            auto_render: default_true(),
            fps: default_fps(),
        }
    }
}

fn default_scroll_ease() -> f64 {
    0.1
}

fn default_speed_ease() -> f64 {
    0.1
}

fn default_true() -> bool {
    true
}

fn default_fps() -> u16 {
    60
}

impl ScrollSettings {
    /// Load settings from file or return defaults.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file.
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Always `~/.config/slipscroll/config.toml`, on all platforms.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slipscroll")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ScrollSettings::default();
        assert!((settings.scroll_ease - 0.1).abs() < f64::EPSILON);
        assert!((settings.speed_ease - 0.1).abs() < f64::EPSILON);
        assert!(settings.auto_render);
        assert_eq!(settings.fps, 60);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: ScrollSettings = toml::from_str("scroll_ease = 0.25").unwrap();
        assert!((settings.scroll_ease - 0.25).abs() < f64::EPSILON);
        assert!((settings.speed_ease - 0.1).abs() < f64::EPSILON);
        assert!(settings.auto_render);
        assert_eq!(settings.fps, 60);
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = ScrollSettings {
            scroll_ease: 0.5,
            speed_ease: 0.2,
            auto_render: false,
            fps: 30,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: ScrollSettings = toml::from_str(&text).unwrap();
        assert!((back.scroll_ease - 0.5).abs() < f64::EPSILON);
        assert!((back.speed_ease - 0.2).abs() < f64::EPSILON);
        assert!(!back.auto_render);
        assert_eq!(back.fps, 30);
    }

    #[test]
    fn test_options_carry_settings() {
        let settings = ScrollSettings {
            scroll_ease: 0.4,
            speed_ease: 0.3,
            auto_render: false,
            fps: 30,
        };
        let options = ScrollOptions::from_settings("#main", "#content", &settings);
        assert!((options.scroll_ease - 0.4).abs() < f64::EPSILON);
        assert!((options.speed_ease - 0.3).abs() < f64::EPSILON);
        assert!(!options.auto_render);
    }
}
