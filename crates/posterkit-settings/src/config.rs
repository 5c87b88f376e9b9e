//! Editor configuration for PosterKit
//!
//! Configuration is organized into logical sections:
//! - Canvas limits (minimum element size, view and element scale ranges)
//! - Transform handle behaviour (rotation snapping)
//! - Placement policy for newly created elements
//! - Default appearance of new rectangles and text
//! - Viewport tuning (resize debounce, image fit ratio)
//!
//! Every section falls back to its defaults when missing from the file.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory name under the platform config dir
const APP_DIR: &str = "posterkit";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Canvas-wide limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Smallest width/height an element may be resized to
    pub min_element_size: f64,
    /// Lower bound of the global view scale
    pub min_view_scale: f64,
    /// Upper bound of the global view scale
    pub max_view_scale: f64,
    /// Lower bound of an element's own scale
    pub min_element_scale: f64,
    /// Upper bound of an element's own scale
    pub max_element_scale: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            min_element_size: 5.0,
            min_view_scale: 0.5,
            max_view_scale: 3.0,
            min_element_scale: 0.1,
            max_element_scale: 10.0,
        }
    }
}

/// Transform handle behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Snap points are multiples of this angle, in degrees
    pub rotation_snap_step: f64,
    /// Angular distance (degrees) within which rotation snaps
    pub rotation_snap_tolerance: f64,
    /// Step applied by the toolbar rotate buttons, in degrees
    pub rotate_button_step: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            rotation_snap_step: 45.0,
            rotation_snap_tolerance: 15.0,
            rotate_button_step: 90.0,
        }
    }
}

/// Where newly added elements are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Center the element on the visible viewport
    #[default]
    Centered,
    /// Put the element's top-left corner at a fixed offset
    FixedOffset,
}

impl std::fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Centered => write!(f, "centered"),
            Self::FixedOffset => write!(f, "fixed_offset"),
        }
    }
}

/// Placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    pub policy: PlacementPolicy,
    /// Top-left corner used by [`PlacementPolicy::FixedOffset`]
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            policy: PlacementPolicy::Centered,
            offset_x: 100.0,
            offset_y: 100.0,
        }
    }
}

/// Appearance of a freshly added rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectDefaults {
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl Default for RectDefaults {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            fill: "#ffffff".to_string(),
            stroke: "#1890ff".to_string(),
            stroke_width: 2.0,
            corner_radius: 0.0,
        }
    }
}

/// Appearance of a freshly added text layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    /// Placeholder copy shown until the user edits the text
    pub placeholder: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 40.0,
            font_size: 20.0,
            font_family: "Arial".to_string(),
            fill: "#000000".to_string(),
            placeholder: "Double-click to edit".to_string(),
        }
    }
}

/// Defaults for new elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    pub rect: RectDefaults,
    pub text: TextDefaults,
}

/// Viewport tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Quiet period before a host resize is applied
    pub resize_debounce_ms: u64,
    /// Uploaded image layers are fitted within this fraction of the viewport
    pub image_fit_ratio: f64,
    /// Surface size assumed before the host reports one
    pub initial_width: f64,
    pub initial_height: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 200,
            image_fit_ratio: 0.5,
            initial_width: 800.0,
            initial_height: 600.0,
        }
    }
}

impl ViewportSettings {
    /// Resize debounce as a [`Duration`]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas: CanvasSettings,
    pub transform: TransformSettings,
    pub placement: PlacementSettings,
    pub defaults: DefaultsSettings,
    pub viewport: ViewportSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/posterkit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory is unknown".to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or fall back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let canvas = &self.canvas;
        positive("canvas.min_element_size", canvas.min_element_size)?;
        positive("canvas.min_view_scale", canvas.min_view_scale)?;
        ordered("canvas.view_scale", canvas.min_view_scale, canvas.max_view_scale)?;
        positive("canvas.min_element_scale", canvas.min_element_scale)?;
        ordered(
            "canvas.element_scale",
            canvas.min_element_scale,
            canvas.max_element_scale,
        )?;

        let transform = &self.transform;
        positive("transform.rotation_snap_step", transform.rotation_snap_step)?;
        if !(0.0..=transform.rotation_snap_step / 2.0).contains(&transform.rotation_snap_tolerance) {
            return Err(out_of_range(
                "transform.rotation_snap_tolerance",
                transform.rotation_snap_tolerance,
            ));
        }

        let rect = &self.defaults.rect;
        if rect.width < canvas.min_element_size || rect.height < canvas.min_element_size {
            return Err(out_of_range("defaults.rect.size", rect.width.min(rect.height)));
        }
        if rect.stroke_width < 0.0 || rect.corner_radius < 0.0 {
            return Err(out_of_range(
                "defaults.rect.stroke_width",
                rect.stroke_width.min(rect.corner_radius),
            ));
        }

        let text = &self.defaults.text;
        positive("defaults.text.font_size", text.font_size)?;
        if text.width < canvas.min_element_size || text.height < canvas.min_element_size {
            return Err(out_of_range("defaults.text.size", text.width.min(text.height)));
        }
        if text.font_family.trim().is_empty() {
            return Err(ConfigError::Empty("defaults.text.font_family".to_string()));
        }

        let viewport = &self.viewport;
        if !(viewport.image_fit_ratio > 0.0 && viewport.image_fit_ratio <= 1.0) {
            return Err(out_of_range(
                "viewport.image_fit_ratio",
                viewport.image_fit_ratio,
            ));
        }
        positive("viewport.initial_width", viewport.initial_width)?;
        positive("viewport.initial_height", viewport.initial_height)?;

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn ordered(key: &str, min: f64, max: f64) -> ConfigResult<()> {
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            key: key.to_string(),
            min,
            max,
        })
    }
}
