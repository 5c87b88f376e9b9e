//! PosterKit Settings Crate
//!
//! Editor configuration: interaction limits, transform snapping, default
//! element appearance, placement policy and viewport tuning. Configuration
//! is stored as TOML or JSON in the platform config directory.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, DefaultsSettings, EditorConfig, PlacementPolicy, PlacementSettings,
    RectDefaults, TextDefaults, TransformSettings, ViewportSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
