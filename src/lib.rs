//! # PosterKit
//!
//! Engine of a layered poster/image editor: a background image plus image,
//! rectangle and text layers that are moved, resized, rotated, restyled and
//! deleted through direct manipulation and a property toolbar.
//!
//! ## Architecture
//!
//! PosterKit is organized as a workspace with multiple crates:
//!
//! 1. **posterkit-core** - Event bus and shared-ownership aliases
//! 2. **posterkit-settings** - Editor configuration (TOML/JSON)
//! 3. **posterkit-scene** - Geometry, element model, scene store, uploads
//! 4. **posterkit-ui** - Canvas interaction layer, toolbar, material bar
//! 5. **posterkit** - This crate: re-exports, [`PosterEditor`] and logging
//!
//! A host toolkit owns the window and the drawing. It forwards pointer
//! events to [`EditorCanvas`], draws its nodes and overlay, and renders the
//! [`Toolbar`] model.

use std::path::Path;

use anyhow::Context;

pub use posterkit_core::{shared, EventFilter, Shared, SubscriptionId};
pub use posterkit_settings::{EditorConfig, PlacementPolicy, SettingsError};
pub use posterkit_scene as scene;
pub use posterkit_scene::{
    Anchor, Background, Element, ElementId, ElementKind, ElementType, Outcome, Point,
    SceneEvent, SceneEventCategory, SceneStore, Size, UploadBlob, UploadError,
};
pub use posterkit_ui as ui;
pub use posterkit_ui::{EditorCanvas, MaterialBar, Toolbar, ToolbarAction, ToolbarModel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// One editing session: the store and every view bound to it.
pub struct PosterEditor {
    pub store: Shared<SceneStore>,
    pub canvas: EditorCanvas,
    pub toolbar: Toolbar,
    pub materials: MaterialBar,
}

impl PosterEditor {
    pub fn new(config: EditorConfig) -> Self {
        let store = shared(SceneStore::with_config(config));
        Self {
            canvas: EditorCanvas::new(store.clone()),
            toolbar: Toolbar::new(store.clone()),
            materials: MaterialBar::new(store.clone()),
            store,
        }
    }

    /// Build an editor from a config file, falling back to defaults when
    /// the file does not exist.
    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = EditorConfig::load_or_default(path)
            .with_context(|| format!("Failed to load editor config from {}", path.display()))?;
        Ok(Self::new(config))
    }

    /// Build an editor from the platform config location.
    pub fn from_default_config() -> anyhow::Result<Self> {
        let path = EditorConfig::default_path().context("No config directory on this platform")?;
        Self::from_config_file(path)
    }
}

impl Default for PosterEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Logging was already initialized")?;

    Ok(())
}
