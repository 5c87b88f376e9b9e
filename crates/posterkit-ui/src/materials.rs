//! Material bar: the element-creation surface.
//!
//! Creating text, rectangles and image layers is only offered once the scene
//! has a background. The plain [`MaterialBar::upload`] path is the drop area
//! shown before that; its first image becomes the background.

use std::cell::RefCell;

use posterkit_core::Shared;
use posterkit_scene::upload::decode;
use posterkit_scene::{ElementId, SceneStore, UploadApplied, UploadBlob, UploadCoordinator, UploadResult};
use tracing::debug;

pub struct MaterialBar {
    store: Shared<SceneStore>,
    uploads: RefCell<UploadCoordinator>,
}

impl MaterialBar {
    pub fn new(store: Shared<SceneStore>) -> Self {
        Self {
            store,
            uploads: RefCell::new(UploadCoordinator::new()),
        }
    }

    /// Whether the bar is shown at all
    pub fn is_enabled(&self) -> bool {
        self.store.borrow().has_background()
    }

    pub fn add_text(&self) -> Option<ElementId> {
        if !self.is_enabled() {
            debug!("Add text ignored, no background");
            return None;
        }
        Some(self.store.borrow_mut().add_text())
    }

    pub fn add_rect(&self) -> Option<ElementId> {
        if !self.is_enabled() {
            debug!("Add rect ignored, no background");
            return None;
        }
        Some(self.store.borrow_mut().add_rect())
    }

    /// Add an uploaded image as a new layer. `Ok(None)` when the bar is
    /// disabled or the file is not an image.
    pub async fn add_image(&self, blob: UploadBlob) -> UploadResult<Option<UploadApplied>> {
        if !self.is_enabled() {
            debug!("Add image ignored, no background");
            return Ok(None);
        }
        self.upload(blob).await
    }

    /// Upload from the drop area: background first, image layers after.
    pub async fn upload(&self, blob: UploadBlob) -> UploadResult<Option<UploadApplied>> {
        let pending = {
            let store = self.store.borrow();
            self.uploads.borrow_mut().submit(&store, blob)
        };
        let Some(pending) = pending else {
            return Ok(None);
        };

        let decoded = decode(pending.blob).await;
        let mut store = self.store.borrow_mut();
        let applied = self
            .uploads
            .borrow_mut()
            .complete(&mut store, pending.target, decoded)?;
        Ok(Some(applied))
    }
}
