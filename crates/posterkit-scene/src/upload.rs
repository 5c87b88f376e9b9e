//! Upload boundary.
//!
//! An upload goes through three steps:
//! 1. [`UploadCoordinator::submit`] checks the MIME type and decides whether
//!    the image becomes the background or a new image layer.
//! 2. [`decode`] reads the intrinsic size and builds a data URL off the
//!    event loop.
//! 3. [`UploadCoordinator::complete`] applies the result to the store.
//!
//! The background role is claimed at submit time, so two uploads started
//! before either finishes can never both become the background.

use base64::{engine::general_purpose, Engine as _};
use tracing::{debug, warn};

use crate::geometry::{fit_within, Point, Size};
use crate::model::{ElementId, InitialProps, NewElement};
use crate::store::SceneStore;

/// Errors from decoding an uploaded image
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The bytes are not a readable image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded to zero pixels.
    #[error("Image has no pixels")]
    EmptyImage,

    /// The blocking decode task did not finish.
    #[error("Decode task failed: {0}")]
    Task(String),
}

pub type UploadResult<T> = Result<T, UploadError>;

/// Raw file contents handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadBlob {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadBlob {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.trim().to_ascii_lowercase().starts_with("image/")
    }
}

/// Role an upload will take once decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Background,
    Layer,
}

/// An accepted upload waiting to be decoded.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub target: UploadTarget,
    pub blob: UploadBlob,
}

/// Intrinsic size and source reference of a decoded image.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// `data:<mime>;base64,...`
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// What an applied upload changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadApplied {
    Background,
    Layer(ElementId),
}

/// Decode off the event loop.
pub async fn decode(blob: UploadBlob) -> UploadResult<DecodedImage> {
    tokio::task::spawn_blocking(move || decode_blocking(&blob))
        .await
        .map_err(|e| UploadError::Task(e.to_string()))?
}

/// Decode on the calling thread.
pub fn decode_blocking(blob: &UploadBlob) -> UploadResult<DecodedImage> {
    let image = image::load_from_memory(&blob.bytes)?;
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(UploadError::EmptyImage);
    }
    let encoded = general_purpose::STANDARD.encode(&blob.bytes);
    debug!("Decoded {} upload, {}x{}", blob.mime, width, height);
    Ok(DecodedImage {
        src: format!("data:{};base64,{}", blob.mime.trim(), encoded),
        width,
        height,
    })
}

/// Serializes the background decision across concurrent uploads.
#[derive(Debug, Default)]
pub struct UploadCoordinator {
    background_claimed: bool,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_claimed(&self) -> bool {
        self.background_claimed
    }

    /// Accept an upload. Non-image MIME types are ignored.
    pub fn submit(&mut self, store: &SceneStore, blob: UploadBlob) -> Option<PendingUpload> {
        if !blob.is_image() {
            debug!("Ignoring upload with MIME type {:?}", blob.mime);
            return None;
        }
        let target = if store.has_background() || self.background_claimed {
            UploadTarget::Layer
        } else {
            self.background_claimed = true;
            UploadTarget::Background
        };
        debug!("Upload accepted as {:?}", target);
        Some(PendingUpload { target, blob })
    }

    /// Apply a decode result.
    ///
    /// Failures leave the store untouched; a failed background upload
    /// releases the claim so the next upload can become the background.
    pub fn complete(
        &mut self,
        store: &mut SceneStore,
        target: UploadTarget,
        decoded: UploadResult<DecodedImage>,
    ) -> UploadResult<UploadApplied> {
        let image = match decoded {
            Ok(image) => image,
            Err(e) => {
                warn!("Upload failed: {}", e);
                if target == UploadTarget::Background {
                    self.background_claimed = false;
                }
                return Err(e);
            }
        };

        match target {
            UploadTarget::Background => {
                store.set_background(image.src, image.width as f64, image.height as f64);
                Ok(UploadApplied::Background)
            }
            UploadTarget::Layer => {
                let (position, size) = fitted_placement(store, image.size());
                let id = store.add_element(
                    NewElement::Image {
                        src: image.src,
                        size,
                    },
                    Some(InitialProps::at(position)),
                );
                Ok(UploadApplied::Layer(id))
            }
        }
    }
}

/// Fit an image layer within a fraction of the viewport, centered on the
/// visible area.
fn fitted_placement(store: &SceneStore, intrinsic: Size) -> (Point, Size) {
    let ratio = store.config().viewport.image_fit_ratio;
    let viewport = store.viewport();
    let size = fit_within(intrinsic, viewport.scaled(ratio));
    let visible = viewport.scaled(1.0 / store.view_scale());
    let position = Point::new(
        (visible.width - size.width) / 2.0,
        (visible.height - size.height) / 2.0,
    );
    (position, size)
}
