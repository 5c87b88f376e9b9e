//! # PosterKit Scene
//!
//! The editing state of a poster: geometry helpers, the element model, the
//! scene store that owns background, layers, selection and view scale, the
//! viewport debouncer and the upload boundary that turns dropped files into
//! backgrounds or image layers.
//!
//! ```
//! use posterkit_scene::{SceneStore, Size};
//!
//! let mut store = SceneStore::new();
//! store.set_background("data:image/png;base64,AAAA", 800.0, 600.0);
//! let id = store.add_rect();
//! assert_eq!(store.selected_id(), Some(id));
//! assert_eq!(store.element(id).map(|e| e.size), Some(Size::new(100.0, 100.0)));
//! ```

pub mod geometry;
pub mod model;
pub mod store;
pub mod upload;
pub mod viewport;

pub use geometry::{Anchor, Frame, Placement, Point, Size};
pub use model::{
    Background, Element, ElementId, ElementKind, ElementType, ImageLayer, InitialProps,
    NewElement, RectLayer, RectStyle, RectStylePatch, TextAlign, TextLayer, TextStylePatch,
    VerticalAlign,
};
pub use store::{ElementChange, Outcome, SceneEvent, SceneEventCategory, SceneStore};
pub use upload::{
    decode, DecodedImage, PendingUpload, UploadApplied, UploadBlob, UploadCoordinator,
    UploadError, UploadResult, UploadTarget,
};
pub use viewport::ResizeDebouncer;
