//! # PosterKit UI
//!
//! Toolkit-independent interaction logic for the poster editor: the canvas
//! layer that maps elements to interactive nodes and pointer gestures to
//! store mutations, the property toolbar and the material bar. A host
//! toolkit draws what these expose and forwards pointer events to them.

pub mod canvas;
pub mod materials;
pub mod toolbar;

pub use canvas::{
    CanvasNode, EditorCanvas, Handle, HitTarget, NodeTransform, Propagation, SelectionOverlay,
    TextEditOverlay,
};
pub use materials::MaterialBar;
pub use toolbar::{
    SliderEcho, Toolbar, ToolbarAction, ToolbarModel, VariantControls, FONT_FAMILIES,
    SCALE_DOWN_FACTOR, SCALE_UP_FACTOR,
};
