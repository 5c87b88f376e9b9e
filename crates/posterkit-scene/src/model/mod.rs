//! Element model
//!
//! Elements are a tagged union: the geometry every layer shares lives on
//! [`Element`], the variant payload lives in [`ElementKind`]. The background
//! is modelled separately because it is never selected, moved or deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{Frame, Point, Size};

mod background;
mod id;
mod image;
mod rect;
mod text;

pub use background::Background;
pub use id::{ElementId, IdGenerator, ParseElementIdError};
pub use image::ImageLayer;
pub use rect::{RectLayer, RectStyle, RectStylePatch};
pub use text::{TextAlign, TextLayer, TextStylePatch, VerticalAlign};

/// Variant discriminant, for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Image,
    Rect,
    Text,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Image => write!(f, "image"),
            ElementType::Rect => write!(f, "rect"),
            ElementType::Text => write!(f, "text"),
        }
    }
}

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Image(ImageLayer),
    Rect(RectLayer),
    Text(TextLayer),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Image(_) => ElementType::Image,
            ElementKind::Rect(_) => ElementType::Rect,
            ElementKind::Text(_) => ElementType::Text,
        }
    }
}

/// A layer on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub position: Point,
    pub size: Size,
    /// Degrees in `[0, 360)`
    pub rotation: f64,
    /// Uniform display multiplier
    pub scale: f64,
    /// `[0, 1]`
    pub opacity: f64,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id: ElementId, position: Point, size: Size, kind: ElementKind) -> Self {
        Self {
            id,
            position,
            size,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            kind,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Box as painted: size multiplied by the element's own scale.
    pub fn frame(&self) -> Frame {
        Frame::new(self.position, self.size.scaled(self.scale), self.rotation)
    }

    pub fn as_rect(&self) -> Option<&RectLayer> {
        match &self.kind {
            ElementKind::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLayer> {
        match &self.kind {
            ElementKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageLayer> {
        match &self.kind {
            ElementKind::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// What kind of element to create.
#[derive(Debug, Clone, PartialEq)]
pub enum NewElement {
    /// An image layer of the given intrinsic (or fitted) size
    Image { src: String, size: Size },
    Rect,
    Text,
}

impl NewElement {
    pub fn element_type(&self) -> ElementType {
        match self {
            NewElement::Image { .. } => ElementType::Image,
            NewElement::Rect => ElementType::Rect,
            NewElement::Text => ElementType::Text,
        }
    }
}

/// Optional overrides applied on top of the defaults when adding an element.
///
/// Fields that do not apply to the created variant are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InitialProps {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub rotation: Option<f64>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
    pub corner_radius: Option<f64>,
    pub rect_style: RectStylePatch,
    pub text: Option<String>,
    pub text_style: TextStylePatch,
}

impl InitialProps {
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}
