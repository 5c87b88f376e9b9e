//! Interactive nodes, one per element.

use posterkit_scene::{Element, ElementId, ElementKind, ElementType, Frame, Point, Size};

/// Scratch transform a node carries while it is being manipulated.
///
/// Between gestures it mirrors the element: position and rotation equal the
/// stored values and both scales are 1. A gesture writes to it freely; the
/// commit at gesture end copies it into the store and resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl NodeTransform {
    pub fn from_element(element: &Element) -> Self {
        Self {
            x: element.position.x,
            y: element.position.y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: element.rotation,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn is_unscaled(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

/// An element as the host should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasNode {
    pub id: ElementId,
    pub element_type: ElementType,
    /// Stored size (before the element's own scale)
    pub size: Size,
    /// The element's own uniform scale
    pub element_scale: f64,
    pub opacity: f64,
    pub kind: ElementKind,
    pub transform: NodeTransform,
    pub selected: bool,
    /// False while the node is hidden behind an inline editor
    pub visible: bool,
}

impl CanvasNode {
    pub fn from_element(element: &Element, selected: bool) -> Self {
        Self {
            id: element.id,
            element_type: element.element_type(),
            size: element.size,
            element_scale: element.scale,
            opacity: element.opacity,
            kind: element.kind.clone(),
            transform: NodeTransform::from_element(element),
            selected,
            visible: true,
        }
    }

    /// Painted size with no transient scale applied
    pub fn base_size(&self) -> Size {
        self.size.scaled(self.element_scale)
    }

    /// Live box, including any in-progress gesture.
    pub fn frame(&self) -> Frame {
        let base = self.base_size();
        Frame::new(
            self.transform.position(),
            Size::new(
                base.width * self.transform.scale_x,
                base.height * self.transform.scale_y,
            ),
            self.transform.rotation,
        )
    }
}
