//! Selection overlay: the box and handles drawn around the selected node.

use posterkit_scene::geometry::rotate;
use posterkit_scene::{Anchor, ElementId, Frame, Point};

/// Distance of the rotation handle above the top edge, in scene units
pub const ROTATE_HANDLE_OFFSET: f64 = 40.0;

/// Pick radius around a handle, in screen pixels
pub const HANDLE_HIT_RADIUS: f64 = 8.0;

/// A draggable control on the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Resize(Anchor),
    Rotate,
}

/// Geometry of the overlay for the selected node
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOverlay {
    pub id: ElementId,
    pub frame: Frame,
    pub anchors: [(Anchor, Point); 4],
    pub rotate_handle: Point,
}

impl SelectionOverlay {
    pub fn new(id: ElementId, frame: Frame) -> Self {
        let anchors = Anchor::ALL.map(|anchor| (anchor, frame.anchor_point(anchor)));
        let top_center = frame.position + rotate(Point::new(frame.size.width / 2.0, 0.0), frame.rotation);
        let rotate_handle = top_center + rotate(Point::new(0.0, -ROTATE_HANDLE_OFFSET), frame.rotation);
        Self {
            id,
            frame,
            anchors,
            rotate_handle,
        }
    }

    /// Handle under `point`, if any. `radius` is in scene units.
    pub fn handle_at(&self, point: Point, radius: f64) -> Option<Handle> {
        if self.rotate_handle.distance_to(&point) <= radius {
            return Some(Handle::Rotate);
        }
        self.anchors
            .iter()
            .find(|(_, p)| p.distance_to(&point) <= radius)
            .map(|(anchor, _)| Handle::Resize(*anchor))
    }
}
