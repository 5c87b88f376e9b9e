//! Gesture sessions.
//!
//! A session is opened on pointer down, updated on every pointer move and
//! closed on pointer up. Sessions only hold what they need to recompute the
//! node's scratch transform from scratch on each update, so updates never
//! compound.

use posterkit_scene::geometry::{
    handle_rotation, resize_from_anchor, rotate_about_center, snap_rotation,
};
use posterkit_scene::{ElementId, Frame, Point};
use posterkit_settings::TransformSettings;

use super::node::NodeTransform;
use super::overlay::Handle;

/// Moving a node by its body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub id: ElementId,
    /// Pointer position relative to the node origin at grab time
    grab_offset: Point,
}

impl DragSession {
    pub fn new(id: ElementId, pointer: Point, origin: Point) -> Self {
        Self {
            id,
            grab_offset: pointer - origin,
        }
    }

    /// Node origin for the current pointer
    pub fn origin_for(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }
}

/// Dragging one of the overlay handles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSession {
    pub id: ElementId,
    pub handle: Handle,
    start_pointer: Point,
    /// Live box at grab time
    start_frame: Frame,
    /// Painted size with no transient scale
    base_width: f64,
    base_height: f64,
}

impl TransformSession {
    pub fn new(id: ElementId, handle: Handle, pointer: Point, start_frame: Frame) -> Self {
        Self {
            id,
            handle,
            start_pointer: pointer,
            start_frame,
            base_width: start_frame.size.width,
            base_height: start_frame.size.height,
        }
    }

    /// Scratch transform for the current pointer.
    ///
    /// Resizes that would shrink the box below `min_size` return `None` and
    /// the caller keeps the previous transform.
    pub fn transform_for(
        &self,
        pointer: Point,
        min_size: f64,
        settings: &TransformSettings,
    ) -> Option<NodeTransform> {
        let frame = match self.handle {
            Handle::Resize(anchor) => resize_from_anchor(
                &self.start_frame,
                anchor,
                pointer - self.start_pointer,
                min_size,
            )?,
            Handle::Rotate => {
                let angle = snap_rotation(
                    handle_rotation(self.start_frame.center(), pointer),
                    settings.rotation_snap_step,
                    settings.rotation_snap_tolerance,
                );
                rotate_about_center(&self.start_frame, angle)
            }
        };

        Some(NodeTransform {
            x: frame.position.x,
            y: frame.position.y,
            scale_x: frame.size.width / self.base_width,
            scale_y: frame.size.height / self.base_height,
            rotation: frame.rotation,
        })
    }
}

/// Two-finger zoom.
///
/// The scale is cumulative: it starts from the view scale at the moment the
/// second finger lands and follows the ratio of finger distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    start_distance: f64,
    base_scale: f64,
}

impl PinchGesture {
    /// Start a pinch. Returns `None` when both touches coincide.
    pub fn start(a: Point, b: Point, current_scale: f64) -> Option<Self> {
        let start_distance = a.distance_to(&b);
        if start_distance <= f64::EPSILON || !start_distance.is_finite() {
            return None;
        }
        Some(Self {
            start_distance,
            base_scale: current_scale,
        })
    }

    /// Requested (unclamped) view scale for the current touches
    pub fn scale_for(&self, a: Point, b: Point) -> f64 {
        self.base_scale * a.distance_to(&b) / self.start_distance
    }
}
