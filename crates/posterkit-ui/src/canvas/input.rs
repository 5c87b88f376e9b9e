//! Pointer input handling for [`EditorCanvas`].

use posterkit_scene::geometry::at_least;
use posterkit_scene::{ElementId, Outcome, Point, Size};
use tracing::{debug, trace};

use super::gesture::{DragSession, PinchGesture, TransformSession};
use super::overlay::Handle;
use super::{EditorCanvas, HitTarget, Propagation};

impl EditorCanvas {
    /// Pointer down: hit test, press dispatch and session start in one go.
    pub fn pointer_down(&self, point: Point) -> HitTarget {
        self.sync_if_needed();
        let target = self.hit_test(point);
        if self.press(target) == Propagation::Stop {
            match target {
                HitTarget::Handle(handle) => {
                    self.begin_transform(handle, point);
                }
                HitTarget::Element(id) => {
                    self.begin_drag(id, point);
                }
                HitTarget::Stage => {}
            }
        }
        target
    }

    /// Pointer move: feed whichever session is active.
    pub fn pointer_move(&self, point: Point) {
        if self.drag.borrow().is_some() {
            self.drag_to(point);
        } else if self.transform.borrow().is_some() {
            self.transform_to(point);
        }
    }

    /// Pointer up: commit whichever session is active.
    pub fn pointer_up(&self) -> Option<Outcome> {
        if self.drag.borrow().is_some() {
            self.end_drag()
        } else {
            self.end_transform()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.borrow().is_some()
    }

    pub fn is_transforming(&self) -> bool {
        self.transform.borrow().is_some()
    }

    // Drag

    /// Start moving a node. Returns false if the node does not exist or
    /// another gesture is in progress.
    pub fn begin_drag(&self, id: ElementId, pointer: Point) -> bool {
        self.sync_if_needed();
        if self.active_id().is_some() {
            return false;
        }
        let Some(node) = self.cached_node(id) else {
            return false;
        };
        *self.drag.borrow_mut() = Some(DragSession::new(id, pointer, node.transform.position()));
        debug!("Drag started on {}", id);
        true
    }

    /// Move the dragged node's scratch position. Nothing is committed.
    pub fn drag_to(&self, pointer: Point) {
        let Some(session) = *self.drag.borrow() else {
            return;
        };
        let origin = session.origin_for(pointer);
        if let Some(node) = self.nodes.borrow_mut().iter_mut().find(|n| n.id == session.id) {
            node.transform.set_position(origin);
            trace!("Drag {} to ({:.1}, {:.1})", session.id, origin.x, origin.y);
        }
    }

    /// Finish the drag with a single move commit.
    pub fn end_drag(&self) -> Option<Outcome> {
        let session = self.drag.borrow_mut().take()?;
        let position = self.cached_node(session.id)?.transform.position();
        let outcome = self.store.borrow_mut().move_element(session.id, position);
        debug!("Drag ended on {}: {:?}", session.id, outcome);
        self.sync();
        Some(outcome)
    }

    // Transform handles

    /// Start dragging an overlay handle of the selected node.
    pub fn begin_transform(&self, handle: Handle, pointer: Point) -> bool {
        self.sync_if_needed();
        if self.active_id().is_some() {
            return false;
        }
        let Some(overlay) = self.overlay() else {
            return false;
        };
        *self.transform.borrow_mut() =
            Some(TransformSession::new(overlay.id, handle, pointer, overlay.frame));
        debug!("Transform {:?} started on {}", handle, overlay.id);
        true
    }

    /// Update the scratch transform. Boxes below the minimum size are
    /// rejected and the previous transform stays.
    pub fn transform_to(&self, pointer: Point) {
        let Some(session) = *self.transform.borrow() else {
            return;
        };
        let (min_size, settings) = {
            let store = self.store.borrow();
            let config = store.config();
            (config.canvas.min_element_size, config.transform.clone())
        };

        let Some(transform) = session.transform_for(pointer, min_size, &settings) else {
            trace!("Transform of {} below minimum size, keeping previous box", session.id);
            return;
        };
        if let Some(node) = self.nodes.borrow_mut().iter_mut().find(|n| n.id == session.id) {
            node.transform = transform;
        }
    }

    /// Commit position, size and rotation, then reset the node scale to 1.
    ///
    /// Returns `Applied` if any of the three commits changed the element.
    pub fn end_transform(&self) -> Option<Outcome> {
        let session = self.transform.borrow_mut().take()?;
        let node = self.cached_node(session.id)?;
        let t = node.transform;

        let outcomes = {
            let mut store = self.store.borrow_mut();
            let min_size = store.config().canvas.min_element_size;
            let size = Size::new(
                at_least(node.size.width * t.scale_x, min_size),
                at_least(node.size.height * t.scale_y, min_size),
            );
            [
                store.move_element(session.id, t.position()),
                store.resize_element(session.id, size),
                store.rotate_element(session.id, t.rotation),
            ]
        };
        debug!("Transform ended on {}: {:?}", session.id, outcomes);

        // Rebuild from the store so the scratch scale returns to identity
        self.sync();

        Some(
            outcomes
                .iter()
                .copied()
                .find(Outcome::is_applied)
                .unwrap_or(outcomes[0]),
        )
    }

    // Pinch zoom

    /// Second finger down. Returns false for coincident touches.
    pub fn pinch_start(&self, a: Point, b: Point) -> bool {
        let scale = self.store.borrow().view_scale();
        let gesture = PinchGesture::start(a, b, scale);
        let started = gesture.is_some();
        *self.pinch.borrow_mut() = gesture;
        started
    }

    /// Fingers moved. Only the view scale changes, never element scale.
    pub fn pinch_move(&self, a: Point, b: Point) -> Option<Outcome> {
        let gesture = (*self.pinch.borrow())?;
        let requested = gesture.scale_for(a, b);
        let outcome = self.store.borrow_mut().set_view_scale(requested);
        trace!("Pinch to {:.3}: {:?}", requested, outcome);
        Some(outcome)
    }

    pub fn pinch_end(&self) {
        self.pinch.borrow_mut().take();
    }
}
