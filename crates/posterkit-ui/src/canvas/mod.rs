//! Canvas render/interaction layer
//!
//! [`EditorCanvas`] mirrors the scene store as a list of [`CanvasNode`]s the
//! host draws, and turns pointer input into store mutations:
//! - body drags move a node's scratch position and commit one move at the end
//! - overlay handle drags resize or rotate the scratch transform and commit
//!   move, resize and rotate at the end, after which the node scale is 1 again
//! - two-finger pinches drive the global view scale
//! - double-clicking text opens an inline editor
//!
//! All points passed in are scene coordinates unless stated otherwise; use
//! [`EditorCanvas::screen_to_scene`] to convert host pointer positions.
//!
//! The canvas borrows the store for the duration of each call, so callers
//! must not hold a borrow of their own across these methods. Every read
//! first catches up with store changes made elsewhere.

mod gesture;
mod input;
mod node;
mod overlay;
mod text_edit;

pub use gesture::{DragSession, PinchGesture, TransformSession};
pub use node::{CanvasNode, NodeTransform};
pub use overlay::{Handle, SelectionOverlay, HANDLE_HIT_RADIUS, ROTATE_HANDLE_OFFSET};
pub use text_edit::{TextEditOverlay, TextEditSession};

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use posterkit_core::{EventFilter, Shared, SubscriptionId};
use posterkit_scene::{ElementId, Point, ResizeDebouncer, SceneStore, Size};
use tracing::{debug, trace};

/// What a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A handle of the selection overlay
    Handle(Handle),
    Element(ElementId),
    /// Empty canvas or the background
    Stage,
}

/// Whether a press keeps bubbling to the stage handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Interactive view over a [`SceneStore`].
pub struct EditorCanvas {
    store: Shared<SceneStore>,
    nodes: RefCell<Vec<CanvasNode>>,
    drag: RefCell<Option<DragSession>>,
    transform: RefCell<Option<TransformSession>>,
    pinch: RefCell<Option<PinchGesture>>,
    text_edit: RefCell<Option<TextEditSession>>,
    resize: RefCell<ResizeDebouncer>,
    dirty: Arc<AtomicBool>,
    subscription: SubscriptionId,
}

impl EditorCanvas {
    pub fn new(store: Shared<SceneStore>) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let (subscription, debounce) = {
            let store = store.borrow();
            let flag = dirty.clone();
            let subscription = store.subscribe(EventFilter::All, move |_| {
                flag.store(true, Ordering::Release);
            });
            (subscription, store.config().viewport.resize_debounce())
        };

        let canvas = Self {
            store,
            nodes: RefCell::new(Vec::new()),
            drag: RefCell::new(None),
            transform: RefCell::new(None),
            pinch: RefCell::new(None),
            text_edit: RefCell::new(None),
            resize: RefCell::new(ResizeDebouncer::new(debounce)),
            dirty,
            subscription,
        };
        canvas.sync();
        canvas
    }

    pub fn store(&self) -> &Shared<SceneStore> {
        &self.store
    }

    /// Nodes in paint order, back to front
    pub fn nodes(&self) -> Vec<CanvasNode> {
        self.sync_if_needed();
        self.nodes.borrow().clone()
    }

    pub fn node(&self, id: ElementId) -> Option<CanvasNode> {
        self.sync_if_needed();
        self.cached_node(id)
    }

    /// True when the store changed since the last [`sync`](Self::sync)
    pub fn needs_sync(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    pub fn sync_if_needed(&self) {
        if self.needs_sync() {
            self.sync();
        }
    }

    /// Rebuild all nodes from the store.
    ///
    /// A node under an active gesture keeps its scratch transform. Sessions
    /// whose element has disappeared are dropped.
    pub fn sync(&self) {
        self.dirty.store(false, Ordering::Release);
        let store = self.store.borrow();

        self.drop_stale_sessions(&store);
        let active = self.active_id();
        let editing = self.editing();
        let selected = store.selected_element().map(|e| e.id);

        let previous = self.nodes.borrow();
        let nodes: Vec<CanvasNode> = store
            .elements()
            .iter()
            .map(|element| {
                let mut node = CanvasNode::from_element(element, Some(element.id) == selected);
                if Some(element.id) == active {
                    if let Some(old) = previous.iter().find(|n| n.id == element.id) {
                        node.transform = old.transform;
                    }
                }
                node.visible = Some(element.id) != editing;
                node
            })
            .collect();
        drop(previous);

        trace!("Canvas synced, {} nodes", nodes.len());
        *self.nodes.borrow_mut() = nodes;
    }

    /// Host pointer position to scene coordinates
    pub fn screen_to_scene(&self, point: Point) -> Point {
        point.scaled(1.0 / self.store.borrow().view_scale())
    }

    /// Scene coordinates to host pointer position
    pub fn scene_to_screen(&self, point: Point) -> Point {
        point.scaled(self.store.borrow().view_scale())
    }

    /// Topmost target under a scene point.
    ///
    /// Overlay handles win over nodes; nodes are tested front to back.
    pub fn hit_test(&self, point: Point) -> HitTarget {
        self.sync_if_needed();
        if let Some(overlay) = self.overlay() {
            let radius = HANDLE_HIT_RADIUS / self.store.borrow().view_scale();
            if let Some(handle) = overlay.handle_at(point, radius) {
                return HitTarget::Handle(handle);
            }
        }

        self.nodes
            .borrow()
            .iter()
            .rev()
            .filter(|node| node.visible)
            .find(|node| node.frame().contains(point))
            .map(|node| HitTarget::Element(node.id))
            .unwrap_or(HitTarget::Stage)
    }

    /// Dispatch a press: element handler first, stage handler only if the
    /// event was not consumed.
    pub fn press(&self, target: HitTarget) -> Propagation {
        let propagation = match target {
            HitTarget::Handle(_) => Propagation::Stop,
            HitTarget::Element(id) => {
                self.store.borrow_mut().set_selected_id(Some(id));
                Propagation::Stop
            }
            HitTarget::Stage => Propagation::Continue,
        };

        if propagation == Propagation::Continue {
            debug!("Stage pressed, clearing selection");
            self.store.borrow_mut().set_selected_id(None);
        }
        self.sync_if_needed();
        propagation
    }

    /// Overlay for the selected node, if the selection is valid
    pub fn overlay(&self) -> Option<SelectionOverlay> {
        self.sync_if_needed();
        self.nodes
            .borrow()
            .iter()
            .find(|node| node.selected)
            .map(|node| SelectionOverlay::new(node.id, node.frame()))
    }

    /// Record a host surface resize; applied once resizes go quiet.
    pub fn host_resized(&self, size: Size, now: Instant) {
        self.resize.borrow_mut().push(size, now);
    }

    /// Apply a debounced viewport size if one is due.
    pub fn tick(&self, now: Instant) -> Option<Size> {
        let size = self.resize.borrow_mut().poll(now)?;
        self.store.borrow_mut().set_viewport_size(size);
        self.sync_if_needed();
        Some(size)
    }

    /// Node as last synced, scratch transform included
    fn cached_node(&self, id: ElementId) -> Option<CanvasNode> {
        self.nodes.borrow().iter().find(|n| n.id == id).cloned()
    }

    fn active_id(&self) -> Option<ElementId> {
        self.drag
            .borrow()
            .map(|s| s.id)
            .or_else(|| self.transform.borrow().map(|s| s.id))
    }

    fn drop_stale_sessions(&self, store: &SceneStore) {
        let stale = |id: ElementId| !store.contains(id);
        if self.drag.borrow().is_some_and(|s| stale(s.id)) {
            *self.drag.borrow_mut() = None;
        }
        if self.transform.borrow().is_some_and(|s| stale(s.id)) {
            *self.transform.borrow_mut() = None;
        }
        if self.editing().is_some_and(stale) {
            debug!("Edited element removed, closing editor");
            *self.text_edit.borrow_mut() = None;
        }
    }
}

impl Drop for EditorCanvas {
    fn drop(&mut self) {
        if let Ok(store) = self.store.try_borrow() {
            store.unsubscribe(self.subscription);
        }
    }
}

impl std::fmt::Debug for EditorCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorCanvas")
            .field("nodes", &self.nodes.borrow().len())
            .field("subscription", &self.subscription)
            .finish()
    }
}
