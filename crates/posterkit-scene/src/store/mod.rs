//! Scene store
//!
//! Single source of truth for the editor: the background, the ordered
//! element list (back to front), the selected id, the global view scale and
//! the host viewport size. All mutations are synchronous and total; stale ids
//! are silently ignored and out-of-range values are clamped. Each state
//! change publishes one [`SceneEvent`].

mod events;

pub use events::{ElementChange, SceneEvent, SceneEventCategory};

use posterkit_core::{EventBus, EventFilter, SubscriptionId};
use posterkit_settings::EditorConfig;
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use crate::geometry::{clamp_finite, normalize_rotation, Point, Size};
use crate::model::{
    Background, Element, ElementId, ElementKind, IdGenerator, ImageLayer, InitialProps,
    NewElement, RectLayer, RectStylePatch, TextLayer, TextStylePatch,
};

/// Result of a store mutation. Callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and an event was published
    Applied,
    /// Valid request that left the state as it was
    Unchanged,
    /// No element with that id
    Missing,
    /// The element is not of the variant the operation applies to
    WrongKind,
    /// The input was not usable (NaN or non-finite)
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    fn changed(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }
}

/// The scene and its mutation API.
#[derive(Debug)]
pub struct SceneStore {
    background: Option<Background>,
    elements: Vec<Element>,
    selected_id: Option<ElementId>,
    view_scale: f64,
    viewport: Size,
    ids: IdGenerator,
    config: EditorConfig,
    events: EventBus<SceneEvent>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Store using `config`. An invalid config is replaced by the defaults
    /// so that every clamp range stays well formed.
    pub fn with_config(config: EditorConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid editor config ({}), using defaults", e);
                EditorConfig::default()
            }
        };
        let viewport = Size::new(config.viewport.initial_width, config.viewport.initial_height);
        Self {
            background: None,
            elements: Vec::new(),
            selected_id: None,
            view_scale: 1.0,
            viewport,
            ids: IdGenerator::new(),
            config,
            events: EventBus::new(),
        }
    }

    // Accessors

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Elements in paint order, back to front
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// The raw selected id, which may be dangling
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    /// The selected element; a dangling id reads as no selection
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id.and_then(|id| self.element(id))
    }

    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // Observer

    /// Register a handler that runs right after each matching change.
    ///
    /// Handlers run while the store is still mutably borrowed and must not
    /// call back into it.
    pub fn subscribe<F>(&self, filter: EventFilter<SceneEventCategory>, handler: F) -> SubscriptionId
    where
        F: Fn(SceneEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Async receiver of all scene events
    pub fn receiver(&self) -> broadcast::Receiver<SceneEvent> {
        self.events.receiver()
    }

    fn publish(&self, event: SceneEvent) {
        if self.events.publish(event).is_err() {
            trace!("Scene event dropped, no subscribers");
        }
    }

    // Background

    /// Replace the background. Elements and selection are untouched.
    pub fn set_background(&mut self, src: impl Into<String>, width: f64, height: f64) -> Outcome {
        let background = Background::new(src, width, height);
        if self.background.as_ref() == Some(&background) {
            return Outcome::Unchanged;
        }
        debug!("Background set to {}x{}", width, height);
        let size = background.original_size;
        self.background = Some(background);
        self.publish(SceneEvent::BackgroundChanged { size });
        Outcome::Applied
    }

    // Element lifecycle

    /// Append a new element on top of the stack and select it.
    pub fn add_element(&mut self, kind: NewElement, props: Option<InitialProps>) -> ElementId {
        let props = props.unwrap_or_default();
        let min_size = self.config.canvas.min_element_size;
        let defaults = &self.config.defaults;

        let (default_size, mut payload) = match kind {
            NewElement::Image { src, size } => (size, ElementKind::Image(ImageLayer::new(src))),
            NewElement::Rect => (
                Size::new(defaults.rect.width, defaults.rect.height),
                ElementKind::Rect(RectLayer::from_defaults(&defaults.rect)),
            ),
            NewElement::Text => (
                Size::new(defaults.text.width, defaults.text.height),
                ElementKind::Text(TextLayer::from_defaults(&defaults.text)),
            ),
        };

        match &mut payload {
            ElementKind::Rect(rect) => {
                rect.apply_style(&props.rect_style);
                if let Some(radius) = props.corner_radius.filter(|r| !r.is_nan()) {
                    rect.corner_radius = radius.max(0.0);
                }
            }
            ElementKind::Text(text) => {
                text.apply_style(&props.text_style);
                if let Some(content) = props.text {
                    text.text = content;
                }
            }
            ElementKind::Image(_) => {}
        }

        let size = props.size.unwrap_or(default_size).clamped_min(min_size);
        let position = props
            .position
            .filter(Point::is_finite)
            .unwrap_or_else(|| self.default_position(size));

        let id = self.ids.next_id();
        let mut element = Element::new(id, position, size, payload);
        if let Some(rotation) = props.rotation.filter(|r| r.is_finite()) {
            element.rotation = normalize_rotation(rotation);
        }
        if let Some(scale) = props.scale.and_then(|s| {
            clamp_finite(
                s,
                self.config.canvas.min_element_scale,
                self.config.canvas.max_element_scale,
            )
        }) {
            element.scale = scale;
        }
        if let Some(opacity) = props.opacity.and_then(|o| clamp_finite(o, 0.0, 1.0)) {
            element.opacity = opacity;
        }

        let element_type = element.element_type();
        debug!(
            "Added {} {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
            element_type, id, position.x, position.y, size.width, size.height
        );
        self.elements.push(element);
        self.selected_id = Some(id);
        self.publish(SceneEvent::ElementAdded { id, element_type });
        id
    }

    pub fn add_rect(&mut self) -> ElementId {
        self.add_element(NewElement::Rect, None)
    }

    pub fn add_text(&mut self) -> ElementId {
        self.add_element(NewElement::Text, None)
    }

    pub fn add_image(&mut self, src: impl Into<String>, width: f64, height: f64) -> ElementId {
        self.add_element(
            NewElement::Image {
                src: src.into(),
                size: Size::new(width, height),
            },
            None,
        )
    }

    /// Remove an element, clearing the selection if it pointed at it.
    pub fn delete_element(&mut self, id: ElementId) -> Outcome {
        let Some(index) = self.index_of(id) else {
            return Outcome::Missing;
        };
        self.elements.remove(index);
        let selection_cleared = self.selected_id == Some(id);
        if selection_cleared {
            self.selected_id = None;
        }
        debug!("Deleted {}", id);
        self.publish(SceneEvent::ElementRemoved {
            id,
            selection_cleared,
        });
        Outcome::Applied
    }

    /// Set the selection directly. Unknown ids are stored as given.
    pub fn set_selected_id(&mut self, id: Option<ElementId>) -> Outcome {
        if self.selected_id == id {
            return Outcome::Unchanged;
        }
        if let Some(id) = id.filter(|id| !self.contains(*id)) {
            debug!("Selecting {} which is not in the scene", id);
        }
        let previous = self.selected_id;
        self.selected_id = id;
        self.publish(SceneEvent::SelectionChanged {
            previous,
            current: id,
        });
        Outcome::Applied
    }

    // Geometry

    pub fn move_element(&mut self, id: ElementId, position: Point) -> Outcome {
        if !position.is_finite() {
            return Outcome::Ignored;
        }
        self.update_element(id, ElementChange::Position, |element| {
            let changed = element.position != position;
            element.position = position;
            Outcome::changed(changed)
        })
    }

    /// Resize, clamping each axis to the minimum element size.
    pub fn resize_element(&mut self, id: ElementId, size: Size) -> Outcome {
        let size = size.clamped_min(self.config.canvas.min_element_size);
        self.update_element(id, ElementChange::Size, |element| {
            let changed = element.size != size;
            element.size = size;
            Outcome::changed(changed)
        })
    }

    /// Set the absolute rotation in degrees, normalized into `[0, 360)`.
    pub fn rotate_element(&mut self, id: ElementId, rotation: f64) -> Outcome {
        if !rotation.is_finite() {
            return Outcome::Ignored;
        }
        let rotation = normalize_rotation(rotation);
        self.update_element(id, ElementChange::Rotation, |element| {
            let changed = element.rotation != rotation;
            element.rotation = rotation;
            Outcome::changed(changed)
        })
    }

    pub fn scale_element(&mut self, id: ElementId, scale: f64) -> Outcome {
        let canvas = &self.config.canvas;
        let Some(scale) = clamp_finite(scale, canvas.min_element_scale, canvas.max_element_scale)
        else {
            return Outcome::Ignored;
        };
        self.update_element(id, ElementChange::Scale, |element| {
            let changed = element.scale != scale;
            element.scale = scale;
            Outcome::changed(changed)
        })
    }

    pub fn update_opacity(&mut self, id: ElementId, opacity: f64) -> Outcome {
        let Some(opacity) = clamp_finite(opacity, 0.0, 1.0) else {
            return Outcome::Ignored;
        };
        self.update_element(id, ElementChange::Opacity, |element| {
            let changed = element.opacity != opacity;
            element.opacity = opacity;
            Outcome::changed(changed)
        })
    }

    // Variant-specific

    pub fn update_rect_style(&mut self, id: ElementId, patch: RectStylePatch) -> Outcome {
        self.update_element(id, ElementChange::Style, |element| match &mut element.kind {
            ElementKind::Rect(rect) => Outcome::changed(rect.apply_style(&patch)),
            _ => Outcome::WrongKind,
        })
    }

    pub fn update_rect_corner_radius(&mut self, id: ElementId, radius: f64) -> Outcome {
        if radius.is_nan() {
            return Outcome::Ignored;
        }
        let radius = radius.max(0.0);
        self.update_element(id, ElementChange::Style, |element| match &mut element.kind {
            ElementKind::Rect(rect) => {
                let changed = rect.corner_radius != radius;
                rect.corner_radius = radius;
                Outcome::changed(changed)
            }
            _ => Outcome::WrongKind,
        })
    }

    pub fn update_text_content(&mut self, id: ElementId, content: impl Into<String>) -> Outcome {
        let content = content.into();
        self.update_element(id, ElementChange::Content, |element| match &mut element.kind {
            ElementKind::Text(text) => {
                let changed = text.text != content;
                text.text = content;
                Outcome::changed(changed)
            }
            _ => Outcome::WrongKind,
        })
    }

    pub fn update_text_style(&mut self, id: ElementId, patch: TextStylePatch) -> Outcome {
        self.update_element(id, ElementChange::Style, |element| match &mut element.kind {
            ElementKind::Text(text) => Outcome::changed(text.apply_style(&patch)),
            _ => Outcome::WrongKind,
        })
    }

    // Z-order

    pub fn bring_to_front(&mut self, id: ElementId) -> Outcome {
        let Some(index) = self.index_of(id) else {
            return Outcome::Missing;
        };
        if index + 1 == self.elements.len() {
            return Outcome::Unchanged;
        }
        let element = self.elements.remove(index);
        self.elements.push(element);
        debug!("{} brought to front", id);
        self.publish(SceneEvent::ElementsReordered);
        Outcome::Applied
    }

    pub fn send_to_back(&mut self, id: ElementId) -> Outcome {
        let Some(index) = self.index_of(id) else {
            return Outcome::Missing;
        };
        if index == 0 {
            return Outcome::Unchanged;
        }
        let element = self.elements.remove(index);
        self.elements.insert(0, element);
        debug!("{} sent to back", id);
        self.publish(SceneEvent::ElementsReordered);
        Outcome::Applied
    }

    // View

    /// Set the global zoom, clamped to the configured range.
    pub fn set_view_scale(&mut self, scale: f64) -> Outcome {
        let canvas = &self.config.canvas;
        let Some(scale) = clamp_finite(scale, canvas.min_view_scale, canvas.max_view_scale) else {
            return Outcome::Ignored;
        };
        if scale == self.view_scale {
            return Outcome::Unchanged;
        }
        trace!("View scale {:.3}", scale);
        self.view_scale = scale;
        self.publish(SceneEvent::ViewScaleChanged { scale });
        Outcome::Applied
    }

    /// Record the host surface size.
    pub fn set_viewport_size(&mut self, size: Size) -> Outcome {
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Outcome::Ignored;
        }
        if size == self.viewport {
            return Outcome::Unchanged;
        }
        debug!("Viewport resized to {}x{}", size.width, size.height);
        self.viewport = size;
        self.publish(SceneEvent::ViewportResized { size });
        Outcome::Applied
    }

    // Internals

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Top-left position for a new element of `size` under the placement policy.
    fn default_position(&self, size: Size) -> Point {
        use posterkit_settings::PlacementPolicy;

        let placement = &self.config.placement;
        match placement.policy {
            PlacementPolicy::Centered => {
                let visible = self.viewport.scaled(1.0 / self.view_scale);
                Point::new(
                    (visible.width - size.width) / 2.0,
                    (visible.height - size.height) / 2.0,
                )
            }
            PlacementPolicy::FixedOffset => Point::new(placement.offset_x, placement.offset_y),
        }
    }

    fn update_element<F>(&mut self, id: ElementId, change: ElementChange, apply: F) -> Outcome
    where
        F: FnOnce(&mut Element) -> Outcome,
    {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            trace!("{:?} on missing {}", change, id);
            return Outcome::Missing;
        };
        let outcome = apply(element);
        if outcome.is_applied() {
            debug!("{} {:?} updated", id, change);
            self.publish(SceneEvent::ElementChanged { id, change });
        }
        outcome
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
