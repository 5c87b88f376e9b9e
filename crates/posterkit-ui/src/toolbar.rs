//! Property toolbar
//!
//! A view over the selected element plus a dispatcher that turns each
//! control change into exactly one store mutation. The only state kept here
//! is the slider echo: the values the sliders currently show. It is
//! reloaded from the store after every dispatch and whenever the selected
//! element changes, so it never outlives the store's values.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use posterkit_core::{EventFilter, Shared, SubscriptionId};
use posterkit_scene::{
    Element, ElementId, ElementKind, ElementType, Outcome, RectStylePatch, SceneEventCategory,
    SceneStore, TextAlign, TextStylePatch, VerticalAlign,
};
use serde::Serialize;
use tracing::debug;

/// Font families offered by the family selector
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Georgia",
    "Courier New",
    "Verdana",
    "Impact",
];

/// Factor of the zoom-in button
pub const SCALE_UP_FACTOR: f64 = 1.1;
/// Factor of the zoom-out button
pub const SCALE_DOWN_FACTOR: f64 = 0.9;

/// A control change
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    Delete,
    /// Rotate relative to the current angle, in degrees
    RotateBy(f64),
    SetRotation(f64),
    SetScale(f64),
    /// Multiply the current scale
    ScaleBy(f64),
    SetOpacity(f64),
    SetCornerRadius(f64),
    SetFill(String),
    SetStroke(String),
    SetFontSize(f64),
    SetFontFamily(String),
    SetAlign(TextAlign),
    SetVerticalAlign(VerticalAlign),
    SetTextColor(String),
}

/// Controls specific to the selected variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariantControls {
    Image,
    Rect {
        corner_radius: f64,
        fill: String,
        stroke: String,
    },
    Text {
        font_size: f64,
        font_family: String,
        align: TextAlign,
        vertical_align: VerticalAlign,
        fill: String,
    },
}

/// Everything the toolbar shows for the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarModel {
    pub id: ElementId,
    pub element_type: ElementType,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub controls: VariantControls,
}

/// Transient slider values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderEcho {
    pub id: ElementId,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub corner_radius: Option<f64>,
    pub font_size: Option<f64>,
}

impl SliderEcho {
    fn from_element(element: &Element) -> Self {
        Self {
            id: element.id,
            rotation: element.rotation,
            scale: element.scale,
            opacity: element.opacity,
            corner_radius: element.as_rect().map(|r| r.corner_radius),
            font_size: element.as_text().map(|t| t.font_size),
        }
    }
}

/// Toolbar bound to a store
pub struct Toolbar {
    store: Shared<SceneStore>,
    echo: RefCell<Option<SliderEcho>>,
    stale: Arc<AtomicBool>,
    subscription: SubscriptionId,
}

impl Toolbar {
    pub fn new(store: Shared<SceneStore>) -> Self {
        let stale = Arc::new(AtomicBool::new(true));
        let subscription = {
            let flag = stale.clone();
            store.borrow().subscribe(
                EventFilter::Categories(vec![
                    SceneEventCategory::Elements,
                    SceneEventCategory::Selection,
                ]),
                move |_| flag.store(true, Ordering::Release),
            )
        };

        let toolbar = Self {
            store,
            echo: RefCell::new(None),
            stale,
            subscription,
        };
        toolbar.resync();
        toolbar
    }

    /// Step of the rotate buttons, in degrees
    pub fn rotate_step(&self) -> f64 {
        self.store.borrow().config().transform.rotate_button_step
    }

    /// Current view model, or `None` when nothing valid is selected.
    ///
    /// Slider values come from the echo while it belongs to the selection.
    pub fn model(&self) -> Option<ToolbarModel> {
        self.resync();
        let store = self.store.borrow();
        let element = store.selected_element()?;
        let echo = (*self.echo.borrow()).filter(|e| e.id == element.id);

        let controls = match &element.kind {
            ElementKind::Image(_) => VariantControls::Image,
            ElementKind::Rect(rect) => VariantControls::Rect {
                corner_radius: echo
                    .and_then(|e| e.corner_radius)
                    .unwrap_or(rect.corner_radius),
                fill: rect.style.fill.clone(),
                stroke: rect.style.stroke.clone(),
            },
            ElementKind::Text(text) => VariantControls::Text {
                font_size: echo.and_then(|e| e.font_size).unwrap_or(text.font_size),
                font_family: text.font_family.clone(),
                align: text.align,
                vertical_align: text.vertical_align,
                fill: text.fill.clone(),
            },
        };

        Some(ToolbarModel {
            id: element.id,
            element_type: element.element_type(),
            rotation: echo.map_or(element.rotation, |e| e.rotation),
            scale: echo.map_or(element.scale, |e| e.scale),
            opacity: echo.map_or(element.opacity, |e| e.opacity),
            controls,
        })
    }

    /// Current slider echo
    pub fn echo(&self) -> Option<SliderEcho> {
        self.resync();
        *self.echo.borrow()
    }

    /// Reload the echo if the selected element changed since the last load.
    /// Returns true when the echo now holds different values.
    pub fn resync(&self) -> bool {
        if !self.stale.swap(false, Ordering::AcqRel) {
            return false;
        }
        self.reload()
    }

    /// Slider moved: dispatch, then show what the store kept.
    ///
    /// Clamped values come back clamped; a rejected change leaves the
    /// previous values on the slider.
    pub fn slide(&self, action: ToolbarAction) -> Outcome {
        let outcome = self.dispatch(action);
        self.stale.store(false, Ordering::Release);
        self.reload();
        outcome
    }

    fn reload(&self) -> bool {
        let fresh = self
            .store
            .borrow()
            .selected_element()
            .map(SliderEcho::from_element);
        let changed = *self.echo.borrow() != fresh;
        *self.echo.borrow_mut() = fresh;
        changed
    }

    /// Apply one control change to the selected element.
    ///
    /// Returns `Missing` when nothing valid is selected and `WrongKind` when
    /// the control does not apply to the selected variant.
    pub fn dispatch(&self, action: ToolbarAction) -> Outcome {
        let mut store = self.store.borrow_mut();
        let Some((id, rotation, scale)) = store
            .selected_element()
            .map(|e| (e.id, e.rotation, e.scale))
        else {
            return Outcome::Missing;
        };
        debug!("Toolbar {:?} on {}", action, id);

        match action {
            ToolbarAction::Delete => store.delete_element(id),
            ToolbarAction::RotateBy(delta) => store.rotate_element(id, rotation + delta),
            ToolbarAction::SetRotation(r) => store.rotate_element(id, r),
            ToolbarAction::SetScale(s) => store.scale_element(id, s),
            ToolbarAction::ScaleBy(factor) => store.scale_element(id, scale * factor),
            ToolbarAction::SetOpacity(o) => store.update_opacity(id, o),
            ToolbarAction::SetCornerRadius(r) => store.update_rect_corner_radius(id, r),
            ToolbarAction::SetFill(color) => store.update_rect_style(id, RectStylePatch::fill(color)),
            ToolbarAction::SetStroke(color) => {
                store.update_rect_style(id, RectStylePatch::stroke(color))
            }
            ToolbarAction::SetFontSize(size) => store.update_text_style(
                id,
                TextStylePatch {
                    font_size: Some(size),
                    ..Default::default()
                },
            ),
            ToolbarAction::SetFontFamily(family) => store.update_text_style(
                id,
                TextStylePatch {
                    font_family: Some(family),
                    ..Default::default()
                },
            ),
            ToolbarAction::SetAlign(align) => store.update_text_style(
                id,
                TextStylePatch {
                    align: Some(align),
                    ..Default::default()
                },
            ),
            ToolbarAction::SetVerticalAlign(vertical_align) => store.update_text_style(
                id,
                TextStylePatch {
                    vertical_align: Some(vertical_align),
                    ..Default::default()
                },
            ),
            ToolbarAction::SetTextColor(color) => store.update_text_style(
                id,
                TextStylePatch {
                    fill: Some(color),
                    ..Default::default()
                },
            ),
        }
    }
}

impl Drop for Toolbar {
    fn drop(&mut self) {
        if let Ok(store) = self.store.try_borrow() {
            store.unsubscribe(self.subscription);
        }
    }
}
