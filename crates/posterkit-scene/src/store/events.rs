//! Scene change events.
//!
//! Every state change in the store publishes exactly one of these. Views
//! treat them as invalidation hints and re-read the store.

use posterkit_core::BusEvent;
use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::model::{ElementId, ElementType};

/// Which part of an element a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementChange {
    Position,
    Size,
    Rotation,
    Scale,
    Opacity,
    /// Fill, stroke, corner radius or typography
    Style,
    /// Text content
    Content,
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneEventCategory {
    /// Background replaced
    Background,
    /// Elements added, removed, changed or reordered
    Elements,
    /// Selection moved
    Selection,
    /// View scale or viewport size
    View,
}

impl std::fmt::Display for SceneEventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneEventCategory::Background => write!(f, "Background"),
            SceneEventCategory::Elements => write!(f, "Elements"),
            SceneEventCategory::Selection => write!(f, "Selection"),
            SceneEventCategory::View => write!(f, "View"),
        }
    }
}

/// A change to the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// The background was set or replaced.
    BackgroundChanged {
        /// Intrinsic size of the new background.
        size: Size,
    },
    /// An element was appended on top and became the selection.
    ElementAdded {
        id: ElementId,
        element_type: ElementType,
    },
    /// An element was deleted.
    ElementRemoved {
        id: ElementId,
        /// The element was selected and the selection is now empty.
        selection_cleared: bool,
    },
    /// One field group of an element changed.
    ElementChanged { id: ElementId, change: ElementChange },
    /// Paint order changed.
    ElementsReordered,
    /// The selected id changed.
    SelectionChanged {
        previous: Option<ElementId>,
        current: Option<ElementId>,
    },
    /// The global view zoom changed.
    ViewScaleChanged { scale: f64 },
    /// The host surface size changed.
    ViewportResized { size: Size },
}

impl SceneEvent {
    /// Element this event is about, if any
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            SceneEvent::ElementAdded { id, .. }
            | SceneEvent::ElementRemoved { id, .. }
            | SceneEvent::ElementChanged { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// True when this event may change which element is selected
    pub fn affects_selection(&self) -> bool {
        matches!(
            self,
            SceneEvent::ElementAdded { .. }
                | SceneEvent::SelectionChanged { .. }
                | SceneEvent::ElementRemoved {
                    selection_cleared: true,
                    ..
                }
        )
    }
}

impl BusEvent for SceneEvent {
    type Category = SceneEventCategory;

    fn category(&self) -> SceneEventCategory {
        match self {
            SceneEvent::BackgroundChanged { .. } => SceneEventCategory::Background,
            SceneEvent::ElementAdded { .. }
            | SceneEvent::ElementRemoved { .. }
            | SceneEvent::ElementChanged { .. }
            | SceneEvent::ElementsReordered => SceneEventCategory::Elements,
            SceneEvent::SelectionChanged { .. } => SceneEventCategory::Selection,
            SceneEvent::ViewScaleChanged { .. } | SceneEvent::ViewportResized { .. } => {
                SceneEventCategory::View
            }
        }
    }

    fn description(&self) -> String {
        match self {
            SceneEvent::BackgroundChanged { size } => {
                format!("Background set ({}x{})", size.width, size.height)
            }
            SceneEvent::ElementAdded { id, element_type } => {
                format!("Added {} {}", element_type, id)
            }
            SceneEvent::ElementRemoved { id, .. } => format!("Removed {}", id),
            SceneEvent::ElementChanged { id, change } => format!("{} changed: {:?}", id, change),
            SceneEvent::ElementsReordered => "Elements reordered".to_string(),
            SceneEvent::SelectionChanged { current, .. } => match current {
                Some(id) => format!("Selected {}", id),
                None => "Selection cleared".to_string(),
            },
            SceneEvent::ViewScaleChanged { scale } => format!("View scale {:.2}", scale),
            SceneEvent::ViewportResized { size } => {
                format!("Viewport {}x{}", size.width, size.height)
            }
        }
    }
}
