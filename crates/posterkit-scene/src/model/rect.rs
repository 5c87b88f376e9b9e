use posterkit_settings::RectDefaults;
use serde::{Deserialize, Serialize};

/// Paint of a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Partial update of a [`RectStyle`]. `None` fields are left alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RectStylePatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl RectStylePatch {
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn stroke(color: impl Into<String>) -> Self {
        Self {
            stroke: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none() && self.stroke_width.is_none()
    }
}

/// Payload of a rectangle layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectLayer {
    pub corner_radius: f64,
    pub style: RectStyle,
}

impl RectLayer {
    pub fn from_defaults(defaults: &RectDefaults) -> Self {
        Self {
            corner_radius: defaults.corner_radius.max(0.0),
            style: RectStyle {
                fill: defaults.fill.clone(),
                stroke: defaults.stroke.clone(),
                stroke_width: defaults.stroke_width,
            },
        }
    }

    /// Apply a style patch. Returns false when nothing changed.
    pub fn apply_style(&mut self, patch: &RectStylePatch) -> bool {
        let before = self.style.clone();
        if let Some(fill) = &patch.fill {
            self.style.fill = fill.clone();
        }
        if let Some(stroke) = &patch.stroke {
            self.style.stroke = stroke.clone();
        }
        if let Some(width) = patch.stroke_width.filter(|w| w.is_finite()) {
            self.style.stroke_width = width.max(0.0);
        }
        self.style != before
    }
}
