use posterkit_settings::TextDefaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextAlign::Left => write!(f, "left"),
            TextAlign::Center => write!(f, "center"),
            TextAlign::Right => write!(f, "right"),
        }
    }
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub const ALL: [VerticalAlign; 3] =
        [VerticalAlign::Top, VerticalAlign::Middle, VerticalAlign::Bottom];
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalAlign::Top => write!(f, "top"),
            VerticalAlign::Middle => write!(f, "middle"),
            VerticalAlign::Bottom => write!(f, "bottom"),
        }
    }
}

/// Partial update of a text layer's typography.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStylePatch {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub fill: Option<String>,
    pub align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
}

impl TextStylePatch {
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_family.is_none()
            && self.fill.is_none()
            && self.align.is_none()
            && self.vertical_align.is_none()
    }
}

/// Payload of a text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
}

impl TextLayer {
    /// Smallest font size a text layer accepts
    pub const MIN_FONT_SIZE: f64 = 1.0;

    pub fn from_defaults(defaults: &TextDefaults) -> Self {
        Self {
            text: defaults.placeholder.clone(),
            font_size: defaults.font_size.max(Self::MIN_FONT_SIZE),
            font_family: defaults.font_family.clone(),
            fill: defaults.fill.clone(),
            align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
        }
    }

    /// Apply a typography patch. Returns false when nothing changed.
    pub fn apply_style(&mut self, patch: &TextStylePatch) -> bool {
        let before = self.clone();
        if let Some(size) = patch.font_size.filter(|s| s.is_finite()) {
            self.font_size = size.max(Self::MIN_FONT_SIZE);
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(fill) = &patch.fill {
            self.fill = fill.clone();
        }
        if let Some(align) = patch.align {
            self.align = align;
        }
        if let Some(vertical_align) = patch.vertical_align {
            self.vertical_align = vertical_align;
        }
        *self != before
    }
}
