use crate::geometry::{contain_fit, Placement, Size};
use serde::{Deserialize, Serialize};

/// The scene backdrop. Never part of the element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub src: String,
    /// Intrinsic pixel size of the decoded image
    pub original_size: Size,
}

impl Background {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            original_size: Size::new(width, height),
        }
    }

    /// Uniform contain-fit of the background inside `stage`, centered.
    pub fn fit_to_stage(&self, stage: Size) -> Placement {
        contain_fit(self.original_size, stage)
    }
}
