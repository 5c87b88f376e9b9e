use serde::{Deserialize, Serialize};

/// Payload of an image layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    /// Data URL or any other reference the host can load
    pub src: String,
}

impl ImageLayer {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}
