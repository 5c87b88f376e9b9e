//! Inline text editing.
//!
//! Double-clicking a text node hides it and hands the host a
//! [`TextEditOverlay`] describing where to place a native text field. Every
//! keystroke is committed to the store; blur just closes the editor.

use posterkit_scene::{ElementId, Outcome, Point, Size, TextAlign};
use tracing::debug;

use super::EditorCanvas;

/// An open inline editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEditSession {
    pub id: ElementId,
}

/// Placement and typography of the host text field, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditOverlay {
    pub id: ElementId,
    pub position: Point,
    pub size: Size,
    pub rotation: f64,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    pub align: TextAlign,
    pub text: String,
}

impl EditorCanvas {
    /// Open the inline editor on a text node. Other kinds are ignored.
    pub fn double_click(&self, id: ElementId) -> Option<TextEditOverlay> {
        let overlay = {
            let store = self.store.borrow();
            let element = store.element(id)?;
            let text = element.as_text()?;
            let zoom = store.view_scale() * element.scale;
            TextEditOverlay {
                id,
                position: element.position.scaled(store.view_scale()),
                size: element.size.scaled(zoom),
                rotation: element.rotation,
                font_size: text.font_size * zoom,
                font_family: text.font_family.clone(),
                fill: text.fill.clone(),
                align: text.align,
                text: text.text.clone(),
            }
        };

        debug!("Editing text of {}", id);
        *self.text_edit.borrow_mut() = Some(TextEditSession { id });
        self.sync();
        Some(overlay)
    }

    /// Element currently being edited
    pub fn editing(&self) -> Option<ElementId> {
        self.text_edit.borrow().map(|s| s.id)
    }

    /// Commit the editor's full contents.
    pub fn edit_input(&self, text: &str) -> Option<Outcome> {
        let id = self.editing()?;
        let outcome = self.store.borrow_mut().update_text_content(id, text);
        if outcome == Outcome::Missing {
            self.edit_blur();
        }
        Some(outcome)
    }

    /// Close the editor without committing anything further.
    pub fn edit_blur(&self) {
        if self.text_edit.borrow_mut().take().is_some() {
            self.sync();
        }
    }
}
