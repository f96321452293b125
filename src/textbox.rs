use egui::{Pos2, Vec2};

use crate::id::ShapeId;

/// Font size every text box is rendered at.
pub const TEXT_FONT_SIZE: f32 = 20.0;

/// One editable text annotation anchored at its top-left corner.
#[derive(Debug, Clone)]
pub struct TextBox {
    id: ShapeId,
    pos: Pos2,
    text: String,
}

impl TextBox {
    pub fn new(id: ShapeId, pos: Pos2) -> Self {
        Self {
            id,
            pos,
            text: String::new(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content verbatim; no validation or trimming is applied.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Move the anchor by `delta` (drag write-back).
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}
