use egui::Pos2;

use crate::id::ShapeId;
use crate::stroke::{Stroke, StrokeStyle};
use crate::textbox::TextBox;

/// The two ordered shape collections making up the in-memory session.
///
/// Ids are allocated from per-collection monotonic counters, so a deleted
/// shape's id is never handed out again. Strokes count from 1 ("line1" is
/// the first stroke the user sees), text boxes from 0.
pub struct Document {
    strokes: Vec<Stroke>,
    text_boxes: Vec<TextBox>,
    next_stroke_seq: u64,
    next_text_seq: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            text_boxes: Vec::new(),
            next_stroke_seq: 1,
            next_text_seq: 0,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn text_boxes(&self) -> &[TextBox] {
        &self.text_boxes
    }

    /// Start a new stroke with a single point, snapshotting `style`.
    pub fn add_stroke(&mut self, origin: Pos2, style: StrokeStyle) -> ShapeId {
        let id = ShapeId::Stroke(self.next_stroke_seq);
        self.next_stroke_seq += 1;
        self.strokes.push(Stroke::new(id, origin, style));
        id
    }

    /// Place an empty text box at `pos`.
    pub fn add_text_box(&mut self, pos: Pos2) -> ShapeId {
        let id = ShapeId::TextBox(self.next_text_seq);
        self.next_text_seq += 1;
        self.text_boxes.push(TextBox::new(id, pos));
        id
    }

    /// The only stroke that may still be extended while drawing.
    pub fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    pub fn stroke(&self, id: ShapeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id() == id)
    }

    pub fn stroke_mut(&mut self, id: ShapeId) -> Option<&mut Stroke> {
        self.strokes.iter_mut().find(|s| s.id() == id)
    }

    pub fn text_box(&self, id: ShapeId) -> Option<&TextBox> {
        self.text_boxes.iter().find(|t| t.id() == id)
    }

    pub fn text_box_mut(&mut self, id: ShapeId) -> Option<&mut TextBox> {
        self.text_boxes.iter_mut().find(|t| t.id() == id)
    }

    /// Remove whatever matches `id` from both collections.
    ///
    /// The tagged id scheme means at most one shape can match; filtering both
    /// collections keeps the operation uniform. Returns true if a shape was
    /// removed.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.strokes.len() + self.text_boxes.len();
        self.strokes.retain(|s| s.id() != id);
        self.text_boxes.retain(|t| t.id() != id);
        before != self.strokes.len() + self.text_boxes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn stroke_ids_are_monotonic_and_never_reused() {
        let mut doc = Document::new();
        let a = doc.add_stroke(pos2(0.0, 0.0), StrokeStyle::default());
        let b = doc.add_stroke(pos2(1.0, 1.0), StrokeStyle::default());
        assert_eq!(a, ShapeId::Stroke(1));
        assert_eq!(b, ShapeId::Stroke(2));

        assert!(doc.remove(b));
        let c = doc.add_stroke(pos2(2.0, 2.0), StrokeStyle::default());
        assert_eq!(c, ShapeId::Stroke(3));
        assert!(doc.stroke(b).is_none());
    }

    #[test]
    fn text_box_ids_count_from_zero() {
        let mut doc = Document::new();
        let a = doc.add_text_box(pos2(10.0, 20.0));
        let b = doc.add_text_box(pos2(30.0, 40.0));
        assert_eq!(a, ShapeId::TextBox(0));
        assert_eq!(b, ShapeId::TextBox(1));
    }

    #[test]
    fn remove_touches_only_the_matching_collection() {
        let mut doc = Document::new();
        let stroke = doc.add_stroke(pos2(0.0, 0.0), StrokeStyle::default());
        let text = doc.add_text_box(pos2(5.0, 5.0));

        assert!(doc.remove(stroke));
        assert_eq!(doc.strokes().len(), 0);
        assert_eq!(doc.text_boxes().len(), 1);
        assert!(doc.text_box(text).is_some());

        // Removing an id that is already gone is a no-op.
        assert!(!doc.remove(stroke));
    }
}
