use serde::{Deserialize, Serialize};

/// Identifier for anything that can live on the canvas.
///
/// The tag keeps stroke ids and text-box ids in disjoint spaces, so a single
/// `selected_id` can refer to either collection without ambiguity. Sequence
/// numbers come from per-collection monotonic counters owned by the
/// [`Document`](crate::document::Document) and are never reused after a
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    Stroke(u64),
    TextBox(u64),
}

impl ShapeId {
    pub fn is_stroke(&self) -> bool {
        matches!(self, Self::Stroke(_))
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self, Self::TextBox(_))
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stroke(seq) => write!(f, "line{seq}"),
            Self::TextBox(seq) => write!(f, "text{seq}"),
        }
    }
}
