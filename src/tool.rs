use serde::{Deserialize, Serialize};

use crate::stroke::{LineType, StrokeStyle};

/// Top-level interaction mode governing how pointer events are interpreted.
///
/// `Text` is only entered through the "Create Text Box" action in the pen
/// settings; it behaves like a transient sub-tool of the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Select,
    Calculate,
    Text,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Select => "Select",
            Self::Calculate => "Calculate",
            Self::Text => "Text",
        }
    }

    /// Pen and Text create shapes on pointer-down; selection toggles are
    /// no-ops while either is active.
    pub fn creates_shapes(&self) -> bool {
        matches!(self, Self::Pen | Self::Text)
    }
}

/// Pen sub-mode: polyline accumulation vs. 2-point rubber band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    Free,
    Straight,
}

/// Current pen configuration. Snapshotted onto each new stroke; the sub-mode
/// is *not* part of the snapshot and is read live on every move event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub draw_mode: DrawMode,
    pub line_type: LineType,
    pub pen_size: u32,
    pub color: egui::Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        let style = StrokeStyle::default();
        Self {
            draw_mode: DrawMode::Free,
            line_type: style.line_type,
            pen_size: style.pen_size,
            color: style.color,
        }
    }
}

impl ToolSettings {
    /// The immutable style record copied onto a stroke at creation time.
    pub fn style_snapshot(&self) -> StrokeStyle {
        StrokeStyle {
            line_type: self.line_type,
            pen_size: self.pen_size,
            color: self.color,
        }
    }
}
