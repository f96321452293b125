use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::SessionError;
use crate::grid::GridSettings;
use crate::id::ShapeId;
use crate::input::PointerTarget;
use crate::tool::{DrawMode, Tool, ToolSettings};

/// The drawing session controller: all mutable session state plus the event
/// handlers the canvas feeds.
///
/// Every handler runs synchronously on the UI thread and mutates the session
/// in place; egui redraws the full state each frame, so there is no separate
/// invalidation step.
///
/// Two selection channels exist and are used mutually exclusively by tool:
/// `selected_id` carries the Select tool's single selection (strokes or text
/// boxes), `selected_text_boxes` carries the Calculate tool's multi-selection
/// (text boxes only). Switching tools clears both.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    #[serde(skip)]
    document: Document,
    tool: Tool,
    settings: ToolSettings,
    grid: GridSettings,
    #[serde(skip)]
    selected_id: Option<ShapeId>,
    #[serde(skip)]
    selected_text_boxes: Vec<ShapeId>,
    #[serde(skip)]
    editing: Option<ShapeId>,
    #[serde(skip)]
    drawing: bool,
    #[serde(skip)]
    sum: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            tool: Tool::Pen,
            settings: ToolSettings::default(),
            grid: GridSettings::default(),
            selected_id: None,
            selected_text_boxes: Vec::new(),
            editing: None,
            drawing: false,
            sum: 0.0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridSettings {
        &mut self.grid
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_id
    }

    pub fn selected_text_boxes(&self) -> &[ShapeId] {
        &self.selected_text_boxes
    }

    pub fn editing_id(&self) -> Option<ShapeId> {
        self.editing
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The last explicitly computed sum; stale until the next
    /// [`calculate_sum`](Self::calculate_sum).
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Switch the top-level tool. Always resets both selection channels,
    /// whatever the previous state was.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("tool switch: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
        self.selected_id = None;
        self.selected_text_boxes.clear();
    }

    /// Pointer-down dispatch.
    ///
    /// A press on the empty background deselects regardless of tool. Pen
    /// starts a stroke at the pointer (style snapshotted from the current
    /// settings), Text places an empty text box and immediately opens it for
    /// editing. Other tools create nothing.
    pub fn pointer_down(&mut self, pos: Pos2, target: PointerTarget) {
        if target == PointerTarget::Background {
            self.selected_id = None;
        }

        match self.tool {
            Tool::Pen => {
                self.drawing = true;
                let id = self.document.add_stroke(pos, self.settings.style_snapshot());
                log::debug!("started stroke {id} at {pos:?}");
            }
            Tool::Text => {
                let id = self.document.add_text_box(pos);
                self.editing = Some(id);
                log::debug!("placed text box {id} at {pos:?}");
            }
            Tool::Select | Tool::Calculate => {}
        }
    }

    /// Pointer-move dispatch: extend the active stroke.
    ///
    /// Free mode appends the sample to the polyline. Straight mode, once a
    /// second point exists, overwrites the tail so the stroke is always
    /// exactly `[origin, cursor]` — a live rubber band, not a polyline of
    /// move samples. Moves with no active draw are ignored.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        if !self.drawing {
            return;
        }
        let straight = self.settings.draw_mode == DrawMode::Straight;
        let Some(stroke) = self.document.last_stroke_mut() else {
            // Creation always precedes the drawing flag; this should be
            // unreachable, but a stray event must not crash the session.
            log::warn!("move event while drawing with no stroke in document");
            return;
        };
        if straight && stroke.points().len() > 1 {
            stroke.rubber_band(pos);
        } else {
            stroke.push_point(pos);
        }
    }

    /// Pointer-up: stop drawing. The stroke as accumulated is final.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Click-to-(de)select a shape.
    ///
    /// No-op while a creation tool (Pen/Text) is active. Calculate toggles
    /// text-box membership in the multi-selection; stroke ids are ignored
    /// there, strokes have no value to sum. Select toggles the single
    /// selection: clicking the selected shape again deselects it.
    pub fn handle_select(&mut self, id: ShapeId) {
        if self.tool.creates_shapes() {
            return;
        }

        if self.tool == Tool::Calculate {
            if !id.is_text_box() {
                return;
            }
            if let Some(idx) = self.selected_text_boxes.iter().position(|s| *s == id) {
                self.selected_text_boxes.remove(idx);
            } else {
                self.selected_text_boxes.push(id);
            }
        } else if self.selected_id == Some(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id);
        }
    }

    /// Double-click on a text box opens it for editing. Editing is exclusive:
    /// at most one box is editable at a time.
    pub fn begin_edit(&mut self, id: ShapeId) {
        if self.document.text_box(id).is_some() {
            self.editing = Some(id);
        }
    }

    /// Update the content of the box currently being edited, if any.
    pub fn edit_text(&mut self, text: &str) {
        if let Some(id) = self.editing {
            if let Some(text_box) = self.document.text_box_mut(id) {
                text_box.set_text(text);
            }
        }
    }

    /// Blur: leave edit mode.
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    /// Delete the selected shape. Only available with the Select tool and a
    /// non-empty selection; the Calculate channel is untouched.
    pub fn delete_selected(&mut self) {
        if self.tool != Tool::Select {
            return;
        }
        if let Some(id) = self.selected_id.take() {
            if self.document.remove(id) {
                log::debug!("deleted {id}");
            }
        }
    }

    /// Fold the Calculate selection into a sum, in selection order.
    ///
    /// Text that does not parse as a number contributes zero; so does a
    /// selected id whose box no longer exists. The result is a snapshot,
    /// not reactive to later edits.
    pub fn calculate_sum(&mut self) -> f64 {
        self.sum = self
            .selected_text_boxes
            .iter()
            .map(|id| {
                self.document
                    .text_box(*id)
                    .and_then(|t| t.text().trim().parse::<f64>().ok())
                    .unwrap_or(0.0)
            })
            .sum();
        log::debug!(
            "sum over {} boxes = {}",
            self.selected_text_boxes.len(),
            self.sum
        );
        self.sum
    }

    /// Drag write-back: offset a stroke's points or a text box's anchor.
    pub fn translate(&mut self, id: ShapeId, delta: Vec2) -> Result<(), SessionError> {
        if let Some(stroke) = self.document.stroke_mut(id) {
            stroke.translate(delta);
            return Ok(());
        }
        if let Some(text_box) = self.document.text_box_mut(id) {
            text_box.translate(delta);
            return Ok(());
        }
        Err(SessionError::UnknownShape(id))
    }
}
