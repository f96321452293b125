use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Ui};

use crate::document::Document;
use crate::id::ShapeId;
use crate::input::PointerTarget;
use crate::session::SessionState;
use crate::stroke::Stroke;
use crate::textbox::{TEXT_FONT_SIZE, TextBox};
use crate::tool::Tool;

/// Color a shape is recolored to while it carries the single selection.
pub const SELECTION_COLOR: Color32 = Color32::BLUE;
/// Color a text box is recolored to while selected for calculation.
pub const CALC_TEXT_COLOR: Color32 = Color32::BLUE;
const TEXT_COLOR: Color32 = Color32::BLACK;
const GRID_COLOR: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
const CANVAS_COLOR: Color32 = Color32::WHITE;

/// Padding around a text box's rendered bounds, for the calculate-mode
/// highlight rectangle and for hit-testing.
const TEXT_PADDING: f32 = 5.0;
/// Extra slop around a stroke's line when hit-testing it.
const STROKE_HIT_SLOP: f32 = 4.0;

/// Draws the whole session state onto the canvas each frame and answers
/// hit-test queries against the same geometry it draws.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Redraw the full current state: grid, strokes, text boxes, selection
    /// highlights. The transform-handle overlay is drawn separately by the
    /// gizmo so it can sit above everything else.
    pub fn render(&self, ui: &Ui, painter: &Painter, canvas: Rect, session: &SessionState) {
        painter.rect_filled(canvas, 0.0, CANVAS_COLOR);

        if session.grid().visible {
            for segment in session.grid().lines(canvas) {
                painter.line_segment(segment, egui::Stroke::new(1.0, GRID_COLOR));
            }
        }

        for stroke in session.document().strokes() {
            self.paint_stroke(painter, stroke, session.selected_id() == Some(stroke.id()));
        }

        let calculating = session.tool() == Tool::Calculate;
        for text_box in session.document().text_boxes() {
            let calc_selected =
                calculating && session.selected_text_boxes().contains(&text_box.id());
            if calc_selected {
                painter.rect_filled(
                    self.text_rect(ui, text_box).expand(TEXT_PADDING),
                    0.0,
                    Color32::YELLOW.gamma_multiply(0.3),
                );
            }
            let color = if calc_selected {
                CALC_TEXT_COLOR
            } else {
                TEXT_COLOR
            };
            painter.text(
                text_box.pos(),
                Align2::LEFT_TOP,
                text_box.text(),
                FontId::proportional(TEXT_FONT_SIZE),
                color,
            );
        }
    }

    fn paint_stroke(&self, painter: &Painter, stroke: &Stroke, selected: bool) {
        let color = if selected {
            SELECTION_COLOR
        } else {
            stroke.style().color
        };
        let width = stroke.style().pen_size as f32;
        let line = egui::Stroke::new(width, color);

        match stroke.points() {
            [] => {}
            [point] => {
                // A click without movement: render the single sample as a dot.
                painter.circle_filled(*point, width / 2.0, color);
            }
            points => match stroke.style().line_type.dash_pattern() {
                None => {
                    painter.add(Shape::line(points.to_vec(), line));
                }
                Some((dash, gap)) => {
                    painter.extend(Shape::dashed_line(points, line, dash, gap));
                }
            },
        }
    }

    /// Rendered bounds of a text box, measured with the UI fonts. An empty
    /// box measures zero; hit-testing relies on the padding to keep it
    /// reachable.
    pub fn text_rect(&self, ui: &Ui, text_box: &TextBox) -> Rect {
        let galley = ui.fonts(|fonts| {
            fonts.layout_no_wrap(
                text_box.text().to_owned(),
                FontId::proportional(TEXT_FONT_SIZE),
                TEXT_COLOR,
            )
        });
        Rect::from_min_size(text_box.pos(), galley.size())
    }

    /// Bounding rect used for the transform-handle overlay of `id`.
    pub fn shape_rect(&self, ui: &Ui, document: &Document, id: ShapeId) -> Option<Rect> {
        if let Some(stroke) = document.stroke(id) {
            return Some(stroke.bounding_rect(TEXT_PADDING));
        }
        document
            .text_box(id)
            .map(|t| self.text_rect(ui, t).expand(TEXT_PADDING))
    }

    /// Resolve what is under `pos`: text boxes first (they draw on top),
    /// then strokes, both topmost-last.
    pub fn hit_test(&self, ui: &Ui, document: &Document, pos: Pos2) -> PointerTarget {
        for text_box in document.text_boxes().iter().rev() {
            if self.text_rect(ui, text_box).expand(TEXT_PADDING).contains(pos) {
                return PointerTarget::Shape(text_box.id());
            }
        }

        for stroke in document.strokes().iter().rev() {
            let reach = stroke.style().pen_size as f32 / 2.0 + STROKE_HIT_SLOP;
            let points = stroke.points();
            if points.len() == 1 {
                if points[0].distance(pos) <= reach {
                    return PointerTarget::Shape(stroke.id());
                }
                continue;
            }
            for segment in points.windows(2) {
                if distance_to_segment(pos, segment[0], segment[1]) <= reach {
                    return PointerTarget::Shape(stroke.id());
                }
            }
        }

        PointerTarget::Background
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn segment_distance_basics() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert_eq!(distance_to_segment(pos2(5.0, 3.0), a, b), 3.0);
        // Beyond the endpoints the distance is to the nearest endpoint.
        assert_eq!(distance_to_segment(pos2(-4.0, 0.0), a, b), 4.0);
        assert_eq!(distance_to_segment(pos2(13.0, 4.0), a, b), 5.0);
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let a = pos2(2.0, 2.0);
        assert_eq!(distance_to_segment(pos2(2.0, 6.0), a, a), 4.0);
    }
}
