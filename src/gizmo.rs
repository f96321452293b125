use egui::{Color32, Rect, Stroke, Ui, Vec2};

const HANDLE_SIZE: f32 = 8.0;
const HANDLE_COLOR: Color32 = Color32::from_rgb(30, 144, 255);

/// Transform-handle overlay attached to whichever shape carries the single
/// selection.
///
/// The overlay is resolved from the selected id at draw time, every frame;
/// it holds no reference to the shape itself. Drag mechanics live in the
/// canvas panel (raw pointer deltas written back through
/// [`SessionState::translate`](crate::session::SessionState::translate)),
/// so the gizmo itself is purely visual.
#[derive(Debug, Clone, Copy)]
pub struct TransformGizmo {
    bounds: Rect,
}

impl TransformGizmo {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Draw the bounding box and its handles.
    pub fn draw(&self, ui: &Ui) {
        let painter = ui.painter();

        painter.rect_stroke(self.bounds, 0.0, Stroke::new(1.0, HANDLE_COLOR));

        let corners = [
            self.bounds.left_top(),
            self.bounds.right_top(),
            self.bounds.left_bottom(),
            self.bounds.right_bottom(),
        ];
        for corner in corners {
            let handle_rect = Rect::from_center_size(corner, Vec2::splat(HANDLE_SIZE));
            painter.rect_filled(handle_rect, 0.0, HANDLE_COLOR);
        }

        painter.circle_filled(self.bounds.center(), HANDLE_SIZE / 2.0, HANDLE_COLOR);
    }
}
