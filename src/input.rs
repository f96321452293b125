use egui::{Context, PointerButton, Pos2, Rect, Vec2};

use crate::id::ShapeId;

/// What the pointer was over when an event fired: the empty background or an
/// existing shape. Resolved by hit-testing at event time; the session never
/// holds live references into the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Background,
    Shape(ShapeId),
}

/// Domain-level pointer events fed to the session.
///
/// `Down`/`Moved`/`Up` drive the drawing state machine; `Clicked` (a press
/// and release without dragging) drives selection toggles so that dragging a
/// shape does not also toggle it; `DoubleClicked` opens text boxes for
/// editing.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down {
        position: Pos2,
        target: PointerTarget,
    },
    Moved {
        position: Pos2,
        delta: Vec2,
    },
    Up,
    Clicked {
        position: Pos2,
        target: PointerTarget,
    },
    DoubleClicked {
        position: Pos2,
        target: PointerTarget,
    },
}

/// Converts raw egui pointer input within the canvas into [`PointerEvent`]s.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Process raw egui input and generate our pointer events.
    ///
    /// `hit_test` resolves a position to whatever shape is under it; it is
    /// only consulted for presses and clicks inside the canvas. Moves are
    /// reported wherever the pointer is (so an in-progress stroke keeps
    /// following the cursor), releases always (so drawing reliably stops).
    pub fn process_input(
        &mut self,
        ctx: &Context,
        hit_test: impl Fn(Pos2) -> PointerTarget,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if let Some(last) = self.last_pointer_pos {
                    if pos != last {
                        events.push(PointerEvent::Moved {
                            position: pos,
                            delta: pos - last,
                        });
                    }
                }
                self.last_pointer_pos = Some(pos);
            } else {
                self.last_pointer_pos = None;
            }

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos() {
                    if self.canvas_rect.contains(pos) {
                        events.push(PointerEvent::Down {
                            position: pos,
                            target: hit_test(pos),
                        });
                    }
                }
            }

            if input.pointer.button_released(PointerButton::Primary) {
                events.push(PointerEvent::Up);
            }

            if input.pointer.button_clicked(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos() {
                    if self.canvas_rect.contains(pos) {
                        events.push(PointerEvent::Clicked {
                            position: pos,
                            target: hit_test(pos),
                        });
                    }
                }
            }

            if input.pointer.button_double_clicked(PointerButton::Primary) {
                if let Some(pos) = input.pointer.interact_pos() {
                    if self.canvas_rect.contains(pos) {
                        events.push(PointerEvent::DoubleClicked {
                            position: pos,
                            target: hit_test(pos),
                        });
                    }
                }
            }
        });

        events
    }
}
