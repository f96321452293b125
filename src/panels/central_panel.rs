use crate::app::SketchApp;
use crate::gizmo::TransformGizmo;
use crate::input::{PointerEvent, PointerTarget};
use crate::textbox::TEXT_FONT_SIZE;
use crate::tool::Tool;

/// The canvas: routes pointer input into the session, applies Select-tool
/// drags, hosts the floating text editor, and redraws the full state.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            app.input.set_canvas_rect(canvas_rect);

            let events = app.input.process_input(ctx, |pos| {
                app.renderer.hit_test(ui, app.session.document(), pos)
            });
            for event in events {
                dispatch(app, event);
            }

            // Delete with the keyboard, but never while typing into a box.
            if app.session.editing_id().is_none()
                && ctx.input(|i| i.key_pressed(egui::Key::Delete))
            {
                app.session.delete_selected();
            }

            let painter = ui.painter_at(canvas_rect);
            app.renderer.render(ui, &painter, canvas_rect, &app.session);

            if let Some(id) = app.session.selected_id() {
                if let Some(bounds) = app.renderer.shape_rect(ui, app.session.document(), id) {
                    TransformGizmo::new(bounds).draw(ui);
                }
            }
        });

    text_editor(app, ctx);
}

fn dispatch(app: &mut SketchApp, event: PointerEvent) {
    match event {
        PointerEvent::Down { position, target } => {
            app.session.pointer_down(position, target);
            if app.session.tool() == Tool::Select {
                if let PointerTarget::Shape(id) = target {
                    app.drag_shape = Some(id);
                }
            }
        }
        PointerEvent::Moved { position, delta } => {
            app.session.pointer_moved(position);
            if let Some(id) = app.drag_shape {
                if let Err(err) = app.session.translate(id, delta) {
                    log::warn!("drag write-back failed: {err}");
                    app.drag_shape = None;
                }
            }
        }
        PointerEvent::Up => {
            app.session.pointer_up();
            app.drag_shape = None;
        }
        PointerEvent::Clicked { target, .. } => {
            if let PointerTarget::Shape(id) = target {
                app.session.handle_select(id);
            }
        }
        PointerEvent::DoubleClicked { target, .. } => {
            if let PointerTarget::Shape(id) = target {
                app.session.begin_edit(id);
            }
        }
    }
}

/// Floating single-line editor over the text box currently being edited.
fn text_editor(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(id) = app.session.editing_id() else {
        app.editor_target = None;
        return;
    };
    let Some(text_box) = app.session.document().text_box(id) else {
        app.session.end_edit();
        return;
    };
    let pos = text_box.pos();
    let mut text = text_box.text().to_owned();

    egui::Area::new(egui::Id::new("text_box_editor"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .font(egui::FontId::proportional(TEXT_FONT_SIZE))
                    .desired_width(160.0),
            );

            // Grab focus once, when this box first opens for editing.
            if app.editor_target != Some(id) {
                response.request_focus();
                app.editor_target = Some(id);
            }

            if response.changed() {
                app.session.edit_text(&text);
            }
            if response.lost_focus() {
                app.session.end_edit();
                app.editor_target = None;
            }
        });
}
