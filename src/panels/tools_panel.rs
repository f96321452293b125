use crate::app::SketchApp;
use crate::stroke::LineType;
use crate::tool::{DrawMode, Tool};

/// Left side panel: tool switching plus the per-tool controls.
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let current = app.session.tool();
            for tool in [Tool::Pen, Tool::Select, Tool::Calculate] {
                // The Text tool is entered via "Create Text Box" below, not
                // from this list; show it as Pen being active.
                let active = current == tool || (tool == Tool::Pen && current == Tool::Text);
                if ui.selectable_label(active, tool.label()).clicked() {
                    log::info!("tool selected from UI: {}", tool.label());
                    app.session.set_tool(tool);
                }
            }

            ui.separator();

            match app.session.tool() {
                Tool::Pen | Tool::Text => pen_controls(app, ui),
                Tool::Select => select_controls(app, ui),
                Tool::Calculate => calculate_controls(app, ui),
            }

            ui.separator();
            grid_controls(app, ui);
        });
}

fn pen_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.label("Draw mode");
    ui.horizontal(|ui| {
        let mode = app.session.settings().draw_mode;
        if ui
            .selectable_label(mode == DrawMode::Free, "Free Draw")
            .clicked()
        {
            app.session.settings_mut().draw_mode = DrawMode::Free;
        }
        if ui
            .selectable_label(mode == DrawMode::Straight, "Straight Line")
            .clicked()
        {
            app.session.settings_mut().draw_mode = DrawMode::Straight;
        }
    });

    if ui.button("Create Text Box").clicked() {
        app.session.set_tool(Tool::Text);
    }
    if app.session.tool() == Tool::Text {
        ui.label("Click the canvas to place a text box.");
    }

    let settings = app.session.settings_mut();

    egui::ComboBox::from_label("Line type")
        .selected_text(settings.line_type.label())
        .show_ui(ui, |ui| {
            for line_type in [LineType::Solid, LineType::Dashed, LineType::Dotted] {
                ui.selectable_value(&mut settings.line_type, line_type, line_type.label());
            }
        });

    ui.horizontal(|ui| {
        ui.label("Pen size:");
        ui.add(egui::Slider::new(&mut settings.pen_size, 1..=10));
    });

    ui.horizontal(|ui| {
        ui.label("Line color:");
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut settings.color,
            egui::color_picker::Alpha::Opaque,
        );
    });
}

fn select_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    let has_selection = app.session.selected_id().is_some();
    if ui
        .add_enabled(has_selection, egui::Button::new("Delete Selected"))
        .clicked()
    {
        app.session.delete_selected();
    }
    if !has_selection {
        ui.label("Click a shape to select it.");
    }
}

fn calculate_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    if ui.button("Calculate Sum").clicked() {
        app.session.calculate_sum();
    }
    ui.label(format!("Sum: {}", app.session.sum()));
    ui.label(format!(
        "{} box(es) selected",
        app.session.selected_text_boxes().len()
    ));
}

fn grid_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    let grid = app.session.grid_mut();
    ui.horizontal(|ui| {
        ui.label("Grid size:");
        ui.add(egui::Slider::new(&mut grid.size, 20..=100).step_by(10.0));
    });
    if ui
        .button(if grid.visible { "Hide Grid" } else { "Show Grid" })
        .clicked()
    {
        grid.visible = !grid.visible;
    }
}
