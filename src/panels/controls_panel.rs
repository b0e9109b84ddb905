use egui::Color32;

use crate::ShapeDrawerApp;
use crate::app::Status;
use crate::shape::ShapeKind;

pub fn controls_panel(app: &mut ShapeDrawerApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Shape Drawer");
            ui.separator();

            let settings = app.settings_mut();

            ui.label("Select Shape:");
            egui::ComboBox::from_id_salt("shape_kind")
                .selected_text(settings.kind.name())
                .show_ui(ui, |ui| {
                    for kind in ShapeKind::ALL {
                        ui.selectable_value(&mut settings.kind, kind, kind.name());
                    }
                });

            ui.label("Select Color:");
            ui.text_edit_singleline(&mut settings.color);

            ui.label("Size:");
            ui.text_edit_singleline(&mut settings.size);

            ui.label("File:");
            ui.text_edit_singleline(&mut settings.file_path);

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Draw").clicked() {
                    app.draw();
                }
                if ui.button("Delete").clicked() {
                    app.delete();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.save();
                }
                if ui.button("Load").clicked() {
                    app.load();
                }
            });

            ui.separator();

            let settings = app.settings_mut();
            let mut changed = ui
                .checkbox(&mut settings.session.commit_drag_size, "Keep dragged size")
                .changed();
            changed |= ui
                .checkbox(&mut settings.session.keep_hidden_shapes, "Keep wiped shapes")
                .on_hover_text("Shapes cleared by Draw are still saved")
                .changed();
            if changed {
                log::info!("Session options changed: {:?}", app.settings().session);
                app.sync_session_config();
            }

            ui.separator();

            match app.status() {
                Some(Status::Info(message)) => {
                    ui.label(message.as_str());
                }
                Some(Status::Error(message)) => {
                    ui.colored_label(Color32::RED, message.as_str());
                }
                None => {}
            }

            let session = app.session();
            ui.small(format!("Shapes in store: {}", session.store().len()));
            ui.small(format!("Primitives on canvas: {}", session.surface().len()));
            ui.small(format!("Render calls: {}", session.surface().stats().total()));
            ui.small(format!("Gesture: {}", session.gesture().name()));
            if let Some(shape) = session.selected() {
                ui.small(format!(
                    "Selected: {} {} {} {}",
                    shape.id(),
                    shape.kind(),
                    shape.color(),
                    shape.size()
                ));
            }
        });
}
