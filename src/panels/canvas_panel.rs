use crate::ShapeDrawerApp;

pub fn canvas_panel(app: &mut ShapeDrawerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.session().config().canvas_size;
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        painter.rect_filled(canvas_rect, 0.0, egui::Color32::WHITE);

        app.handle_canvas_input(ctx, canvas_rect);

        app.session()
            .surface()
            .paint(&painter, canvas_rect.min.to_vec2());
    });
}
