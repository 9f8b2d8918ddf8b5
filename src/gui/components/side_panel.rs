// src/gui/components/side_panel.rs
//
// Left panel: API key, the current page's inputs, and its run button.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    ui.heading(page.title());
    ui.separator();

    ui.label("API key");
    if ui
        .add(egui::TextEdit::singleline(&mut app.state.options.api.api_key).password(true))
        .changed()
    {
        logd!("UI: api key edited (set={})", !app.state.options.api.api_key.is_empty());
    }
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("inputs_panel_scroll")
        .show(ui, |ui| {
            page.draw_inputs(ui, app);

            ui.add_space(10.0);

            let red = egui::Color32::from_rgb(220, 30, 30);
            let black = egui::Color32::BLACK;
            if ui
                .add(
                    egui::Button::new(egui::RichText::new(page.run_label()).color(black).strong())
                        .fill(red),
                )
                .clicked()
            {
                logf!("UI: {} clicked on {:?}", page.run_label(), page.kind());
                page.run(app);
            }
        });
}
