// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
        }
    }
    if app.state.options.export.is_default_path() {
        app.refresh_out_path_text();
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let page = app.current_page();
        let kind = page.kind();

        // Copy
        if ui.button("Copy").clicked() {
            match page.dataset(app).filter(|ds| !ds.is_empty()) {
                None => {
                    app.status("Nothing to copy");
                    logd!("Copy: Clicked, but there's nothing to copy");
                }
                Some(ds) => {
                    let txt = file::export_string(&app.state.options.export, ds);
                    logf!("Copy: page={:?}, rows={}", kind, ds.row_count());
                    ui.ctx().copy_text(txt);
                    app.status("Copied to clipboard");
                }
            }
        }

        // Export
        if ui.button("Export").clicked() {
            app.apply_out_path();
            let res = page
                .dataset(app)
                .filter(|ds| !ds.is_empty())
                .map(|ds| file::write_export(&app.state.options.export, kind, ds));
            match res {
                None => {
                    app.status("Nothing to export");
                    logd!("Export: Clicked, but there's nothing to export");
                }
                Some(Ok(path)) => app.status(format!("Exported to {}", path.display())),
                Some(Err(e)) => {
                    loge!("Export: Error: {}", e);
                    app.error(format!("Export error: {e}"));
                }
            }
        }
    });
}
