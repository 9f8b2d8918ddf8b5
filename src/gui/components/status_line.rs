// src/gui/components/status_line.rs
use eframe::egui::{self, Color32, RichText};
use crate::gui::app::{App, StatusKind};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let status = app.current_status();
    let text = RichText::new(format!("Status: {}", status.text));
    let text = match status.kind {
        StatusKind::Info => text,
        StatusKind::Warning => text.color(Color32::from_rgb(0xF0, 0xD2, 0x3C)),
        StatusKind::Error => text.color(Color32::from_rgb(0xDC, 0x61, 0x49)),
    };
    ui.label(text);
}
