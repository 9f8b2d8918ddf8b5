// src/gui/components/channel_summary.rs
use eframe::egui::{self, RichText};

use crate::analyze::guide::numbered_steps;
use crate::analyze::ChannelReport;
use crate::core::sanitize::group_thousands;

pub fn draw(ui: &mut egui::Ui, report: &ChannelReport) {
    let o = &report.overview;
    ui.heading(o.title.as_str());

    egui::Grid::new("channel_overview").num_columns(2).striped(true).show(ui, |ui| {
        let mut row = |k: &str, v: String| {
            ui.label(RichText::new(k).strong());
            ui.label(v);
            ui.end_row();
        };
        row("Channel ID", o.id.to_string());
        row("Created", o.created_on.clone());
        row("Subscribers", group_thousands(o.subscribers));
        row("Total views", group_thousands(o.total_views));
        row("Videos", group_thousands(o.video_count));
        row("Monetization", s!(o.monetization.label()));
    });

    ui.add_space(4.0);
    ui.label(o.description.as_str());
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        ui.strong("Top tags:");
        if report.top_tags.is_empty() {
            ui.weak("(none)");
        }
        for t in &report.top_tags {
            ui.label(format!("{} ×{}", t.tag, t.count));
        }
    });
}

pub fn draw_guide(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("How to build a channel like this")
        .default_open(false)
        .show(ui, |ui| {
            for step in numbered_steps() {
                ui.label(step);
            }
        });
}
