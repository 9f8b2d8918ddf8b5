// src/gui/pages/channel.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::DataSet,
    gui::{
        app::App,
        components::{channel_summary, data_table},
        progress::GuiProgress,
    },
    runner::run_channel,
};

use super::Page;

pub struct ChannelPage;
pub static PAGE: ChannelPage = ChannelPage;

impl Page for ChannelPage {
    fn title(&self) -> &'static str { "Channel Analyzer" }
    fn kind(&self) -> PageKind { PageKind::Channel }
    fn run_label(&self) -> &'static str { "ANALYZE" }

    fn draw_inputs(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Channel URL");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.options.channel.url)
                .hint_text("https://www.youtube.com/@handle"),
        );
        ui.small("Accepts /channel/ID, /user/NAME, /c/NAME, /@handle, or any page linking to the channel.");
    }

    fn run(&self, app: &mut App) {
        let url = app.state.options.channel.url.trim().to_string();
        if url.is_empty() {
            app.warn("Enter a channel URL");
            return;
        }

        logf!("Analyze: Begin url='{}'", url);
        let mut prog = GuiProgress::new(app.status.clone());
        let res = app.client().and_then(|yt| run_channel(yt, &url, Some(&mut prog)));

        match res {
            Ok(run) => {
                logf!(
                    "Analyze: OK '{}' videos={} tags={}",
                    run.report.overview.title,
                    run.report.top_videos.len(),
                    run.report.top_tags.len()
                );
                if run.report.top_videos.is_empty() {
                    app.warn("Channel has no public videos");
                } else {
                    app.status(format!("Analyzed {}", run.report.overview.title));
                }
                app.channel_run = Some(run);
            }
            Err(e) => {
                app.channel_run = None;
                app.report(&e);
            }
        }
    }

    fn draw_results(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(run) = &app.channel_run else {
            ui.weak("Paste a channel URL and press ANALYZE.");
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("channel_results_scroll")
            .show(ui, |ui| {
                channel_summary::draw(ui, &run.report);
                ui.separator();
                ui.heading("Most viewed videos");
                data_table::draw(ui, "channel_videos", &run.table);
                ui.separator();
                channel_summary::draw_guide(ui);
            });
    }

    fn dataset<'a>(&self, app: &'a App) -> Option<&'a DataSet> {
        app.channel_run.as_ref().map(|r| &r.table)
    }
}
