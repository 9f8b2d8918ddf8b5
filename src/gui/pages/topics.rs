// src/gui/pages/topics.rs
use chrono::Utc;
use eframe::egui;

use crate::{
    analyze::{SortColumn, SortDirection},
    config::{consts::MAX_DAYS, options::PageKind},
    data::{chart_bars, keyword_series, DataSet},
    gui::{
        app::App,
        components::{bar_chart, data_table},
        progress::GuiProgress,
    },
    runner::run_topics,
};

use super::Page;

pub struct TopicsPage;
pub static PAGE: TopicsPage = TopicsPage;

impl Page for TopicsPage {
    fn title(&self) -> &'static str { "Viral Topics" }
    fn kind(&self) -> PageKind { PageKind::Topics }
    fn run_label(&self) -> &'static str { "SCAN" }

    fn draw_inputs(&self, ui: &mut egui::Ui, app: &mut App) {
        let topics = &mut app.state.options.topics;
        let before = (topics.min_views, topics.max_subscribers, topics.sort_by, topics.direction);

        ui.label("Keywords (one per line)");
        ui.add(egui::TextEdit::multiline(&mut topics.keywords_text).desired_rows(6));

        egui::Grid::new("topics_inputs").num_columns(2).show(ui, |ui| {
            ui.label("Days back");
            ui.add(egui::DragValue::new(&mut topics.days).range(1..=MAX_DAYS));
            ui.end_row();

            ui.label("Min views");
            ui.add(egui::DragValue::new(&mut topics.min_views).speed(100));
            ui.end_row();

            ui.label("Max subscribers");
            ui.add(egui::DragValue::new(&mut topics.max_subscribers).speed(100));
            ui.end_row();

            ui.label("Sort by");
            egui::ComboBox::from_id_salt("topics_sort_by")
                .selected_text(topics.sort_by.label())
                .show_ui(ui, |ui| {
                    for col in SortColumn::ALL {
                        ui.selectable_value(&mut topics.sort_by, col, col.label());
                    }
                });
            ui.end_row();

            ui.label("Order");
            ui.horizontal(|ui| {
                ui.selectable_value(&mut topics.direction, SortDirection::Descending, "Desc");
                ui.selectable_value(&mut topics.direction, SortDirection::Ascending, "Asc");
            });
            ui.end_row();
        });

        ui.checkbox(&mut app.state.gui.topics_show_chart, "Show chart");

        // Filter/sort changes re-apply to the last scan without refetching.
        let topics = &app.state.options.topics;
        let after = (topics.min_views, topics.max_subscribers, topics.sort_by, topics.direction);
        if after != before {
            logd!("UI: topics filter/sort → {:?}", after);
            let shown = app.topics_run.as_mut().map(|run| {
                run.refilter(topics);
                run.shown.len()
            });
            match shown {
                Some(0) => app.warn("No videos matched your filters"),
                Some(n) => app.status(format!("{n} video(s) shown")),
                None => {}
            }
        }
    }

    fn run(&self, app: &mut App) {
        let opts = app.state.options.topics.clone();
        logf!("Scan: Begin keywords={:?} days={}", opts.keywords(), opts.days);

        let mut prog = GuiProgress::new(app.status.clone());
        let res = app.client().and_then(|yt| run_topics(yt, &opts, Utc::now(), Some(&mut prog)));

        match res {
            Ok(run) => {
                if run.no_matches() {
                    app.warn("No videos matched your filters");
                } else {
                    app.status(format!("{} of {} video(s) shown", run.shown.len(), run.rows.len()));
                }
                app.topics_run = Some(run);
            }
            Err(e) => {
                app.topics_run = None;
                app.report(&e);
            }
        }
    }

    fn draw_results(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(run) = &app.topics_run else {
            ui.weak("Enter keywords and press SCAN.");
            return;
        };
        if run.no_matches() {
            ui.weak("No videos matched your filters.");
            return;
        }

        if app.state.gui.topics_show_chart {
            let metric = app.state.options.topics.sort_by;
            let bars = chart_bars(&run.shown, metric);
            let series = keyword_series(&run.shown);
            let axis = match metric {
                SortColumn::PublishDate => SortColumn::Views.label(),
                m => m.label(),
            };
            bar_chart::draw(ui, axis, &bars, &series);
            ui.separator();
        }

        data_table::draw(ui, "topics_table", &run.table);
    }

    fn dataset<'a>(&self, app: &'a App) -> Option<&'a DataSet> {
        app.topics_run.as_ref().map(|r| &r.table)
    }
}
