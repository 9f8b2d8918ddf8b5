// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::DataSet,
    gui::app::App,
};

pub mod channel;
pub mod topics;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Label on the run button.
    fn run_label(&self) -> &'static str { "RUN" }

    /// Page inputs in the left panel (above the run button).
    fn draw_inputs(&self, ui: &mut egui::Ui, app: &mut App);

    /// Fetch + aggregate. Runs on the UI thread; result lands in `app`.
    fn run(&self, app: &mut App);

    /// Central area: summary, chart, table.
    fn draw_results(&self, ui: &mut egui::Ui, app: &mut App);

    /// Table as displayed; Copy/Export derive their output from it.
    fn dataset<'a>(&self, app: &'a App) -> Option<&'a DataSet>;
}
