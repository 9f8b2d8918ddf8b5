// src/config/state.rs
use super::options::{AppOptions, PageKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Viral Topics page -> show/hide the bar chart above the table
    pub topics_show_chart: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            topics_show_chart: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }

    pub fn export_path(&self, kind: PageKind) -> std::path::PathBuf {
        self.options.export.out_path(kind)
    }
}
