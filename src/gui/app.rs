// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    client::YouTube,
    config::{
        options::{ApiOptions, AppOptions, PageKind},
        state::AppState,
    },
    runner::{ChannelRun, TopicsRun},
};

use super::{
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let api = ApiOptions::from_env();
    let state = AppState::with_options(AppOptions { api, ..AppOptions::default() });
    eframe::run_native(
        "YouTube Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // client is rebuilt when the key changes; its cache lives as long as it does
    client: Option<(String, YouTube)>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last result per page
    pub channel_run: Option<ChannelRun>,
    pub topics_run: Option<TopicsRun>,

    // status/progress (progress sink writes here)
    pub status: Arc<Mutex<Status>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let kind = router::all_pages()[state.gui.current_page_index].kind();
        let out_path_text = state.export_path(kind).to_string_lossy().into();

        let status = if state.options.api.api_key.is_empty() {
            Status { text: s!("Enter a YouTube Data API key to begin"), kind: StatusKind::Warning }
        } else {
            Status { text: s!("Idle"), kind: StatusKind::Info }
        };

        logf!("Init: api={:?}, default page={:?}", state.options.api, kind);

        Self {
            state,
            client: None,
            out_path_text,
            out_path_dirty: false,
            channel_run: None,
            topics_run: None,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    fn set(&self, text: String, kind: StatusKind) {
        if let Ok(mut s) = self.status.lock() {
            *s = Status { text, kind };
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) { self.set(msg.into(), StatusKind::Info); }

    #[inline]
    pub fn warn<T: Into<String>>(&self, msg: T) { self.set(msg.into(), StatusKind::Warning); }

    #[inline]
    pub fn error<T: Into<String>>(&self, msg: T) { self.set(msg.into(), StatusKind::Error); }

    /// User-input problems are warnings; everything else is an error.
    pub fn report(&self, err: &crate::Error) {
        if err.is_user_input() {
            logd!("UI: input problem: {}", err);
            self.warn(err.to_string());
        } else {
            loge!("UI: run failed: {}", err);
            self.error(format!("Error: {err}"));
        }
    }

    pub fn current_status(&self) -> Status {
        self.status
            .lock()
            .map(|s| s.clone())
            .unwrap_or(Status { text: s!(), kind: StatusKind::Info })
    }

    /// Client for the current key. A changed key gets a fresh client (and cache).
    pub fn client(&mut self) -> crate::Result<&YouTube> {
        let key = self.state.options.api.api_key.trim().to_string();
        let stale = match &self.client {
            Some((k, _)) => *k != key,
            None => true,
        };
        if stale {
            let yt = YouTube::new(&self.state.options.api)?;
            logd!("Client: built (cache capacity={})", yt.cache().capacity());
            self.client = Some((key, yt));
        }
        match &self.client {
            Some((_, yt)) => Ok(yt),
            None => Err(crate::Error::MissingApiKey),
        }
    }

    /// Text field → ExportOptions, only when the user actually typed.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!(
                "Export: Out path set → {}",
                self.state.export_path(self.current_page_kind()).display()
            );
            self.out_path_dirty = false;
        }
    }

    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            self.out_path_text = self
                .state
                .export_path(self.current_page_kind())
                .to_string_lossy()
                .into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                crate::gui::components::side_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_line::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw_results(ui, self);
        });
    }
}
