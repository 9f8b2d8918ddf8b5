// src/gui/components/mod.rs
pub mod bar_chart;
pub mod channel_summary;
pub mod data_table;
pub mod export_bar;
pub mod side_panel;
pub mod status_line;
pub mod tabs;
