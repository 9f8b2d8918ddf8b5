// src/gui/components/data_table.rs
//
// Read-only table over a DataSet. Numeric columns are right-aligned with
// thousands separators; the URL column is a clickable link.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::core::sanitize::group_thousands;
use crate::data::{DataSet, URL_COLUMN};

fn initial_width(header: &str) -> f32 {
    match header {
        "Title" => 320.0,
        "Channel" | "Tags" => 180.0,
        "Keyword" => 120.0,
        "PublishDate" => 150.0,
        URL_COLUMN => 200.0,
        _ => 90.0,
    }
}

pub fn draw(ui: &mut egui::Ui, id: &str, ds: &DataSet) {
    let headers: Vec<String> = ds.headers.clone().unwrap_or_default();
    let cols = ds.header_count();
    if cols == 0 {
        ui.weak("No rows.");
        return;
    }

    // A column is numeric when every cell parses as an integer.
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| !ds.rows.is_empty() && ds.rows.iter().all(|r| r.get(ci).is_some_and(|c| c.parse::<u64>().is_ok())))
        .collect();
    let url_col = ds.column_index(URL_COLUMN);

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt((id, "hscroll"))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt((id, "table"))
                .striped(true)
                .min_scrolled_height(0.0);
            for ci in 0..cols {
                let w = headers.get(ci).map(|h| initial_width(h)).unwrap_or(90.0);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.strong(headers.get(ci).map(String::as_str).unwrap_or(""));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, ds.row_count(), |mut row| {
                        let Some(data) = ds.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if Some(ci) == url_col {
                                    ui.hyperlink_to(cell, cell);
                                } else if numeric[ci] {
                                    let shown = cell.parse::<u64>().map(group_thousands).unwrap_or_else(|_| s!(cell));
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(RichText::new(shown).monospace());
                                    });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
