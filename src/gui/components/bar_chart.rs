// src/gui/components/bar_chart.rs
//
// Horizontal bar chart drawn with the painter: one bar per row, title on the
// category axis, metric on the value axis, one colour per keyword.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::core::sanitize::group_thousands;
use crate::data::Bar;

const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x64, 0xB4, 0xFF),
    Color32::from_rgb(0xF0, 0xD2, 0x3C),
    Color32::from_rgb(0xDC, 0x61, 0x49),
    Color32::from_rgb(0x6A, 0xCC, 0x7A),
    Color32::from_rgb(0xB0, 0x7C, 0xE8),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
    Color32::from_rgb(0x4C, 0xD4, 0xC8),
    Color32::from_rgb(0xE8, 0x7C, 0xB8),
];

const ROW_H: f32 = 18.0;
const LABEL_W: f32 = 260.0;
const MAX_ROWS: usize = 20;

pub fn colour(series: usize) -> Color32 {
    PALETTE[series % PALETTE.len()]
}

fn clip(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        s!(label)
    } else {
        let mut out: String = label.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

pub fn draw(ui: &mut egui::Ui, axis: &str, bars: &[Bar], series: &[String]) {
    // Legend
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("{axis} by keyword:"));
        for (i, kw) in series.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, colour(i));
            ui.label(kw.as_str());
        }
    });

    let shown = &bars[..bars.len().min(MAX_ROWS)];
    if shown.is_empty() {
        return;
    }
    let max = shown.iter().map(|b| b.value).fold(0.0_f64, f64::max).max(1.0);

    let width = ui.available_width().max(LABEL_W + 120.0);
    let height = ROW_H * shown.len() as f32 + 4.0;
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_colour = ui.visuals().text_color();
    let font = FontId::proportional(12.0);

    let plot_left = rect.left() + LABEL_W;
    let plot_w = (rect.right() - plot_left - 80.0).max(20.0);

    painter.line_segment(
        [Pos2::new(plot_left, rect.top()), Pos2::new(plot_left, rect.bottom())],
        Stroke::new(1.0, text_colour.gamma_multiply(0.4)),
    );

    let mut hovered: Option<&Bar> = None;
    for (i, bar) in shown.iter().enumerate() {
        let y = rect.top() + 2.0 + i as f32 * ROW_H;
        let len = (bar.value / max) as f32 * plot_w;
        let bar_rect = Rect::from_min_size(Pos2::new(plot_left, y + 2.0), Vec2::new(len.max(1.0), ROW_H - 4.0));

        painter.text(
            Pos2::new(plot_left - 6.0, y + ROW_H / 2.0),
            Align2::RIGHT_CENTER,
            clip(&bar.label, 40),
            font.clone(),
            text_colour,
        );
        painter.rect_filled(bar_rect, 2.0, colour(bar.series));
        painter.text(
            Pos2::new(bar_rect.right() + 4.0, y + ROW_H / 2.0),
            Align2::LEFT_CENTER,
            group_thousands(bar.value as u64),
            font.clone(),
            text_colour,
        );

        if resp.hover_pos().is_some_and(|p| p.y >= y && p.y < y + ROW_H) {
            hovered = Some(bar);
        }
    }

    if let Some(bar) = hovered {
        resp.on_hover_text(format!(
            "{}\n{}: {}\n{}",
            bar.label,
            axis,
            group_thousands(bar.value as u64),
            series.get(bar.series).map(String::as_str).unwrap_or("")
        ));
    }

    if bars.len() > MAX_ROWS {
        ui.weak(format!("Showing first {MAX_ROWS} of {} rows", bars.len()));
    }
}
