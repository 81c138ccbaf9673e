use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotResponse};
use std::ops::RangeInclusive;

use crate::application::chart::BarChartSpec;
use crate::ui::{spacing, theme, typography};

pub const CHART_HEIGHT: f32 = 220.0;

/// Draws a [`BarChartSpec`]. Bars sit at x = 1..=N, the y axis spans the spec's range.
pub fn bar_chart(ui: &mut egui::Ui, id: &str, spec: &BarChartSpec) -> egui::Response {
    let theme = theme::current_theme();

    ui.label(typography::bold_label(&spec.title).color(theme.text_primary));
    ui.add_space(spacing::SPACING_SM);

    score_plot(ui, id, spec).response
}

/// The plot itself. The y axis is pinned to `[y_min, y_max]` with no margin.
fn score_plot(ui: &mut egui::Ui, id: &str, spec: &BarChartSpec) -> PlotResponse<()> {
    let [r, g, b, a] = spec.bar_color;
    let bar_color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);

    let bars: Vec<Bar> = spec
        .bars()
        .enumerate()
        .map(|(index, (label, value))| {
            Bar::new(bar_position(index), value)
                .name(label)
                .width(spec.bar_width)
                .fill(bar_color)
        })
        .collect();

    let labels = spec.labels.clone();
    let x_max = spec.len() as f64 + 0.5;

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.5)
        .include_x(x_max)
        .include_y(spec.y_min)
        .include_y(spec.y_max)
        .set_margin_fraction(egui::vec2(0.05, 0.0))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(bar_color));
        })
}

fn bar_position(index: usize) -> f64 {
    (index + 1) as f64
}

/// Session label under whole-number ticks that carry a bar, blank elsewhere.
fn axis_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 1.0 {
        return String::new();
    }
    labels
        .get(value as usize - 1)
        .cloned()
        .unwrap_or_default()
}
