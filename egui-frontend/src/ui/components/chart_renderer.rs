//! # Chart Renderer Module
//!
//! This module handles the inflow/outflow chart visualization for the
//! finance control app using egui_plot.
//!
//! ## Key Functions:
//! - `render_flow_chart()` - Render one flow series as a filled line chart
//!
//! ## Purpose:
//! Each accepted transaction appends one point to the series of its
//! direction; the charts simply plot whatever the series buffers hold,
//! using the buffers' min/max x for the horizontal bounds.

use eframe::egui;
use egui_plot::{Corner, CoordinatesFormatter, Line, Plot, PlotPoints};

use crate::backend::domain::series_service::SeriesBuffer;

/// Render one flow chart from its series buffer
pub fn render_flow_chart(
    ui: &mut egui::Ui,
    id: &str,
    buffer: &SeriesBuffer,
    line_color: egui::Color32,
    height: f32,
) {
    let raw_points: Vec<[f64; 2]> = buffer
        .points()
        .iter()
        .map(|point| [point.x as f64, point.y])
        .collect();

    let line_points: PlotPoints = raw_points.iter().copied().collect();
    let line = Line::new(line_points)
        .color(line_color)
        .stroke(egui::Stroke::new(2.0, line_color))
        .fill(0.0); // shade the area under the line

    let mut plot = Plot::new(id.to_owned())
        .height(height.max(0.0))
        .show_axes([true, true])
        .show_grid([true, true])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .include_y(0.0)
        .coordinates_formatter(
            Corner::LeftBottom,
            CoordinatesFormatter::new(|point, _bounds| {
                format!("({:.0}, {:.2})", point.x, point.y)
            }),
        )
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value));

    // Horizontal bounds come from the buffer's full-scan min/max
    if let (Some(min_x), Some(max_x)) = (buffer.min_x(), buffer.max_x()) {
        plot = plot.include_x(min_x as f64).include_x(max_x as f64);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(line);
    });
}
