use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Results plot (central panel)
// ---------------------------------------------------------------------------

/// Render the figure in the central panel.
pub fn results_plot(ui: &mut Ui, figure: &Figure) {
    let theme = figure.theme;
    let categories = figure.categories.clone();

    Plot::new("results_plot")
        .legend(Legend::default())
        .x_axis_label(figure.x_label.clone())
        .y_axis_label(figure.y_label.clone())
        .show_axes(theme.show_ticks)
        .show_grid(theme.show_grid)
        .x_axis_formatter(move |mark, _range| {
            // Category labels sit on integer positions; suppress the rest.
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            categories.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for series in &figure.series {
                let line: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(line)
                        .name(&series.label)
                        .color(series.color)
                        .width(theme.line_width),
                );

                let markers: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(markers)
                        .name(&series.label)
                        .color(series.color)
                        .radius(theme.marker_radius),
                );
            }
        });
}
