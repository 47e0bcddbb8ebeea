use eframe::egui::{Align2, Id, ScrollArea, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};

use aim_trends::data::model::{FitPoint, ScenarioGroup};
use aim_trends::state::{AppState, SeriesEmphasis, SeriesKind};

use crate::color::SeriesColors;

const CHART_HEIGHT: f32 = 360.0;

// ---------------------------------------------------------------------------
// Scenario charts (central panel)
// ---------------------------------------------------------------------------

/// Render one chart per scenario and feed legend hover back into the state.
pub fn scenario_charts(ui: &mut Ui, state: &mut AppState) {
    let batch = match &state.batch {
        Some(batch) => batch,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open your stats files to see trends  (File → Open stats…)");
            });
            return;
        }
    };

    let colors = SeriesColors::for_scenarios(batch.dataset.len());
    let emphasis = &state.emphasis;
    let mut hovered = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let charts = batch.dataset.groups().iter().zip(&batch.fits).zip(&colors);
            for (idx, ((group, fit), colors)) in charts.enumerate() {
                if let Some(kind) = scenario_chart(ui, idx, group, fit, colors, emphasis) {
                    hovered = Some(kind);
                }
                ui.add_space(16.0);
            }
        });

    state.emphasis.hover(hovered);
}

fn series_id(chart: usize, kind: SeriesKind) -> Id {
    Id::new(("scenario_series", chart, kind))
}

/// Draw a single scenario chart; returns the series hovered in it, if any.
fn scenario_chart(
    ui: &mut Ui,
    idx: usize,
    group: &ScenarioGroup,
    fit: &[FitPoint],
    colors: &SeriesColors,
    emphasis: &SeriesEmphasis,
) -> Option<SeriesKind> {
    ui.heading(chart_title(group));

    let scores = group.scores();
    let (min, max) = group.value_range();
    let pad = ((max - min) * 0.1).max(1.0);

    let score_id = series_id(idx, SeriesKind::Score);
    let trend_id = series_id(idx, SeriesKind::Trend);
    let score_color = colors.stroke(SeriesKind::Score, emphasis);
    let trend_color = colors.stroke(SeriesKind::Trend, emphasis);

    let score_points = || -> PlotPoints {
        scores
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    };
    let trend_points: PlotPoints = fit
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.fitted_value])
        .collect();

    let response = Plot::new(("scenario_plot", idx))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Run")
        .y_axis_label("Score")
        .include_y(min - pad)
        .include_y(max + pad)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(score_points())
                    .name(SeriesKind::Score)
                    .id(score_id)
                    .color(score_color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(score_points())
                    .name(SeriesKind::Score)
                    .id(score_id)
                    .color(score_color)
                    .radius(3.5),
            );
            for (i, &v) in scores.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, v), format!("{v:.1}"))
                        .color(score_color)
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
            plot_ui.line(
                Line::new(trend_points)
                    .name(SeriesKind::Trend)
                    .id(trend_id)
                    .color(trend_color)
                    .style(LineStyle::dashed_loose())
                    .width(1.5),
            );
        });

    match response.hovered_plot_item {
        Some(id) if id == score_id => Some(SeriesKind::Score),
        Some(id) if id == trend_id => Some(SeriesKind::Trend),
        _ => None,
    }
}

fn chart_title(group: &ScenarioGroup) -> String {
    let name = group.name.trim_end();
    match group.trend() {
        Some(trend) if group.len() > 1 => format!(
            "{name}  ({} runs, {:+.1} per run)",
            group.len(),
            trend.slope
        ),
        _ => format!("{name}  (1 run)"),
    }
}
