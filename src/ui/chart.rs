//! Visitor chart section: axis, animated line, area fill, and data points.
//!
//! Rendering is a pure function of the chart data, the widget's timeline
//! progress at `now_ms`, and the section rect. Without a mounted widget the
//! chart draws fully settled and registers no hit areas.

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::helpers::render_text_at;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{
    COLOR_CHART_AREA, COLOR_CHART_AXIS, COLOR_CHART_LINE, COLOR_CHART_POINT, COLOR_DIM,
    COLOR_TITLE,
};
use crate::page::{month_label, ChartData};
use crate::widgets::ChartWidget;

/// Rows reserved for the plot grid between the subtitle and the month labels.
const PLOT_ROWS: u16 = 10;
/// Columns left of the plot for the value axis.
const AXIS_COLS: u16 = 7;

// ============================================================================
// Geometry
// ============================================================================

/// The plot grid inside the chart section.
fn plot_area(area: Rect) -> Rect {
    Rect {
        x: area.x + AXIS_COLS,
        y: area.y + 3,
        width: area.width.saturating_sub(AXIS_COLS + 2),
        height: PLOT_ROWS,
    }
}

/// Evenly spread columns for `count` points across the plot width.
fn point_columns(count: usize, plot: Rect) -> Vec<u16> {
    if count == 0 || plot.width == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![plot.x + plot.width / 2];
    }
    (0..count)
        .map(|i| plot.x + (i as u16) * (plot.width - 1) / (count as u16 - 1))
        .collect()
}

/// Plot row for a value on a zero-based scale up to `max`.
fn value_row(value: u32, max: u32, plot: Rect) -> u16 {
    let span = u32::from(plot.height - 1);
    let offset = (value * span + max / 2) / max;
    plot.y + (plot.height - 1) - offset as u16
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the chart section into the page buffer. A mounted widget drives the
/// entrance timeline and hover registration; `None` draws the settled chart.
pub fn render_chart(
    buf: &mut Buffer,
    area: Rect,
    data: &ChartData,
    chart: Option<&ChartWidget>,
    now_ms: u64,
    registry: &mut HitAreaRegistry,
) {
    if area.width < 24 || area.height < 16 {
        return;
    }

    render_text_at(
        buf,
        area.x + 1,
        area.y,
        data.title,
        Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        area,
    );
    render_text_at(
        buf,
        area.x + 1,
        area.y + 1,
        data.subtitle,
        Style::default().fg(COLOR_DIM),
        area,
    );

    let plot = plot_area(area);
    render_axis(buf, area, plot, data);

    if data.points.is_empty() {
        return;
    }
    let max = data.points.iter().map(|p| p.value).max().unwrap_or(1).max(1);
    let columns = point_columns(data.points.len(), plot);
    let rows: Vec<u16> = data.points.iter().map(|p| value_row(p.value, max, plot)).collect();

    // Timeline progress; a missing widget means the settled end state.
    let (line_progress, area_alpha, engaged) = match chart {
        Some(widget) => (
            widget.line_progress(now_ms),
            widget.area_alpha(now_ms),
            widget.engaged,
        ),
        None => (1.0, 1.0, true),
    };
    let dim = if engaged {
        Modifier::empty()
    } else {
        Modifier::DIM
    };

    let revealed = plot.x + (line_progress * f32::from(plot.width)) as u16;
    render_line_and_fill(buf, plot, &columns, &rows, revealed, area_alpha, dim);

    for (i, point) in data.points.iter().enumerate() {
        let scale = match chart {
            Some(widget) => widget.point_scale(i, now_ms),
            None => 1.0,
        };
        if scale <= 0.0 {
            continue;
        }
        let symbol = if scale < 0.5 {
            '\u{00B7}'
        } else if scale < 1.0 {
            '\u{2022}'
        } else {
            '\u{25CF}'
        };
        buf[(columns[i], rows[i])]
            .set_char(symbol)
            .set_style(Style::default().fg(COLOR_CHART_POINT).add_modifier(dim));

        if chart.is_some() {
            registry.register_with_tooltip(
                Rect {
                    x: columns[i].saturating_sub(1),
                    y: rows[i],
                    width: 3,
                    height: 1,
                },
                ClickAction::ChartPoint(i),
                vec![
                    format!("{} bezoekers", point.value),
                    format!("{} {}", month_label(&point.date), point.date.year()),
                ],
            );
        }
    }
}

/// Value axis, baseline, and the month labels row.
fn render_axis(buf: &mut Buffer, area: Rect, plot: Rect, data: &ChartData) {
    let axis_x = plot.x - 1;
    let axis_style = Style::default().fg(COLOR_CHART_AXIS);
    for y in plot.y..plot.y + plot.height {
        buf[(axis_x, y)].set_char('\u{2502}').set_style(axis_style);
    }
    let baseline_y = plot.y + plot.height;
    buf[(axis_x, baseline_y)].set_char('\u{2514}').set_style(axis_style);
    for x in plot.x..plot.x + plot.width {
        buf[(x, baseline_y)].set_char('\u{2500}').set_style(axis_style);
    }

    let max = data.points.iter().map(|p| p.value).max().unwrap_or(0);
    let label_style = Style::default().fg(COLOR_DIM);
    let mut label = |value: u32, y: u16| {
        let text = format!("{value:>5}");
        render_text_at(buf, area.x, y, &text, label_style, area);
    };
    label(max, plot.y);
    label(max / 2, plot.y + (plot.height - 1) / 2);
    label(0, plot.y + plot.height - 1);

    // Month labels, thinned when the points sit too close together.
    let columns = point_columns(data.points.len(), plot);
    if columns.len() < 2 {
        return;
    }
    let step = columns[1] - columns[0];
    let every = if step >= 4 {
        1
    } else if step >= 2 {
        2
    } else {
        3
    };
    for (i, point) in data.points.iter().enumerate() {
        if i % every != 0 {
            continue;
        }
        let text = month_label(&point.date);
        let x = columns[i].saturating_sub(text.len() as u16 / 2).max(area.x);
        render_text_at(buf, x, baseline_y + 1, text, label_style, area);
    }
}

/// The connecting line plus the area fill below it, clipped to the reveal
/// column of the entrance animation.
fn render_line_and_fill(
    buf: &mut Buffer,
    plot: Rect,
    columns: &[u16],
    rows: &[u16],
    revealed: u16,
    area_alpha: f32,
    dim: Modifier,
) {
    let line_style = Style::default().fg(COLOR_CHART_LINE).add_modifier(dim);
    let fill_style = Style::default().fg(COLOR_CHART_AREA).add_modifier(dim);
    let fill_char = if area_alpha < 0.5 { '\u{2591}' } else { '\u{2592}' };
    let plot_bottom = plot.y + plot.height;

    for seg in 0..columns.len().saturating_sub(1) {
        let (x0, x1) = (columns[seg], columns[seg + 1]);
        let (y0, y1) = (rows[seg], rows[seg + 1]);
        for x in x0..=x1 {
            if x >= revealed {
                break;
            }
            let y = if x1 == x0 {
                y0
            } else {
                let t = f32::from(x - x0) / f32::from(x1 - x0);
                let exact = f32::from(y0) + t * (f32::from(y1) - f32::from(y0));
                exact.round() as u16
            };
            buf[(x, y)].set_char('\u{00B7}').set_style(line_style);
            if area_alpha > 0.0 {
                for fy in y + 1..plot_bottom {
                    buf[(x, fy)].set_char(fill_char).set_style(fill_style);
                }
            }
        }
    }
}
