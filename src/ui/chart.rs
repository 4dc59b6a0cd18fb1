//! Inline SVG charts for the dashboard.

use super::escape_html;
use crate::models::ChartPoint;
use std::f64::consts::PI;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;
const TICKS: usize = 4;

const PIE_COLORS: [&str; 5] = [
    "rgba(255, 99, 132, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 206, 86, 0.8)",
    "rgba(75, 192, 192, 0.8)",
    "rgba(153, 102, 255, 0.8)",
];

/// One line on a [`line_chart`], scaled against its own axis.
pub struct Series<'a> {
    pub label: &'a str,
    pub values: Vec<f64>,
}

pub fn empty_chart(message: &str) -> String {
    svg(&format!(
        r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">{}</text>"#,
        escape_html(message)
    ))
}

fn svg(inner: &str) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img">{inner}</svg>"#
    )
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Value range with zero included and a non-empty span.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min == max {
        min -= 1.0;
        max += 1.0;
    }
    (min, max)
}

fn y_scale(min: f64, max: f64) -> impl Fn(f64) -> f64 {
    let scale = (HEIGHT - TOP - PADDING_Y) / (max - min);
    move |value| HEIGHT - PADDING_Y - (value - min) * scale
}

fn grid(min: f64, max: f64, y: &impl Fn(f64) -> f64) -> String {
    let mut out = String::new();
    for i in 0..=TICKS {
        let value = min + (max - min) * i as f64 / TICKS as f64;
        let y_pos = y(value);
        out.push_str(&format!(
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y_pos:.2}" x2="{}" y2="{y_pos:.2}" />"#,
            WIDTH - PADDING_X
        ));
        out.push_str(&format!(
            r#"<text class="chart-label" x="{}" y="{:.2}" text-anchor="end">{}</text>"#,
            PADDING_X - 10.0,
            y_pos + 4.0,
            format_axis_value(value)
        ));
    }
    out
}

/// Tick labels on the right edge, for a second series' scale.
fn right_axis(min: f64, max: f64, y: &impl Fn(f64) -> f64, n: usize) -> String {
    (0..=TICKS)
        .map(|i| {
            let value = min + (max - min) * i as f64 / TICKS as f64;
            format!(
                r#"<text class="chart-label axis-right series-{n}" x="{}" y="{:.2}" text-anchor="start">{}</text>"#,
                WIDTH - PADDING_X + 10.0,
                y(value) + 4.0,
                format_axis_value(value)
            )
        })
        .collect()
}

fn x_labels(labels: &[&str], x: impl Fn(usize) -> f64) -> String {
    let label_every = if labels.len() > 8 { 2 } else { 1 };
    labels
        .iter()
        .enumerate()
        .filter(|(index, _)| index % label_every == 0)
        .map(|(index, label)| {
            format!(
                r#"<text class="chart-label" x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
                x(index),
                HEIGHT - PADDING_Y + 18.0,
                escape_html(label)
            )
        })
        .collect()
}

pub fn bar_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return empty_chart("No data yet");
    }

    let (min, max) = value_range(points.iter().map(|point| point.value));
    let y = y_scale(min, max);
    let slot = (WIDTH - PADDING_X * 2.0) / points.len() as f64;
    let bar_width = slot * 0.6;
    let x_center = |index: usize| PADDING_X + slot * (index as f64 + 0.5);

    let bars: String = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let top = y(point.value.max(0.0));
            let bottom = y(0.0);
            format!(
                r#"<rect class="chart-bar" x="{:.2}" y="{top:.2}" width="{bar_width:.2}" height="{:.2}"><title>{}: {}</title></rect>"#,
                x_center(index) - bar_width / 2.0,
                (bottom - top).max(0.0),
                escape_html(&point.label),
                format_axis_value(point.value)
            )
        })
        .collect();

    let labels: Vec<&str> = points.iter().map(|point| point.label.as_str()).collect();
    svg(&format!(
        "{}{bars}{}",
        grid(min, max, &y),
        x_labels(&labels, x_center)
    ))
}

/// Line chart with one line per series. Each series gets its own vertical
/// scale so counts and revenue can share the plot.
pub fn line_chart(labels: &[String], series: &[Series<'_>]) -> String {
    if labels.is_empty() || series.iter().all(|s| s.values.is_empty()) {
        return empty_chart("No data yet");
    }

    let x_step = if labels.len() > 1 {
        (WIDTH - PADDING_X * 2.0) / (labels.len() - 1) as f64
    } else {
        0.0
    };
    let x = |index: usize| PADDING_X + index as f64 * x_step;

    let mut body = String::new();
    for (n, line) in series.iter().enumerate() {
        let (min, max) = value_range(line.values.iter().copied());
        let y = y_scale(min, max);
        match n {
            0 => body.push_str(&grid(min, max, &y)),
            1 => body.push_str(&right_axis(min, max, &y, n)),
            _ => {}
        }

        let path = line
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let cmd = if index == 0 { 'M' } else { 'L' };
                format!("{cmd} {:.2} {:.2}", x(index), y(*value))
            })
            .collect::<Vec<_>>()
            .join(" ");
        body.push_str(&format!(
            r#"<path class="chart-line series-{n}" d="{path}"><title>{}</title></path>"#,
            escape_html(line.label)
        ));
        for (index, value) in line.values.iter().enumerate() {
            body.push_str(&format!(
                r#"<circle class="chart-point series-{n}" cx="{:.2}" cy="{:.2}" r="4" />"#,
                x(index),
                y(*value)
            ));
        }
    }

    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
    body.push_str(&x_labels(&labels, x));
    svg(&body)
}

pub fn pie_chart(points: &[ChartPoint]) -> String {
    let total: f64 = points.iter().map(|point| point.value.max(0.0)).sum();
    if points.is_empty() || total <= 0.0 {
        return empty_chart("No data yet");
    }

    let cx = WIDTH / 3.0;
    let cy = HEIGHT / 2.0;
    let r = HEIGHT / 2.0 - 16.0;
    let mut angle = -PI / 2.0;
    let mut slices = String::new();
    let mut legend = String::new();

    for (index, point) in points.iter().enumerate() {
        let color = PIE_COLORS[index % PIE_COLORS.len()];
        let share = point.value.max(0.0) / total;
        let title = format!("{}: ${:.2}", escape_html(&point.label), point.value);

        if share >= 1.0 {
            slices.push_str(&format!(
                r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{color}"><title>{title}</title></circle>"#
            ));
        } else if share > 0.0 {
            let end = angle + share * 2.0 * PI;
            let large_arc = if share > 0.5 { 1 } else { 0 };
            slices.push_str(&format!(
                r#"<path d="M {cx:.2} {cy:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z" fill="{color}"><title>{title}</title></path>"#,
                cx + r * angle.cos(),
                cy + r * angle.sin(),
                cx + r * end.cos(),
                cy + r * end.sin(),
            ));
            angle = end;
        }

        let legend_y = 30.0 + index as f64 * 22.0;
        legend.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="12" height="12" fill="{color}" /><text class="chart-label" x="{:.2}" y="{:.2}">{title}</text>"#,
            WIDTH * 0.62,
            legend_y - 10.0,
            WIDTH * 0.62 + 18.0,
            legend_y
        ));
    }

    svg(&format!("{slices}{legend}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.into(),
            value,
        }
    }

    #[test]
    fn empty_inputs_render_placeholder() {
        assert!(bar_chart(&[]).contains("No data yet"));
        assert!(line_chart(&[], &[]).contains("No data yet"));
        assert!(pie_chart(&[point("Nobody", 0.0)]).contains("No data yet"));
    }

    #[test]
    fn bar_chart_draws_one_bar_per_point() {
        let html = bar_chart(&[point("Dune", 5.0), point("Emma", 2.0)]);
        assert_eq!(html.matches("<rect class=\"chart-bar\"").count(), 2);
        assert!(html.contains(">Dune<"));
    }

    #[test]
    fn line_chart_draws_each_series() {
        let labels = vec!["2024-01".to_string(), "2024-02".to_string()];
        let html = line_chart(
            &labels,
            &[
                Series {
                    label: "Books Sold",
                    values: vec![3.0, 3.0],
                },
                Series {
                    label: "Revenue ($)",
                    values: vec![30.0, 30.0],
                },
            ],
        );
        assert!(html.contains("chart-line series-0"));
        assert!(html.contains("chart-line series-1"));
        assert_eq!(html.matches("<circle").count(), 4);
        assert!(html.contains(">2024-02<"));
    }

    #[test]
    fn second_series_gets_right_axis() {
        let labels = vec!["2024-01".to_string()];
        let html = line_chart(
            &labels,
            &[
                Series {
                    label: "Books Sold",
                    values: vec![3.0],
                },
                Series {
                    label: "Revenue ($)",
                    values: vec![30.0],
                },
            ],
        );
        assert_eq!(html.matches("axis-right series-1").count(), TICKS + 1);
        assert!(html.contains(r#"text-anchor="start">30</text>"#));
        assert!(html.contains(r#"text-anchor="end">3</text>"#));
    }

    #[test]
    fn single_author_pie_is_full_circle() {
        let html = pie_chart(&[point("Herbert", 40.0)]);
        assert!(html.contains("<circle"));
        assert!(html.contains("Herbert: $40.00"));
    }

    #[test]
    fn axis_values_drop_trailing_zero() {
        assert_eq!(format_axis_value(2.0), "2");
        assert_eq!(format_axis_value(2.25), "2.3");
    }
}
