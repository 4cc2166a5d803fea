//! SVG charts rendered through Tera templates
//!
//! Geometry is computed here; the templates only place the shapes.

use super::{ChartKind, ChartRenderer, ChartRequest};
use crate::error::{ErrorCode, Result, RouteError};
use serde::Serialize;
use std::f64::consts::PI;
use std::path::Path;
use tera::{Context, Tera};
use tracing::debug;

const BAR_WIDTH: f64 = 1000.0;
const BAR_HEIGHT: f64 = 1000.0;
const BAR_MARGIN_LEFT: f64 = 90.0;
const BAR_MARGIN_RIGHT: f64 = 30.0;
const BAR_MARGIN_TOP: f64 = 70.0;
const BAR_MARGIN_BOTTOM: f64 = 330.0;
const BAR_FILL: f64 = 0.5;
const Y_TICKS: usize = 5;

const PIE_SIZE: f64 = 800.0;
const PIE_RADIUS: f64 = 280.0;
const PIE_START_DEGREES: f64 = 140.0;

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Serialize)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    label_x: f64,
    label_y: f64,
    subject: String,
}

#[derive(Debug, Serialize)]
struct Tick {
    y: f64,
    label: String,
}

#[derive(Debug, Serialize)]
struct Wedge {
    path: String,
    color: &'static str,
    /// Draw as a full circle instead of an arc
    full: bool,
    percent_x: f64,
    percent_y: f64,
    percent: String,
    label_x: f64,
    label_y: f64,
    anchor: &'static str,
    subject: String,
}

/// Renders bar and pie charts as standalone SVG documents
pub struct SvgChartRenderer {
    templates: Tera,
}

impl SvgChartRenderer {
    pub fn new() -> Result<Self> {
        let mut templates = Tera::default();
        templates
            .add_raw_templates(vec![("bar.svg", BAR_TEMPLATE), ("pie.svg", PIE_TEMPLATE)])
            .map_err(|e| {
                RouteError::chart(ErrorCode::OUTPUT_CHART_TEMPLATE, "invalid chart template", None)
                    .with_source(e)
            })?;

        Ok(Self { templates })
    }

    /// Render `request` to an SVG string
    pub fn render_to_string(&self, request: &ChartRequest) -> Result<String> {
        let (template, context) = match request.kind {
            ChartKind::Bar => ("bar.svg", bar_context(request)),
            ChartKind::Pie => ("pie.svg", pie_context(request)),
        };

        self.templates.render(template, &context).map_err(|e| {
            RouteError::chart(ErrorCode::OUTPUT_CHART_TEMPLATE, "template rendering failed", None)
                .with_source(e)
        })
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, request: &ChartRequest, path: &Path) -> Result<()> {
        let svg = self
            .render_to_string(request)
            .map_err(|e| e.with_context(path.display()))?;
        std::fs::write(path, svg).map_err(|e| {
            RouteError::chart(
                ErrorCode::OUTPUT_CHART_WRITE,
                "cannot write chart",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        debug!(
            "Rendered {} chart with {} entries to {}",
            request.kind,
            request.rows.len(),
            path.display()
        );
        Ok(())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn bar_context(request: &ChartRequest) -> Context {
    let plot_width = BAR_WIDTH - BAR_MARGIN_LEFT - BAR_MARGIN_RIGHT;
    let plot_height = BAR_HEIGHT - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let baseline = BAR_MARGIN_TOP + plot_height;

    let max = request
        .rows
        .iter()
        .map(|row| row.statistic.as_f64())
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { plot_height / max } else { 0.0 };
    let slot = plot_width / request.rows.len().max(1) as f64;

    let bars: Vec<Bar> = request
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let value = row.statistic.as_f64();
            let height = if value.is_finite() { value.max(0.0) * scale } else { 0.0 };
            let center = BAR_MARGIN_LEFT + slot * (i as f64 + 0.5);
            Bar {
                x: round2(center - slot * BAR_FILL / 2.0),
                y: round2(baseline - height),
                width: round2(slot * BAR_FILL),
                height: round2(height),
                label_x: round2(center),
                label_y: round2(baseline + 10.0),
                subject: row.subject.clone(),
            }
        })
        .collect();

    let ticks: Vec<Tick> = if max > 0.0 {
        (0..=Y_TICKS)
            .map(|i| {
                let value = max * i as f64 / Y_TICKS as f64;
                Tick {
                    y: round2(baseline - value * scale),
                    label: tick_label(value),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut context = Context::new();
    context.insert("width", &BAR_WIDTH);
    context.insert("height", &BAR_HEIGHT);
    context.insert("title", &request.title);
    context.insert("x_label", &request.x_label);
    context.insert("y_label", &request.y_label);
    context.insert("left", &BAR_MARGIN_LEFT);
    context.insert("right", &(BAR_WIDTH - BAR_MARGIN_RIGHT));
    context.insert("top", &BAR_MARGIN_TOP);
    context.insert("baseline", &baseline);
    context.insert("bars", &bars);
    context.insert("ticks", &ticks);
    context
}

fn point(center: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (
        round2(center + radius * radians.cos()),
        round2(center - radius * radians.sin()),
    )
}

fn pie_context(request: &ChartRequest) -> Context {
    let center = PIE_SIZE / 2.0;
    let total: f64 = request
        .rows
        .iter()
        .map(|row| row.statistic.as_f64())
        .filter(|value| value.is_finite() && *value > 0.0)
        .sum();

    let mut wedges = Vec::new();
    if total > 0.0 {
        let mut start = PIE_START_DEGREES;
        for (i, row) in request.rows.iter().enumerate() {
            let value = row.statistic.as_f64();
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            let fraction = value / total;
            let sweep = fraction * 360.0;
            let end = start + sweep;
            let middle = start + sweep / 2.0;

            let (x1, y1) = point(center, PIE_RADIUS, start);
            let (x2, y2) = point(center, PIE_RADIUS, end);
            let large_arc = if sweep > 180.0 { 1 } else { 0 };
            let (percent_x, percent_y) = point(center, PIE_RADIUS * 0.6, middle);
            let (label_x, label_y) = point(center, PIE_RADIUS * 1.1, middle);
            let anchor = if middle.to_radians().cos() >= 0.0 {
                "start"
            } else {
                "end"
            };

            wedges.push(Wedge {
                path: format!(
                    "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 0 {x2} {y2} Z",
                    c = center,
                    r = PIE_RADIUS,
                ),
                color: PALETTE[i % PALETTE.len()],
                full: fraction >= 1.0,
                percent_x,
                percent_y,
                percent: format!("{:.1}%", fraction * 100.0),
                label_x,
                label_y,
                anchor,
                subject: row.subject.clone(),
            });
            start = end;
        }
    }

    let mut context = Context::new();
    context.insert("size", &PIE_SIZE);
    context.insert("center", &center);
    context.insert("radius", &PIE_RADIUS);
    context.insert("title", &request.title);
    context.insert("wedges", &wedges);
    context
}

const BAR_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="{{ height }}" viewBox="0 0 {{ width }} {{ height }}" font-family="sans-serif">
  <rect width="100%" height="100%" fill="white"/>
  <text x="{{ width / 2 }}" y="{{ top / 2 }}" text-anchor="middle" font-size="18">{{ title | escape }}</text>
  <line x1="{{ left }}" y1="{{ top }}" x2="{{ left }}" y2="{{ baseline }}" stroke="black"/>
  <line x1="{{ left }}" y1="{{ baseline }}" x2="{{ right }}" y2="{{ baseline }}" stroke="black"/>
{%- for tick in ticks %}
  <line x1="{{ left - 5 }}" y1="{{ tick.y }}" x2="{{ left }}" y2="{{ tick.y }}" stroke="black"/>
  <text x="{{ left - 8 }}" y="{{ tick.y }}" text-anchor="end" dominant-baseline="middle" font-size="10">{{ tick.label }}</text>
{%- endfor %}
{%- for bar in bars %}
  <rect x="{{ bar.x }}" y="{{ bar.y }}" width="{{ bar.width }}" height="{{ bar.height }}" fill="blue"/>
  <text x="{{ bar.label_x }}" y="{{ bar.label_y }}" text-anchor="end" font-size="8" transform="rotate(-90 {{ bar.label_x }} {{ bar.label_y }})">{{ bar.subject | escape }}</text>
{%- endfor %}
  <text x="{{ (left + right) / 2 }}" y="{{ height - 15 }}" text-anchor="middle" font-size="12">{{ x_label | escape }}</text>
  <text x="20" y="{{ (top + baseline) / 2 }}" text-anchor="middle" font-size="12" transform="rotate(-90 20 {{ (top + baseline) / 2 }})">{{ y_label | escape }}</text>
</svg>
"##;

const PIE_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{{ size }}" height="{{ size }}" viewBox="0 0 {{ size }} {{ size }}" font-family="sans-serif">
  <rect width="100%" height="100%" fill="white"/>
  <text x="{{ center }}" y="40" text-anchor="middle" font-size="18">{{ title | escape }}</text>
{%- for wedge in wedges %}
  {%- if wedge.full %}
  <circle cx="{{ center }}" cy="{{ center }}" r="{{ radius }}" fill="{{ wedge.color }}"/>
  {%- else %}
  <path d="{{ wedge.path }}" fill="{{ wedge.color }}"/>
  {%- endif %}
  <text x="{{ wedge.percent_x }}" y="{{ wedge.percent_y }}" text-anchor="middle" font-size="5">{{ wedge.percent }}</text>
  <text x="{{ wedge.label_x }}" y="{{ wedge.label_y }}" text-anchor="{{ wedge.anchor }}" font-size="5">{{ wedge.subject | escape }}</text>
{%- endfor %}
</svg>
"##;
