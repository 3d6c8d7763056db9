//! SVG chart renderers
//!
//! Hand-assembled SVG documents for the three chart shapes the tracker
//! serves: a bar chart and a pie chart over category totals, and a line
//! chart over the spending trend. Entries are rendered in the mapping's
//! key order (lexicographic, so dates plot chronologically).

use std::collections::BTreeMap;
use std::f64::consts::PI;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 90.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;

const BAR_FILL: &str = "#4e79a7";
const LINE_STROKE: &str = "#4e79a7";
const AXIS_STROKE: &str = "#333333";
const PIE_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b4", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Render a vertical bar chart of the mapping
pub fn bar_chart(data: &BTreeMap<String, f64>, title: &str) -> String {
    if data.is_empty() {
        return empty_chart(title);
    }

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let (lo, hi) = value_range(data.values());
    let scale = plot_h / (hi - lo);
    let zero_y = MARGIN_TOP + (hi - 0.0_f64.clamp(lo, hi)) * scale;

    let slot = plot_w / data.len() as f64;
    let bar_w = slot * 0.7;

    let mut body = String::new();
    body.push_str(&axis_lines(zero_y));
    body.push_str(&y_ticks(lo, hi, scale));

    for (i, (label, &value)) in data.iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
        let clamped = value.clamp(lo, hi);
        let value_y = MARGIN_TOP + (hi - clamped) * scale;
        let (top, height) = if value >= 0.0 {
            (value_y, zero_y - value_y)
        } else {
            (zero_y, value_y - zero_y)
        };
        body.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, top, bar_w, height, BAR_FILL
        ));
        body.push('\n');
        body.push_str(&tick_label(x + bar_w / 2.0, label));
    }

    document(title, &body)
}

/// Render a line chart of the mapping
pub fn line_chart(data: &BTreeMap<String, f64>, title: &str) -> String {
    if data.is_empty() {
        return empty_chart(title);
    }

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let (lo, hi) = value_range(data.values());
    let scale = plot_h / (hi - lo);
    let zero_y = MARGIN_TOP + (hi - 0.0_f64.clamp(lo, hi)) * scale;

    let step = if data.len() > 1 {
        plot_w / (data.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<(f64, f64)> = data
        .values()
        .enumerate()
        .map(|(i, &value)| {
            let x = if data.len() > 1 {
                MARGIN_LEFT + step * i as f64
            } else {
                MARGIN_LEFT + plot_w / 2.0
            };
            (x, MARGIN_TOP + (hi - value) * scale)
        })
        .collect();

    let mut body = String::new();
    body.push_str(&axis_lines(zero_y));
    body.push_str(&y_ticks(lo, hi, scale));

    if points.len() > 1 {
        let path: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect();
        body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            path.join(" "),
            LINE_STROKE
        ));
        body.push('\n');
    }

    for ((x, y), label) in points.iter().zip(data.keys()) {
        body.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{}"/>"#,
            x, y, LINE_STROKE
        ));
        body.push('\n');
        body.push_str(&tick_label(*x, label));
    }

    document(title, &body)
}

/// Render a pie chart of the mapping's positive entries
///
/// Slices carry percentage labels. Entries with non-positive totals cannot
/// be drawn as shares and are skipped.
pub fn pie_chart(data: &BTreeMap<String, f64>, title: &str) -> String {
    let slices: Vec<(&str, f64)> = data
        .iter()
        .filter(|(_, &v)| v > 0.0)
        .map(|(k, &v)| (k.as_str(), v))
        .collect();
    let sum: f64 = slices.iter().map(|(_, v)| v).sum();

    if slices.is_empty() || sum <= 0.0 {
        return empty_chart(title);
    }

    let cx = WIDTH / 2.0;
    let cy = MARGIN_TOP + (HEIGHT - MARGIN_TOP - 30.0) / 2.0;
    let radius = ((HEIGHT - MARGIN_TOP - 60.0) / 2.0).min(WIDTH / 2.0 - 120.0);

    let mut body = String::new();
    let mut angle = -PI / 2.0;

    for (i, (label, value)) in slices.iter().enumerate() {
        let share = value / sum;
        let sweep = share * 2.0 * PI;
        let end = angle + sweep;
        let color = PIE_PALETTE[i % PIE_PALETTE.len()];

        if slices.len() == 1 {
            body.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                cx, cy, radius, color
            ));
        } else {
            let (x1, y1) = (cx + radius * angle.cos(), cy + radius * angle.sin());
            let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
            let large = if sweep > PI { 1 } else { 0 };
            body.push_str(&format!(
                r#"<path d="M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 {} 1 {:.1} {:.1} Z" fill="{}"/>"#,
                cx, cy, x1, y1, radius, radius, large, x2, y2, color
            ));
        }
        body.push('\n');

        let mid = angle + sweep / 2.0;
        let lx = cx + radius * 1.15 * mid.cos();
        let ly = cy + radius * 1.15 * mid.sin();
        body.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{} ({:.1}%)</text>"#,
            lx,
            ly,
            escape_xml(label),
            share * 100.0
        ));
        body.push('\n');

        angle = end;
    }

    document(title, &body)
}

/// Value range padded so a flat series still has height
fn value_range<'a, I: Iterator<Item = &'a f64>>(values: I) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    // Anchor the range at zero so bars have a baseline.
    lo = lo.min(0.0);
    hi = hi.max(0.0);
    if (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
    }
    (lo, hi)
}

fn axis_lines(zero_y: f64) -> String {
    format!(
        concat!(
            r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="{s}" stroke-width="1"/>"#,
            "\n",
            r#"<line x1="{l:.1}" y1="{z:.1}" x2="{r:.1}" y2="{z:.1}" stroke="{s}" stroke-width="1"/>"#,
            "\n"
        ),
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = HEIGHT - MARGIN_BOTTOM,
        r = WIDTH - MARGIN_RIGHT,
        z = zero_y,
        s = AXIS_STROKE,
    )
}

fn y_ticks(lo: f64, hi: f64, scale: f64) -> String {
    let mut out = String::new();
    let ticks = 5;
    for i in 0..=ticks {
        let value = lo + (hi - lo) * i as f64 / ticks as f64;
        let y = MARGIN_TOP + (hi - value) * scale;
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{:.0}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            value
        ));
        out.push('\n');
    }
    out
}

/// Rotated x-axis label under the plot area
fn tick_label(x: f64, label: &str) -> String {
    let y = HEIGHT - MARGIN_BOTTOM + 14.0;
    format!(
        r#"<text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="end" transform="rotate(-45 {x:.1} {y:.1})">{}</text>"#,
        escape_xml(label),
        x = x,
        y = y,
    )
    + "\n"
}

fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            "\n",
            r#"<rect width="{w}" height="{h}" fill="white"/>"#,
            "\n",
            r#"<text x="{cx}" y="28" font-size="18" text-anchor="middle" font-weight="bold">{title}</text>"#,
            "\n{body}</svg>\n"
        ),
        w = WIDTH,
        h = HEIGHT,
        cx = WIDTH / 2.0,
        title = escape_xml(title),
        body = body,
    )
}

fn empty_chart(title: &str) -> String {
    let body = format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="16" text-anchor="middle" fill="{}">No data to plot</text>"#,
        WIDTH / 2.0,
        HEIGHT / 2.0,
        "#666666"
    );
    document(title, &body)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
