//! Travel-Time Figure
//!
//! Renders the computed travel-time curves to a two-panel PNG: a full-range
//! view on top and a near-offset zoom below. This module consumes fully
//! computed arrays from the forward model and does no numeric work beyond
//! coordinate mapping; NaN cells are skipped, never drawn.

pub mod canvas;
pub mod font;

pub use canvas::Canvas;

use std::path::Path;

use image::Rgb;
use log::info;

use crate::error::Result;
use crate::forward::TravelTimeTable;
use crate::model::SensorSpread;

// ============================================================================
// Figure Geometry & Style
// ============================================================================

/// Figure width in pixels.
pub const FIGURE_WIDTH: u32 = 900;

/// Figure height in pixels (two stacked panels).
pub const FIGURE_HEIGHT: u32 = 1800;

/// Time-axis ceiling of the full-range panel in seconds.
const FULL_TIME_MAX: f64 = 0.2;

/// Time-axis ceiling of the near-offset panel in seconds.
const NEAR_TIME_MAX: f64 = 0.04;

/// Width of the near-offset window in meters.
const NEAR_SPAN: f64 = 9.0;

/// Padding between the window edge and the first sensor in meters.
const NEAR_PAD: f64 = 1.0;

const MARGIN_LEFT: i32 = 110;
const MARGIN_RIGHT: i32 = 40;
const MARGIN_TOP: i32 = 70;
const MARGIN_BOTTOM: i32 = 100;

const TICK_COUNT: usize = 5;
const TICK_LEN: i32 = 6;
const MARKER_RADIUS: i32 = 3;
const TEXT_SCALE: i32 = 2;
const TITLE_SCALE: i32 = 3;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([0, 0, 0]);

/// Marker colors, cycled across series (direct first, then one refraction
/// series per interface).
const SERIES_COLORS: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
];

// ============================================================================
// Panel Layout
// ============================================================================

/// Data-space window and caption of one panel.
struct PanelSpec {
    title: &'static str,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

/// Pixel rectangle of a panel's data area.
#[derive(Clone, Copy)]
struct DataRect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl DataRect {
    /// Map a data-space x value to a pixel column.
    fn map_x(&self, spec: &PanelSpec, x: f64) -> i32 {
        let (x0, x1) = spec.x_range;
        let frac = (x - x0) / (x1 - x0);
        self.left + (frac * (self.width - 1) as f64).round() as i32
    }

    /// Map a data-space y value to a pixel row (y axis points up).
    fn map_y(&self, spec: &PanelSpec, y: f64) -> i32 {
        let (y0, y1) = spec.y_range;
        let frac = (y - y0) / (y1 - y0);
        self.top + self.height - 1 - (frac * (self.height - 1) as f64).round() as i32
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the travel-time figure and save it as PNG.
///
/// # Arguments
/// * `spread` - Sensor spread the table was computed for
/// * `table` - Computed travel-time table
/// * `path` - Output file path (extension decides the format; use `.png`)
pub fn render_figure(spread: &SensorSpread, table: &TravelTimeTable, path: &Path) -> Result<()> {
    let mut canvas = Canvas::new(FIGURE_WIDTH, FIGURE_HEIGHT, BACKGROUND);

    // Full-range panel covers every sensor with a little headroom; the zoom
    // panel frames the near sensor group the way the field crew staked it
    let x_max = spread.max_offset().unwrap_or(1.0) * 1.05;
    let near_start = spread.min_offset().unwrap_or(0.0) - NEAR_PAD;

    let panels = [
        PanelSpec {
            title: "Travel-time curves",
            x_range: (0.0, x_max),
            y_range: (0.0, FULL_TIME_MAX),
        },
        PanelSpec {
            title: "Near offsets",
            x_range: (near_start, near_start + NEAR_SPAN),
            y_range: (0.0, NEAR_TIME_MAX),
        },
    ];

    let panel_height = (FIGURE_HEIGHT / 2) as i32;
    for (idx, spec) in panels.iter().enumerate() {
        draw_panel(&mut canvas, idx as i32 * panel_height, panel_height, spec, table);
    }

    canvas.save(path)?;
    info!("Travel-time figure written to {}", path.display());
    Ok(())
}

/// Draw one panel: frame, ticks, captions, data series, legend.
fn draw_panel(
    canvas: &mut Canvas,
    region_top: i32,
    region_height: i32,
    spec: &PanelSpec,
    table: &TravelTimeTable,
) {
    let rect = DataRect {
        left: MARGIN_LEFT,
        top: region_top + MARGIN_TOP,
        width: FIGURE_WIDTH as i32 - MARGIN_LEFT - MARGIN_RIGHT,
        height: region_height - MARGIN_TOP - MARGIN_BOTTOM,
    };

    canvas.rect_outline(rect.left, rect.top, rect.width, rect.height, FRAME);
    draw_ticks(canvas, rect, spec);

    // Panel title, centered above the frame
    let title_x = rect.left + (rect.width - Canvas::text_width(spec.title, TITLE_SCALE)) / 2;
    let title_y = region_top + (MARGIN_TOP - Canvas::text_height(TITLE_SCALE)) / 2;
    canvas.text(title_x, title_y, spec.title, TITLE_SCALE, FRAME);

    // Axis captions: x centered below the tick labels, y stacked vertically
    // along the left edge
    let x_caption = "Offset (m)";
    let cap_x = rect.left + (rect.width - Canvas::text_width(x_caption, TEXT_SCALE)) / 2;
    let cap_y = rect.top + rect.height + TICK_LEN + 2 * Canvas::text_height(TEXT_SCALE) + 12;
    canvas.text(cap_x, cap_y, x_caption, TEXT_SCALE, FRAME);
    draw_vertical_caption(canvas, rect, "Arrival time (s)");

    draw_series(canvas, rect, spec, table);
    draw_legend(canvas, rect, table.num_interfaces());
}

/// Tick marks and numeric labels on both axes.
fn draw_ticks(canvas: &mut Canvas, rect: DataRect, spec: &PanelSpec) {
    for i in 0..TICK_COUNT {
        let frac = i as f64 / (TICK_COUNT - 1) as f64;

        // X axis
        let xv = spec.x_range.0 + frac * (spec.x_range.1 - spec.x_range.0);
        let px = rect.map_x(spec, xv);
        let bottom = rect.top + rect.height - 1;
        canvas.vline(px, bottom + 1, bottom + TICK_LEN, FRAME);
        let label = format_tick(xv);
        canvas.text(
            px - Canvas::text_width(&label, TEXT_SCALE) / 2,
            bottom + TICK_LEN + 6,
            &label,
            TEXT_SCALE,
            FRAME,
        );

        // Y axis
        let yv = spec.y_range.0 + frac * (spec.y_range.1 - spec.y_range.0);
        let py = rect.map_y(spec, yv);
        canvas.hline(rect.left - TICK_LEN, rect.left - 1, py, FRAME);
        let label = format_tick(yv);
        canvas.text(
            rect.left - TICK_LEN - 6 - Canvas::text_width(&label, TEXT_SCALE),
            py - Canvas::text_height(TEXT_SCALE) / 2,
            &label,
            TEXT_SCALE,
            FRAME,
        );
    }
}

/// Y-axis caption drawn one character per row, centered vertically.
fn draw_vertical_caption(canvas: &mut Canvas, rect: DataRect, caption: &str) {
    let line_height = Canvas::text_height(TEXT_SCALE) + 2;
    let total = caption.chars().count() as i32 * line_height;
    let mut y = rect.top + (rect.height - total) / 2;

    for c in caption.chars() {
        let s = c.to_string();
        canvas.text(8, y, &s, TEXT_SCALE, FRAME);
        y += line_height;
    }
}

/// Scatter the direct and refraction series, skipping NaN and out-of-window
/// points.
fn draw_series(canvas: &mut Canvas, rect: DataRect, spec: &PanelSpec, table: &TravelTimeTable) {
    let offsets = table.offsets();

    let mut draw_points = |times: &[f64], color: Rgb<u8>| {
        for (&offset, &t) in offsets.iter().zip(times) {
            if !t.is_finite() {
                continue;
            }
            if offset < spec.x_range.0
                || offset > spec.x_range.1
                || t < spec.y_range.0
                || t > spec.y_range.1
            {
                continue;
            }
            canvas.disc(
                rect.map_x(spec, offset),
                rect.map_y(spec, t),
                MARKER_RADIUS,
                color,
            );
        }
    };

    draw_points(table.direct(), SERIES_COLORS[0]);
    for (i, row) in table.refracted_rows().enumerate() {
        draw_points(row, SERIES_COLORS[(i + 1) % SERIES_COLORS.len()]);
    }
}

/// Framed legend in the upper-left corner of the data area.
fn draw_legend(canvas: &mut Canvas, rect: DataRect, num_interfaces: usize) {
    let labels: Vec<String> = std::iter::once("Direct".to_string())
        .chain((0..num_interfaces).map(|i| format!("Refraction {}", i + 1)))
        .collect();

    let line_height = Canvas::text_height(TEXT_SCALE) + 6;
    let text_width = labels
        .iter()
        .map(|l| Canvas::text_width(l, TEXT_SCALE))
        .max()
        .unwrap_or(0);
    let marker_slot = 4 * MARKER_RADIUS;
    let pad = 8;

    let box_w = pad + marker_slot + 6 + text_width + pad;
    let box_h = pad + labels.len() as i32 * line_height + pad - 6;
    let box_x = rect.left + 10;
    let box_y = rect.top + 10;

    canvas.fill_rect(box_x, box_y, box_w, box_h, BACKGROUND);
    canvas.rect_outline(box_x, box_y, box_w, box_h, FRAME);

    for (i, label) in labels.iter().enumerate() {
        let row_y = box_y + pad + i as i32 * line_height;
        let center_y = row_y + Canvas::text_height(TEXT_SCALE) / 2;
        canvas.disc(
            box_x + pad + marker_slot / 2,
            center_y,
            MARKER_RADIUS,
            SERIES_COLORS[i % SERIES_COLORS.len()],
        );
        canvas.text(box_x + pad + marker_slot + 6, row_y, label, TEXT_SCALE, FRAME);
    }
}

/// Compact tick label: whole numbers for large values, trimmed decimals for
/// small ones.
fn format_tick(value: f64) -> String {
    let formatted = if value == 0.0 {
        return "0".to_string();
    } else if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    };

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
