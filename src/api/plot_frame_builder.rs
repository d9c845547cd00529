use smallvec::smallvec;
use tracing::trace;

use crate::core::{CircleSpec, DataPoint, LinearScale, PlotBounds, PointSample, Viewport};
use crate::error::PlotResult;
use crate::render::{
    Color, LegendEntry, LegendPrimitive, LinePrimitive, LineStrokeStyle, MarkerPrimitive,
    PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::PlotOptions;
use super::axis_ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_TICK_TARGET_SPACING_IN, axis_tick_target_count,
    estimate_label_width_px, format_tick, nice_step, tick_decimals, tick_values,
};

// Subplot region as figure fractions; bottom/top are measured from the bottom edge.
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;

const OUTLINE_COLOR: Color = Color::rgb(31.0 / 255.0, 119.0 / 255.0, 180.0 / 255.0);
const GRID_COLOR: Color = Color::rgb(176.0 / 255.0, 176.0 / 255.0, 176.0 / 255.0);
const LEGEND_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.8);
const LEGEND_BORDER: Color = Color::rgb(0.8, 0.8, 0.8);

const OUTLINE_WIDTH_PT: f64 = 1.0;
const AXES_LINE_WIDTH_PT: f64 = 0.8;
const GRID_WIDTH_PT: f64 = 0.5;
const GRID_DASH_ON_PT: f64 = 1.85;
const GRID_DASH_OFF_PT: f64 = 0.8;
const TICK_LENGTH_PT: f64 = 3.5;
const TICK_PAD_PT: f64 = 3.5;
const TICK_FONT_PT: f64 = 10.0;
const INDEX_FONT_PT: f64 = 9.0;
const AXIS_LABEL_FONT_PT: f64 = 10.0;
const AXIS_LABEL_PAD_PT: f64 = 4.0;
const LEGEND_FONT_PT: f64 = 10.0;
const LEGEND_INSET_PT: f64 = 4.0;
const CENTER_MARKER_RATIO: f64 = 1.5;
const CENTER_MARKER_STROKE_PT: f64 = 1.0;

/// Square plot area in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    side: f64,
}

impl PlotArea {
    fn centered_in(viewport: Viewport) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let region_left = SUBPLOT_LEFT * width;
        let region_top = (1.0 - SUBPLOT_TOP) * height;
        let region_width = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * width;
        let region_height = (SUBPLOT_TOP - SUBPLOT_BOTTOM) * height;

        let side = region_width.min(region_height);
        Self {
            left: region_left + (region_width - side) / 2.0,
            top: region_top + (region_height - side) / 2.0,
            side,
        }
    }

    fn right(self) -> f64 {
        self.left + self.side
    }

    fn bottom(self) -> f64 {
        self.top + self.side
    }
}

/// Builds the plot scene for one circle.
///
/// The outline is drawn first, then the points, then the center marker.
/// Index labels are always present; axis titles and the legend follow
/// `options.show_labels`, grid lines follow `options.show_grid`.
pub fn build_plot_frame(
    spec: &CircleSpec,
    points: &[PointSample],
    outline: &[DataPoint],
    options: PlotOptions,
) -> PlotResult<RenderFrame> {
    let viewport = options.viewport()?;
    let area = PlotArea::centered_in(viewport);
    let bounds = PlotBounds::around(spec);
    let x_scale = LinearScale::new(bounds.x_min, bounds.x_max, area.left, area.right())?;
    let y_scale = LinearScale::new(bounds.y_min, bounds.y_max, area.bottom(), area.top)?;
    let px = |pt: f64| options.points_to_px(pt);

    let mut frame = RenderFrame::new(viewport).with_rect(
        RectPrimitive::new(area.left, area.top, area.side, area.side, Color::WHITE)
            .with_border(px(AXES_LINE_WIDTH_PT), Color::BLACK),
    );

    let tick_count = axis_tick_target_count(
        area.side,
        AXIS_TICK_TARGET_SPACING_IN * f64::from(options.dpi),
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let grid_style = LineStrokeStyle::Dashed {
        on_px: px(GRID_DASH_ON_PT),
        off_px: px(GRID_DASH_OFF_PT),
    };
    let tick_length = px(TICK_LENGTH_PT);
    let tick_font = px(TICK_FONT_PT);
    let label_offset = tick_length + px(TICK_PAD_PT);

    let x_step = nice_step(bounds.width(), tick_count - 1);
    let x_decimals = tick_decimals(x_step);
    for value in tick_values(bounds.x_min, bounds.x_max, x_step, tick_count) {
        let x = x_scale.domain_to_pixel(value)?;
        if options.show_grid {
            frame = frame.with_line(
                LinePrimitive::new(x, area.top, x, area.bottom(), px(GRID_WIDTH_PT), GRID_COLOR)
                    .with_stroke_style(grid_style),
            );
        }
        frame = frame
            .with_line(LinePrimitive::new(
                x,
                area.bottom(),
                x,
                area.bottom() + tick_length,
                px(AXES_LINE_WIDTH_PT),
                Color::BLACK,
            ))
            .with_text(
                TextPrimitive::new(
                    format_tick(value, x_decimals),
                    x,
                    area.bottom() + label_offset,
                    tick_font,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Top),
            );
    }

    let y_step = nice_step(bounds.height(), tick_count - 1);
    let y_decimals = tick_decimals(y_step);
    let mut widest_y_label = 0.0_f64;
    for value in tick_values(bounds.y_min, bounds.y_max, y_step, tick_count) {
        let y = y_scale.domain_to_pixel(value)?;
        if options.show_grid {
            frame = frame.with_line(
                LinePrimitive::new(area.left, y, area.right(), y, px(GRID_WIDTH_PT), GRID_COLOR)
                    .with_stroke_style(grid_style),
            );
        }
        let label = format_tick(value, y_decimals);
        widest_y_label = widest_y_label.max(estimate_label_width_px(&label, tick_font));
        frame = frame
            .with_line(LinePrimitive::new(
                area.left - tick_length,
                y,
                area.left,
                y,
                px(AXES_LINE_WIDTH_PT),
                Color::BLACK,
            ))
            .with_text(
                TextPrimitive::new(
                    label,
                    area.left - label_offset,
                    y,
                    tick_font,
                    Color::BLACK,
                    TextHAlign::Right,
                )
                .with_v_align(TextVAlign::Middle),
            );
    }

    if !outline.is_empty() {
        let curve = outline
            .iter()
            .map(|point| {
                Ok((
                    x_scale.domain_to_pixel(point.x)?,
                    y_scale.domain_to_pixel(point.y)?,
                ))
            })
            .collect::<PlotResult<Vec<_>>>()?;
        frame = frame.with_polyline(PolylinePrimitive::new(
            curve,
            px(OUTLINE_WIDTH_PT),
            OUTLINE_COLOR,
        ));
    }

    let marker_size = px(f64::from(spec.point_size));
    let mut point_pixels = Vec::with_capacity(points.len());
    for point in points {
        let x = x_scale.domain_to_pixel(point.x)?;
        let y = y_scale.domain_to_pixel(point.y)?;
        point_pixels.push((point.index, x, y));
        frame = frame.with_marker(MarkerPrimitive::circle(x, y, marker_size, spec.point_color));
    }

    let center_size = marker_size * CENTER_MARKER_RATIO;
    frame = frame.with_marker(MarkerPrimitive::plus(
        x_scale.domain_to_pixel(spec.center_x)?,
        y_scale.domain_to_pixel(spec.center_y)?,
        center_size,
        Color::BLACK,
        px(CENTER_MARKER_STROKE_PT),
    ));

    for (index, x, y) in point_pixels {
        frame = frame.with_text(
            TextPrimitive::new(
                index.to_string(),
                x,
                y,
                px(INDEX_FONT_PT),
                Color::BLACK,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Bottom),
        );
    }

    if options.show_labels {
        let axis_font = px(AXIS_LABEL_FONT_PT);
        let center_x = area.left + area.side / 2.0;
        let center_y = area.top + area.side / 2.0;
        frame = frame
            .with_text(
                TextPrimitive::new(
                    axis_label("x", &spec.unit),
                    center_x,
                    area.bottom() + label_offset + tick_font * 1.2 + px(AXIS_LABEL_PAD_PT),
                    axis_font,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Top),
            )
            .with_text(
                TextPrimitive::new(
                    axis_label("y", &spec.unit),
                    area.left - label_offset - widest_y_label - px(AXIS_LABEL_PAD_PT),
                    center_y,
                    axis_font,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Bottom)
                .with_rotation(90.0),
            )
            .with_legend(build_legend(area, options, spec, marker_size, center_size));
    }

    frame.validate()?;
    trace!(
        points = points.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built plot frame"
    );
    Ok(frame)
}

/// `"x [m]"`-style axis title.
#[must_use]
pub fn axis_label(axis: &str, unit: &str) -> String {
    format!("{axis} [{unit}]")
}

/// Legend caption for the sampled points.
#[must_use]
pub fn points_legend_label(point_count: u32) -> String {
    if point_count == 1 {
        "1 point".to_owned()
    } else {
        format!("{point_count} points")
    }
}

fn build_legend(
    area: PlotArea,
    options: PlotOptions,
    spec: &CircleSpec,
    marker_size: f64,
    center_size: f64,
) -> LegendPrimitive {
    let font = options.points_to_px(LEGEND_FONT_PT);
    let row_height = font * 1.4;
    let pad = font * 0.5;
    let marker_column = font * 2.0;

    let points_label = points_legend_label(spec.point_count);
    let center_label = "center";
    let text_width = estimate_label_width_px(&points_label, font)
        .max(estimate_label_width_px(center_label, font));
    let width = pad * 2.0 + marker_column + text_width;
    let height = pad * 2.0 + row_height * 2.0;
    let inset = options.points_to_px(LEGEND_INSET_PT);
    let left = area.right() - inset - width;
    let top = area.top + inset;

    let row_center = |row: f64| top + pad + row_height * (row + 0.5);
    let marker_x = left + pad + marker_column / 2.0;
    let text_x = left + pad + marker_column;
    let label = |text: &str, y: f64| {
        TextPrimitive::new(text, text_x, y, font, Color::BLACK, TextHAlign::Left)
            .with_v_align(TextVAlign::Middle)
    };

    LegendPrimitive {
        frame: RectPrimitive::new(left, top, width, height, LEGEND_FILL)
            .with_border(1.0, LEGEND_BORDER)
            .with_corner_radius(options.points_to_px(2.0)),
        entries: smallvec![
            LegendEntry {
                marker: MarkerPrimitive::circle(
                    marker_x,
                    row_center(0.0),
                    marker_size,
                    spec.point_color
                ),
                label: label(&points_label, row_center(0.0)),
            },
            LegendEntry {
                marker: MarkerPrimitive::plus(
                    marker_x,
                    row_center(1.0),
                    center_size,
                    Color::BLACK,
                    options.points_to_px(CENTER_MARKER_STROKE_PT)
                ),
                label: label(center_label, row_center(1.0)),
            },
        ],
    }
}
