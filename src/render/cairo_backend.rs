use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::trace;

use crate::error::{PlotError, PlotResult};
use crate::render::raster::{PixelRect, tight_bounds};
use crate::render::{
    Color, LineStrokeStyle, MarkerPrimitive, MarkerShape, PlotImage, Rasterizer, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

/// Opaque white in ARGB32, identical in either byte order.
const BACKGROUND_PIXEL: [u8; 4] = [0xff; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders frames onto an offscreen ARGB32 surface and can encode the result
/// as a tightly cropped PNG `PlotImage`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn ensure_surface_size(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let width = surface_dimension(frame.viewport.width)?;
        let height = surface_dimension(frame.viewport.height)?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            apply_stroke_style(context, line.stroke_style);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for polyline in &frame.polylines {
            let mut points = polyline.points.iter();
            if let Some(&(x, y)) = points.next() {
                context.move_to(x, y);
            }
            for &(x, y) in points {
                context.line_to(x, y);
            }
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for marker in &frame.markers {
            draw_marker(context, *marker)?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        if let Some(legend) = &frame.legend {
            draw_rect(context, legend.frame)?;
            for entry in &legend.entries {
                draw_marker(context, entry.marker)?;
                draw_text(context, &entry.label)?;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        self.ensure_surface_size(frame)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl Rasterizer for CairoRenderer {
    /// Renders `frame`, trims the blank margin down to 0.1 in around the
    /// drawn content and encodes the result as PNG.
    fn rasterize(&mut self, frame: &RenderFrame, dpi: u32) -> PlotResult<PlotImage> {
        self.render(frame)?;
        self.surface.flush();

        let surface_width = frame.viewport.width;
        let surface_height = frame.viewport.height;
        let stride = usize::try_from(self.surface.stride())
            .map_err(|_| PlotError::Backend("negative surface stride".to_owned()))?;
        let content = {
            let data = self
                .surface
                .data()
                .map_err(|err| PlotError::Backend(format!("failed to read surface: {err}")))?;
            tight_bounds(&data, surface_width, surface_height, stride, BACKGROUND_PIXEL)
        };
        let crop = content
            .map(|rect| rect.expanded(dpi / 10, surface_width, surface_height))
            .unwrap_or_else(|| PixelRect::new(0, 0, surface_width, surface_height));
        trace!(
            x = crop.x,
            y = crop.y,
            width = crop.width,
            height = crop.height,
            "tight plot bounds"
        );

        let cropped = create_surface(
            surface_dimension(crop.width)?,
            surface_dimension(crop.height)?,
        )?;
        {
            let context = Context::new(&cropped)
                .map_err(|err| map_backend_error("failed to create crop context", err))?;
            context
                .set_source_surface(&self.surface, -f64::from(crop.x), -f64::from(crop.y))
                .map_err(|err| map_backend_error("failed to set crop source", err))?;
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint cropped plot", err))?;
        }

        let mut png = Vec::new();
        cropped
            .write_to_png(&mut png)
            .map_err(|err| PlotError::Backend(format!("failed to encode png: {err}")))?;
        PlotImage::from_png(png, dpi).map_err(PlotError::from)
    }
}

fn create_surface(width: i32, height: i32) -> PlotResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(PlotError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn surface_dimension(value: u32) -> PlotResult<i32> {
    i32::try_from(value)
        .map_err(|_| PlotError::InvalidData(format!("surface dimension {value} is too large")))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke_style(context: &Context, style: LineStrokeStyle) {
    match style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> PlotResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_marker(context: &Context, marker: MarkerPrimitive) -> PlotResult<()> {
    let half = marker.size_px / 2.0;
    apply_color(context, marker.color);
    match marker.shape {
        MarkerShape::Circle => {
            context.new_sub_path();
            context.arc(marker.x, marker.y, half, 0.0, TAU);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))
        }
        MarkerShape::Plus => {
            context.set_line_width(marker.stroke_width);
            context.move_to(marker.x - half, marker.y);
            context.line_to(marker.x + half, marker.y);
            context.move_to(marker.x, marker.y - half);
            context.line_to(marker.x, marker.y + half);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke marker", err))
        }
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> PlotResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
        TextVAlign::Bottom => -f64::from(text_height),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save text state", err))?;
    context.translate(text.x, text.y);
    context.rotate(-text.rotation_deg.to_radians());
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore text state", err))
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
