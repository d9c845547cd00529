#![cfg(feature = "cairo-backend")]

use circle_plot::api::{DocumentContent, ExportMetadata, FormInput, RenderCycle, export_pdf};
use circle_plot::render::{CairoPdfCanvas, CairoRenderer, PlotImage, Renderer};
use circle_plot::{ExportError, PlotError};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive_group() {
    let cycle = RenderCycle::run(&FormInput::default()).expect("cycle");
    let mut renderer = CairoRenderer::new(900, 900).expect("renderer");

    renderer.render(cycle.frame()).expect("render");
    let stats = renderer.last_stats();

    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.markers_drawn, 13);
    assert_eq!(stats.lines_drawn, cycle.frame().lines.len());
    assert_eq!(stats.texts_drawn, cycle.frame().texts.len());
}

#[test]
fn rasterized_plot_is_cropped_png() {
    let cycle = RenderCycle::run(&FormInput::default()).expect("cycle");
    let mut renderer = CairoRenderer::new(1, 1).expect("renderer");

    let image = cycle.rasterize(&mut renderer).expect("rasterize");

    assert!(image.png_bytes().starts_with(b"\x89PNG"));
    assert!(image.width() < 900 && image.height() < 900);
    assert!(image.width() > 600 && image.height() > 600);
    assert_eq!(image.dpi(), 150);
}

#[test]
fn pdf_export_embeds_the_rasterized_plot() {
    let input = FormInput {
        author_name: "Ada".to_owned(),
        ..FormInput::default()
    };
    let cycle = RenderCycle::run(&input).expect("cycle");
    let mut renderer = CairoRenderer::new(900, 900).expect("renderer");
    let image = cycle.rasterize(&mut renderer).expect("rasterize");

    let document = cycle
        .export(
            CairoPdfCanvas::new(595.0, 842.0).expect("canvas"),
            &image,
            &input.export_metadata(),
        )
        .expect("export");

    assert!(document.bytes.starts_with(b"%PDF"));
    assert!(matches!(document.content, DocumentContent::Full { .. }));
}

#[test]
fn undecodable_png_body_degrades_the_pdf() {
    let mut png = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    png.extend_from_slice(&13_u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&100_u32.to_be_bytes());
    png.extend_from_slice(&100_u32.to_be_bytes());
    let image = PlotImage::from_png(png, 150).expect("header only");
    let cycle = RenderCycle::run(&FormInput::default()).expect("cycle");

    let document =
        export_pdf(&image, &cycle.parameters(), &ExportMetadata::default()).expect("export");

    assert!(document.bytes.starts_with(b"%PDF"));
    assert!(matches!(
        document.content,
        DocumentContent::Degraded {
            error: ExportError::Decode(_)
        }
    ));
}
