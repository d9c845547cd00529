use circle_plot::api::{
    DOCUMENT_FILE_NAME, DOCUMENT_MIME_TYPE, DocumentContent, ExportMetadata, FormInput,
    ParameterList, RenderCycle, export_document,
};
use circle_plot::render::{ImagePlacement, PageCanvas, PageTextLine, PlotImage, TextPageCanvas};
use circle_plot::{ExportError, PlotError, PlotResult};

fn fake_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend_from_slice(&13_u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}

fn plot_image() -> PlotImage {
    PlotImage::from_png(fake_png(860, 840), 150).expect("png header")
}

fn text_of(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("utf-8 transcript")
}

/// Canvas whose image embedding always fails.
#[derive(Default)]
struct FailingImageCanvas {
    inner: TextPageCanvas,
}

impl PageCanvas for FailingImageCanvas {
    fn draw_text(&mut self, line: &PageTextLine) -> PlotResult<()> {
        self.inner.draw_text(line)
    }

    fn draw_image(&mut self, _: &PlotImage, _: &ImagePlacement) -> Result<(), ExportError> {
        Err(ExportError::Decode("simulated decoder failure".to_owned()))
    }

    fn finish(self) -> PlotResult<Vec<u8>> {
        self.inner.finish()
    }
}

/// Canvas whose backend breaks while writing text.
struct BrokenCanvas;

impl PageCanvas for BrokenCanvas {
    fn draw_text(&mut self, _: &PageTextLine) -> PlotResult<()> {
        Err(PlotError::Backend("surface lost".to_owned()))
    }

    fn draw_image(&mut self, _: &PlotImage, _: &ImagePlacement) -> Result<(), ExportError> {
        Ok(())
    }

    fn finish(self) -> PlotResult<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[test]
fn full_export_contains_title_parameters_and_image() {
    let cycle = RenderCycle::run(&FormInput::default()).expect("cycle");
    let document = cycle
        .export(TextPageCanvas::new(), &plot_image(), &ExportMetadata::default())
        .expect("export");
    let transcript = text_of(&document.bytes);

    assert!(!document.is_degraded());
    assert!(transcript.contains("bold: Circle from points - Output"));
    for line in [
        "Center x: 0.0",
        "Center y: 0.0",
        "Radius: 1.0",
        "Point count: 12",
        "Point color: #ff0000",
        "Unit: m",
    ] {
        assert!(transcript.contains(line), "missing `{line}`");
    }
    assert!(transcript.contains("image 860x840px x=40.0 y=174.0"));
    match document.content {
        DocumentContent::Full { placement } => assert!(placement.scale <= 1.0),
        DocumentContent::Degraded { error } => panic!("unexpected degradation: {error}"),
    }
    assert_eq!(document.file_name(), DOCUMENT_FILE_NAME);
    assert_eq!(document.mime_type(), DOCUMENT_MIME_TYPE);
    assert_eq!(DOCUMENT_FILE_NAME, "circle_output.pdf");
    assert_eq!(DOCUMENT_MIME_TYPE, "application/pdf");
}

#[test]
fn empty_metadata_omits_optional_lines() {
    let input = FormInput::default();
    let cycle = RenderCycle::run(&input).expect("cycle");
    let document = cycle
        .export(TextPageCanvas::new(), &plot_image(), &input.export_metadata())
        .expect("export");
    let transcript = text_of(&document.bytes);

    assert!(transcript.contains("Circle from points - Output"));
    assert!(transcript.contains("Radius: 1.0"));
    assert!(!transcript.contains("Printed by"));
    assert!(!transcript.contains("Contact"));
    assert!(!transcript.contains("Notes"));
}

#[test]
fn metadata_lines_are_printed_when_present() {
    let metadata = ExportMetadata::default()
        .with_author_name("A. Author")
        .with_author_contact("author@example.org")
        .with_notes("checked");
    let document = export_document(
        TextPageCanvas::new(),
        &plot_image(),
        &ParameterList::new().with("Radius", "1.0"),
        &metadata,
    )
    .expect("export");
    let transcript = text_of(&document.bytes);

    assert!(transcript.contains("Printed by: A. Author"));
    assert!(transcript.contains("Contact: author@example.org"));
    assert!(transcript.contains("Notes: checked"));
}

#[test]
fn image_failure_still_produces_a_degraded_document() {
    let parameters = ParameterList::new().with("Radius", "1.0");
    let document = export_document(
        FailingImageCanvas::default(),
        &plot_image(),
        &parameters,
        &ExportMetadata::default(),
    )
    .expect("degraded export still succeeds");
    let transcript = text_of(&document.bytes);

    assert!(document.is_degraded());
    assert!(transcript.contains("Circle from points - Output"));
    assert!(transcript.contains("Radius: 1.0"));
    assert!(transcript.contains(
        "Image embedding failed: failed to decode image: simulated decoder failure"
    ));
    assert!(!transcript.lines().any(|line| line.starts_with("image ")));
    assert_eq!(
        document.content,
        DocumentContent::Degraded {
            error: ExportError::Decode("simulated decoder failure".to_owned())
        }
    );
}

#[test]
fn no_room_for_image_degrades_instead_of_failing() {
    let mut parameters = ParameterList::new();
    for i in 0..60 {
        parameters.insert(format!("p{i}"), "x");
    }
    let document = export_document(
        TextPageCanvas::new(),
        &plot_image(),
        &parameters,
        &ExportMetadata::default(),
    )
    .expect("export");

    assert!(matches!(
        document.content,
        DocumentContent::Degraded {
            error: ExportError::NoRoom { .. }
        }
    ));
}

#[test]
fn backend_failure_is_surfaced_without_a_document() {
    let err = export_document(
        BrokenCanvas,
        &plot_image(),
        &ParameterList::new(),
        &ExportMetadata::default(),
    )
    .expect_err("backend failure");

    assert!(matches!(err, PlotError::Backend(_)));
}

#[test]
fn export_leaves_inputs_untouched() {
    let image = plot_image();
    let parameters = ParameterList::new().with("Radius", "1.0");
    let metadata = ExportMetadata::default().with_notes("n");
    let (image_before, parameters_before, metadata_before) =
        (image.clone(), parameters.clone(), metadata.clone());

    export_document(TextPageCanvas::new(), &image, &parameters, &metadata).expect("export");

    assert_eq!(image, image_before);
    assert_eq!(parameters, parameters_before);
    assert_eq!(metadata, metadata_before);
}
