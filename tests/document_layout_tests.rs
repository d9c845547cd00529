use circle_plot::ExportError;
use circle_plot::api::{
    DOCUMENT_TITLE, DocumentLayout, ExportMetadata, PageSpec, ParameterList,
};
use circle_plot::render::FontWeight;

fn six_parameters() -> ParameterList {
    ParameterList::new()
        .with("Center x", "0.0")
        .with("Center y", "0.0")
        .with("Radius", "1.0")
        .with("Point count", "12")
        .with("Point color", "#ff0000")
        .with("Unit", "m")
}

#[test]
fn a4_page_geometry() {
    let page = PageSpec::a4();
    assert_eq!(page.width, 595.0);
    assert_eq!(page.height, 842.0);
    assert_eq!(page.margin, 40.0);
    assert_eq!(page.line_spacing, 14.0);
}

#[test]
fn title_then_parameters_in_order_with_fixed_spacing() {
    let layout = DocumentLayout::compose(
        PageSpec::a4(),
        &six_parameters(),
        &ExportMetadata::default(),
    );
    let lines = layout.lines();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0].text, DOCUMENT_TITLE);
    assert_eq!(lines[0].weight, FontWeight::Bold);
    assert_eq!(lines[0].font_size, 16.0);
    assert_eq!(lines[1].text, "Center x: 0.0");
    assert_eq!(lines[6].text, "Unit: m");
    for pair in lines[1..].windows(2) {
        assert_eq!(pair[1].baseline_y - pair[0].baseline_y, 14.0);
    }
    assert!(lines.iter().all(|line| line.x == 40.0));
    assert_eq!(layout.cursor_y(), 80.0 + 6.0 * 14.0);
}

#[test]
fn empty_metadata_adds_no_optional_lines() {
    let metadata = ExportMetadata::default()
        .with_author_name("")
        .with_author_contact("")
        .with_notes("");
    let layout = DocumentLayout::compose(PageSpec::a4(), &six_parameters(), &metadata);

    assert_eq!(layout.lines().len(), 7);
    assert!(layout.lines().iter().all(|line| {
        !line.text.starts_with("Printed by")
            && !line.text.starts_with("Contact")
            && !line.text.starts_with("Notes")
    }));
}

#[test]
fn present_metadata_lines_follow_parameters() {
    let metadata = ExportMetadata::default()
        .with_author_name("Jana Nováková")
        .with_notes("first line\nsecond line");
    let layout = DocumentLayout::compose(PageSpec::a4(), &six_parameters(), &metadata);
    let texts: Vec<&str> = layout.lines().iter().map(|line| line.text.as_str()).collect();

    assert_eq!(
        &texts[7..],
        ["Printed by: Jana Nováková", "Notes: first line second line"]
    );
}

#[test]
fn large_image_is_scaled_down_preserving_aspect() {
    let layout = DocumentLayout::compose(
        PageSpec::a4(),
        &six_parameters(),
        &ExportMetadata::default(),
    );
    let placement = layout.place_image(900, 860).expect("placement");

    let expected_scale = (515.0_f64 / 900.0).min(638.0 / 860.0);
    assert!((placement.scale - expected_scale).abs() <= 1e-12);
    assert!((placement.width / placement.height - 900.0 / 860.0).abs() <= 1e-12);
    assert_eq!(placement.x, 40.0);
    assert_eq!(placement.y_top, layout.cursor_y() + 10.0);
    assert!(placement.y_top + placement.height <= 842.0 - 30.0 + 1e-9);
}

#[test]
fn small_image_is_never_enlarged() {
    let layout = DocumentLayout::compose(
        PageSpec::a4(),
        &six_parameters(),
        &ExportMetadata::default(),
    );
    let placement = layout.place_image(120, 80).expect("placement");

    assert_eq!(placement.scale, 1.0);
    assert_eq!(placement.width, 120.0);
    assert_eq!(placement.height, 80.0);
}

#[test]
fn tall_image_is_limited_by_remaining_height() {
    let layout = DocumentLayout::compose(
        PageSpec::a4(),
        &six_parameters(),
        &ExportMetadata::default(),
    );
    let placement = layout.place_image(300, 2000).expect("placement");

    assert!((placement.height - layout.max_image_height()).abs() <= 1e-9);
    assert!(placement.width < 300.0);
}

#[test]
fn overflowing_text_block_leaves_no_room() {
    let mut parameters = ParameterList::new();
    for i in 0..60 {
        parameters.insert(format!("p{i}"), i.to_string());
    }
    let layout = DocumentLayout::compose(PageSpec::a4(), &parameters, &ExportMetadata::default());

    let err = layout.place_image(900, 900).expect_err("no room");
    assert!(matches!(err, ExportError::NoRoom { .. }));
    assert_eq!(
        layout.place_image(0, 10).expect_err("empty"),
        ExportError::EmptyImage
    );
}

#[test]
fn error_line_sits_below_the_text_cursor() {
    let layout = DocumentLayout::compose(
        PageSpec::a4(),
        &six_parameters(),
        &ExportMetadata::default(),
    );
    let line = layout.image_error_line(&ExportError::EmptyImage);

    assert_eq!(line.baseline_y, layout.cursor_y() + 20.0);
    assert_eq!(line.text, "Image embedding failed: image has zero width or height");
}
