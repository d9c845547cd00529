use circle_plot::api::{FormInput, PlotOptions};
use circle_plot::render::Color;
use circle_plot::PlotError;

#[test]
fn defaults_match_the_form() {
    let input = FormInput::default();

    assert_eq!(input.center_x, 0.0);
    assert_eq!(input.center_y, 0.0);
    assert_eq!(input.radius, 1.0);
    assert_eq!(input.point_count, 12);
    assert_eq!(input.unit, "m");
    assert_eq!(input.point_color, "#ff0000");
    assert_eq!(input.point_size, 6);
    assert!(input.show_grid);
    assert!(input.show_labels);
    assert!(input.author_name.is_empty());
}

#[test]
fn empty_json_object_yields_defaults() {
    let input = FormInput::from_json_str("{}").expect("parse");
    assert_eq!(input, FormInput::default());
}

#[test]
fn json_round_trip_keeps_every_field() {
    let input = FormInput {
        radius: 2.5,
        point_count: 7,
        notes: "hello".to_owned(),
        show_grid: false,
        ..FormInput::default()
    };
    let json = input.to_json_pretty().expect("serialize");
    assert_eq!(FormInput::from_json_str(&json).expect("parse"), input);
}

#[test]
fn malformed_json_is_an_input_error() {
    let err = FormInput::from_json_str("{\"radius\": \"big\"}").expect_err("bad type");
    assert!(matches!(err, PlotError::InvalidInput(_)));
}

#[test]
fn valid_input_becomes_a_circle_spec() {
    let spec = FormInput::default()
        .with_center(1.0, -2.0)
        .with_radius(3.0)
        .with_point_count(5)
        .validate()
        .expect("valid");

    assert_eq!(spec.center_x, 1.0);
    assert_eq!(spec.center_y, -2.0);
    assert_eq!(spec.radius, 3.0);
    assert_eq!(spec.point_count, 5);
    assert_eq!(spec.point_color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn zero_radius_is_accepted() {
    assert!(FormInput::default().with_radius(0.0).validate().is_ok());
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        FormInput::default().with_radius(-0.5),
        FormInput::default().with_radius(f64::NAN),
        FormInput::default().with_point_count(0),
        FormInput::default().with_center(f64::INFINITY, 0.0),
        FormInput {
            point_size: 0,
            ..FormInput::default()
        },
        FormInput {
            point_size: 21,
            ..FormInput::default()
        },
        FormInput {
            point_color: "red".to_owned(),
            ..FormInput::default()
        },
        FormInput {
            point_color: "#gg0000".to_owned(),
            ..FormInput::default()
        },
    ];

    for input in cases {
        let err = input.validate().expect_err("must be rejected");
        assert!(matches!(err, PlotError::InvalidInput(_)), "{err}");
    }
}

#[test]
fn toggles_and_metadata_are_split_out() {
    let input = FormInput {
        show_grid: false,
        show_labels: false,
        author_name: "Ada".to_owned(),
        ..FormInput::default()
    };

    assert_eq!(
        input.plot_options(),
        PlotOptions::default().with_grid(false).with_labels(false)
    );
    let metadata = input.export_metadata();
    assert_eq!(metadata.author_name.as_deref(), Some("Ada"));
    assert_eq!(metadata.author_contact, None);
    assert_eq!(metadata.notes, None);
}

#[test]
fn color_hex_round_trip() {
    let color = Color::from_hex("#1F77b4").expect("hex");
    assert_eq!(color.to_hex(), "#1f77b4");
    assert_eq!(Color::from_hex("00ff00").expect("bare hex").to_hex(), "#00ff00");
    assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
}
