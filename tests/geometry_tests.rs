use approx::assert_abs_diff_eq;
use circle_plot::core::{DataPoint, OUTLINE_RESOLUTION, outline_points, sample_points};

#[test]
fn four_points_on_unit_circle_land_on_the_axes() {
    let points = sample_points(DataPoint::new(0.0, 0.0), 1.0, 4);

    let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    assert_eq!(points.len(), 4);
    for (offset, (point, (x, y))) in points.iter().zip(expected).enumerate() {
        assert_eq!(point.index as usize, offset + 1);
        assert_abs_diff_eq!(point.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y, y, epsilon = 1e-12);
    }
}

#[test]
fn single_point_sits_at_angle_zero() {
    let points = sample_points(DataPoint::new(0.0, 0.0), 2.0, 1);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].index, 1);
    assert_abs_diff_eq!(points[0].x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-12);
}

#[test]
fn zero_radius_collapses_points_and_outline_to_center() {
    let center = DataPoint::new(3.5, -7.25);
    let points = sample_points(center, 0.0, 9);
    let outline = outline_points(center, 0.0, OUTLINE_RESOLUTION);

    assert_eq!(points.len(), 9);
    assert!(points.iter().all(|p| p.x == center.x && p.y == center.y));
    assert!(outline.iter().all(|p| *p == center));
}

#[test]
fn points_are_offset_by_the_center() {
    let center = DataPoint::new(10.0, 20.0);
    let points = sample_points(center, 5.0, 2);

    assert_abs_diff_eq!(points[0].x, 15.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].y, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].x, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].y, 20.0, epsilon = 1e-9);
}

#[test]
fn outline_is_closed_and_dense() {
    let center = DataPoint::new(1.0, 1.0);
    let outline = outline_points(center, 2.0, OUTLINE_RESOLUTION);

    assert_eq!(outline.len(), 400);
    let first = outline[0];
    let last = outline[outline.len() - 1];
    assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-12);
    assert!(
        outline
            .iter()
            .all(|p| (p.distance_to(center) - 2.0).abs() <= 1e-12)
    );
}

#[test]
fn degenerate_counts_do_not_panic() {
    let center = DataPoint::new(0.0, 0.0);
    assert!(sample_points(center, 1.0, 0).is_empty());
    assert!(outline_points(center, 1.0, 0).is_empty());
    assert_eq!(outline_points(center, 1.0, 1), vec![DataPoint::new(1.0, 0.0)]);
}
