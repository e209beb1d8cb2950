//! Figure-eight path construction and segment extraction.

use infinity_core::{Path, Size};

use crate::measure::PathMeasure;

/// Build the closed double-loop path inscribed in `size`.
///
/// The curve starts and ends at the center point: one cubic lobe sweeps the
/// right half (control points at the top-right and bottom-right corners), a
/// second sweeps the left half. Zero-size input yields a degenerate
/// zero-length path.
pub fn infinity_path(size: Size) -> Path {
    let width = size.width;
    let height = size.height;
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    Path::new()
        .move_to(center_x, center_y)
        .cubic_to(width, 0.0, width, height, center_x, center_y)
        .cubic_to(0.0, 0.0, 0.0, height, center_x, center_y)
}

/// Extract the sub-path visible at `completion` ∈ [0, 2).
///
/// While `completion` is below 1 the segment grows from the path start; above
/// 1 the stop edge holds at the full length while the start edge advances,
/// shrinking the segment from the tail. At exactly 1 the whole loop is the
/// segment.
pub fn path_segment(measure: &PathMeasure, completion: f32) -> Path {
    let length = measure.length();

    let stop_distance = if completion < 1.0 {
        completion * length
    } else {
        length
    };
    let start_distance = if completion > 1.0 {
        (completion - 1.0) * length
    } else {
        0.0
    };

    measure.segment(start_distance, stop_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinity_core::Point;

    const EPSILON: f32 = 1e-3;

    fn measured(size: Size) -> PathMeasure {
        PathMeasure::new(&infinity_path(size))
    }

    #[test]
    fn test_path_starts_and_ends_at_center() {
        for (w, h) in [(256.0, 200.0), (64.0, 64.0), (300.0, 80.0)] {
            let path = infinity_path(Size::new(w, h));
            let center = Point::new(w / 2.0, h / 2.0);
            assert_eq!(path.start_point(), Some(center));
            assert_eq!(path.end_point(), Some(center));
        }
    }

    #[test]
    fn test_path_is_idempotent_for_same_size() {
        let size = Size::new(256.0, 200.0);
        assert_eq!(infinity_path(size), infinity_path(size));
    }

    #[test]
    fn test_path_fills_bounding_rect() {
        let bounds = infinity_path(Size::new(256.0, 200.0)).bounds();
        assert_eq!(bounds.x(), 0.0);
        assert_eq!(bounds.y(), 0.0);
        assert_eq!(bounds.width(), 256.0);
        assert_eq!(bounds.height(), 200.0);
    }

    #[test]
    fn test_zero_size_path_is_degenerate() {
        let measure = measured(Size::ZERO);
        assert_eq!(measure.length(), 0.0);
    }

    #[test]
    fn test_segment_grows_from_start() {
        let measure = measured(Size::new(256.0, 200.0));
        let length = measure.length();

        let at_zero = path_segment(&measure, 0.0);
        assert!(PathMeasure::new(&at_zero).length() < EPSILON);
        assert_eq!(at_zero.start_point(), Some(Point::new(128.0, 100.0)));

        let at_half = path_segment(&measure, 0.5);
        let half_length = PathMeasure::new(&at_half).length();
        assert!((half_length - 0.5 * length).abs() < length * EPSILON);
        assert_eq!(at_half.start_point(), Some(Point::new(128.0, 100.0)));
    }

    #[test]
    fn test_segment_covers_full_loop_at_one() {
        let measure = measured(Size::new(256.0, 200.0));
        let length = measure.length();

        let full = path_segment(&measure, 1.0);
        assert!((PathMeasure::new(&full).length() - length).abs() < length * EPSILON);
    }

    #[test]
    fn test_segment_shrinks_from_tail_past_one() {
        let measure = measured(Size::new(256.0, 200.0));
        let length = measure.length();

        let at_one_and_half = path_segment(&measure, 1.5);
        let tail_length = PathMeasure::new(&at_one_and_half).length();
        assert!((tail_length - 0.5 * length).abs() < length * EPSILON);

        // Starts mid-path, ends back at center
        let start = at_one_and_half.start_point().unwrap();
        assert!(start.distance(Point::new(128.0, 100.0)) > 1.0);
        let end = at_one_and_half.end_point().unwrap();
        assert!(end.distance(Point::new(128.0, 100.0)) < 0.5);
    }

    #[test]
    fn test_segment_length_tracks_completion() {
        let measure = measured(Size::new(256.0, 200.0));
        let length = measure.length();

        for completion in [0.1, 0.25, 0.75, 0.9] {
            let segment = path_segment(&measure, completion);
            let expected = completion * length;
            assert!(
                (PathMeasure::new(&segment).length() - expected).abs() < length * EPSILON,
                "completion {completion}"
            );
        }
        for completion in [1.1, 1.25, 1.75, 1.9] {
            let segment = path_segment(&measure, completion);
            let expected = (2.0 - completion) * length;
            assert!(
                (PathMeasure::new(&segment).length() - expected).abs() < length * EPSILON,
                "completion {completion}"
            );
        }
    }
}
