//! Maze path: parsing, scaling and resampling
//!
//! The authored route is a sparse polyline. Motion, reveal and trap indices all
//! work on a dense resampling of it where neighbouring samples sit one `step`
//! apart along the path.

use glam::Vec2;

use crate::error::PathError;

/// Authored vertex of the maze path
pub type Waypoint = Vec2;

/// Samples closer than this to the true endpoint count as the endpoint
pub const ENDPOINT_EPSILON: f32 = 1e-3;

/// Parse an SVG `points` attribute (`"x1,y1 x2,y2 ..."`) into waypoints
pub fn parse_svg_points(src: &str) -> Result<Vec<Waypoint>, PathError> {
    let mut points = Vec::new();
    for pair in src.split_whitespace() {
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| PathError::MalformedPair(pair.to_string()))?;
        let x: f32 = x
            .trim()
            .parse()
            .map_err(|_| PathError::MalformedPair(pair.to_string()))?;
        let y: f32 = y
            .trim()
            .parse()
            .map_err(|_| PathError::MalformedPair(pair.to_string()))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(PathError::NonFinite(pair.to_string()));
        }
        points.push(Vec2::new(x, y));
    }
    if points.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(points)
}

/// Scale authored waypoints into surface space with independent X/Y factors
pub fn scale_polyline(points: &[Waypoint], scale: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| *p * scale).collect()
}

/// Resample a polyline at `step` spacing along its length.
///
/// The first sample is the first waypoint and the last sample is the last
/// waypoint. Zero-length segments are skipped. Distance walked since the
/// previous sample carries across corners, so short segments never produce
/// clustered samples and no two neighbours are more than `step` apart.
pub fn sample_polyline(points: &[Vec2], step: f32) -> Result<Vec<Vec2>, PathError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(PathError::InvalidStep(step));
    }
    let (&first, &last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PathError::Empty),
    };

    let mut samples = vec![first];
    let mut current = first;
    // Path length still to walk before the next sample is due
    let mut remaining = step;
    let mut next = 1;

    while next < points.len() {
        let target = points[next];
        let len = current.distance(target);

        if len == 0.0 {
            next += 1;
            continue;
        }

        if len >= remaining {
            let stepped = current.lerp(target, remaining / len);
            if stepped.distance(target) >= len {
                // Step is below float resolution here; land on the waypoint
                current = target;
                next += 1;
            } else {
                current = stepped;
            }
            samples.push(current);
            remaining = step;
        } else {
            remaining -= len;
            current = target;
            next += 1;
        }
    }

    let tail_gap = samples.last().map_or(f32::INFINITY, |s| s.distance(last));
    if tail_gap > ENDPOINT_EPSILON {
        samples.push(last);
    } else if let Some(tail) = samples.last_mut() {
        *tail = last;
    }

    Ok(samples)
}

/// Convert a real-valued progress into a valid sample index (floor, clamped)
#[inline]
pub fn sample_index(progress: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let floored = progress.max(0.0).floor();
    (floored as usize).min(len - 1)
}

/// Facing angle at a sample: direction towards the following sample.
///
/// At the final sample the direction degenerates to zero and the angle is 0.
pub fn heading_at(samples: &[Vec2], index: usize) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let i = index.min(samples.len() - 1);
    let j = (i + 1).min(samples.len() - 1);
    let dir = samples[j] - samples[i];
    dir.y.atan2(dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AUTHORED_PATH, SAMPLE_STEP};
    use proptest::prelude::*;

    #[test]
    fn test_parse_svg_points() {
        let pts = parse_svg_points(" 234,2 234,10\n250,10 ").unwrap();
        assert_eq!(pts, vec![Vec2::new(234.0, 2.0), Vec2::new(234.0, 10.0), Vec2::new(250.0, 10.0)]);

        assert_eq!(parse_svg_points("1,2 3"), Err(PathError::MalformedPair("3".into())));
        assert_eq!(parse_svg_points("1,x"), Err(PathError::MalformedPair("1,x".into())));
        assert_eq!(parse_svg_points("   "), Err(PathError::Empty));
        assert!(matches!(parse_svg_points("inf,2"), Err(PathError::NonFinite(_))));
    }

    #[test]
    fn test_authored_path_parses() {
        let pts = parse_svg_points(AUTHORED_PATH).unwrap();
        assert_eq!(pts.len(), 82);
        assert_eq!(pts[0], Vec2::new(234.0, 2.0));
        assert_eq!(pts[81], Vec2::new(250.0, 482.0));
    }

    #[test]
    fn test_scale_polyline() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(484.0, 242.0)];
        let scaled = scale_polyline(&pts, Vec2::new(800.0 / 484.0, 2.0));
        assert_eq!(scaled[0], Vec2::ZERO);
        assert!((scaled[1].x - 800.0).abs() < 1e-3);
        assert!((scaled[1].y - 484.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_straight_line() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)];
        let samples = sample_polyline(&pts, 6.0).unwrap();
        // 0, 6, 12, 18 then the exact endpoint
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Vec2::ZERO);
        assert!((samples[1].x - 6.0).abs() < 1e-4);
        assert!((samples[3].x - 18.0).abs() < 1e-4);
        assert_eq!(samples[4], Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_sample_exact_multiple_does_not_duplicate_endpoint() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(12.0, 0.0)];
        let samples = sample_polyline(&pts, 6.0).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_sample_skips_zero_length_segments() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let samples = sample_polyline(&pts, 4.0).unwrap();
        assert!(samples.iter().all(|s| s.is_finite()));
        assert_eq!(samples[0], Vec2::ZERO);
        assert_eq!(*samples.last().unwrap(), Vec2::new(10.0, 10.0));
        // 20 units of path at step 4 -> 5 interior cuts, last one lands on the end
        assert_eq!(samples.len(), 6);
    }

    #[test]
    fn test_sample_single_point() {
        let samples = sample_polyline(&[Vec2::new(3.0, 4.0)], 6.0).unwrap();
        assert_eq!(samples, vec![Vec2::new(3.0, 4.0)]);

        let samples = sample_polyline(&[Vec2::ONE, Vec2::ONE, Vec2::ONE], 6.0).unwrap();
        assert_eq!(samples, vec![Vec2::ONE]);
    }

    #[test]
    fn test_sample_short_segments_do_not_cluster() {
        // Staircase of 2-unit steps with 6-unit spacing
        let pts: Vec<Vec2> = (0..20)
            .map(|i| Vec2::new(((i + 1) / 2) as f32 * 2.0, (i / 2) as f32 * 2.0))
            .collect();
        let samples = sample_polyline(&pts, 6.0).unwrap();
        // 38 units of path -> about 38 / 6 samples, not one per vertex
        assert!(samples.len() <= 9, "got {} samples", samples.len());
    }

    #[test]
    fn test_sample_step_below_float_resolution_terminates() {
        let pts = [Vec2::new(800.0, 800.0), Vec2::new(801.0, 800.0)];
        let samples = sample_polyline(&pts, 1e-5).unwrap();
        assert_eq!(samples[0], pts[0]);
        assert_eq!(*samples.last().unwrap(), pts[1]);
        assert!(samples.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_sample_rejects_bad_input() {
        assert_eq!(sample_polyline(&[], 6.0), Err(PathError::Empty));
        assert_eq!(sample_polyline(&[Vec2::ZERO], 0.0), Err(PathError::InvalidStep(0.0)));
        assert!(matches!(
            sample_polyline(&[Vec2::ZERO], f32::NAN),
            Err(PathError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_authored_path_spacing() {
        let pts = parse_svg_points(AUTHORED_PATH).unwrap();
        let scaled = scale_polyline(&pts, Vec2::splat(800.0 / 484.0));
        let samples = sample_polyline(&scaled, SAMPLE_STEP).unwrap();
        assert!(samples.len() > 300);
        for pair in samples.windows(2) {
            assert!(pair[0].distance(pair[1]) <= SAMPLE_STEP + 1e-3);
        }
    }

    #[test]
    fn test_sample_index_clamps() {
        assert_eq!(sample_index(0.0, 10), 0);
        assert_eq!(sample_index(3.99, 10), 3);
        assert_eq!(sample_index(9.0, 10), 9);
        assert_eq!(sample_index(42.5, 10), 9);
        assert_eq!(sample_index(-1.0, 10), 0);
        assert_eq!(sample_index(f32::NAN, 10), 0);
        assert_eq!(sample_index(5.0, 0), 0);
    }

    #[test]
    fn test_heading_at() {
        let samples = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 5.0), Vec2::new(-5.0, 5.0)];
        assert!((heading_at(&samples, 0) - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert!((heading_at(&samples, 1).abs() - std::f32::consts::PI).abs() < 1e-5);
        // Final sample faces nowhere in particular
        assert_eq!(heading_at(&samples, 2), 0.0);
        assert_eq!(heading_at(&samples, 99), 0.0);
        assert_eq!(heading_at(&[], 0), 0.0);
    }

    fn polyline_strategy() -> impl Strategy<Value = Vec<Vec2>> {
        prop::collection::vec((0.0f32..800.0, 0.0f32..800.0), 2..40)
            .prop_map(|v| v.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn prop_sampler_keeps_endpoints(pts in polyline_strategy(), step in 1.0f32..30.0) {
            let samples = sample_polyline(&pts, step).unwrap();
            prop_assert_eq!(samples[0], pts[0]);
            prop_assert_eq!(*samples.last().unwrap(), *pts.last().unwrap());
        }

        #[test]
        fn prop_sampler_spacing_bounded(pts in polyline_strategy(), step in 1.0f32..30.0) {
            let samples = sample_polyline(&pts, step).unwrap();
            for pair in samples.windows(2) {
                prop_assert!(pair[0].distance(pair[1]) <= step + 1e-2);
            }
        }
    }
}
