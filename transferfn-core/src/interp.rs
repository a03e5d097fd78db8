//! Position search and linear interpolation over sorted control points.

use crate::points::ControlPoint;

/// Neighbouring positions closer than this are treated as coincident.
pub const COINCIDENT_EPSILON: f32 = 1e-4;

/// Insertion index for `position` in a slice sorted ascending by position:
/// the first index whose position is strictly greater than `position`, or
/// `points.len()` when every position is less than or equal to it.
///
/// Requires a non-empty slice.
pub fn locate<P: ControlPoint>(points: &[P], position: f32) -> usize {
    debug_assert!(!points.is_empty(), "locate needs at least one point");
    let mut lo = 0;
    let mut hi = points.len() - 1;
    loop {
        if points[lo].position() > position {
            return lo;
        }
        if points[hi].position() <= position {
            return hi + 1;
        }
        let mid = (lo + hi) / 2;
        if mid == lo || mid == hi {
            return mid + 1;
        }
        if points[mid].position() <= position {
            lo = mid;
        } else {
            hi = mid;
        }
    }
}

/// Linearly interpolate between `left` and `right`, anchored at `left_pos`
/// and `right_pos`, evaluated at `position`.
///
/// When the anchors sit within [`COINCIDENT_EPSILON`] of each other the
/// left value is returned outright. Callers rely on that tie-break to keep
/// stacked points stable, so it must stay left-biased.
pub fn lerp(left: f32, right: f32, left_pos: f32, right_pos: f32, position: f32) -> f32 {
    let t = if (right_pos - left_pos).abs() > COINCIDENT_EPSILON {
        (position - left_pos) / (right_pos - left_pos)
    } else {
        0.0
    };
    left * (1.0 - t) + right * t
}

/// Indices of the two points bracketing `position`, with the right index
/// clamped interior so both always exist. Requires at least two points.
pub fn neighbors<P: ControlPoint>(points: &[P], position: f32) -> (usize, usize) {
    debug_assert!(points.len() >= 2, "neighbors needs both endpoints");
    let right = locate(points, position).clamp(1, points.len() - 1);
    (right - 1, right)
}

/// Interpolated point at `position` on a sorted run of at least two points.
pub fn point_at<P: ControlPoint>(points: &[P], position: f32) -> P {
    let (left, right) = neighbors(points, position);
    P::between(points[left], points[right], position)
}
