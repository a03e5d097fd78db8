//! Ordered control-point sequences with pinned endpoints.

use crate::error::CurveError;
use crate::interp;
use crate::points::{ControlPoint, OpacityPoint};
use serde::{Deserialize, Serialize};

/// A control curve: at least two points, sorted ascending by position,
/// first at 0 and last at 1. The endpoints can be recolored but never
/// removed or moved off their positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoints<P> {
    points: Vec<P>,
}

impl<P: ControlPoint> ControlPoints<P> {
    /// Build a sequence from points spanning [0, 1]. Points are sorted by
    /// position and value channels are clamped. Needs at least two points.
    pub fn new(points: Vec<P>) -> Self {
        assert!(
            points.len() >= 2,
            "a control curve needs both of its endpoints"
        );
        let mut points: Vec<P> = points.into_iter().map(ControlPoint::clamped).collect();
        points.sort_by(|a, b| {
            a.position()
                .partial_cmp(&b.position())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug_assert!(points[0].position() == 0.0, "curve must start at 0");
        debug_assert!(
            points[points.len() - 1].position() == 1.0,
            "curve must end at 1"
        );
        Self { points }
    }

    /// Insert a point interpolated from its neighbours at `position`,
    /// returning the index it landed at. The position is clamped to [0, 1]
    /// and the new point always lands strictly inside the sequence.
    pub fn insert(&mut self, position: f32) -> usize {
        let position = position.clamp(0.0, 1.0);
        let (left, right) = interp::neighbors(&self.points, position);
        let point = P::between(self.points[left], self.points[right], position);
        self.points.insert(right, point);
        right
    }

    /// Remove the point at `index`. The endpoints and out-of-range indices
    /// are left alone; returns whether a point was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index == 0 || index + 1 >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    /// Replace the point at `index` with `target`, clamped so it cannot
    /// cross its neighbours. Endpoints keep their position; value channels
    /// are clamped to [0, 1]. Returns whether anything changed.
    pub fn move_point(&mut self, index: usize, target: P) -> bool {
        if index >= self.points.len() {
            return false;
        }
        let position = if index == 0 {
            0.0
        } else if index == self.points.len() - 1 {
            1.0
        } else {
            target.position().clamp(
                self.points[index - 1].position(),
                self.points[index + 1].position(),
            )
        };
        let updated = target.clamped().at_position(position);
        if updated == self.points[index] {
            return false;
        }
        self.points[index] = updated;
        true
    }

    /// Interpolated value of the curve at `position`.
    pub fn value_at(&self, position: f32) -> P {
        interp::point_at(&self.points, position)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.points.get(index)
    }

    pub fn first(&self) -> &P {
        &self.points[0]
    }

    pub fn last(&self) -> &P {
        &self.points[self.points.len() - 1]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<P> {
        self.points.clone()
    }
}

/// Validating constructor for point lists coming back from storage.
///
/// Unlike [`ControlPoints::new`], nothing is reordered: the raw positions
/// must already be sorted and span 0 to 1, or the list is rejected. Value
/// channels are clamped the same way the other constructors clamp them.
impl<P: ControlPoint> TryFrom<Vec<P>> for ControlPoints<P> {
    type Error = CurveError;

    fn try_from(points: Vec<P>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                found: points.len(),
            });
        }
        if points
            .windows(2)
            .any(|pair| pair[0].position() > pair[1].position())
        {
            return Err(CurveError::OutOfOrder);
        }
        let first = points[0].position();
        let last = points[points.len() - 1].position();
        if first != 0.0 || last != 1.0 {
            return Err(CurveError::IncompleteSpan { first, last });
        }
        Ok(Self {
            points: points.into_iter().map(ControlPoint::clamped).collect(),
        })
    }
}

impl<'a, P> IntoIterator for &'a ControlPoints<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl ControlPoints<OpacityPoint> {
    /// The identity ramp: fully transparent at 0, fully opaque at 1.
    pub fn identity_ramp() -> Self {
        Self::new(vec![OpacityPoint::new(0.0, 0.0), OpacityPoint::new(1.0, 1.0)])
    }
}

/// Serializes as the bare point array.
impl<P: Serialize> Serialize for ControlPoints<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.points.serialize(serializer)
    }
}

/// Deserializes the bare point array through [`TryFrom`], so curves read
/// back from storage hold the same invariants as constructed ones.
impl<'de, P> Deserialize<'de> for ControlPoints<P>
where
    P: Deserialize<'de> + ControlPoint,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<P>::deserialize(deserializer)?;
        Self::try_from(points).map_err(serde::de::Error::custom)
    }
}
