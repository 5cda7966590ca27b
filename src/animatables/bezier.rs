use crate::foundation::core::Vector2;

/// A segment defined as a cubic bezier curve from `cp0` to `cp3`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierSegment {
    /// Start point.
    pub cp0: Vector2,
    /// First control point.
    pub cp1: Vector2,
    /// Second control point.
    pub cp2: Vector2,
    /// End point.
    pub cp3: Vector2,
}

impl BezierSegment {
    /// Create a segment from its four control points.
    pub fn new(cp0: Vector2, cp1: Vector2, cp2: Vector2, cp3: Vector2) -> Self {
        Self { cp0, cp1, cp2, cp3 }
    }

    /// This segment translated by `offset`.
    pub fn with_offset(&self, offset: Vector2) -> Self {
        Self {
            cp0: self.cp0 + offset,
            cp1: self.cp1 + offset,
            cp2: self.cp2 + offset,
            cp3: self.cp3 + offset,
        }
    }

    /// `true` when the segment describes a straight line: all four
    /// control points are colinear and the inner points lie between the
    /// endpoints.
    pub fn is_a_line(&self) -> bool {
        if !are_points_colinear(0.0, self.cp0, self.cp1, self.cp2, self.cp3) {
            return false;
        }

        // The points are on the same line. The cubic bezier is a line if
        // cp1 and cp2 are between cp0..cp3.
        is_between(self.cp0.x, self.cp1.x, self.cp2.x, self.cp3.x)
            && is_between(self.cp0.y, self.cp1.y, self.cp2.y, self.cp3.y)
    }
}

// Returns true iff b and c are between a and d.
fn is_between(a: f64, b: f64, c: f64, d: f64) -> bool {
    let delta_ad = (a - d).abs();

    (a - b).abs() <= delta_ad
        && (d - b).abs() <= delta_ad
        && (a - c).abs() <= delta_ad
        && (d - c).abs() <= delta_ad
}

fn distance_squared(a: Vector2, b: Vector2) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    x * x + y * y
}

/// `true` when all four points lie on one line.
///
/// Compares the longest pairwise distance against the sums of the inner
/// distances with exact equality. The `tolerance` parameter is accepted
/// but not yet applied to the comparison.
// TODO - include tolerance.
pub fn are_points_colinear(
    tolerance: f64,
    a: Vector2,
    b: Vector2,
    c: Vector2,
    d: Vector2,
) -> bool {
    let _ = tolerance;

    let ab = distance_squared(a, b);
    let ac = distance_squared(a, c);
    let ad = distance_squared(a, d);
    let bc = distance_squared(b, c);
    let bd = distance_squared(b, d);
    let cd = distance_squared(c, d);

    // Identify the longest segment; the other points must subdivide it.
    // Ties keep the earliest candidate.
    let pairs = [
        (ab, ac, bc, ad, bd),
        (ac, ab, bc, ad, cd),
        (ad, ab, bd, ac, cd),
        (bc, ab, ac, bd, cd),
        (bd, bc, cd, ab, ad),
        (cd, ac, ad, bd, bc),
    ];
    let mut longest = pairs[0];
    for candidate in &pairs[1..] {
        if candidate.0 > longest.0 {
            longest = *candidate;
        }
    }
    let (longest, inner00, inner01, inner10, inner11) = longest;

    let outer = longest.sqrt();
    let sum0 = inner00.sqrt() + inner01.sqrt();
    let sum1 = inner10.sqrt() + inner11.sqrt();

    sum0 == outer && sum1 == outer
}

/// An ordered sequence of bezier segments, optionally closed.
///
/// Equality is by the ordered segment sequence and the closed flag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathGeometry {
    /// The segments, in draw order.
    pub bezier_segments: Vec<BezierSegment>,
    /// `true` when the last segment connects back to the first.
    pub is_closed: bool,
}

impl PathGeometry {
    /// Create a geometry from segments.
    pub fn new(bezier_segments: Vec<BezierSegment>, is_closed: bool) -> Self {
        Self {
            bezier_segments,
            is_closed,
        }
    }

    /// A geometry with no segments.
    pub fn empty() -> Self {
        Self {
            bezier_segments: Vec::new(),
            is_closed: false,
        }
    }

    /// This geometry translated by `offset`.
    pub fn with_offset(&self, offset: Vector2) -> Self {
        Self {
            bezier_segments: self
                .bezier_segments
                .iter()
                .map(|seg| seg.with_offset(offset))
                .collect(),
            is_closed: self.is_closed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animatables/bezier.rs"]
mod tests;
