//! Fixed-point polygon offset backend seam and its Clipper implementation.
use super::{EndCapStyle, JointStyle};
use crate::error::OffsetError;
use geo_clipper::{ClipperInt, ClipperOpenInt, EndType, JoinType};
use geo_types::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};

/// Largest coordinate magnitude accepted in the fixed-point domain.
///
/// Clipper computes offset vertexes in `f64`, integers beyond 2^53 are not exactly representable
/// there.
pub const MAX_FIXED_COORD: f64 = 9_007_199_254_740_992.0;

/// Point in the backend fixed-point domain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// How the ends of an offset input path are treated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetEnd {
    /// Closed polyline, both sides are offset and the result is a ring pair.
    ClosedLine,
    /// Open polyline capped at both ends with the given style.
    Open(EndCapStyle),
}

/// A single input polyline for the offset backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPath {
    pub points: Vec<IntPoint>,
    pub end: OffsetEnd,
}

/// Parameters shared by all paths of a single offset operation, in fixed-point units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OffsetParams {
    /// Offset distance to each side of the input paths.
    pub delta: f64,
    pub joint_style: JointStyle,
    /// Miter limit as a multiple of `delta`, only used by [JointStyle::Miter].
    pub miter_limit: f64,
    /// Maximum distance round joints and caps may deviate from a true arc.
    pub arc_tolerance: f64,
}

/// A polygon offsetting engine working on integer coordinates.
///
/// Implementations offset every path in `paths` by `params.delta` and return the union of the
/// results as rings (outer boundaries and holes alike, combined with the even-odd rule). A ring
/// does not repeat its first point at the end.
pub trait OffsetBackend {
    fn offset(
        &self,
        paths: &[OffsetPath],
        params: &OffsetParams,
    ) -> Result<Vec<Vec<IntPoint>>, OffsetError>;
}

/// [OffsetBackend] implemented with the Clipper library (through `geo-clipper`).
#[derive(Debug, Copy, Clone, Default)]
pub struct ClipperOffset;

impl ClipperOffset {
    fn join_type(params: &OffsetParams) -> JoinType {
        match params.joint_style {
            JointStyle::Square => JoinType::Square,
            JointStyle::Miter => JoinType::Miter(params.miter_limit),
            JointStyle::Round => JoinType::Round(params.arc_tolerance),
        }
    }

    fn end_type(cap: EndCapStyle, params: &OffsetParams) -> EndType {
        match cap {
            EndCapStyle::Butt => EndType::OpenButt,
            EndCapStyle::Square => EndType::OpenSquare,
            EndCapStyle::Round => EndType::OpenRound(params.arc_tolerance),
        }
    }
}

fn line_string(points: &[IntPoint]) -> LineString<i64> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}

fn ring_points(ring: &LineString<i64>) -> Vec<IntPoint> {
    let mut coords = ring.0.as_slice();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords = &coords[..coords.len() - 1];
    }

    coords.iter().map(|c| IntPoint::new(c.x, c.y)).collect()
}

impl OffsetBackend for ClipperOffset {
    fn offset(
        &self,
        paths: &[OffsetPath],
        params: &OffsetParams,
    ) -> Result<Vec<Vec<IntPoint>>, OffsetError> {
        if !params.delta.is_finite() {
            return Err(OffsetError::InvalidDelta(params.delta));
        }

        let join_type = Self::join_type(params);

        let closed = paths
            .iter()
            .filter(|p| p.end == OffsetEnd::ClosedLine)
            .map(|p| Polygon::new(line_string(&p.points), Vec::new()))
            .collect::<Vec<_>>();

        let mut groups = Vec::new();
        if !closed.is_empty() {
            groups.push(MultiPolygon::new(closed).offset(
                params.delta,
                join_type,
                EndType::ClosedLine,
            ));
        }

        for cap in [EndCapStyle::Butt, EndCapStyle::Square, EndCapStyle::Round] {
            let open = paths
                .iter()
                .filter(|p| p.end == OffsetEnd::Open(cap))
                .map(|p| line_string(&p.points))
                .collect::<Vec<_>>();
            if open.is_empty() {
                continue;
            }

            groups.push(MultiLineString::new(open).offset(
                params.delta,
                join_type,
                Self::end_type(cap, params),
            ));
        }

        let mut groups = groups.into_iter();
        let Some(first) = groups.next() else {
            return Ok(Vec::new());
        };
        let merged = groups.fold(first, |acc, g| acc.union(&g));

        let mut rings = Vec::new();
        for polygon in merged.iter() {
            rings.push(ring_points(polygon.exterior()));
            rings.extend(polygon.interiors().iter().map(ring_points));
        }

        rings.retain(|r| r.len() >= 3);
        Ok(rings)
    }
}
