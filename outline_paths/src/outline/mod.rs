//! Stroked (optionally dashed) outline generation.
//!
//! Outlines are generated by converting the flattened contours into a fixed-point domain, handing
//! them to an [OffsetBackend] and converting the returned rings back into closed contours of a
//! [ComplexPolygon].
mod backend;
mod dash;

pub use backend::*;
pub use dash::dash_runs;

use num_traits::Zero;
use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    error::{GeometryError, OffsetError},
    path::{Path, PathSource},
    segment::LinearSegment,
    shape::ComplexPolygon,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on the pattern entries a dashed outline may walk through.
pub const MAX_DASH_COUNT: usize = 1 << 20;

/// How corners between consecutive edges of a stroke are joined.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum JointStyle {
    /// Corner is cut off at the stroke half width.
    #[default]
    Square,
    /// Edges are extended until they meet, limited by the miter limit.
    Miter,
    /// Corner is rounded with an arc.
    Round,
}

/// How the ends of open strokes are capped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EndCapStyle {
    /// Stroke ends exactly at the path end.
    #[default]
    Butt,
    /// Stroke extends half the width past the path end with a square end.
    Square,
    /// Stroke extends half the width past the path end with a half circle.
    Round,
}

/// Options for [generate_outline].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineOptions<T> {
    /// Full stroke width, must be finite and greater than zero.
    ///
    /// Dash lengths scale with the width, so a dashed outline produces about
    /// `length / (width * pattern_sum)` pattern repeats and a tiny width on a long path produces
    /// a large number of dashes. Outlines estimated above [MAX_DASH_COUNT] pattern entries fail
    /// with [GeometryError::TooManyDashes].
    pub width: T,
    /// Dash pattern as alternating on/off lengths in multiples of `width`. Fewer than 2 entries
    /// produces a solid stroke.
    pub pattern: Vec<T>,
    /// Start the dash pattern in the off state.
    pub start_off: bool,
    pub joint_style: JointStyle,
    /// Cap style for the ends of open contours in a solid stroke.
    pub end_cap_style: EndCapStyle,
    /// Cap style for the ends of every dash.
    pub pattern_section_cap_style: EndCapStyle,
    /// Miter limit as a multiple of the half width.
    pub miter_limit: T,
    /// Arc tolerance for round joints and caps, in fixed-point units.
    pub arc_tolerance: T,
    /// Scale applied to coordinates before rounding into the fixed-point domain.
    pub scaling_factor: T,
}

impl<T> OutlineOptions<T>
where
    T: Real,
{
    /// Solid stroke of `width` with default styles.
    pub fn new(width: T) -> Self {
        Self {
            width,
            pattern: Vec::new(),
            start_off: false,
            joint_style: JointStyle::default(),
            end_cap_style: EndCapStyle::default(),
            pattern_section_cap_style: EndCapStyle::default(),
            miter_limit: T::constant(20.0),
            arc_tolerance: T::constant(0.25),
            scaling_factor: T::constant(1000.0),
        }
    }

    /// Dashed stroke of `width` following `pattern`.
    pub fn dashed(width: T, pattern: Vec<T>) -> Self {
        Self {
            pattern,
            ..Self::new(width)
        }
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        self.pattern.len() >= 2
    }
}

impl<T> Default for OutlineOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::one())
    }
}

/// Generate the stroked outline of `path` using the Clipper backend.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::outline::*;
/// # use outline_paths::path::*;
/// # use outline_paths::segment::*;
/// let line = Path::open(vec![LinearSegment::line(vec2(0.0, 0.0), vec2(10.0, 0.0)).into()]).unwrap();
/// let outline = generate_outline(&line, &OutlineOptions::new(2.0)).unwrap();
/// let bounds = outline.bounds();
/// assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (0.0, -1.0, 10.0, 1.0));
/// assert!(outline.contains(vec2(5.0, 0.5)));
/// ```
pub fn generate_outline<P>(
    path: &P,
    options: &OutlineOptions<P::Num>,
) -> Result<ComplexPolygon<P::Num>, GeometryError>
where
    P: PathSource,
{
    generate_outline_with(path, options, &ClipperOffset)
}

/// Generate the stroked outline of `path` using `backend` for the offset operation.
///
/// Every contour is offset by half of `options.width`. Closed contours of a solid stroke produce
/// a ring on each side, open contours and every dash are capped at their ends. A backend failure
/// is returned as is and no partial outline is produced.
pub fn generate_outline_with<P, B>(
    path: &P,
    options: &OutlineOptions<P::Num>,
    backend: &B,
) -> Result<ComplexPolygon<P::Num>, GeometryError>
where
    P: PathSource,
    B: OffsetBackend + ?Sized,
{
    let width = options.width;
    if !crate::core::traits::Real::to_f64_lossy(width).is_finite() || width <= P::Num::zero() {
        return Err(GeometryError::InvalidStrokeWidth);
    }

    let dashed = options.is_dashed();
    if dashed
        && options
            .pattern
            .iter()
            .any(|&v| !crate::core::traits::Real::to_f64_lossy(v).is_finite() || v <= P::Num::zero())
    {
        return Err(GeometryError::InvalidDashPattern);
    }

    if dashed {
        let period = options
            .pattern
            .iter()
            .fold(P::Num::zero(), |acc, &v| acc + v)
            .to_f64_lossy()
            * width.to_f64_lossy();
        let repeats = path
            .contours()
            .iter()
            .map(|c| (c.length().to_f64_lossy() / period).ceil())
            .sum::<f64>();
        let estimated = repeats * options.pattern.len() as f64;
        if estimated > MAX_DASH_COUNT as f64 {
            return Err(GeometryError::TooManyDashes {
                estimated,
                limit: MAX_DASH_COUNT,
            });
        }
    }

    let scale = options.scaling_factor.to_f64_lossy();
    let delta = (width * P::Num::half()).to_f64_lossy() * scale;
    if !delta.is_finite() || delta <= 0.0 {
        return Err(OffsetError::InvalidDelta(delta).into());
    }

    let mut offset_paths = Vec::new();
    let mut dash_count = 0;
    for contour in path.contours() {
        let points = contour.points();
        if dashed {
            for run in dash_runs(
                points,
                contour.is_closed(),
                width,
                &options.pattern,
                options.start_off,
            ) {
                dash_count += 1;
                offset_paths.push(OffsetPath {
                    points: to_fixed(&run, scale)?,
                    end: OffsetEnd::Open(options.pattern_section_cap_style),
                });
            }
        } else {
            let end = if contour.is_closed() {
                OffsetEnd::ClosedLine
            } else {
                OffsetEnd::Open(options.end_cap_style)
            };
            offset_paths.push(OffsetPath {
                points: to_fixed(points, scale)?,
                end,
            });
        }
    }

    let params = OffsetParams {
        delta,
        joint_style: options.joint_style,
        miter_limit: options.miter_limit.to_f64_lossy(),
        arc_tolerance: options.arc_tolerance.to_f64_lossy(),
    };

    let rings = backend.offset(&offset_paths, &params)?;
    let ring_count = rings.len();

    let paths = rings
        .into_iter()
        .filter(|r| r.len() >= 3)
        .map(|ring| from_fixed(&ring, scale))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "outline generated: {} contour(s), {} dash(es), {} ring(s)",
        path.contours().len(),
        dash_count,
        ring_count
    );

    Ok(ComplexPolygon::new(paths))
}

fn to_fixed<T>(points: &[Vector2<T>], scale: f64) -> Result<Vec<IntPoint>, OffsetError>
where
    T: Real,
{
    let convert = |v: T| {
        let scaled = (v.to_f64_lossy() * scale).round();
        if !scaled.is_finite() || scaled.abs() > MAX_FIXED_COORD {
            return Err(OffsetError::CoordinateOutOfRange {
                value: v.to_f64_lossy(),
            });
        }
        Ok(scaled as i64)
    };

    points
        .iter()
        .map(|p| Ok(IntPoint::new(convert(p.x)?, convert(p.y)?)))
        .collect()
}

fn from_fixed<T>(ring: &[IntPoint], scale: f64) -> Result<Path<T>, GeometryError>
where
    T: Real,
{
    let points = ring
        .iter()
        .map(|p| {
            vec2(
                T::constant(p.x as f64 / scale),
                T::constant(p.y as f64 / scale),
            )
        })
        .collect();

    Path::closed(vec![LinearSegment::new(points)?.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_rounds_to_nearest() {
        let points = [vec2(0.0004, -0.0006), vec2(1.2346, 2.0)];
        let fixed = to_fixed(&points, 1000.0).unwrap();
        assert_eq!(fixed, vec![IntPoint::new(0, -1), IntPoint::new(1235, 2000)]);
    }

    #[test]
    fn fixed_point_rejects_out_of_range() {
        let points = [vec2(1.0e17, 0.0)];
        assert!(matches!(
            to_fixed(&points, 1000.0),
            Err(OffsetError::CoordinateOutOfRange { .. })
        ));
        assert!(to_fixed(&[vec2(f64::NAN, 0.0)], 1000.0).is_err());
    }

    #[test]
    fn fixed_point_range_ends_at_exact_f64_integers() {
        assert!(to_fixed(&[vec2(9.0e12, -9.0e12)], 1000.0).is_ok());
        assert!(matches!(
            to_fixed(&[vec2(0.0, 9.1e12)], 1000.0),
            Err(OffsetError::CoordinateOutOfRange { value }) if value == 9.1e12
        ));
    }

    #[test]
    fn default_options() {
        let opts = OutlineOptions::<f64>::default();
        assert_eq!(opts.width, 1.0);
        assert!(!opts.is_dashed());
        assert_eq!(opts.miter_limit, 20.0);
        assert_eq!(opts.scaling_factor, 1000.0);
        assert!(OutlineOptions::dashed(2.0, vec![1.0, 1.0]).is_dashed());
        assert!(!OutlineOptions::dashed(2.0, vec![1.0]).is_dashed());
    }
}
