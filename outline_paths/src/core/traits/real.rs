use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Floating point type the geometry is generic over (`f32` or `f64`).
///
/// Bundles the `num-traits` float operations with fuzzy comparison and the bounds required to
/// store values in a [StaticAABB2DIndex](static_aabb2d_index::StaticAABB2DIndex).
pub trait Real:
    num_traits::real::Real
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    /// Converts an `f64` constant into `Self`.
    ///
    /// Only intended for literals and configuration values; precision is lost when `Self` is
    /// `f32`.
    #[inline]
    fn constant(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap()
    }

    /// Converts `self` into an `f64`, producing NaN if the value is not representable.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Largest finite value, used to seed minimum searches.
    #[inline]
    fn max_finite() -> Self {
        <Self as num_traits::Bounded>::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn constant(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }
}
