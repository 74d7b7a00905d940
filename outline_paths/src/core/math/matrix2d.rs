use super::Vector2;
use crate::core::traits::Real;
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D affine transform stored as a 3x2 matrix in row-vector form.
///
/// ```text
/// | m11 m12 |
/// | m21 m22 |
/// | m31 m32 |
/// ```
///
/// A point is mapped as `x' = x * m11 + y * m21 + m31` and `y' = x * m12 + y * m22 + m32`, so
/// the last row holds the translation. Since points are row vectors, the product `a * b` is the
/// transform that applies `a` first and `b` second (same as [Matrix2D::then]).
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// let m = Matrix2D::translation(10.0, 0.0) * Matrix2D::scale(2.0, 2.0);
/// // translate first, then scale
/// assert!(m.apply(vec2(1.0, 1.0)).fuzzy_eq(vec2(22.0, 2.0)));
/// assert!(Matrix2D::<f64>::identity().is_identity());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix2D<T = f64> {
    pub m11: T,
    pub m12: T,
    pub m21: T,
    pub m22: T,
    pub m31: T,
    pub m32: T,
}

impl<T> Matrix2D<T>
where
    T: Real,
{
    #[inline]
    pub fn new(m11: T, m12: T, m21: T, m22: T, m31: T, m32: T) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn translation(x: T, y: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), x, y)
    }

    /// Non-uniform scale about the origin.
    #[inline]
    pub fn scale(x: T, y: T) -> Self {
        Self::new(x, T::zero(), T::zero(), y, T::zero(), T::zero())
    }

    /// Counter clockwise rotation by `radians` about the origin.
    #[inline]
    pub fn rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Rotation by `radians` about `center`.
    #[inline]
    pub fn rotation_about(radians: T, center: Vector2<T>) -> Self {
        Self::translation(-center.x, -center.y)
            .then(&Self::rotation(radians))
            .then(&Self::translation(center.x, center.y))
    }

    /// Skew by the angles (in radians) given along each axis.
    #[inline]
    pub fn skew(radians_x: T, radians_y: T) -> Self {
        Self::new(
            T::one(),
            radians_y.tan(),
            radians_x.tan(),
            T::one(),
            T::zero(),
            T::zero(),
        )
    }

    /// Returns `true` if this is exactly the identity transform.
    ///
    /// Exact comparison, a matrix that is only approximately the identity still transforms.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns the transform that applies `self` first and then `other`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        Self::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
            self.m31 * other.m11 + self.m32 * other.m21 + other.m31,
            self.m31 * other.m12 + self.m32 * other.m22 + other.m32,
        )
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Returns the inverse transform or `None` if the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det.fuzzy_eq_zero() {
            return None;
        }

        let inv_det = T::one() / det;
        Some(Self::new(
            self.m22 * inv_det,
            -self.m12 * inv_det,
            -self.m21 * inv_det,
            self.m11 * inv_det,
            (self.m21 * self.m32 - self.m22 * self.m31) * inv_det,
            (self.m12 * self.m31 - self.m11 * self.m32) * inv_det,
        ))
    }

    /// Transform a point (translation applied).
    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            point.x * self.m11 + point.y * self.m21 + self.m31,
            point.x * self.m12 + point.y * self.m22 + self.m32,
        )
    }

    /// Transform a direction vector (translation ignored).
    #[inline]
    pub fn apply_vector(&self, vector: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            vector.x * self.m11 + vector.y * self.m21,
            vector.x * self.m12 + vector.y * self.m22,
        )
    }
}

impl<T> Default for Matrix2D<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Mul for Matrix2D<T>
where
    T: Real,
{
    type Output = Matrix2D<T>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.then(&rhs)
    }
}
