use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point or direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Normalize the vector (length = 1).
    ///
    /// A zero length vector produces NaN components, use [Vector2::try_normalize] when the input
    /// may be degenerate.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Normalize the vector or return `None` if its length is (fuzzy) zero.
    #[inline]
    pub fn try_normalize(&self) -> Option<Self> {
        let length = self.length();
        if length.fuzzy_eq_zero() {
            None
        } else {
            Some(self.scale(T::one() / length))
        }
    }

    /// Linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`).
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self + (other - *self).scale(t)
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        vec2(
            num_traits::real::Real::min(self.x, other.x),
            num_traits::real::Real::min(self.y, other.y),
        )
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        vec2(
            num_traits::real::Real::max(self.x, other.x),
            num_traits::real::Real::max(self.y, other.y),
        )
    }

    /// Angle in radians of the direction described by the vector, measured from the positive x
    /// axis.
    #[inline]
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        crate::core::traits::Real::to_f64_lossy(self.x).is_finite() && crate::core::traits::Real::to_f64_lossy(self.y).is_finite()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Create perpendicular vector (rotated 90 degrees counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T> From<(T, T)> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Vector2::new(x, y)
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
