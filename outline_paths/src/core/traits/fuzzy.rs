/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Flattened geometry is only ever an approximation of the analytic curves it came from, so
/// almost every comparison in the crate goes through an epsilon.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// assert!(1e-9f64.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` is within `fuzzy_epsilon` of `other`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `self` is within `fuzzy_epsilon` of zero.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Fuzzy ordering built on top of [FuzzyEq].
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other` with `fuzzy_epsilon` slack (values just below `other` also pass).
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self < other` with `fuzzy_epsilon` slack (values just above `other` also pass).
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Test if `self` lies in `[min, max]` allowing `fuzzy_epsilon` of slack on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use outline_paths::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// assert!(!2.5f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }

        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                self + fuzzy_epsilon > other
            }

            #[inline]
            fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy!(f32, 1.0e-5);
impl_fuzzy!(f64, 1.0e-8);
