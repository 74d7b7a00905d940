use outline_paths::{
    core::traits::FuzzyEq,
    path::{Path, PathSource},
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a path (or complex polygon) for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PathProperties {
    pub contour_count: usize,
    pub point_count: usize,
    pub length: f64,
    pub bounds: AABB<f64>,
}

impl PathProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        contour_count: usize,
        point_count: usize,
        length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            contour_count,
            point_count,
            length,
            bounds: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_source<P>(source: &P) -> Self
    where
        P: PathSource<Num = f64>,
    {
        Self {
            contour_count: source.contours().len(),
            point_count: source.contours().iter().map(Path::point_count).sum(),
            length: source.length(),
            bounds: source.bounds(),
        }
    }

    /// Compare everything except the point count (flattening resolution may change it).
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.contour_count == other.contour_count
            && self.length.fuzzy_eq_eps(other.length, eps)
            && aabb_fuzzy_eq_eps(&self.bounds, &other.bounds, eps)
    }
}
