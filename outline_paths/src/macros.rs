/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct an open path with a single linear segment through the points given as a list of
/// (x, y) tuples.
///
/// Evaluates to `Result<Path<_>, GeometryError>`, fails for fewer than two points.
///
/// # Examples
///
/// ```
/// # use outline_paths::path_open;
/// # use outline_paths::core::math::*;
/// let path = path_open![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)].unwrap();
/// assert!(!path.is_closed());
/// assert_eq!(path.length(), 7.0);
/// assert_eq!(path.points()[1], vec2(3.0, 0.0));
/// ```
#[macro_export]
macro_rules! path_open {
    ($( $x:expr ),* $(,)?) => {
        $crate::segment::LinearSegment::new(vec![
            $( $crate::core::math::vec2($x.0, $x.1) ),*
        ])
        .and_then(|s| $crate::path::Path::open(vec![s.into()]))
    };
}

/// Construct a closed path (polygon) with a single linear segment through the points given as a
/// list of (x, y) tuples.
///
/// Evaluates to `Result<Path<_>, GeometryError>`, fails for fewer than two points.
///
/// # Examples
///
/// ```
/// # use outline_paths::path_closed;
/// # use outline_paths::core::math::*;
/// let polygon = path_closed![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)].unwrap();
/// assert!(polygon.is_closed());
/// assert_eq!(polygon.length(), 12.0);
/// assert!(polygon.contains(vec2(2.0, 1.0)));
/// ```
#[macro_export]
macro_rules! path_closed {
    ($( $x:expr ),* $(,)?) => {
        $crate::segment::LinearSegment::new(vec![
            $( $crate::core::math::vec2($x.0, $x.1) ),*
        ])
        .and_then(|s| $crate::path::Path::closed(vec![s.into()]))
    };
}
