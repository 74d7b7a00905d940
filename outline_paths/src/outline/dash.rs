use crate::core::{math::Vector2, traits::Real};

/// Split a polyline into the "on" runs of a dash pattern.
///
/// Each pattern entry is a length multiplier of `width`, entries alternate between on and off
/// starting with on (or off if `start_off` is true) and wrap around when the pattern is exhausted.
/// The pattern continues across vertexes, the closing edge is walked if `is_closed` is true. A run
/// still in progress when the polyline ends is kept if it is on.
///
/// Every returned run has at least two points. Returns no runs if `points` has fewer than two
/// points or `pattern` is empty. Pattern entries are expected to be finite and greater than zero.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::outline::dash_runs;
/// let line = [vec2(0.0, 0.0), vec2(10.0, 0.0)];
/// let runs = dash_runs(&line, false, 1.0, &[3.0, 2.0], false);
/// // on 0..3, off 3..5, on 5..8, off 8..10
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0], vec![vec2(0.0, 0.0), vec2(3.0, 0.0)]);
/// assert_eq!(runs[1], vec![vec2(5.0, 0.0), vec2(8.0, 0.0)]);
/// ```
pub fn dash_runs<T>(
    points: &[Vector2<T>],
    is_closed: bool,
    width: T,
    pattern: &[T],
    start_off: bool,
) -> Vec<Vec<Vector2<T>>>
where
    T: Real,
{
    if points.len() < 2 || pattern.is_empty() {
        return Vec::new();
    }

    let edge_count = if is_closed {
        points.len()
    } else {
        points.len() - 1
    };

    let mut runs = Vec::new();
    let mut current = vec![points[0]];
    let mut on = !start_off;
    let mut pattern_index = 0;
    let mut remaining = pattern[0] * width;

    for i in 0..edge_count {
        let p0 = points[i];
        let p1 = points[(i + 1) % points.len()];
        let edge_length = p0.distance(p1);

        let mut traveled = T::zero();
        while edge_length - traveled > remaining {
            traveled = traveled + remaining;
            let split = p0.lerp(p1, traveled / edge_length);
            current.push(split);
            let finished = std::mem::replace(&mut current, vec![split]);
            if on {
                runs.push(finished);
            }

            on = !on;
            pattern_index = (pattern_index + 1) % pattern.len();
            remaining = pattern[pattern_index] * width;
        }

        remaining = remaining - (edge_length - traveled);
        current.push(p1);
    }

    if on && current.len() >= 2 {
        runs.push(current);
    }

    runs
}
