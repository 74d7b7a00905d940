//! Contours built from segments and the digitized polyline queries they answer.
mod contour;
mod indexed_polyline;
mod path_types;
mod traits;

pub use contour::Path;
pub use indexed_polyline::IndexedPolyline;
pub use path_types::*;
pub use traits::PathSource;
