mod test_utils;

mod test_path_queries {
    use super::test_utils::*;
    use outline_paths::{
        assert_fuzzy_eq,
        core::{math::*, traits::FuzzyEq},
        path::*,
        path_closed, path_open,
        segment::*,
        shape::*,
    };

    #[test]
    fn containment_parity_with_hole() {
        init_logging();
        let shape = square_with_hole();
        assert!(!shape.contains(vec2(5.0, 5.0)));
        assert!(shape.contains(vec2(1.0, 1.0)));
        assert!(shape.contains(vec2(9.0, 5.0)));
        assert!(!shape.contains(vec2(11.0, 5.0)));

        assert!(shape.distance(vec2(1.0, 1.0)).distance_from_path < 0.0);
        assert!(shape.distance(vec2(5.0, 5.0)).distance_from_path > 0.0);
    }

    #[test]
    fn open_paths_contain_nothing() {
        let path = path_open![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        assert!(!path.contains(vec2(5.0, 5.0)));
        assert!(path.distance(vec2(5.0, 5.0)).distance_from_path > 0.0);
        assert_eq!(path.path_type(), PathType::Open);
    }

    #[test]
    fn bezier_contour_containment() {
        let d = d_shape();
        assert!(d.contains(vec2(30.0, 50.0)));
        assert!(!d.contains(vec2(70.0, 50.0)));
        assert!(!d.contains(vec2(-1.0, 50.0)));
    }

    #[test]
    fn distance_reports_closest_point() {
        let square = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        let info = square.distance(vec2(13.0, 14.0));
        assert_fuzzy_eq!(info.closest_point, vec2(10.0, 10.0));
        assert_fuzzy_eq!(info.distance_from_path, 5.0);
        assert_fuzzy_eq!(info.distance_along_path, 20.0);

        let info = square.distance(vec2(3.0, 1.0));
        assert_fuzzy_eq!(info.distance_from_path, -1.0);
        assert_eq!(info.edge_index, 0);
        assert_fuzzy_eq!(info.edge_t, 0.3);
    }

    #[test]
    fn length_additivity() {
        let a = path_open![(0.0, 0.0), (3.0, 4.0)].unwrap();
        let b = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)].unwrap();
        let expected = a.length() + b.length();
        let combined = ComplexPolygon::new(vec![a, b]);
        assert_fuzzy_eq!(combined.length(), expected);
        assert_fuzzy_eq!(combined.length(), 5.0 + 20.0 + 200.0f64.sqrt());

        let joined = Path::open(vec![
            LinearSegment::line(vec2(0.0, 0.0), vec2(3.0, 4.0)).into(),
            LinearSegment::line(vec2(3.0, 4.0), vec2(6.0, 8.0)).into(),
        ])
        .unwrap();
        assert_fuzzy_eq!(joined.length(), 10.0);
    }

    #[test]
    fn intersection_count_is_bounded() {
        let zigzag = path_open![
            (0.0, 0.0),
            (1.0, 10.0),
            (2.0, 0.0),
            (3.0, 10.0),
            (4.0, 0.0),
            (5.0, 10.0),
        ]
        .unwrap();
        let start = vec2(-1.0, 5.0);
        let end = vec2(6.0, 5.0);

        let all = zigzag.find_intersections_vec(start, end);
        assert_eq!(all.len(), 5);
        assert!(all.len() <= zigzag.max_intersections());
        // edge order, which here is also left to right
        assert!(all.windows(2).all(|w| w[0].x < w[1].x));

        let mut small = [Vector2::zero(); 3];
        assert_eq!(zigzag.find_intersections(start, end, &mut small), 3);
        assert_fuzzy_eq!(small[0], vec2(0.5, 5.0));
    }

    #[test]
    fn intersections_miss() {
        let shape = square_with_hole();
        let count = shape.find_intersections_vec(vec2(20.0, 0.0), vec2(20.0, 10.0)).len();
        assert_eq!(count, 0);
        // collinear overlap with an edge is not reported
        let square = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        let hits = square.find_intersections_vec(vec2(2.0, 0.0), vec2(8.0, 0.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn arc_length_is_monotonic_open() {
        let path = s_curve();
        let length = path.length();
        let mut last = -1.0;
        for i in 0..=100 {
            let d = length * i as f64 / 100.0;
            let pos = path.point_along_path(d.min(length - 1e-9)).unwrap();
            let along = path.distance(pos.point).distance_along_path;
            assert!(along >= last - 1e-6, "{along} < {last} at step {i}");
            assert_fuzzy_eq!(along, d.min(length - 1e-9), 1e-6);
            assert_fuzzy_eq!(pos.direction.length(), 1.0);
            last = along;
        }
    }

    #[test]
    fn arc_length_is_monotonic_closed() {
        let d = d_shape();
        let length = d.length();
        let mut last = -1.0;
        for i in 0..100 {
            let dist = length * i as f64 / 100.0;
            let pos = d.point_along_path(dist).unwrap();
            let along = d.polyline().distance_from_path(pos.point).distance_along_path;
            assert!(along >= last - 1e-6);
            last = along;
        }
    }

    #[test]
    fn arc_length_wraps_and_degenerates() {
        let square = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        let pos = square.point_along_path(15.0).unwrap();
        assert_fuzzy_eq!(pos.point, vec2(10.0, 5.0));
        assert_fuzzy_eq!(pos.direction, vec2(0.0, 1.0));
        assert_fuzzy_eq!(pos.angle(), std::f64::consts::FRAC_PI_2);

        let wrapped = square.point_along_path(15.0 + 40.0 * 3.0).unwrap();
        assert_fuzzy_eq!(wrapped.point, pos.point);

        let point = path_open![(1.0, 1.0), (1.0, 1.0)].unwrap();
        assert!(point.point_along_path(0.5).is_none());
    }

    #[test]
    fn transform_identity_returns_same_geometry() {
        let path = d_shape();
        let points = path.points().to_vec();
        let same = path.transform(&Matrix2D::identity()).unwrap();
        assert_eq!(same.points(), &points[..]);

        let shape = square_with_hole();
        let props = PathProperties::from_source(&shape);
        let same = shape.transform(&Matrix2D::identity()).unwrap();
        assert!(props.fuzzy_eq_eps(&PathProperties::from_source(&same), 1e-12));
    }

    #[test]
    fn transform_composition() {
        let a = Matrix2D::rotation(0.3).then(&Matrix2D::translation(5.0, -2.0));
        let b = Matrix2D::scale(2.0, 0.5);

        let stepwise = square_with_hole()
            .transform(&a)
            .unwrap()
            .transform(&b)
            .unwrap();
        let combined = square_with_hole().transform(&a.then(&b)).unwrap();

        let props_stepwise = PathProperties::from_source(&stepwise);
        let props_combined = PathProperties::from_source(&combined);
        assert!(
            props_stepwise.fuzzy_eq_eps(&props_combined, PathProperties::PROP_CMP_EPS),
            "{props_stepwise:?} != {props_combined:?}"
        );
    }

    #[test]
    fn transform_scales_length() {
        let path = s_curve();
        let length = path.length();
        let scaled = path.transform(&Matrix2D::scale(2.0, 2.0)).unwrap();
        // re-flattened at the larger scale so the chord approximation gets a little closer
        assert!(scaled.length() >= 2.0 * length - 1e-6);
        assert!(scaled.length() <= 2.0 * length * 1.01);
    }

    #[test]
    fn closing_and_reopening() {
        let path = s_curve();
        assert_eq!(path.kind(), PathKind::Open);
        let open_length = path.length();
        let first = path.points()[0];
        let last = path.points()[path.point_count() - 1];

        let closed = path.into_closed().unwrap();
        assert_eq!(closed.kind(), PathKind::Closed);
        assert_fuzzy_eq!(closed.length(), open_length + first.distance(last));
        assert_eq!(closed.segments().len(), 1);

        let reopened = closed.into_open().unwrap();
        assert_fuzzy_eq!(reopened.length(), open_length);
    }

    #[test]
    fn bounds_union() {
        let shape = ComplexPolygon::new(vec![
            rectangle(vec2(-5.0, 0.0), vec2(1.0, 1.0)).unwrap(),
            rectangle(vec2(0.0, 3.0), vec2(2.0, 4.0)).unwrap(),
        ]);
        let b = shape.bounds();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-5.0, 0.0, 2.0, 7.0));
        assert_eq!(shape.max_intersections(), 8);
        assert_eq!(shape.path_type(), PathType::Closed);
    }
}
