mod test_utils;

mod test_outline {
    use super::test_utils::*;
    use outline_paths::{
        core::math::*,
        error::{GeometryError, OffsetError},
        outline::*,
        path::*,
        path_closed,
        shape::*,
    };
    use static_aabb2d_index::AABB;
    use std::cell::Cell;

    const BOUNDS_EPS: f64 = 0.01;

    fn stroke_bounds(cap: EndCapStyle) -> AABB<f64> {
        let path = line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let options = OutlineOptions {
            end_cap_style: cap,
            ..OutlineOptions::new(2.0)
        };
        let outline = generate_outline(&path, &options).unwrap();
        assert_eq!(outline.path_type(), PathType::Closed);
        outline.bounds()
    }

    #[test]
    fn butt_cap_width() {
        init_logging();
        let b = stroke_bounds(EndCapStyle::Butt);
        assert!(aabb_fuzzy_eq_eps(
            &b,
            &AABB::new(0.0, -1.0, 10.0, 1.0),
            BOUNDS_EPS
        ));
    }

    #[test]
    fn square_cap_extends_half_width() {
        let b = stroke_bounds(EndCapStyle::Square);
        assert!(aabb_fuzzy_eq_eps(
            &b,
            &AABB::new(-1.0, -1.0, 11.0, 1.0),
            BOUNDS_EPS
        ));
    }

    #[test]
    fn round_cap_extends_half_width() {
        let b = stroke_bounds(EndCapStyle::Round);
        assert!(aabb_fuzzy_eq_eps(
            &b,
            &AABB::new(-1.0, -1.0, 11.0, 1.0),
            BOUNDS_EPS
        ));
    }

    #[test]
    fn closed_square_stroke_has_two_rings() {
        let square = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        let options = OutlineOptions {
            joint_style: JointStyle::Miter,
            ..OutlineOptions::new(2.0)
        };
        let outline = generate_outline(&square, &options).unwrap();
        assert_eq!(outline.len(), 2);
        assert!(aabb_fuzzy_eq_eps(
            &outline.bounds(),
            &AABB::new(-1.0, -1.0, 11.0, 11.0),
            BOUNDS_EPS
        ));
        assert!(outline.contains(vec2(0.0, 5.0)));
        assert!(outline.contains(vec2(10.5, 10.5)));
        assert!(!outline.contains(vec2(5.0, 5.0)));
        assert!(!outline.contains(vec2(12.0, 5.0)));
        // stroke is width 2 wide all around
        let ring_lengths = outline.iter().map(|p| p.length()).sum::<f64>();
        assert!((ring_lengths - (48.0 + 32.0)).abs() < BOUNDS_EPS);
    }

    #[test]
    fn round_joints_stay_within_half_width() {
        let shape = square_with_hole();
        let options = OutlineOptions {
            joint_style: JointStyle::Round,
            ..OutlineOptions::new(1.0)
        };
        let outline = generate_outline(&shape, &options).unwrap();
        assert_eq!(outline.len(), 4);
        for ring in outline.iter() {
            for p in ring.points() {
                let d = shape.distance(*p).distance_from_path.abs();
                assert!((d - 0.5).abs() < BOUNDS_EPS, "{p:?} is {d} from the shape");
            }
        }
    }

    #[test]
    fn dashed_square_coverage() {
        init_logging();
        let square = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].unwrap();
        let runs = dash_runs(square.points(), true, 1.0, &[1.0, 1.0], false);
        let on_length = runs
            .iter()
            .map(|r| r.windows(2).map(|w| w[0].distance(w[1])).sum::<f64>())
            .sum::<f64>();
        assert!((on_length - 20.0).abs() <= 1.0, "on length {on_length}");

        let options = OutlineOptions::dashed(1.0, vec![1.0, 1.0]);
        let outline = generate_outline(&square, &options).unwrap();
        // one ring per dash, no two dashes overlap at this width
        assert_eq!(outline.len(), runs.len());
        assert_eq!(runs.len(), 20);
        assert!(outline.contains(vec2(0.5, 0.0)));
        assert!(!outline.contains(vec2(1.5, 0.0)));
        assert!(aabb_fuzzy_eq_eps(
            &outline.bounds(),
            &AABB::new(-0.5, -0.5, 10.5, 10.5),
            BOUNDS_EPS
        ));
    }

    #[test]
    fn dashed_start_off() {
        let path = line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let options = OutlineOptions {
            start_off: true,
            ..OutlineOptions::dashed(1.0, vec![2.0, 3.0])
        };
        // off 0..2, on 2..5, off 5..7, on 7..10
        let outline = generate_outline(&path, &options).unwrap();
        assert_eq!(outline.len(), 2);
        assert!(!outline.contains(vec2(1.0, 0.0)));
        assert!(outline.contains(vec2(3.0, 0.0)));
        assert!(outline.contains(vec2(8.0, 0.0)));
        assert!(aabb_fuzzy_eq_eps(
            &outline.bounds(),
            &AABB::new(2.0, -0.5, 10.0, 0.5),
            BOUNDS_EPS
        ));
    }

    #[test]
    fn single_entry_pattern_is_solid() {
        let path = line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let options = OutlineOptions::dashed(1.0, vec![0.5]);
        let outline = generate_outline(&path, &options).unwrap();
        assert_eq!(outline.len(), 1);
        assert!(outline.contains(vec2(5.0, 0.0)));
    }

    #[test]
    fn invalid_options() {
        let path = line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate_outline(&path, &OutlineOptions::new(width)),
                Err(GeometryError::InvalidStrokeWidth)
            ));
        }

        for pattern in [vec![1.0, 0.0], vec![1.0, -2.0], vec![f64::NAN, 1.0]] {
            assert!(matches!(
                generate_outline(&path, &OutlineOptions::dashed(1.0, pattern)),
                Err(GeometryError::InvalidDashPattern)
            ));
        }
    }

    #[test]
    fn dash_count_is_capped() {
        let path = line(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let result = generate_outline(&path, &OutlineOptions::dashed(1.0e-6, vec![1.0, 1.0]));
        match result {
            Err(GeometryError::TooManyDashes { estimated, limit }) => {
                assert_eq!(limit, MAX_DASH_COUNT);
                assert!(estimated > MAX_DASH_COUNT as f64);
            }
            other => panic!("expected dash count failure, got {other:?}"),
        }

        // same pattern at a usable width goes through
        let outline = generate_outline(&path, &OutlineOptions::dashed(0.01, vec![1.0, 1.0])).unwrap();
        assert!((499..=501).contains(&outline.len()), "{} rings", outline.len());
        assert!(outline.contains(vec2(0.005, 0.0)));
    }

    #[test]
    fn coordinates_out_of_fixed_range() {
        let path = line(vec2(0.0, 0.0), vec2(1.0e17, 0.0));
        assert!(matches!(
            generate_outline(&path, &OutlineOptions::new(1.0)),
            Err(GeometryError::Offset(OffsetError::CoordinateOutOfRange { .. }))
        ));
    }

    struct FailingBackend {
        calls: Cell<usize>,
    }

    impl OffsetBackend for FailingBackend {
        fn offset(
            &self,
            paths: &[OffsetPath],
            _params: &OffsetParams,
        ) -> Result<Vec<Vec<IntPoint>>, OffsetError> {
            self.calls.set(self.calls.get() + 1);
            assert!(!paths.is_empty());
            Err(OffsetError::Backend("simulated failure".to_string()))
        }
    }

    #[test]
    fn backend_failure_propagates() {
        let backend = FailingBackend {
            calls: Cell::new(0),
        };
        let shape = square_with_hole();
        let result = generate_outline_with(&shape, &OutlineOptions::new(1.0), &backend);
        assert_eq!(backend.calls.get(), 1);
        match result {
            Err(GeometryError::Offset(OffsetError::Backend(msg))) => {
                assert_eq!(msg, "simulated failure")
            }
            other => panic!("expected backend failure, got {other:?}"),
        }
    }

    /// Records what it is given and answers with a fixed square ring.
    struct RecordingBackend {
        recorded: std::cell::RefCell<Vec<(OffsetPath, OffsetParams)>>,
    }

    impl OffsetBackend for RecordingBackend {
        fn offset(
            &self,
            paths: &[OffsetPath],
            params: &OffsetParams,
        ) -> Result<Vec<Vec<IntPoint>>, OffsetError> {
            self.recorded
                .borrow_mut()
                .extend(paths.iter().map(|p| (p.clone(), *params)));
            Ok(vec![vec![
                IntPoint::new(0, 0),
                IntPoint::new(1500, 0),
                IntPoint::new(1500, 1500),
                IntPoint::new(0, 1500),
            ]])
        }
    }

    #[test]
    fn backend_receives_scaled_input() {
        let backend = RecordingBackend {
            recorded: Default::default(),
        };
        let shape = ComplexPolygon::new(vec![
            rectangle(vec2(0.0, 0.0), vec2(1.0, 1.0)).unwrap(),
            line(vec2(0.25, 0.5), vec2(0.75, 0.5)),
        ]);
        let options = OutlineOptions {
            joint_style: JointStyle::Round,
            end_cap_style: EndCapStyle::Square,
            ..OutlineOptions::new(0.5)
        };
        let outline = generate_outline_with(&shape, &options, &backend).unwrap();

        let recorded = backend.recorded.borrow();
        assert_eq!(recorded.len(), 2);
        let (closed, params) = &recorded[0];
        assert_eq!(closed.end, OffsetEnd::ClosedLine);
        assert_eq!(closed.points[2], IntPoint::new(1000, 1000));
        assert_eq!(params.delta, 250.0);
        assert_eq!(params.joint_style, JointStyle::Round);
        assert_eq!(params.miter_limit, 20.0);

        let (open, _) = &recorded[1];
        assert_eq!(open.end, OffsetEnd::Open(EndCapStyle::Square));
        assert_eq!(
            open.points,
            vec![IntPoint::new(250, 500), IntPoint::new(750, 500)]
        );

        // ring converted back out of the fixed-point domain
        assert_eq!(outline.len(), 1);
        let b = outline.bounds();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 1.5, 1.5));
    }
}
