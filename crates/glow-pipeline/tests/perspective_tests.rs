use glow_base::Vec2;
use glow_pipeline::{Calibration, PerspectiveTransform, PipelineError};

fn close(a: Vec2<f64>, b: Vec2<f64>, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

fn rectangle(w: f64, h: f64) -> [Vec2<f64>; 4] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(w, 0.0),
        Vec2::new(0.0, h),
        Vec2::new(w, h),
    ]
}

#[test]
fn test_maps_calibrated_corners() {
    let src = Calibration::default().corners();
    let dst = rectangle(256.0, 144.0);
    let transform = PerspectiveTransform::to_rectangle(src, Vec2::new(256, 144)).unwrap();
    for (s, d) in src.iter().zip(dst.iter()) {
        let forward = transform.apply(*s).unwrap();
        assert!(close(forward, *d, 1e-6), "{s:?} -> {forward:?}, want {d:?}");
        let back = transform.apply_inverse(*d).unwrap();
        assert!(close(back, *s, 1e-6), "{d:?} -> {back:?}, want {s:?}");
    }
}

#[test]
fn test_scaling_is_affine() {
    let transform =
        PerspectiveTransform::from_points(rectangle(100.0, 50.0), rectangle(200.0, 200.0)).unwrap();
    let p = transform.apply(Vec2::new(25.0, 10.0)).unwrap();
    assert!(close(p, Vec2::new(50.0, 40.0), 1e-9));
    let rows = transform.matrix().to_rows();
    assert!(rows[6].abs() < 1e-12 && rows[7].abs() < 1e-12);
}

#[test]
fn test_identity() {
    let square = rectangle(10.0, 10.0);
    let transform = PerspectiveTransform::from_points(square, square).unwrap();
    let rows = transform.matrix().to_rows();
    let identity = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    for (got, want) in rows.iter().zip(identity.iter()) {
        assert!((got - want).abs() < 1e-12, "{rows:?}");
    }
}

#[test]
fn test_inverse_round_trips_interior_points() {
    let transform =
        PerspectiveTransform::to_rectangle(Calibration::default().corners(), Vec2::new(256, 144))
            .unwrap();
    for p in [Vec2::new(400.0, 280.0), Vec2::new(330.0, 230.0), Vec2::new(510.0, 360.0)] {
        let q = transform.apply(p).unwrap();
        let back = transform.apply_inverse(q).unwrap();
        assert!(close(back, p, 1e-6));
    }
}

#[test]
fn test_rejects_collinear_corners() {
    let src = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(20.0, 0.0),
        Vec2::new(10.0, 10.0),
    ];
    match PerspectiveTransform::from_points(src, rectangle(1.0, 1.0)) {
        Err(PipelineError::InvalidConfig(msg)) => assert!(msg.contains("collinear")),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_rejects_repeated_corner() {
    let mut src = rectangle(10.0, 10.0);
    src[3] = src[2];
    assert!(PerspectiveTransform::from_points(src, rectangle(1.0, 1.0)).is_err());
}

#[test]
fn test_rejects_non_finite_corners() {
    let mut src = rectangle(10.0, 10.0);
    src[1].x = f64::NAN;
    assert!(matches!(
        PerspectiveTransform::from_points(src, rectangle(1.0, 1.0)),
        Err(PipelineError::InvalidConfig(_))
    ));
}
