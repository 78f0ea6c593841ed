use glow_base::{Mat3, Vec2, Vec3};

fn assert_mat_close(a: Mat3, b: Mat3) {
    for (x, y) in a.to_rows().iter().zip(b.to_rows().iter()) {
        assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
    }
}

#[test]
fn test_from_rows_is_column_major() {
    let m = Mat3::from_rows([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.cols[0], Vec3::new(1.0, 4.0, 7.0));
    assert_eq!(m.cols[2], Vec3::new(3.0, 6.0, 9.0));
    assert_eq!(m.to_rows(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn test_determinant() {
    let m = Mat3::from_rows([2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
    // 2*(3-2) - 0 + 1*(1-3)
    assert!((m.determinant() - 0.0).abs() < 1e-12);

    let m = Mat3::from_rows([4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0]);
    assert!((m.determinant() - 9.0).abs() < 1e-12);
}

#[test]
fn test_inverse_of_singular_is_none() {
    let m = Mat3::from_rows([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
    assert!(m.inverse().is_none());
}

#[test]
fn test_inverse_roundtrip_gives_identity() {
    let m = Mat3::from_rows([4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0]);
    let inv = m.inverse().unwrap();
    assert_mat_close(m * inv, Mat3::identity());
    assert_mat_close(inv * m, Mat3::identity());
}

#[test]
fn test_mul_vec3() {
    let m = Mat3::from_rows([1.0, 0.0, 5.0, 0.0, 2.0, -1.0, 0.0, 0.0, 1.0]);
    assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(6.0, 1.0, 1.0));
}

#[test]
fn test_project_translation_and_scale() {
    let m = Mat3::from_rows([2.0, 0.0, 10.0, 0.0, 3.0, 20.0, 0.0, 0.0, 1.0]);
    let p = m.project(Vec2::new(1.0, 1.0)).unwrap();
    assert!((p.x - 12.0).abs() < 1e-12);
    assert!((p.y - 23.0).abs() < 1e-12);
}

#[test]
fn test_project_dehomogenises() {
    let m = Mat3::from_rows([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0]);
    let p = m.project(Vec2::new(4.0, 6.0)).unwrap();
    assert_eq!(p, Vec2::new(2.0, 3.0));
}

#[test]
fn test_project_to_infinity_is_none() {
    let m = Mat3::from_rows([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    assert!(m.project(Vec2::new(0.0, 5.0)).is_none());
}
