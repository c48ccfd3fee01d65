use hemesh::geometry::{Point4, Vector3, Vector4, VectorOps};

#[test]
fn test_dot_and_cross() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);

    assert_eq!(x.dot(&y), 0.0);
    assert_eq!(x.dot(&x), 1.0);

    let z = x.cross(&y);
    assert_eq!((z.x, z.y, z.z), (0.0, 0.0, 1.0));

    // Anti-commutative.
    let nz = y.cross(&x);
    assert_eq!((nz.x, nz.y, nz.z), (0.0, 0.0, -1.0));
}

#[test]
fn test_norm_and_normalized() {
    let v: Vector3<f64> = Vector3::new(3.0, 4.0, 0.0);
    assert_eq!(v.norm(), 5.0);

    let u = v.normalized();
    assert!((u.norm() - 1.0).abs() < 1e-12);
    assert_eq!((u.x, u.y, u.z), (0.6, 0.8, 0.0));
}

#[test]
fn test_point_difference_drops_w() {
    let a = Point4::from_xyz(1.0, 2.0, 3.0);
    let b = Point4::new(0.5, 0.5, 0.5, 7.0);

    let d = &a - &b;
    assert_eq!((d.x, d.y, d.z), (0.5, 1.5, 2.5));
}

#[test]
fn test_vector4_accumulates_spatial_part() {
    let mut n = Vector4::zero();
    n += Vector3::new(0.0, 0.0, 1.0);
    n += Vector3::new(0.0, 1.0, 0.0);

    assert_eq!(n.to_array(), [0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn test_homogeneous_defaults() {
    let p = Point4::from_xyz(1.0, 1.0, 1.0);
    assert_eq!(p.w, 1.0);
    assert_eq!(p.to_array(), [1.0, 1.0, 1.0, 1.0]);

    assert_eq!(Vector4::<f64>::zero().w, 0.0);
}
