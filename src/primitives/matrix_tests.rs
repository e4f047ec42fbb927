pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_ones() {
    let m = Matrix::ones(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert!(m.as_slice().iter().all(|&x| x == 1.0));
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 1) - 1.0).abs() < 1e-6);
    assert!((m.get(2, 2) - 1.0).abs() < 1e-6);
    assert!((m.get(0, 1) - 0.0).abs() < 1e-6);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-6);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-6);
    assert!((row[2] - 6.0).abs() < 1e-6);
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0_f32, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    assert!((c.get(0, 0) - 58.0).abs() < 1e-6);
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert!((c.get(0, 1) - 64.0).abs() < 1e-6);
    // c[1,0] = 4*7 + 5*9 + 6*11 = 139
    assert!((c.get(1, 0) - 139.0).abs() < 1e-6);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f32; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1.0_f32; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matmul_identity() {
    let a = Matrix::from_vec(2, 2, vec![3.0_f32, -1.0, 0.5, 2.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let product = a
        .matmul(&Matrix::eye(2))
        .expect("matrix dimensions are compatible for multiplication: 2x2 * 2x2");
    for i in 0..2 {
        for j in 0..2 {
            assert!((product.get(i, j) - a.get(i, j)).abs() < 1e-6);
        }
    }
}

#[test]
fn test_matmul_zeros_annihilates() {
    let a = Matrix::from_vec(2, 2, vec![3.0_f32, -1.0, 0.5, 2.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let product = a
        .matmul(&Matrix::zeros(2, 2))
        .expect("matrix dimensions are compatible for multiplication: 2x2 * 2x2");
    assert!(product.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_add() {
    let a = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![5.0_f32, 6.0, 7.0, 8.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.add(&b).expect("both matrices have same dimensions: 2x2");

    assert!((c.get(0, 0) - 6.0).abs() < 1e-6);
    assert!((c.get(1, 1) - 12.0).abs() < 1e-6);
}

#[test]
fn test_add_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1.0_f32; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(3, 2, vec![1.0_f32; 6])
        .expect("test data has correct dimensions: 3*2=6 elements");
    assert!(a.add(&b).is_err());

    let c = Matrix::from_vec(2, 3, vec![1.0_f32; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!(a.add(&c).is_err());
}

#[test]
fn test_sub() {
    let a = Matrix::from_vec(2, 2, vec![10.0_f32, 8.0, 6.0, 12.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![4.0_f32, 3.0, 2.0, 7.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.sub(&b).expect("both matrices have same dimensions: 2x2");

    assert!((c.get(0, 0) - 6.0).abs() < 1e-6);
    assert!((c.get(0, 1) - 5.0).abs() < 1e-6);
    assert!((c.get(1, 0) - 4.0).abs() < 1e-6);
    assert!((c.get(1, 1) - 5.0).abs() < 1e-6);
}

#[test]
fn test_add_sub_roundtrip() {
    let a = Matrix::from_vec(2, 3, vec![1.5_f32, -2.0, 0.25, 4.0, -0.5, 3.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 3, vec![0.5_f32, 2.5, -1.25, 0.0, 7.5, -3.0])
        .expect("test data has correct dimensions: 2*3=6 elements");

    let roundtrip = a
        .add(&b)
        .expect("both matrices have same dimensions: 2x3")
        .sub(&b)
        .expect("both matrices have same dimensions: 2x3");

    for i in 0..2 {
        for j in 0..3 {
            assert!((roundtrip.get(i, j) - a.get(i, j)).abs() < 1e-5);
        }
    }
}

#[test]
fn test_hadamard() {
    let a = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![5.0_f32, 6.0, 7.0, 8.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a
        .hadamard(&b)
        .expect("both matrices have same dimensions: 2x2");

    assert!((c.get(0, 0) - 5.0).abs() < 1e-6);
    assert!((c.get(0, 1) - 12.0).abs() < 1e-6);
    assert!((c.get(1, 0) - 21.0).abs() < 1e-6);
    assert!((c.get(1, 1) - 32.0).abs() < 1e-6);
}

#[test]
fn test_hadamard_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1.0_f32; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 3, vec![1.0_f32; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!(a.hadamard(&b).is_err());
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let result = m.mul_scalar(2.0);
    assert!((result.get(0, 0) - 2.0).abs() < 1e-6);
    assert!((result.get(1, 1) - 8.0).abs() < 1e-6);
}

#[test]
fn test_broadcast_add() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let v = Vector::from_slice(&[10.0_f32, 20.0, 30.0]);
    let result = m
        .broadcast_add(&v)
        .expect("vector length matches column count: both 3");

    // The vector is added to every row independently.
    assert!((result.get(0, 0) - 11.0).abs() < 1e-6);
    assert!((result.get(0, 2) - 33.0).abs() < 1e-6);
    assert!((result.get(1, 0) - 14.0).abs() < 1e-6);
    assert!((result.get(1, 2) - 36.0).abs() < 1e-6);
}

#[test]
fn test_broadcast_add_length_mismatch() {
    let m = Matrix::zeros(2, 3);
    let v = Vector::from_slice(&[1.0_f32, 2.0]);
    assert!(m.broadcast_add(&v).is_err());
}

#[test]
fn test_mean_over_rows() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 5.0, 6.0, 7.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let means = m.mean(Axis::Rows).expect("matrix has at least one row");

    // One entry per column: the column means.
    assert_eq!(means.len(), 3);
    assert!((means[0] - 3.0).abs() < 1e-6);
    assert!((means[1] - 4.0).abs() < 1e-6);
    assert!((means[2] - 5.0).abs() < 1e-6);
}

#[test]
fn test_mean_over_cols() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 5.0, 6.0, 7.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let means = m.mean(Axis::Cols).expect("matrix has at least one column");

    // One entry per row: the row means.
    assert_eq!(means.len(), 2);
    assert!((means[0] - 2.0).abs() < 1e-6);
    assert!((means[1] - 6.0).abs() < 1e-6);
}

#[test]
fn test_mean_empty_axis_error() {
    let m = Matrix::zeros(0, 3);
    assert!(m.mean(Axis::Rows).is_err());

    let m = Matrix::zeros(3, 0);
    assert!(m.mean(Axis::Cols).is_err());
}

#[test]
fn test_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(0, 1, 5.0);
    assert!((m.get(0, 1) - 5.0).abs() < 1e-6);
}
