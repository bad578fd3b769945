use approx::assert_abs_diff_eq;
use ndarray::Array2;

use lightfield_core::align::ssd;
use lightfield_core::error::LightfieldError;

mod common;

#[test]
fn test_zero_for_identical_buffers() {
    let data = common::textured(7, 9);
    assert_eq!(ssd(&data, &data).unwrap(), 0.0);
}

#[test]
fn test_positive_for_differing_buffers() {
    let a = common::textured(7, 9);
    let mut b = a.clone();
    b[[3, 4]] += 0.5;
    let dist = ssd(&a, &b).unwrap();
    assert!(dist > 0.0);
    assert_abs_diff_eq!(dist, 0.25, epsilon = 1e-6);
}

#[test]
fn test_symmetric() {
    let a = common::textured(5, 5);
    let b = common::flat(5, 5, 0.3);
    assert_eq!(ssd(&a, &b).unwrap(), ssd(&b, &a).unwrap());
}

#[test]
fn test_shape_mismatch_rejected() {
    let a = Array2::<f32>::zeros((4, 4));
    let b = Array2::<f32>::zeros((4, 5));
    assert!(matches!(
        ssd(&a, &b),
        Err(LightfieldError::ShapeMismatch(_))
    ));
}
