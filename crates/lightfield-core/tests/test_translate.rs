use ndarray::array;

use lightfield_core::align::translate;

mod common;

#[test]
fn test_wrap_around_column_shift() {
    let data = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let shifted = translate(&data, 1, 0);
    assert_eq!(shifted, array![[3.0f32, 1.0, 2.0], [6.0, 4.0, 5.0]]);
}

#[test]
fn test_wrap_around_row_shift() {
    let data = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let shifted = translate(&data, 0, 1);
    assert_eq!(shifted, array![[4.0f32, 5.0, 6.0], [1.0, 2.0, 3.0]]);
}

#[test]
fn test_round_trip_restores_original() {
    let data = common::textured(8, 11);
    for &(dx, dy) in &[(3i64, 5i64), (-4, 2), (13, -27), (0, 0)] {
        let back = translate(&translate(&data, dx, dy), -dx, -dy);
        assert_eq!(back, data, "round trip failed for ({dx}, {dy})");
    }
}

#[test]
fn test_full_period_shift_is_identity() {
    let data = common::textured(6, 9);
    assert_eq!(translate(&data, 9, 6), data);
    assert_eq!(translate(&data, -9, -6), data);
    assert_eq!(translate(&data, 18, -12), data);
}

#[test]
fn test_negative_shift_wraps() {
    let data = array![[1.0f32, 2.0, 3.0]];
    let shifted = translate(&data, -1, 0);
    assert_eq!(shifted, array![[2.0f32, 3.0, 1.0]]);
}
