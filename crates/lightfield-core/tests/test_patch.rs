use lightfield_core::align::crop_square_patch;

mod common;

#[test]
fn test_interior_patch_is_full_size() {
    let data = common::textured(40, 40);
    let patch = crop_square_patch(&data, 20, 20, 10);
    assert_eq!(patch.dim(), (10, 10));
    assert_eq!(patch[[0, 0]], data[[15, 15]]);
}

#[test]
fn test_odd_width_rounds_half_down() {
    let data = common::textured(40, 40);
    let patch = crop_square_patch(&data, 20, 20, 7);
    assert_eq!(patch.dim(), (6, 6));
}

#[test]
fn test_border_patch_is_clamped() {
    let data = common::textured(40, 40);
    let patch = crop_square_patch(&data, 2, 20, 10);
    // Columns clamp to [0, 7), rows stay [15, 25).
    assert_eq!(patch.dim(), (10, 7));
    assert_eq!(patch[[0, 0]], data[[15, 0]]);
}

#[test]
fn test_half_width_bounded_by_image_size() {
    let data = common::textured(8, 12);
    let patch = crop_square_patch(&data, 4, 4, 100);
    // k is capped at min(8, 12) / 2 = 4.
    assert_eq!(patch.dim(), (8, 8));
}

#[test]
fn test_minimum_half_width_is_one() {
    let data = common::textured(10, 10);
    let patch = crop_square_patch(&data, 5, 5, 1);
    assert_eq!(patch.dim(), (2, 2));
}

#[test]
fn test_center_far_outside_yields_empty_patch() {
    let data = common::textured(10, 10);
    let patch = crop_square_patch(&data, 100, 5, 4);
    assert_eq!(patch.dim(), (4, 0));
}
