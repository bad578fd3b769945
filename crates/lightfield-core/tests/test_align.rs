use lightfield_core::align::{estimate_displacement, translate, AlignParams};
use lightfield_core::error::LightfieldError;
use lightfield_core::frame::Displacement;
use lightfield_core::pyramid::build_pyramid;

mod common;

#[test]
fn test_recovers_shift_across_levels() {
    let reference = common::with_square(64, 64, 28, 30, 5, 1.0);
    let target = translate(&reference, -5, -3);

    let ref_pyramid = build_pyramid(&reference, 3).unwrap();
    let tgt_pyramid = build_pyramid(&target, 3).unwrap();

    let params = AlignParams {
        window: 32,
        search_window: 6,
    };
    let d = estimate_displacement(&ref_pyramid, &tgt_pyramid, (30, 32), &params).unwrap();
    assert_eq!(d, Displacement { dx: 5, dy: 3 });
}

#[test]
fn test_identical_pyramids_yield_zero() {
    let reference = common::with_square(64, 64, 28, 30, 5, 1.0);
    let pyramid = build_pyramid(&reference, 3).unwrap();

    let params = AlignParams {
        window: 32,
        search_window: 6,
    };
    let d = estimate_displacement(&pyramid, &pyramid, (30, 32), &params).unwrap();
    assert_eq!(d, Displacement { dx: 0, dy: 0 });
}

#[test]
fn test_single_level_matches_block_search() {
    // With one level the fold reduces to a single block-match pass.
    let reference = common::with_square(48, 48, 20, 18, 4, 0.8);
    let target = translate(&reference, 2, 4);

    let ref_pyramid = build_pyramid(&reference, 1).unwrap();
    let tgt_pyramid = build_pyramid(&target, 1).unwrap();

    let params = AlignParams {
        window: 30,
        search_window: 6,
    };
    let d = estimate_displacement(&ref_pyramid, &tgt_pyramid, (22, 20), &params).unwrap();
    assert_eq!(d, Displacement { dx: -2, dy: -4 });
}

#[test]
fn test_mismatched_pyramid_lengths_rejected() {
    let data = common::textured(32, 32);
    let three = build_pyramid(&data, 3).unwrap();
    let four = build_pyramid(&data, 4).unwrap();

    let result = estimate_displacement(&three, &four, (16, 16), &AlignParams::default());
    assert!(matches!(result, Err(LightfieldError::ShapeMismatch(_))));
}
