use approx::assert_abs_diff_eq;

use lightfield_core::consts::DEFAULT_APERTURE_RADIUS;
use lightfield_core::frame::{Displacement, GridPos};
use lightfield_core::session::{rate_from_displacement, RefocusParams};

#[test]
fn test_rate_negates_and_divides_by_grid_extent() {
    let rate = rate_from_displacement(Displacement { dx: 17, dy: -34 }, 17, 17);
    assert_abs_diff_eq!(rate.dx, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rate.dy, 2.0, epsilon = 1e-12);
}

#[test]
fn test_zero_displacement_yields_zero_rate() {
    let rate = rate_from_displacement(Displacement::default(), 17, 17);
    assert_eq!(rate.dx, 0.0);
    assert_eq!(rate.dy, 0.0);
}

#[test]
fn test_centered_params_aim_at_grid_middle() {
    let params = RefocusParams::centered(17, 17);
    assert_eq!(params.center, GridPos::new(8, 8));
    assert_eq!(params.radius, DEFAULT_APERTURE_RADIUS);
    assert_eq!(params.rate.dx, 0.0);
    assert_eq!(params.rate.dy, 0.0);
}

#[test]
fn test_l1_distance_is_symmetric() {
    let a = GridPos::new(2, 9);
    let b = GridPos::new(7, 3);
    assert_eq!(a.l1_dist(&b), 11);
    assert_eq!(b.l1_dist(&a), 11);
    assert_eq!(a.l1_dist(&a), 0);
}
