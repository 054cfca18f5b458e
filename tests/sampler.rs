#[macro_use]
mod common;

use gamutvol::sampler::{sample_count, sample_cube};
use gamutvol::vector::Vector;

#[test]
fn test_cardinality() {
    for steps in [2, 3, 5, 10, 20] {
        let cloud = sample_cube(steps);
        assert_eq!(cloud.len(), sample_count(steps));
        assert_eq!(cloud.len(), 5 + steps * 3 + steps * steps * 3);
    }
}

#[test]
fn test_default_density_point_count() {
    assert_eq!(sample_cube(20).len(), 1265);
}

#[test]
fn test_determinism() {
    assert_eq!(sample_cube(7), sample_cube(7));
    assert_eq!(sample_cube(20), sample_cube(20));
}

#[test]
fn test_corner_points_present() {
    let corners = [
        Vector::new(0.0, 0.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
        Vector::new(1.0, 1.0, 1.0),
    ];
    for steps in [2, 5, 20] {
        let cloud = sample_cube(steps);
        for corner in &corners {
            assert!(
                cloud.contains(corner),
                "Corner {:?} missing for steps = {}",
                corner,
                steps
            );
        }
    }
}

#[test]
fn test_samples_stay_in_unit_cube() {
    for point in sample_cube(13) {
        for axis in 0..3 {
            assert!(point[axis] >= 0.0 && point[axis] <= 1.0);
        }
    }
}

#[test]
fn test_boundary_lines_hit_primaries() {
    // The R-G line at t = 0 and t = 1 lands exactly on the green and red
    // primaries
    let cloud = sample_cube(4);
    assert!(cloud.contains(&Vector::new(0.0, 1.0, 0.0)));
    assert!(cloud.contains(&Vector::new(1.0, 0.0, 0.0)));
}

#[test]
#[should_panic]
fn test_single_step_panics() {
    sample_cube(1);
}
