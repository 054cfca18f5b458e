#[macro_use]
mod common;

use gamutvol::chromaticity::ChromaticityCoordinate;

#[test]
fn test_d65_tristimulus() {
    let xyz = ChromaticityCoordinate::D65.to_tristimulus().unwrap();
    assert_delta!(xyz.x, 0.9505, 1e-4);
    assert_delta!(xyz.y, 1.0, 1e-12);
    assert_delta!(xyz.z, 1.0891, 1e-4);
}

#[test]
fn test_zero_y_is_degenerate() {
    let c = ChromaticityCoordinate::new(0.3, 0.0);
    assert!(c.to_tristimulus().is_none());
}

#[test]
fn test_negative_y_is_accepted() {
    // ACES AP0 blue primary sits below the spectral locus
    let c = ChromaticityCoordinate::new(0.0001, -0.0770);
    let xyz = c.to_tristimulus().unwrap();
    assert!(xyz.is_finite());
    assert_delta!(xyz.y, 1.0, 1e-12);
    assert!(xyz.z < -13.0);
}

#[test]
fn test_unit_luminance() {
    // Y is always 1 for any non-degenerate coordinate
    for (x, y) in [(0.1, 0.4), (0.7347, 0.2653), (0.0, 1.0)] {
        let xyz = ChromaticityCoordinate::new(x, y).to_tristimulus().unwrap();
        assert!(xyz.y == 1.0);
    }
}
