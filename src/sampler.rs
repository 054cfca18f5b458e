use itertools::iproduct;

use crate::vector::Vector;

pub const DEFAULT_STEPS: usize = 20;

/// Number of points `sample_cube(steps)` produces.
pub fn sample_count(steps: usize) -> usize {
    5 + steps * 3 + steps * steps * 3
}

/// Generate the deterministic point cloud covering the boundary and
/// interior of the RGB unit cube.
///
/// The cloud consists of the five anchor corners (black, the three
/// primaries, white), `steps` points along each primary-connecting line,
/// and `steps * steps` interior points per primary pair. The interior
/// parametrization is a handcrafted coverage scheme rather than a
/// barycentric one; the hull shape downstream is sensitive to the sample
/// distribution, so these formulas are kept as-is.
///
/// Two calls with the same `steps` produce bit-identical output.
pub fn sample_cube(steps: usize) -> Vec<Vector> {
    assert!(steps >= 2, "Sampling requires at least 2 steps");

    let mut vertices = Vec::with_capacity(sample_count(steps));

    vertices.push(Vector::new(0.0, 0.0, 0.0)); // Black
    vertices.push(Vector::new(1.0, 0.0, 0.0)); // Red primary
    vertices.push(Vector::new(0.0, 1.0, 0.0)); // Green primary
    vertices.push(Vector::new(0.0, 0.0, 1.0)); // Blue primary
    vertices.push(Vector::new(1.0, 1.0, 1.0)); // White

    let d = (steps - 1) as f64;

    // Lines connecting each pair of primaries
    for i in 0..steps {
        let t = i as f64 / d;
        vertices.push(Vector::new(t, 1.0 - t, 0.0)); // R-G
        vertices.push(Vector::new(0.0, t, 1.0 - t)); // G-B
        vertices.push(Vector::new(1.0 - t, 0.0, t)); // B-R
    }

    // Interior coverage
    for (i, j) in iproduct!(0..steps, 0..steps) {
        let t = i as f64 / d;
        let s = j as f64 / d;
        vertices.push(Vector::new(t * s, (1.0 - t) * s, 1.0 - s));
        vertices.push(Vector::new(s, t * s, (1.0 - t) * (1.0 - s)));
        vertices.push(Vector::new((1.0 - t) * s, s, t * (1.0 - s)));
    }

    vertices
}
