use crate::colorspace::ColorSpace;
use crate::error::{GamutError, Result};
use crate::hull::ConvexHull;
use crate::matrix::Matrix;
use crate::sampler::sample_cube;
use crate::vector::Vector;

/// Headroom multiplier applied to the largest coordinate when sizing axes.
pub const AXIS_SCALE_MARGIN: f64 = 1.2;

/// Apply a primary matrix to every point of a sample cloud. Output order
/// and cardinality match the input exactly.
pub fn project(cloud: &[Vector], matrix: &Matrix) -> Vec<Vector> {
    cloud.iter().map(|p| matrix.multiply_vector(p)).collect()
}

/// One color space's computed gamut: primary matrix, projected cloud,
/// hull and primary markers.
#[derive(Debug, Clone)]
pub struct GamutVolume {
    pub space: ColorSpace,
    pub matrix: Matrix,
    pub cloud: Vec<Vector>,
    pub hull: ConvexHull,
    pub primary_points: [Vector; 3],
}

impl GamutVolume {
    /// Build the primary matrix, sample the RGB unit cube at `steps`
    /// density, project into XYZ and compute the hull.
    pub fn compute(space: &ColorSpace, steps: usize) -> Result<GamutVolume> {
        let matrix = space.primary_matrix()?;
        let primary_points = space.primary_points(&matrix)?;

        let samples = sample_cube(steps);
        let cloud = project(&samples, &matrix);

        let hull =
            ConvexHull::compute(&cloud).ok_or_else(|| GamutError::DegenerateHullInput {
                space: space.name.clone(),
                points: cloud.len(),
            })?;

        Ok(GamutVolume {
            space: space.clone(),
            matrix,
            cloud,
            hull,
            primary_points,
        })
    }

    /// Largest coordinate magnitude in the projected cloud.
    pub fn max_coordinate(&self) -> f64 {
        self.cloud
            .iter()
            .map(Vector::abs_max_component)
            .fold(0.0, f64::max)
    }
}

/// Two independently computed gamut pipelines; a failure on one side
/// never aborts the other.
#[derive(Debug, Clone)]
pub struct GamutComparison {
    pub first: Result<GamutVolume>,
    pub second: Result<GamutVolume>,
}

impl GamutComparison {
    pub fn compare(first: &ColorSpace, second: &ColorSpace, steps: usize) -> GamutComparison {
        let (first, second) = compute_pair(first, second, steps);
        GamutComparison { first, second }
    }

    /// The volumes that computed successfully, in presentation order.
    pub fn volumes(&self) -> impl Iterator<Item = &GamutVolume> {
        self.first
            .iter()
            .chain(self.second.iter())
    }

    /// [`AXIS_SCALE_MARGIN`] times the largest coordinate magnitude across
    /// the available clouds. `None` when both pipelines failed.
    pub fn axis_scale(&self) -> Option<f64> {
        let mut scale = None;
        for volume in self.volumes() {
            let m = volume.max_coordinate() * AXIS_SCALE_MARGIN;
            scale = Some(scale.map_or(m, |s: f64| s.max(m)));
        }
        scale
    }
}

#[cfg(feature = "rayon")]
fn compute_pair(
    first: &ColorSpace,
    second: &ColorSpace,
    steps: usize,
) -> (Result<GamutVolume>, Result<GamutVolume>) {
    // The two pipelines share no state, so they can run on both sides of
    // a join without changing observable behavior.
    rayon::join(
        || GamutVolume::compute(first, steps),
        || GamutVolume::compute(second, steps),
    )
}

#[cfg(not(feature = "rayon"))]
fn compute_pair(
    first: &ColorSpace,
    second: &ColorSpace,
    steps: usize,
) -> (Result<GamutVolume>, Result<GamutVolume>) {
    (
        GamutVolume::compute(first, steps),
        GamutVolume::compute(second, steps),
    )
}
