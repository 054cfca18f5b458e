use std::error::Error;
use std::fmt::Display;

use crate::colorspace::PrimaryChannel;

/// Failures local to a single color space pipeline. Each carries the name
/// of the color space whose definition triggered it so a two-space
/// comparison can report sides independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamutError {
    /// A chromaticity coordinate with `y == 0` has no tristimulus image.
    DegenerateChromaticity {
        space: String,
        channel: PrimaryChannel,
    },
    /// The three primaries are linearly dependent in tristimulus space,
    /// so the white point solve has no unique solution.
    SingularPrimaryMatrix { space: String },
    /// The projected cloud did not span a volume (fewer than four points,
    /// or all points coincident/collinear/coplanar).
    DegenerateHullInput { space: String, points: usize },
}

impl Display for GamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamutError::DegenerateChromaticity { space, channel } => write!(
                f,
                "Degenerate chromaticity in color space {:?}: {} coordinate has y == 0",
                space, channel
            ),
            GamutError::SingularPrimaryMatrix { space } => write!(
                f,
                "Singular primary matrix for color space {:?}: primaries are linearly dependent",
                space
            ),
            GamutError::DegenerateHullInput { space, points } => write!(
                f,
                "Degenerate hull input for color space {:?}: {} points do not span a volume",
                space, points
            ),
        }
    }
}

impl Error for GamutError {}

pub type Result<T> = std::result::Result<T, GamutError>;
