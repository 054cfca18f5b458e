use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// A CIE xy chromaticity coordinate.
///
/// No range invariant is enforced: negative and out-of-triangle values are
/// accepted as-is since some production color spaces (ACES AP0) place
/// primaries outside the spectral locus. The only rejected input is `y == 0`,
/// which has no tristimulus image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromaticityCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ChromaticityCoordinate {
    pub const fn new(x: f64, y: f64) -> ChromaticityCoordinate {
        ChromaticityCoordinate { x, y }
    }

    /// CIE standard illuminant D65.
    pub const D65: ChromaticityCoordinate = ChromaticityCoordinate {
        x: 0.3127,
        y: 0.3290,
    };

    /// CIE standard illuminant D60 (ACES white).
    pub const D60: ChromaticityCoordinate = ChromaticityCoordinate {
        x: 0.32168,
        y: 0.33767,
    };

    /// Convert to an unnormalized XYZ tristimulus vector with `Y = 1`.
    /// Returns `None` for the degenerate `y == 0` case.
    pub fn to_tristimulus(&self) -> Option<Vector> {
        if self.y == 0.0 {
            return None;
        }
        Some(Vector::new(
            self.x / self.y,
            1.0,
            (1.0 - self.x - self.y) / self.y,
        ))
    }
}
