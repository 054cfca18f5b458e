use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::chromaticity::ChromaticityCoordinate;
use crate::error::{GamutError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Identifies which coordinate of a [`Primaries`] definition is being
/// referred to. Used for error reporting and marker selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryChannel {
    Red,
    Green,
    Blue,
    White,
}

impl Display for PrimaryChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryChannel::Red => f.write_str("red"),
            PrimaryChannel::Green => f.write_str("green"),
            PrimaryChannel::Blue => f.write_str("blue"),
            PrimaryChannel::White => f.write_str("white"),
        }
    }
}

/// The four chromaticity coordinates defining one RGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub red: ChromaticityCoordinate,
    pub green: ChromaticityCoordinate,
    pub blue: ChromaticityCoordinate,
    pub white: ChromaticityCoordinate,
}

impl Primaries {
    pub const fn new(
        red: ChromaticityCoordinate,
        green: ChromaticityCoordinate,
        blue: ChromaticityCoordinate,
        white: ChromaticityCoordinate,
    ) -> Primaries {
        Primaries {
            red,
            green,
            blue,
            white,
        }
    }

    pub fn channel(&self, channel: PrimaryChannel) -> ChromaticityCoordinate {
        match channel {
            PrimaryChannel::Red => self.red,
            PrimaryChannel::Green => self.green,
            PrimaryChannel::Blue => self.blue,
            PrimaryChannel::White => self.white,
        }
    }
}

/// A named color space definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpace {
    pub name: String,
    pub primaries: Primaries,
}

impl ColorSpace {
    pub fn new(name: &str, primaries: Primaries) -> ColorSpace {
        ColorSpace {
            name: name.to_owned(),
            primaries,
        }
    }

    /// ARRI Alexa Wide Gamut, D65 white.
    pub fn alexa_wide_gamut() -> ColorSpace {
        ColorSpace::new(
            "Alexa Wide Gamut",
            Primaries::new(
                ChromaticityCoordinate::new(0.7347, 0.2653),
                ChromaticityCoordinate::new(0.1152, 0.8264),
                ChromaticityCoordinate::new(0.1001, 0.1062),
                ChromaticityCoordinate::D65,
            ),
        )
    }

    /// ACES AP0, D60 white. The blue primary sits below the spectral locus
    /// with a negative y; this is part of the published definition.
    pub fn aces_ap0() -> ColorSpace {
        ColorSpace::new(
            "ACES AP0",
            Primaries::new(
                ChromaticityCoordinate::new(0.7347, 0.2653),
                ChromaticityCoordinate::new(0.0000, 1.0000),
                ChromaticityCoordinate::new(0.0001, -0.0770),
                ChromaticityCoordinate::D60,
            ),
        )
    }

    /// sRGB / Rec.709, D65 white.
    pub fn srgb() -> ColorSpace {
        ColorSpace::new(
            "sRGB",
            Primaries::new(
                ChromaticityCoordinate::new(0.640, 0.330),
                ChromaticityCoordinate::new(0.300, 0.600),
                ChromaticityCoordinate::new(0.150, 0.060),
                ChromaticityCoordinate::D65,
            ),
        )
    }

    /// Display P3, D65 white.
    pub fn display_p3() -> ColorSpace {
        ColorSpace::new(
            "Display P3",
            Primaries::new(
                ChromaticityCoordinate::new(0.680, 0.320),
                ChromaticityCoordinate::new(0.265, 0.690),
                ChromaticityCoordinate::new(0.150, 0.060),
                ChromaticityCoordinate::D65,
            ),
        )
    }

    /// ITU-R BT.2020, D65 white.
    pub fn bt2020() -> ColorSpace {
        ColorSpace::new(
            "BT.2020",
            Primaries::new(
                ChromaticityCoordinate::new(0.708, 0.292),
                ChromaticityCoordinate::new(0.170, 0.797),
                ChromaticityCoordinate::new(0.131, 0.046),
                ChromaticityCoordinate::D65,
            ),
        )
    }

    /// Look up a built-in definition by its CLI identifier.
    pub fn from_named(name: &str) -> Option<ColorSpace> {
        match name {
            "alexa-wide-gamut" => Some(ColorSpace::alexa_wide_gamut()),
            "aces-ap0" => Some(ColorSpace::aces_ap0()),
            "srgb" => Some(ColorSpace::srgb()),
            "display-p3" => Some(ColorSpace::display_p3()),
            "bt2020" => Some(ColorSpace::bt2020()),
            _ => None,
        }
    }

    fn tristimulus_of(&self, channel: PrimaryChannel) -> Result<Vector> {
        self.primaries
            .channel(channel)
            .to_tristimulus()
            .ok_or_else(|| GamutError::DegenerateChromaticity {
                space: self.name.clone(),
                channel,
            })
    }

    /// Build the white-normalized RGB-to-XYZ primary matrix.
    ///
    /// Columns of the result are the tristimulus images of red, green and
    /// blue, each scaled so that unit RGB input maps exactly onto the white
    /// point: `M * [1,1,1] == white.to_tristimulus()`.
    pub fn primary_matrix(&self) -> Result<Matrix> {
        let r = self.tristimulus_of(PrimaryChannel::Red)?;
        let g = self.tristimulus_of(PrimaryChannel::Green)?;
        let b = self.tristimulus_of(PrimaryChannel::Blue)?;
        let w = self.tristimulus_of(PrimaryChannel::White)?;

        let m = Matrix::new_from_columns(&r, &g, &b);
        let s = m.solve(&w).ok_or_else(|| GamutError::SingularPrimaryMatrix {
            space: self.name.clone(),
        })?;

        Ok(m.scale_columns(&s))
    }

    /// The red, green and blue primaries mapped through `matrix` into XYZ,
    /// for marker rendering.
    pub fn primary_points(&self, matrix: &Matrix) -> Result<[Vector; 3]> {
        let r = self.tristimulus_of(PrimaryChannel::Red)?;
        let g = self.tristimulus_of(PrimaryChannel::Green)?;
        let b = self.tristimulus_of(PrimaryChannel::Blue)?;
        Ok([
            matrix.multiply_vector(&r),
            matrix.multiply_vector(&g),
            matrix.multiply_vector(&b),
        ])
    }
}
