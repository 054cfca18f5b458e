pub mod chromaticity;
pub mod colorspace;
pub mod error;
pub mod gamut;
pub mod hull;
pub mod matrix;
pub mod render;
pub mod sampler;
pub mod vector;

pub use crate::chromaticity::ChromaticityCoordinate;
pub use crate::colorspace::ColorSpace;
pub use crate::colorspace::Primaries;
pub use crate::colorspace::PrimaryChannel;
pub use crate::error::GamutError;
pub use crate::gamut::GamutComparison;
pub use crate::gamut::GamutVolume;
pub use crate::hull::ConvexHull;
pub use crate::matrix::Matrix;
pub use crate::render::render_comparison;
pub use crate::render::RenderSettings;
pub use crate::vector::Vector;
