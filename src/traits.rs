//! Trait definitions

mod geometry;
mod interpolation;
mod mesh;

pub use geometry::Geometry;
pub use interpolation::PointsInterpolator;
pub use mesh::{FaceBasisResolver, MeshGraph2D, VolumeMesh};
