//! Grid creation and storage
//!
//! An in-memory mesh of three-dimensional cells and the faces bounding them.
//! Cells and faces live in arenas and refer to each other by index.

mod builder;
mod cell_geometry;
pub mod shapes;
mod volume_grid;

pub use builder::VolumeGridBuilder;
pub use cell_geometry::CellGeometry;
pub use volume_grid::{VolumeCell, VolumeGrid};
