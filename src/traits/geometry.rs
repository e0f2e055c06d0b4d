//! Cell geometry
use crate::types::ReferenceCellType;

/// The geometry of a single cell
///
/// Expansions only need to know which reference cell a geometry is mapped from
/// and its id; everything else about the geometry is opaque to this crate.
pub trait Geometry {
    /// The reference cell that this geometry is mapped from
    fn cell_type(&self) -> ReferenceCellType;

    /// The id of the geometry
    ///
    /// Ids are unique among all geometries of the same dimension in a mesh.
    fn id(&self) -> usize;
}
