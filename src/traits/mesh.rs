//! Meshes that expansion lists are built from
use crate::expansion::ExpansionMap;
use crate::traits::Geometry;
use crate::types::{BasisKey, PointsKey};

/// A two-dimensional mesh that stores an expansion for each of its cells
pub trait MeshGraph2D {
    /// The geometry type of a cell
    type Geometry: Geometry;

    /// The expansions of a variable
    ///
    /// If `variable` is `None` or the mesh holds no expansions specific to the
    /// variable, the default expansions are returned.
    fn expansions(&self, variable: Option<&str>) -> ExpansionMap<'_, Self::Geometry>;
}

/// A mesh that can say which basis should be used on each of its faces
pub trait FaceBasisResolver {
    /// The geometry type of a face
    type Face: Geometry;

    /// The basis key to use in direction `direction` (0 or 1) of a face
    fn face_basis_key(&self, face: &Self::Face, direction: usize, variable: Option<&str>)
        -> BasisKey;
}

/// A three-dimensional mesh whose cells are bounded by two-dimensional faces
///
/// Cells are addressed by their index in the mesh. Faces are owned by the mesh
/// and handed out by reference.
pub trait VolumeMesh: FaceBasisResolver {
    /// The number of coordinates of a point in physical space
    fn coordinate_dimension(&self) -> usize;

    /// The faces bounding a cell, together with their local index in the cell
    fn bounding_faces(&self, cell: usize) -> Vec<(&Self::Face, usize)>;

    /// The basis key that a cell requests in direction `direction` of one of its faces
    fn cell_face_basis_key(
        &self,
        cell: usize,
        local_face: usize,
        direction: usize,
        variable: Option<&str>,
    ) -> BasisKey;

    /// The points key of a cell's face point distribution in direction `direction`
    fn face_points_key(&self, cell: usize, local_face: usize, direction: usize) -> PointsKey;

    /// The outward normal of a cell at the points of one of its faces
    ///
    /// One entry per coordinate component, each sampled at the points given by
    /// [VolumeMesh::face_points_key].
    fn face_normal(&self, cell: usize, local_face: usize) -> Vec<Vec<f64>>;
}
