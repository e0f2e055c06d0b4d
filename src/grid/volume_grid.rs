//! Three-dimensional grid
use crate::grid::CellGeometry;
use crate::traits::{FaceBasisResolver, Geometry, VolumeMesh};
use crate::types::{BasisKey, CellLocalIndexPair, PointsKey, ReferenceCellType};
use std::collections::HashMap;

/// A three-dimensional cell
pub struct VolumeCell {
    pub(crate) id: usize,
    pub(crate) cell_type: ReferenceCellType,
    pub(crate) faces: Vec<usize>,
    pub(crate) normals: Vec<[f64; 3]>,
    pub(crate) basis: [BasisKey; 2],
    pub(crate) variable_basis: HashMap<String, [BasisKey; 2]>,
}

impl VolumeCell {
    /// The id of the cell
    pub fn id(&self) -> usize {
        self.id
    }

    /// The cell type
    pub fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    /// The indices of the faces bounding this cell, in local face order
    pub fn face_indices(&self) -> &[usize] {
        &self.faces
    }

    /// The basis this cell requests on its faces
    pub fn basis(&self, variable: Option<&str>) -> &[BasisKey; 2] {
        variable
            .and_then(|v| self.variable_basis.get(v))
            .unwrap_or(&self.basis)
    }
}

/// A grid of three-dimensional cells
pub struct VolumeGrid {
    pub(crate) faces: Vec<CellGeometry>,
    pub(crate) cells: Vec<VolumeCell>,
    pub(crate) face_ids_to_indices: HashMap<usize, usize>,
    pub(crate) cell_ids_to_indices: HashMap<usize, usize>,
    pub(crate) face_to_cells: Vec<Vec<CellLocalIndexPair>>,
}

impl VolumeGrid {
    /// The number of cells
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// The number of faces
    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    /// A cell
    pub fn cell(&self, index: usize) -> &VolumeCell {
        &self.cells[index]
    }

    /// A face
    pub fn face(&self, index: usize) -> &CellGeometry {
        &self.faces[index]
    }

    /// Iterate through the faces
    pub fn faces(&self) -> impl Iterator<Item = &CellGeometry> {
        self.faces.iter()
    }

    /// The index of the face with a given id
    pub fn face_index_from_id(&self, id: usize) -> Option<usize> {
        self.face_ids_to_indices.get(&id).copied()
    }

    /// The index of the cell with a given id
    pub fn cell_index_from_id(&self, id: usize) -> Option<usize> {
        self.cell_ids_to_indices.get(&id).copied()
    }

    /// The cells containing a face, in the order the cells were added
    pub fn face_to_cells(&self, face_index: usize) -> &[CellLocalIndexPair] {
        &self.face_to_cells[face_index]
    }

    /// The faces that belong to exactly one cell
    pub fn boundary_faces(&self) -> impl Iterator<Item = &CellGeometry> {
        self.faces
            .iter()
            .zip(&self.face_to_cells)
            .filter(|(_, cells)| cells.len() == 1)
            .map(|(face, _)| face)
    }

    /// Indices of all cells
    pub fn cell_indices(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }
}

impl FaceBasisResolver for VolumeGrid {
    type Face = CellGeometry;

    /// The basis requested by the first cell that contains the face
    fn face_basis_key(
        &self,
        face: &CellGeometry,
        direction: usize,
        variable: Option<&str>,
    ) -> BasisKey {
        let Some(index) = self.face_index_from_id(face.id()) else {
            panic!("Face {} is not part of this grid", face.id());
        };
        let Some(first) = self.face_to_cells[index].first() else {
            panic!("Face {} does not bound any cell", face.id());
        };
        self.cells[first.cell].basis(variable)[direction]
    }
}

impl VolumeMesh for VolumeGrid {
    fn coordinate_dimension(&self) -> usize {
        3
    }

    fn bounding_faces(&self, cell: usize) -> Vec<(&CellGeometry, usize)> {
        self.cells[cell]
            .faces
            .iter()
            .enumerate()
            .map(|(local_index, face)| (&self.faces[*face], local_index))
            .collect()
    }

    fn cell_face_basis_key(
        &self,
        cell: usize,
        _local_face: usize,
        direction: usize,
        variable: Option<&str>,
    ) -> BasisKey {
        self.cells[cell].basis(variable)[direction]
    }

    fn face_points_key(&self, cell: usize, _local_face: usize, direction: usize) -> PointsKey {
        self.cells[cell].basis[direction].points_key()
    }

    fn face_normal(&self, cell: usize, local_face: usize) -> Vec<Vec<f64>> {
        let npoints = self.face_points_key(cell, local_face, 0).npoints()
            * self.face_points_key(cell, local_face, 1).npoints();
        self.cells[cell].normals[local_face]
            .iter()
            .map(|component| vec![*component; npoints])
            .collect()
    }
}
