//! Grid builder
use crate::grid::{CellGeometry, VolumeCell, VolumeGrid};
use crate::reference_cell;
use crate::traits::Geometry;
use crate::types::{BasisKey, CellLocalIndexPair, ReferenceCellType};
use std::collections::HashMap;

/// Builder for a [VolumeGrid]
///
/// Faces must be added before the cells they bound.
pub struct VolumeGridBuilder {
    faces: Vec<CellGeometry>,
    face_ids_to_indices: HashMap<usize, usize>,
    cells: Vec<VolumeCell>,
    cell_ids_to_indices: HashMap<usize, usize>,
}

impl Default for VolumeGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeGridBuilder {
    /// Create a new grid builder
    pub fn new() -> Self {
        Self {
            faces: vec![],
            face_ids_to_indices: HashMap::new(),
            cells: vec![],
            cell_ids_to_indices: HashMap::new(),
        }
    }

    /// Create a new grid builder with capacity for a given number of faces and cells
    pub fn new_with_capacity(nfaces: usize, ncells: usize) -> Self {
        Self {
            faces: Vec::with_capacity(nfaces),
            face_ids_to_indices: HashMap::with_capacity(nfaces),
            cells: Vec::with_capacity(ncells),
            cell_ids_to_indices: HashMap::with_capacity(ncells),
        }
    }

    /// Add a face to the grid
    pub fn add_face(&mut self, id: usize, cell_type: ReferenceCellType) {
        assert!(
            !self.face_ids_to_indices.contains_key(&id),
            "Face {id} has already been added"
        );
        self.face_ids_to_indices.insert(id, self.faces.len());
        self.faces.push(CellGeometry::new(id, cell_type));
    }

    /// Add a cell to the grid
    ///
    /// The cell data is the cell type, the ids of its faces in local face order
    /// and the basis it requests on its faces.
    pub fn add_cell(
        &mut self,
        id: usize,
        cell_data: (ReferenceCellType, Vec<usize>, [BasisKey; 2]),
    ) {
        let (cell_type, face_ids, basis) = cell_data;
        let face_types = reference_cell::face_types(cell_type);
        assert_eq!(
            face_ids.len(),
            face_types.len(),
            "A {cell_type:?} has {} faces",
            face_types.len()
        );
        assert!(
            !self.cell_ids_to_indices.contains_key(&id),
            "Cell {id} has already been added"
        );
        let faces = face_ids
            .iter()
            .zip(&face_types)
            .map(|(face_id, face_type)| {
                let Some(index) = self.face_ids_to_indices.get(face_id) else {
                    panic!("Face {face_id} of cell {id} has not been added");
                };
                assert_eq!(
                    self.faces[*index].cell_type(),
                    *face_type,
                    "Face {face_id} of cell {id} has the wrong type"
                );
                *index
            })
            .collect::<Vec<_>>();
        self.cell_ids_to_indices.insert(id, self.cells.len());
        self.cells.push(VolumeCell {
            id,
            cell_type,
            normals: vec![[0.0; 3]; faces.len()],
            faces,
            basis,
            variable_basis: HashMap::new(),
        });
    }

    /// Set the basis that a cell requests on its faces for one variable
    pub fn set_variable_basis(&mut self, id: usize, variable: &str, basis: [BasisKey; 2]) {
        let index = self.cell_index(id);
        self.cells[index]
            .variable_basis
            .insert(variable.to_string(), basis);
    }

    /// Set the outward normal of each face of a cell
    pub fn set_face_normals(&mut self, id: usize, normals: Vec<[f64; 3]>) {
        let index = self.cell_index(id);
        assert_eq!(normals.len(), self.cells[index].faces.len());
        self.cells[index].normals = normals;
    }

    fn cell_index(&self, id: usize) -> usize {
        match self.cell_ids_to_indices.get(&id) {
            Some(index) => *index,
            None => panic!("Cell {id} has not been added"),
        }
    }

    /// Create the grid
    pub fn create_grid(self) -> VolumeGrid {
        let mut face_to_cells = vec![vec![]; self.faces.len()];
        for (cell_index, cell) in self.cells.iter().enumerate() {
            for (local_index, face) in cell.faces.iter().enumerate() {
                face_to_cells[*face].push(CellLocalIndexPair::new(cell_index, local_index));
            }
        }
        VolumeGrid {
            faces: self.faces,
            cells: self.cells,
            face_ids_to_indices: self.face_ids_to_indices,
            cell_ids_to_indices: self.cell_ids_to_indices,
            face_to_cells,
        }
    }
}
