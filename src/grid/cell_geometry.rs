//! Geometry of a single cell
use crate::traits::Geometry;
use crate::types::ReferenceCellType;

/// A cell known only by its id and reference cell type
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CellGeometry {
    id: usize,
    cell_type: ReferenceCellType,
}

impl CellGeometry {
    /// Create a cell geometry
    pub fn new(id: usize, cell_type: ReferenceCellType) -> Self {
        Self { id, cell_type }
    }
}

impl Geometry for CellGeometry {
    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }
    fn id(&self) -> usize {
        self.id
    }
}
