//! Offsets of each element's data in the flat buffers
use crate::expansion::{Expansion, Shape};
use crate::traits::Geometry;

/// Where each element's data lives in the coefficient and physical buffers
///
/// Triangles are laid out first, in list order, followed by quadrilaterals in
/// list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetLayout {
    coeff_offsets: Vec<usize>,
    phys_offsets: Vec<usize>,
    offset_elmt_ids: Vec<usize>,
    ncoeffs: usize,
    npoints: usize,
}

impl OffsetLayout {
    /// Compute the layout of a list of expansions
    pub fn new<G: Geometry>(expansions: &[Expansion<'_, G>]) -> Self {
        let mut layout = Self {
            coeff_offsets: vec![0; expansions.len()],
            phys_offsets: vec![0; expansions.len()],
            offset_elmt_ids: Vec::with_capacity(expansions.len()),
            ncoeffs: 0,
            npoints: 0,
        };
        for shape in [Shape::Triangle, Shape::Quadrilateral] {
            for (i, e) in expansions.iter().enumerate() {
                if e.shape() == shape {
                    layout.coeff_offsets[i] = layout.ncoeffs;
                    layout.phys_offsets[i] = layout.npoints;
                    layout.offset_elmt_ids.push(i);
                    layout.ncoeffs += e.ncoeffs();
                    layout.npoints += e.npoints();
                }
            }
        }
        layout
    }

    /// The offset of the `i`th expansion's coefficients
    pub fn coeff_offset(&self, i: usize) -> usize {
        self.coeff_offsets[i]
    }

    /// The offset of the `i`th expansion's physical values
    pub fn phys_offset(&self, i: usize) -> usize {
        self.phys_offsets[i]
    }

    /// The list position of the expansion stored in the `cnt`th block
    pub fn offset_elmt_id(&self, cnt: usize) -> usize {
        self.offset_elmt_ids[cnt]
    }

    /// Coefficient offsets, indexed by list position
    pub fn coeff_offsets(&self) -> &[usize] {
        &self.coeff_offsets
    }

    /// Physical offsets, indexed by list position
    pub fn phys_offsets(&self) -> &[usize] {
        &self.phys_offsets
    }

    /// List positions in buffer order
    pub fn offset_elmt_ids(&self) -> &[usize] {
        &self.offset_elmt_ids
    }

    /// The total number of coefficients
    pub fn ncoeffs(&self) -> usize {
        self.ncoeffs
    }

    /// The total number of physical points
    pub fn npoints(&self) -> usize {
        self.npoints
    }
}
