//! Multi-element expansion lists
//!
//! An [ExpList2D] is an ordered list of two-dimensional expansions together
//! with the layout of their coefficients and physical values in two flat
//! buffers. Within each buffer, the data of all triangles comes first and the
//! data of all quadrilaterals follows.
mod builder;
mod layout;
mod operations;
mod trace;

pub use layout::OffsetLayout;
pub use trace::{compare_face_orders, FaceOrder, PeriodicMap};

use crate::expansion::{Expansion, Shape};
use crate::traits::Geometry;
use log::debug;

/// A list of two-dimensional expansions and the storage for their data
pub struct ExpList2D<'a, G: Geometry> {
    expansions: Vec<Expansion<'a, G>>,
    ncoeffs: usize,
    npoints: usize,
    layout: OffsetLayout,
    coeffs: Option<Vec<f64>>,
    phys: Option<Vec<f64>>,
}

impl<'a, G: Geometry> ExpList2D<'a, G> {
    /// Lay out a finished list of expansions and optionally allocate its buffers
    fn from_expansions(expansions: Vec<Expansion<'a, G>>, declare_coeff_phys_arrays: bool) -> Self {
        let mut list = Self {
            expansions,
            ncoeffs: 0,
            npoints: 0,
            layout: OffsetLayout::default(),
            coeffs: None,
            phys: None,
        };
        list.set_coeff_phys_offsets();
        if declare_coeff_phys_arrays {
            list.declare_coeff_phys_arrays();
        }
        debug!(
            "Created expansion list with {} elements, {} coefficients and {} points",
            list.exp_size(),
            list.ncoeffs,
            list.npoints
        );
        list
    }

    /// Recompute the offsets of every element and the total sizes from the expansions
    pub(crate) fn set_coeff_phys_offsets(&mut self) {
        self.layout = OffsetLayout::new(&self.expansions);
        self.ncoeffs = self.layout.ncoeffs();
        self.npoints = self.layout.npoints();
    }

    /// Allocate zeroed coefficient and physical buffers if they do not exist yet
    pub fn declare_coeff_phys_arrays(&mut self) {
        if self.coeffs.is_none() {
            self.coeffs = Some(vec![0.0; self.ncoeffs]);
        }
        if self.phys.is_none() {
            self.phys = Some(vec![0.0; self.npoints]);
        }
    }

    /// Copy the expansions and layout of this list into a new list
    ///
    /// The buffers of the new list are zero if `declare_coeff_phys_arrays` is
    /// true and absent otherwise.
    pub fn duplicate(&self, declare_coeff_phys_arrays: bool) -> Self {
        let mut list = Self {
            expansions: self.expansions.clone(),
            ncoeffs: self.ncoeffs,
            npoints: self.npoints,
            layout: self.layout.clone(),
            coeffs: None,
            phys: None,
        };
        if declare_coeff_phys_arrays {
            list.declare_coeff_phys_arrays();
        }
        list
    }

    /// The number of expansions
    pub fn exp_size(&self) -> usize {
        self.expansions.len()
    }

    /// The `i`th expansion
    pub fn exp(&self, i: usize) -> &Expansion<'a, G> {
        &self.expansions[i]
    }

    /// All expansions, in list order
    pub fn expansions(&self) -> &[Expansion<'a, G>] {
        &self.expansions
    }

    /// The position in the list of the expansion with element id `id`
    pub fn exp_index_from_id(&self, id: usize) -> Option<usize> {
        self.expansions.iter().position(|e| e.id() == id)
    }

    /// The number of expansions of a given shape
    pub fn shape_count(&self, shape: Shape) -> usize {
        self.expansions.iter().filter(|e| e.shape() == shape).count()
    }

    /// The total number of coefficients
    pub fn ncoeffs(&self) -> usize {
        self.ncoeffs
    }

    /// The total number of physical points
    pub fn npoints(&self) -> usize {
        self.npoints
    }

    /// The offsets of every element into the buffers
    pub fn layout(&self) -> &OffsetLayout {
        &self.layout
    }

    /// The offset of the `i`th expansion's coefficients
    pub fn coeff_offset(&self, i: usize) -> usize {
        self.layout.coeff_offset(i)
    }

    /// The offset of the `i`th expansion's physical values
    pub fn phys_offset(&self, i: usize) -> usize {
        self.layout.phys_offset(i)
    }

    /// The position in the list of the expansion whose data is the `cnt`th block of the buffers
    pub fn offset_elmt_id(&self, cnt: usize) -> usize {
        self.layout.offset_elmt_id(cnt)
    }

    /// The coefficient buffer, if it has been declared
    pub fn coeffs(&self) -> Option<&[f64]> {
        self.coeffs.as_deref()
    }

    /// The coefficient buffer, if it has been declared
    pub fn coeffs_mut(&mut self) -> Option<&mut [f64]> {
        self.coeffs.as_deref_mut()
    }

    /// The physical value buffer, if it has been declared
    pub fn phys(&self) -> Option<&[f64]> {
        self.phys.as_deref()
    }

    /// The physical value buffer, if it has been declared
    pub fn phys_mut(&mut self) -> Option<&mut [f64]> {
        self.phys.as_deref_mut()
    }

    /// The coefficients of the `i`th expansion
    pub fn element_coeffs(&self, i: usize) -> Option<&[f64]> {
        let offset = self.coeff_offset(i);
        self.coeffs()
            .map(|c| &c[offset..offset + self.expansions[i].ncoeffs()])
    }

    /// The physical values of the `i`th expansion
    pub fn element_phys(&self, i: usize) -> Option<&[f64]> {
        let offset = self.phys_offset(i);
        self.phys()
            .map(|p| &p[offset..offset + self.expansions[i].npoints()])
    }
}
