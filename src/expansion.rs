//! Element expansions
//!
//! An expansion is the representation of a function on a single cell: a basis
//! in each of the two coordinate directions and the cell geometry it is mapped
//! onto.
mod factory;

pub use factory::{ElementIdTracker, ExpansionFactory};

use crate::traits::Geometry;
use crate::types::{
    BasisKey, CellLocalIndexPair, ExpListError, PointsKey, PointsType, ReferenceCellType, Result,
};
use std::collections::BTreeMap;
use std::fmt;

/// The shape of a two-dimensional cell that can carry an expansion
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Shape {
    /// A triangle
    Triangle,
    /// A quadrilateral
    Quadrilateral,
}

impl From<Shape> for ReferenceCellType {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Triangle => ReferenceCellType::Triangle,
            Shape::Quadrilateral => ReferenceCellType::Quadrilateral,
        }
    }
}

/// Determine whether a geometry is a triangle or a quadrilateral
pub fn classify<G: Geometry + ?Sized>(geometry: &G) -> Result<Shape> {
    match geometry.cell_type() {
        ReferenceCellType::Triangle => Ok(Shape::Triangle),
        ReferenceCellType::Quadrilateral => Ok(Shape::Quadrilateral),
        cell_type => Err(ExpListError::UnsupportedGeometryKind {
            id: geometry.id(),
            cell_type,
        }),
    }
}

/// The number of coefficients of a triangle expansion with `nmodes_a` and `nmodes_b` modes
pub fn triangle_ncoeffs(nmodes_a: usize, nmodes_b: usize) -> usize {
    let p = nmodes_a.min(nmodes_b);
    p * (p + 1) / 2 + p * (nmodes_b - p)
}

/// The number of coefficients of a quadrilateral expansion with `nmodes_a` and `nmodes_b` modes
pub fn quadrilateral_ncoeffs(nmodes_a: usize, nmodes_b: usize) -> usize {
    nmodes_a * nmodes_b
}

/// The variant of an expansion
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ExpansionType {
    /// Modal triangle expansion
    Triangle,
    /// Triangle expansion with nodal degrees of freedom at the given points
    NodalTriangle(PointsType),
    /// Quadrilateral expansion
    Quadrilateral,
}

impl ExpansionType {
    /// The shape of the cell this variant lives on
    pub fn shape(&self) -> Shape {
        match self {
            ExpansionType::Triangle | ExpansionType::NodalTriangle(_) => Shape::Triangle,
            ExpansionType::Quadrilateral => Shape::Quadrilateral,
        }
    }
}

/// An expansion on a single two-dimensional cell
pub struct Expansion<'a, G: Geometry> {
    id: usize,
    expansion_type: ExpansionType,
    basis: [BasisKey; 2],
    geometry: &'a G,
    left_adjacent: Option<CellLocalIndexPair>,
}

impl<'a, G: Geometry> Expansion<'a, G> {
    pub(crate) fn new(
        id: usize,
        expansion_type: ExpansionType,
        basis: [BasisKey; 2],
        geometry: &'a G,
    ) -> Self {
        Self {
            id,
            expansion_type,
            basis,
            geometry,
            left_adjacent: None,
        }
    }

    /// The element id
    pub fn id(&self) -> usize {
        self.id
    }

    /// The variant of this expansion
    pub fn expansion_type(&self) -> ExpansionType {
        self.expansion_type
    }

    /// The shape of the cell
    pub fn shape(&self) -> Shape {
        self.expansion_type.shape()
    }

    /// The geometry the expansion is defined on
    pub fn geometry(&self) -> &'a G {
        self.geometry
    }

    /// The basis key in direction `direction`
    pub fn basis(&self, direction: usize) -> &BasisKey {
        &self.basis[direction]
    }

    /// The basis keys in both directions
    pub fn basis_keys(&self) -> &[BasisKey; 2] {
        &self.basis
    }

    /// The points keys in both directions
    pub fn points_keys(&self) -> [PointsKey; 2] {
        [self.basis[0].points_key(), self.basis[1].points_key()]
    }

    /// The number of points in direction `direction`
    pub fn num_points(&self, direction: usize) -> usize {
        self.basis[direction].npoints()
    }

    /// The number of modes in direction `direction`
    pub fn num_modes(&self, direction: usize) -> usize {
        self.basis[direction].nmodes()
    }

    /// The number of local coefficients
    pub fn ncoeffs(&self) -> usize {
        match self.shape() {
            Shape::Triangle => triangle_ncoeffs(self.num_modes(0), self.num_modes(1)),
            Shape::Quadrilateral => quadrilateral_ncoeffs(self.num_modes(0), self.num_modes(1)),
        }
    }

    /// The number of local physical points
    pub fn npoints(&self) -> usize {
        self.num_points(0) * self.num_points(1)
    }

    /// The three-dimensional cell (and local face) this expansion was first seen from
    ///
    /// Only set on expansions of a trace space.
    pub fn left_adjacent(&self) -> Option<CellLocalIndexPair> {
        self.left_adjacent
    }

    pub(crate) fn set_left_adjacent(&mut self, adjacent: CellLocalIndexPair) {
        self.left_adjacent = Some(adjacent);
    }
}

impl<G: Geometry> Clone for Expansion<'_, G> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            expansion_type: self.expansion_type,
            basis: self.basis,
            geometry: self.geometry,
            left_adjacent: self.left_adjacent,
        }
    }
}

impl<G: Geometry> fmt::Debug for Expansion<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expansion")
            .field("id", &self.id)
            .field("expansion_type", &self.expansion_type)
            .field("basis", &self.basis)
            .field("geometry", &self.geometry.id())
            .field("left_adjacent", &self.left_adjacent)
            .finish()
    }
}

/// A geometry together with the basis keys stored for it by a mesh
pub struct ExpansionInfo<'a, G> {
    /// The cell geometry
    pub geometry: &'a G,
    /// The basis key in each coordinate direction
    pub basis_keys: [BasisKey; 2],
}

impl<'a, G> ExpansionInfo<'a, G> {
    /// Create expansion information for a cell
    pub fn new(geometry: &'a G, basis_keys: [BasisKey; 2]) -> Self {
        Self {
            geometry,
            basis_keys,
        }
    }
}

impl<G> Clone for ExpansionInfo<'_, G> {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry,
            basis_keys: self.basis_keys,
        }
    }
}

/// Expansion information for each cell of a domain, keyed and ordered by cell id
pub type ExpansionMap<'a, G> = BTreeMap<usize, ExpansionInfo<'a, G>>;

/// Named groups of cells, keyed and ordered by composite id
pub type CompositeMap<'a, G> = BTreeMap<usize, Vec<&'a G>>;
