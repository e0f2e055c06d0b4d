//! Type definitions
use std::fmt;

/// The type of a reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ReferenceCellType {
    /// A point
    Point,
    /// A line interval
    Interval,
    /// A triangle
    Triangle,
    /// A quadrilateral
    Quadrilateral,
    /// A tetrahedron (whose faces are all triangles)
    Tetrahedron,
    /// A hexahedron (whose faces are all quadrilaterals)
    Hexahedron,
    /// A triangular prism
    Prism,
    /// A square-based pyramid
    Pyramid,
}

/// A (cell, local index) pair
///
/// The local index is the index of a subentity (eg a face) within the cell as it is numbered in the reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CellLocalIndexPair {
    /// The cell's index
    pub cell: usize,
    /// The local index of the subentity
    pub local_index: usize,
}

impl CellLocalIndexPair {
    /// Create a (cell, local index) pair
    pub fn new(cell: usize, local_index: usize) -> Self {
        Self { cell, local_index }
    }
}

/// The family of a one-dimensional basis
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BasisType {
    /// Principal orthogonal functions, first direction
    OrthoA,
    /// Principal orthogonal functions, second direction
    OrthoB,
    /// Principal orthogonal functions, third direction
    OrthoC,
    /// Principal modified functions, first direction
    ModifiedA,
    /// Principal modified functions, second direction
    ModifiedB,
    /// Principal modified functions, third direction
    ModifiedC,
    /// Lagrange polynomials through the Gauss-Lobatto-Legendre points
    GllLagrange,
    /// Lagrange polynomials through the Gauss points
    GaussLagrange,
    /// Legendre polynomials
    Legendre,
    /// Chebyshev polynomials
    Chebyshev,
}

/// A distribution of points
///
/// The `NodalTri*` variants are distributions over a whole triangle rather
/// than along one coordinate direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PointsType {
    /// Gauss-Legendre points
    GaussGaussLegendre,
    /// Gauss-Radau points with alpha = 0, beta = 0
    GaussRadauMLegendre,
    /// Gauss-Radau points with alpha = 1, beta = 0
    GaussRadauMAlpha1Beta0,
    /// Gauss-Lobatto-Legendre points
    GaussLobattoLegendre,
    /// Evenly spaced points
    PolyEvenlySpaced,
    /// Electrostatic points on a triangle
    NodalTriElec,
    /// Fekete points on a triangle
    NodalTriFekete,
    /// Evenly spaced points on a triangle
    NodalTriEvenlySpaced,
}

impl PointsType {
    /// Is this a point distribution over a whole triangle?
    pub fn is_nodal_triangle(&self) -> bool {
        matches!(
            self,
            PointsType::NodalTriElec | PointsType::NodalTriFekete | PointsType::NodalTriEvenlySpaced
        )
    }
}

/// A number of points together with their distribution
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct PointsKey {
    npoints: usize,
    points_type: PointsType,
}

impl PointsKey {
    /// Create a points key
    pub fn new(npoints: usize, points_type: PointsType) -> Self {
        Self {
            npoints,
            points_type,
        }
    }
    /// The number of points
    pub fn npoints(&self) -> usize {
        self.npoints
    }
    /// The point distribution
    pub fn points_type(&self) -> PointsType {
        self.points_type
    }
}

/// Description of a one-dimensional basis: its family, number of modes and points
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct BasisKey {
    basis_type: BasisType,
    nmodes: usize,
    points_key: PointsKey,
}

impl BasisKey {
    /// Create a basis key
    pub fn new(basis_type: BasisType, nmodes: usize, points_key: PointsKey) -> Self {
        Self {
            basis_type,
            nmodes,
            points_key,
        }
    }
    /// The basis family
    pub fn basis_type(&self) -> BasisType {
        self.basis_type
    }
    /// The number of modes
    pub fn nmodes(&self) -> usize {
        self.nmodes
    }
    /// The number of points
    pub fn npoints(&self) -> usize {
        self.points_key.npoints()
    }
    /// The points key
    pub fn points_key(&self) -> PointsKey {
        self.points_key
    }
}

impl fmt::Display for BasisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({} modes, {} {:?} points)",
            self.basis_type,
            self.nmodes,
            self.points_key.npoints(),
            self.points_key.points_type()
        )
    }
}

/// The kind of boundary condition imposed on a boundary region
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BoundaryConditionType {
    /// Prescribed value
    Dirichlet,
    /// Prescribed normal derivative
    Neumann,
    /// Prescribed combination of value and normal derivative
    Robin,
    /// Identified with another region
    Periodic,
    /// No condition
    NotDefined,
}

/// Error raised while building an expansion list
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExpListError {
    /// A cell is neither a triangle nor a quadrilateral
    #[error("geometry {id} is a {cell_type:?}; expected a triangle or a quadrilateral")]
    UnsupportedGeometryKind {
        /// The id of the offending geometry
        id: usize,
        /// Its cell type
        cell_type: ReferenceCellType,
    },
    /// Two elements sharing a face request incomparable discretisations of it
    #[error(
        "face {face_id}: requested basis {requested:?} is incomparable with the recorded basis {existing:?}"
    )]
    IncompatibleFaceOrder {
        /// The id of the shared face
        face_id: usize,
        /// Basis keys of the face expansion already in the list
        existing: [BasisKey; 2],
        /// Basis keys requested by the element currently visited
        requested: [BasisKey; 2],
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, ExpListError>;
