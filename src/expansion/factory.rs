//! Construction of expansions
use super::{classify, Expansion, ExpansionType, Shape};
use crate::traits::Geometry;
use crate::types::{BasisKey, BasisType, PointsType, Result};

/// Hands out element ids in construction order
///
/// Ids start from the value given to [ElementIdTracker::new] and are never reused.
#[derive(Debug, Default)]
pub struct ElementIdTracker {
    next: usize,
}

impl ElementIdTracker {
    /// Create a tracker whose first id is `first`
    pub fn new(first: usize) -> Self {
        Self { next: first }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id that will be handed out next
    pub fn peek(&self) -> usize {
        self.next
    }
}

/// Creates expansions of the right variant for a geometry and assigns them ids
pub struct ExpansionFactory<'t> {
    ids: &'t mut ElementIdTracker,
}

impl<'t> ExpansionFactory<'t> {
    /// Create a factory drawing ids from `ids`
    pub fn new(ids: &'t mut ElementIdTracker) -> Self {
        Self { ids }
    }

    /// Create an expansion from the basis keys stored for a cell
    ///
    /// A triangle whose first basis is GLL Lagrange becomes a nodal triangle
    /// with an orthogonal first basis and electrostatic points.
    pub fn create<'a, G: Geometry>(
        &mut self,
        geometry: &'a G,
        basis: [BasisKey; 2],
    ) -> Result<Expansion<'a, G>> {
        let (expansion_type, basis) = match classify(geometry)? {
            Shape::Triangle if basis[0].basis_type() == BasisType::GllLagrange => {
                let ortho_a =
                    BasisKey::new(BasisType::OrthoA, basis[0].nmodes(), basis[0].points_key());
                (
                    ExpansionType::NodalTriangle(PointsType::NodalTriElec),
                    [ortho_a, basis[1]],
                )
            }
            Shape::Triangle => (ExpansionType::Triangle, basis),
            Shape::Quadrilateral => (ExpansionType::Quadrilateral, basis),
        };
        Ok(Expansion::new(
            self.ids.next_id(),
            expansion_type,
            basis,
            geometry,
        ))
    }

    /// Create an expansion using one set of basis keys for every triangle and another for every quadrilateral
    ///
    /// Triangles are nodal at `nodal_points` if it is a distribution over a
    /// triangle, and modal otherwise.
    pub fn create_uniform<'a, G: Geometry>(
        &mut self,
        geometry: &'a G,
        triangle_basis: [BasisKey; 2],
        quadrilateral_basis: [BasisKey; 2],
        nodal_points: Option<PointsType>,
    ) -> Result<Expansion<'a, G>> {
        let (expansion_type, basis) = match classify(geometry)? {
            Shape::Triangle => match nodal_points {
                Some(points) if points.is_nodal_triangle() => {
                    (ExpansionType::NodalTriangle(points), triangle_basis)
                }
                _ => (ExpansionType::Triangle, triangle_basis),
            },
            Shape::Quadrilateral => (ExpansionType::Quadrilateral, quadrilateral_basis),
        };
        Ok(Expansion::new(
            self.ids.next_id(),
            expansion_type,
            basis,
            geometry,
        ))
    }

    /// Create a modal expansion on a face of a three-dimensional mesh
    pub fn create_face<'a, G: Geometry>(
        &mut self,
        geometry: &'a G,
        basis: [BasisKey; 2],
    ) -> Result<Expansion<'a, G>> {
        let expansion_type = face_expansion_type(geometry)?;
        Ok(Expansion::new(
            self.ids.next_id(),
            expansion_type,
            basis,
            geometry,
        ))
    }

    /// Replace the basis of a face expansion, keeping its id, geometry and adjacency
    pub fn replace_face<G: Geometry>(
        &self,
        expansion: &mut Expansion<'_, G>,
        basis: [BasisKey; 2],
    ) -> Result<()> {
        let mut replacement = Expansion::new(
            expansion.id(),
            face_expansion_type(expansion.geometry())?,
            basis,
            expansion.geometry(),
        );
        replacement.left_adjacent = expansion.left_adjacent();
        *expansion = replacement;
        Ok(())
    }
}

fn face_expansion_type<G: Geometry>(geometry: &G) -> Result<ExpansionType> {
    Ok(match classify(geometry)? {
        Shape::Triangle => ExpansionType::Triangle,
        Shape::Quadrilateral => ExpansionType::Quadrilateral,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::CellGeometry;
    use crate::types::{CellLocalIndexPair, ExpListError, PointsKey, ReferenceCellType};

    fn key(basis_type: BasisType, nmodes: usize) -> BasisKey {
        BasisKey::new(
            basis_type,
            nmodes,
            PointsKey::new(nmodes + 1, PointsType::GaussLobattoLegendre),
        )
    }

    #[test]
    fn test_ids_increase() {
        let mut ids = ElementIdTracker::default();
        let tri = CellGeometry::new(10, ReferenceCellType::Triangle);
        let quad = CellGeometry::new(11, ReferenceCellType::Quadrilateral);
        let basis = [key(BasisType::ModifiedA, 3), key(BasisType::ModifiedB, 3)];
        let mut factory = ExpansionFactory::new(&mut ids);
        let e0 = factory.create(&tri, basis).unwrap();
        let e1 = factory.create(&quad, basis).unwrap();
        let e2 = factory.create_face(&tri, basis).unwrap();
        assert_eq!([e0.id(), e1.id(), e2.id()], [0, 1, 2]);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_tracker_start() {
        let mut ids = ElementIdTracker::new(4);
        assert_eq!(ids.next_id(), 4);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.peek(), 6);
    }

    #[test]
    fn test_gll_triangle_is_nodal() {
        let mut ids = ElementIdTracker::default();
        let tri = CellGeometry::new(0, ReferenceCellType::Triangle);
        let basis = [key(BasisType::GllLagrange, 4), key(BasisType::OrthoB, 4)];
        let e = ExpansionFactory::new(&mut ids).create(&tri, basis).unwrap();
        assert_eq!(
            e.expansion_type(),
            ExpansionType::NodalTriangle(PointsType::NodalTriElec)
        );
        assert_eq!(e.basis(0).basis_type(), BasisType::OrthoA);
        assert_eq!(e.basis(0).nmodes(), 4);
        assert_eq!(e.basis(0).points_key(), basis[0].points_key());
        assert_eq!(e.basis(1), &basis[1]);
    }

    #[test]
    fn test_gll_quadrilateral_is_not_nodal() {
        let mut ids = ElementIdTracker::default();
        let quad = CellGeometry::new(0, ReferenceCellType::Quadrilateral);
        let basis = [key(BasisType::GllLagrange, 4), key(BasisType::GllLagrange, 4)];
        let e = ExpansionFactory::new(&mut ids).create(&quad, basis).unwrap();
        assert_eq!(e.expansion_type(), ExpansionType::Quadrilateral);
        assert_eq!(e.basis_keys(), &basis);
    }

    #[test]
    fn test_uniform() {
        let mut ids = ElementIdTracker::default();
        let tri = CellGeometry::new(0, ReferenceCellType::Triangle);
        let quad = CellGeometry::new(1, ReferenceCellType::Quadrilateral);
        let tri_basis = [key(BasisType::OrthoA, 3), key(BasisType::OrthoB, 3)];
        let quad_basis = [key(BasisType::ModifiedA, 5), key(BasisType::ModifiedA, 5)];
        let mut factory = ExpansionFactory::new(&mut ids);

        let e = factory
            .create_uniform(&tri, tri_basis, quad_basis, Some(PointsType::NodalTriFekete))
            .unwrap();
        assert_eq!(
            e.expansion_type(),
            ExpansionType::NodalTriangle(PointsType::NodalTriFekete)
        );
        assert_eq!(e.basis_keys(), &tri_basis);

        let e = factory
            .create_uniform(&tri, tri_basis, quad_basis, None)
            .unwrap();
        assert_eq!(e.expansion_type(), ExpansionType::Triangle);

        let e = factory
            .create_uniform(&tri, tri_basis, quad_basis, Some(PointsType::GaussLobattoLegendre))
            .unwrap();
        assert_eq!(e.expansion_type(), ExpansionType::Triangle);

        let e = factory
            .create_uniform(&quad, tri_basis, quad_basis, Some(PointsType::NodalTriFekete))
            .unwrap();
        assert_eq!(e.expansion_type(), ExpansionType::Quadrilateral);
        assert_eq!(e.basis_keys(), &quad_basis);
    }

    #[test]
    fn test_face_is_never_nodal() {
        let mut ids = ElementIdTracker::default();
        let tri = CellGeometry::new(0, ReferenceCellType::Triangle);
        let basis = [key(BasisType::GllLagrange, 4), key(BasisType::OrthoB, 4)];
        let e = ExpansionFactory::new(&mut ids).create_face(&tri, basis).unwrap();
        assert_eq!(e.expansion_type(), ExpansionType::Triangle);
        assert_eq!(e.basis_keys(), &basis);
    }

    #[test]
    fn test_unsupported_geometry_does_not_take_an_id() {
        let mut ids = ElementIdTracker::default();
        let interval = CellGeometry::new(3, ReferenceCellType::Interval);
        let basis = [key(BasisType::ModifiedA, 3), key(BasisType::ModifiedA, 3)];
        let e = ExpansionFactory::new(&mut ids).create(&interval, basis);
        assert_eq!(
            e.unwrap_err(),
            ExpListError::UnsupportedGeometryKind {
                id: 3,
                cell_type: ReferenceCellType::Interval
            }
        );
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn test_replace_face() {
        let mut ids = ElementIdTracker::default();
        let quad = CellGeometry::new(8, ReferenceCellType::Quadrilateral);
        let low = [key(BasisType::ModifiedA, 2), key(BasisType::ModifiedA, 2)];
        let high = [key(BasisType::ModifiedA, 4), key(BasisType::ModifiedA, 4)];
        let mut factory = ExpansionFactory::new(&mut ids);
        let mut e = factory.create_face(&quad, low).unwrap();
        e.set_left_adjacent(CellLocalIndexPair::new(3, 1));
        factory.replace_face(&mut e, high).unwrap();
        assert_eq!(e.id(), 0);
        assert_eq!(e.basis_keys(), &high);
        assert_eq!(e.geometry().id(), 8);
        assert_eq!(e.left_adjacent(), Some(CellLocalIndexPair::new(3, 1)));
        assert_eq!(ids.peek(), 1);
    }
}
