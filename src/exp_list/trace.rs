//! Trace space assembly
use super::ExpList2D;
use crate::expansion::{ElementIdTracker, ExpansionFactory};
use crate::traits::{Geometry, VolumeMesh};
use crate::types::{BasisKey, BoundaryConditionType, CellLocalIndexPair, ExpListError, Result};
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Identification of faces that are physically the same face
///
/// Maps a face id to the id of a partner face. An entry identifies the two
/// faces in both directions, and identification is transitive.
pub type PeriodicMap = HashMap<usize, usize>;

/// The outcome of comparing two bases requested on the same face
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FaceOrder {
    /// The recorded basis has at least as many points and modes in both directions
    Existing,
    /// The requested basis has at least as many points and modes in both directions
    Requested,
    /// Neither basis has at least as many points and modes as the other
    Incompatible,
}

/// Compare the basis recorded on a face with a newly requested basis
///
/// A basis dominates another if its number of points and its number of modes
/// are each at least as large in both directions. Equal bases compare as
/// [FaceOrder::Existing].
pub fn compare_face_orders(existing: &[BasisKey; 2], requested: &[BasisKey; 2]) -> FaceOrder {
    let dominates = |a: &[BasisKey; 2], b: &[BasisKey; 2]| {
        a.iter()
            .zip(b)
            .all(|(a, b)| a.npoints() >= b.npoints() && a.nmodes() >= b.nmodes())
    };
    if dominates(existing, requested) {
        FaceOrder::Existing
    } else if dominates(requested, existing) {
        FaceOrder::Requested
    } else {
        FaceOrder::Incompatible
    }
}

fn root(parents: &HashMap<usize, usize>, mut face_id: usize) -> usize {
    while let Some(parent) = parents.get(&face_id) {
        face_id = *parent;
    }
    face_id
}

/// Map every face named in `periodic_faces` to the lowest id of the faces identified with it
fn periodic_representatives(periodic_faces: &PeriodicMap) -> HashMap<usize, usize> {
    // Parents always have a lower id than their children
    let mut parents = HashMap::new();
    for (face, partner) in periodic_faces {
        let (a, b) = (root(&parents, *face), root(&parents, *partner));
        if a != b {
            parents.insert(a.max(b), a.min(b));
        }
    }
    periodic_faces
        .iter()
        .flat_map(|(face, partner)| [*face, *partner])
        .map(|face| (face, root(&parents, face)))
        .collect()
}

fn face_key(face_id: usize, representatives: &HashMap<usize, usize>) -> usize {
    representatives.get(&face_id).copied().unwrap_or(face_id)
}

impl<'a, G: Geometry> ExpList2D<'a, G> {
    /// Create the trace space of a three-dimensional mesh
    ///
    /// The list holds one expansion for every distinct face bounding the cells
    /// `volume_cells` of `mesh`, where faces identified by `periodic_faces`
    /// count once. Faces of the Dirichlet regions among `boundary_regions` come
    /// first, in region order, and keep the basis of the region. The remaining
    /// faces follow in the order they are first met. A face shared by two cells
    /// takes the larger of the two requested bases; the first direction is
    /// resolved for `variable` and the second for the default variable.
    ///
    /// Every face records the first cell that visited it as its left adjacent
    /// cell.
    pub fn trace_space<M: VolumeMesh<Face = G>>(
        boundary_regions: &[(&ExpList2D<'a, G>, BoundaryConditionType)],
        volume_cells: &[usize],
        mesh: &'a M,
        periodic_faces: &PeriodicMap,
        declare_coeff_phys_arrays: bool,
        variable: Option<&str>,
        ids: &mut ElementIdTracker,
    ) -> Result<Self> {
        let mut factory = ExpansionFactory::new(ids);
        let mut expansions = vec![];
        let mut face_done = HashMap::new();
        let representatives = periodic_representatives(periodic_faces);

        for (region, _) in boundary_regions
            .iter()
            .filter(|(_, bc)| *bc == BoundaryConditionType::Dirichlet)
        {
            for e in region.expansions() {
                let key = face_key(e.geometry().id(), &representatives);
                if face_done.contains_key(&key) {
                    warn!("Dirichlet face {} appears more than once", e.geometry().id());
                    continue;
                }
                face_done.insert(key, expansions.len());
                expansions.push(factory.create_face(e.geometry(), *e.basis_keys())?);
            }
        }
        let ndirichlet = expansions.len();

        for cell in volume_cells {
            for (face, local_face) in mesh.bounding_faces(*cell) {
                let adjacent = CellLocalIndexPair::new(*cell, local_face);
                let requested = [
                    mesh.cell_face_basis_key(*cell, local_face, 0, variable),
                    mesh.cell_face_basis_key(*cell, local_face, 1, None),
                ];
                let key = face_key(face.id(), &representatives);
                let Some(&slot) = face_done.get(&key) else {
                    let mut e = factory.create_face(face, requested)?;
                    e.set_left_adjacent(adjacent);
                    face_done.insert(key, expansions.len());
                    expansions.push(e);
                    continue;
                };

                let existing = &mut expansions[slot];
                if existing.left_adjacent().is_none() {
                    existing.set_left_adjacent(adjacent);
                }
                match compare_face_orders(existing.basis_keys(), &requested) {
                    FaceOrder::Existing => {}
                    FaceOrder::Requested => {
                        trace!(
                            "Face {}: replacing {} by {}",
                            face.id(),
                            existing.basis(0),
                            requested[0]
                        );
                        factory.replace_face(existing, requested)?;
                    }
                    FaceOrder::Incompatible => {
                        return Err(ExpListError::IncompatibleFaceOrder {
                            face_id: face.id(),
                            existing: *existing.basis_keys(),
                            requested,
                        });
                    }
                }
            }
        }
        debug!(
            "Trace space has {} Dirichlet faces and {} other faces",
            ndirichlet,
            expansions.len() - ndirichlet
        );

        Ok(Self::from_expansions(expansions, declare_coeff_phys_arrays))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expansion::{CompositeMap, ExpansionType};
    use crate::grid::{shapes, CellGeometry, VolumeGrid, VolumeGridBuilder};
    use crate::types::{BasisType, PointsKey, PointsType, ReferenceCellType};
    use std::collections::HashSet;

    fn key(nmodes: usize, npoints: usize) -> BasisKey {
        BasisKey::new(
            BasisType::ModifiedA,
            nmodes,
            PointsKey::new(npoints, PointsType::GaussLobattoLegendre),
        )
    }

    /// Two hexahedra sharing face 3, which is local face 3 of cell 0 and local face 2 of cell 1
    fn two_hexes(basis0: [BasisKey; 2], basis1: [BasisKey; 2]) -> VolumeGrid {
        let mut b = VolumeGridBuilder::new();
        for id in 0..11 {
            b.add_face(id, ReferenceCellType::Quadrilateral);
        }
        b.add_cell(
            0,
            (ReferenceCellType::Hexahedron, vec![0, 1, 2, 3, 4, 5], basis0),
        );
        b.add_cell(
            1,
            (ReferenceCellType::Hexahedron, vec![6, 7, 3, 8, 9, 10], basis1),
        );
        b.create_grid()
    }

    fn trace<'a>(grid: &'a VolumeGrid) -> Result<ExpList2D<'a, CellGeometry>> {
        let mut ids = ElementIdTracker::default();
        ExpList2D::trace_space(
            &[],
            &grid.cell_indices(),
            grid,
            &PeriodicMap::new(),
            true,
            None,
            &mut ids,
        )
    }

    #[test]
    fn test_compare_face_orders() {
        let low = [key(3, 4), key(3, 4)];
        let high = [key(5, 6), key(5, 6)];
        assert_eq!(compare_face_orders(&low, &low), FaceOrder::Existing);
        assert_eq!(compare_face_orders(&high, &low), FaceOrder::Existing);
        assert_eq!(compare_face_orders(&low, &high), FaceOrder::Requested);
        assert_eq!(
            compare_face_orders(&[key(3, 4), key(3, 4)], &[key(2, 6), key(4, 3)]),
            FaceOrder::Incompatible
        );
        assert_eq!(
            compare_face_orders(&[key(3, 4), key(3, 4)], &[key(3, 6), key(3, 4)]),
            FaceOrder::Requested
        );
        assert_eq!(
            compare_face_orders(&[key(3, 4), key(3, 4)], &[key(4, 4), key(2, 4)]),
            FaceOrder::Incompatible
        );
    }

    #[test]
    fn test_every_face_once() {
        let grid = shapes::hexahedral_box(2, 2, 2, [key(3, 4), key(3, 4)]);
        let list = trace(&grid).unwrap();
        assert_eq!(list.exp_size(), grid.number_of_faces());
        let face_ids = list
            .expansions()
            .iter()
            .map(|e| e.geometry().id())
            .collect::<HashSet<_>>();
        assert_eq!(face_ids.len(), grid.number_of_faces());
        for (i, e) in list.expansions().iter().enumerate() {
            assert_eq!(e.id(), i);
            assert_eq!(e.expansion_type(), ExpansionType::Quadrilateral);
            assert!(e.left_adjacent().is_some());
        }
        assert_eq!(list.ncoeffs(), 36 * 9);
        assert_eq!(list.phys().unwrap().len(), 36 * 16);
    }

    #[test]
    fn test_dirichlet_faces_first() {
        let grid = shapes::hexahedral_box(2, 2, 1, [key(3, 4), key(3, 4)]);
        let bottom = grid
            .faces()
            .filter(|f| (12..16).contains(&f.id()))
            .collect::<Vec<_>>();
        let mut composites: CompositeMap<'_, CellGeometry> = CompositeMap::new();
        composites.insert(0, bottom.iter().rev().copied().collect());
        let mut region_ids = ElementIdTracker::default();
        let dirichlet =
            ExpList2D::from_composites(&composites, &grid, None, &mut region_ids).unwrap();
        let mut composites: CompositeMap<'_, CellGeometry> = CompositeMap::new();
        composites.insert(0, vec![grid.face(0)]);
        let neumann =
            ExpList2D::from_composites(&composites, &grid, None, &mut region_ids).unwrap();

        let mut ids = ElementIdTracker::default();
        let list = ExpList2D::trace_space(
            &[
                (&neumann, BoundaryConditionType::Neumann),
                (&dirichlet, BoundaryConditionType::Dirichlet),
            ],
            &grid.cell_indices(),
            &grid,
            &PeriodicMap::new(),
            false,
            None,
            &mut ids,
        )
        .unwrap();
        assert_eq!(list.exp_size(), grid.number_of_faces());
        let first = list.expansions()[..4]
            .iter()
            .map(|e| e.geometry().id())
            .collect::<Vec<_>>();
        let expected = bottom.iter().rev().map(|f| f.id()).collect::<Vec<_>>();
        assert_eq!(first, expected);
        assert_eq!(list.exp(4).geometry().id(), 6);
        for e in &list.expansions()[..4] {
            let adjacent = e.left_adjacent().unwrap();
            assert_eq!(adjacent.local_index, 0);
        }
        assert!(list.coeffs().is_none());
    }

    #[test]
    fn test_duplicate_dirichlet_face() {
        let grid = shapes::hexahedral_box(1, 1, 1, [key(3, 4), key(3, 4)]);
        let mut composites: CompositeMap<'_, CellGeometry> = CompositeMap::new();
        composites.insert(0, vec![grid.face(0), grid.face(0)]);
        let mut region_ids = ElementIdTracker::default();
        let region =
            ExpList2D::from_composites(&composites, &grid, None, &mut region_ids).unwrap();
        let mut ids = ElementIdTracker::default();
        let list = ExpList2D::trace_space(
            &[(&region, BoundaryConditionType::Dirichlet)],
            &grid.cell_indices(),
            &grid,
            &PeriodicMap::new(),
            true,
            None,
            &mut ids,
        )
        .unwrap();
        assert_eq!(list.exp_size(), 6);
        assert_eq!(ids.peek(), 6);
    }

    #[test]
    fn test_higher_order_neighbour_replaces_face() {
        let low = [key(3, 4), key(3, 4)];
        let high = [key(5, 6), key(5, 6)];
        let grid = two_hexes(low, high);
        let list = trace(&grid).unwrap();
        assert_eq!(list.exp_size(), 11);
        let slot = list
            .expansions()
            .iter()
            .position(|e| e.geometry().id() == 3)
            .unwrap();
        let shared = list.exp(slot);
        assert_eq!(shared.id(), 3);
        assert_eq!(shared.basis_keys(), &high);
        assert_eq!(shared.left_adjacent(), Some(CellLocalIndexPair::new(0, 3)));
        assert_eq!(list.ncoeffs(), 5 * 9 + 6 * 25);
    }

    #[test]
    fn test_lower_order_neighbour_keeps_face() {
        let low = [key(3, 4), key(3, 4)];
        let high = [key(5, 6), key(5, 6)];
        let grid = two_hexes(high, low);
        let list = trace(&grid).unwrap();
        let shared = list
            .expansions()
            .iter()
            .find(|e| e.geometry().id() == 3)
            .unwrap();
        assert_eq!(shared.basis_keys(), &high);
        assert_eq!(list.ncoeffs(), 6 * 25 + 5 * 9);
    }

    #[test]
    fn test_incompatible_orders() {
        let first = [key(3, 4), key(3, 4)];
        let second = [key(2, 6), key(4, 3)];
        let grid = two_hexes(first, second);
        assert_eq!(
            trace(&grid).err(),
            Some(ExpListError::IncompatibleFaceOrder {
                face_id: 3,
                existing: first,
                requested: second,
            })
        );
    }

    #[test]
    fn test_reconciliation_is_idempotent() {
        let low = [key(3, 4), key(3, 4)];
        let high = [key(5, 6), key(5, 6)];
        let grid = two_hexes(low, high);
        let first = trace(&grid).unwrap();
        let second = trace(&grid).unwrap();
        for (a, b) in first.expansions().iter().zip(second.expansions()) {
            assert_eq!(a.basis_keys(), b.basis_keys());
            assert_eq!(a.geometry().id(), b.geometry().id());
        }
        let shared = first.exp(3).basis_keys();
        assert_eq!(compare_face_orders(shared, &low), FaceOrder::Existing);
        assert_eq!(compare_face_orders(shared, &high), FaceOrder::Existing);
    }

    #[test]
    fn test_variable_resolves_first_direction() {
        let mut b = VolumeGridBuilder::new();
        for id in 0..6 {
            b.add_face(id, ReferenceCellType::Quadrilateral);
        }
        b.add_cell(
            0,
            (
                ReferenceCellType::Hexahedron,
                vec![0, 1, 2, 3, 4, 5],
                [key(3, 4), key(3, 4)],
            ),
        );
        b.set_variable_basis(0, "u", [key(6, 7), key(6, 7)]);
        let grid = b.create_grid();
        let mut ids = ElementIdTracker::default();
        let list = ExpList2D::trace_space(
            &[],
            &grid.cell_indices(),
            &grid,
            &PeriodicMap::new(),
            true,
            Some("u"),
            &mut ids,
        )
        .unwrap();
        assert_eq!(list.exp(0).basis_keys(), &[key(6, 7), key(3, 4)]);
        assert_eq!(list.ncoeffs(), 6 * 18);
    }

    #[test]
    fn test_periodic_faces() {
        let grid = shapes::hexahedral_box(1, 1, 1, [key(3, 4), key(3, 4)]);
        let periodic = PeriodicMap::from([(0, 1), (1, 0)]);
        let mut ids = ElementIdTracker::default();
        let list = ExpList2D::trace_space(
            &[],
            &grid.cell_indices(),
            &grid,
            &periodic,
            true,
            None,
            &mut ids,
        )
        .unwrap();
        assert_eq!(list.exp_size(), 5);
        assert!(list.expansions().iter().any(|e| e.geometry().id() == 0));
        assert!(list.expansions().iter().all(|e| e.geometry().id() != 1));
    }

    fn periodic_trace_size(grid: &VolumeGrid, periodic: &PeriodicMap) -> usize {
        let mut ids = ElementIdTracker::default();
        ExpList2D::trace_space(
            &[],
            &grid.cell_indices(),
            grid,
            periodic,
            true,
            None,
            &mut ids,
        )
        .unwrap()
        .exp_size()
    }

    #[test]
    fn test_one_way_periodic_faces() {
        let grid = shapes::hexahedral_box(1, 1, 1, [key(3, 4), key(3, 4)]);
        assert_eq!(periodic_trace_size(&grid, &PeriodicMap::from([(0, 1)])), 5);
        assert_eq!(periodic_trace_size(&grid, &PeriodicMap::from([(1, 0)])), 5);
        // Opposite faces identified in each direction, listed one way or the other
        let periodic = PeriodicMap::from([(0, 1), (2, 3), (5, 4)]);
        assert_eq!(periodic_trace_size(&grid, &periodic), 3);
    }

    #[test]
    fn test_periodic_representatives() {
        let representatives =
            periodic_representatives(&PeriodicMap::from([(5, 3), (9, 5), (7, 8)]));
        assert_eq!(representatives.len(), 5);
        for face in [3, 5, 9] {
            assert_eq!(representatives[&face], 3);
        }
        assert_eq!(representatives[&7], 7);
        assert_eq!(representatives[&8], 7);
        assert_eq!(face_key(4, &representatives), 4);
    }

    #[test]
    fn test_prism_faces() {
        let grid = shapes::prism_column(3, [key(3, 4), key(4, 5)]);
        let list = trace(&grid).unwrap();
        assert_eq!(list.exp_size(), 13);
        assert_eq!(list.shape_count(crate::expansion::Shape::Triangle), 4);
        assert_eq!(list.offset_elmt_id(0), 0);
        assert_eq!(list.coeff_offset(list.offset_elmt_id(4)), 4 * 9);
    }
}
