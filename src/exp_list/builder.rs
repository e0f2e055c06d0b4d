//! Construction of expansion lists over a domain
use super::ExpList2D;
use crate::expansion::{CompositeMap, ElementIdTracker, ExpansionFactory, ExpansionMap};
use crate::traits::{FaceBasisResolver, Geometry, MeshGraph2D};
use crate::types::{BasisKey, BasisType, PointsType, Result};
use log::warn;

impl<'a, G: Geometry> ExpList2D<'a, G> {
    /// Create an expansion list with one expansion per entry of an expansion map
    ///
    /// Each cell uses the basis keys stored for it in the map. Cells are
    /// visited in map order.
    pub fn from_expansion_map(
        expansions: &ExpansionMap<'a, G>,
        declare_coeff_phys_arrays: bool,
        ids: &mut ElementIdTracker,
    ) -> Result<Self> {
        if expansions.is_empty() {
            warn!("Creating an expansion list from an empty expansion map");
        }
        let mut factory = ExpansionFactory::new(ids);
        let mut list = Vec::with_capacity(expansions.len());
        for info in expansions.values() {
            list.push(factory.create(info.geometry, info.basis_keys)?);
        }
        Ok(Self::from_expansions(list, declare_coeff_phys_arrays))
    }

    /// Create an expansion list from the expansions a mesh stores for a variable
    pub fn from_mesh_graph<M: MeshGraph2D<Geometry = G>>(
        mesh: &'a M,
        variable: Option<&str>,
        declare_coeff_phys_arrays: bool,
        ids: &mut ElementIdTracker,
    ) -> Result<Self> {
        Self::from_expansion_map(&mesh.expansions(variable), declare_coeff_phys_arrays, ids)
    }

    /// Create an expansion list in which every triangle and every quadrilateral uses the same basis
    ///
    /// The basis keys stored in `domain` are ignored. Triangles are nodal at
    /// `nodal_points` if it is a distribution over a triangle. The buffers are
    /// always declared.
    pub fn from_uniform_basis(
        triangle_basis: [BasisKey; 2],
        quadrilateral_basis: [BasisKey; 2],
        domain: &ExpansionMap<'a, G>,
        nodal_points: Option<PointsType>,
        ids: &mut ElementIdTracker,
    ) -> Result<Self> {
        if nodal_points.is_none() && triangle_basis[0].basis_type() == BasisType::GllLagrange {
            warn!("Triangles with a GLL Lagrange basis but no nodal points will be modal");
        }
        let mut factory = ExpansionFactory::new(ids);
        let list = domain
            .values()
            .map(|info| {
                factory.create_uniform(
                    info.geometry,
                    triangle_basis,
                    quadrilateral_basis,
                    nodal_points,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_expansions(list, true))
    }

    /// Create an expansion list on the faces in a set of composites of a three-dimensional mesh
    ///
    /// The basis of each face is resolved by `mesh`. Composites are visited in
    /// map order and faces in the order they are listed. The buffers are always
    /// declared.
    pub fn from_composites<M: FaceBasisResolver<Face = G>>(
        domain: &CompositeMap<'a, G>,
        mesh: &M,
        variable: Option<&str>,
        ids: &mut ElementIdTracker,
    ) -> Result<Self> {
        let mut factory = ExpansionFactory::new(ids);
        let mut list = Vec::with_capacity(domain.values().map(|c| c.len()).sum());
        for face in domain.values().flatten() {
            let basis = [
                mesh.face_basis_key(face, 0, variable),
                mesh.face_basis_key(face, 1, variable),
            ];
            list.push(factory.create(*face, basis)?);
        }
        if list.is_empty() {
            warn!("Creating an expansion list from empty composites");
        }
        Ok(Self::from_expansions(list, true))
    }
}
