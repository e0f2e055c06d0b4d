//! Operations on the physical values of an expansion list
use super::ExpList2D;
use crate::traits::{Geometry, PointsInterpolator, VolumeMesh};
use crate::types::PointsKey;
use itertools::izip;
use num::Float;

impl<G: Geometry> ExpList2D<'_, G> {
    /// Select the forward value where the normal velocity is positive and the backward value elsewhere
    pub fn upwind<T: Float>(&self, vn: &[T], fwd: &[T], bwd: &[T], upwind: &mut [T]) {
        assert!(vn.len() >= self.npoints);
        assert!(fwd.len() >= self.npoints);
        assert!(bwd.len() >= self.npoints);
        assert!(upwind.len() >= self.npoints);
        for (i, e) in self.expansions.iter().enumerate() {
            let start = self.phys_offset(i);
            let end = start + e.npoints();
            for (u, v, f, b) in izip!(
                &mut upwind[start..end],
                &vn[start..end],
                &fwd[start..end],
                &bwd[start..end]
            ) {
                *u = if *v > T::zero() { *f } else { *b };
            }
        }
    }

    /// Fill `normals` with the outward normal of each face's left adjacent cell
    ///
    /// `normals` has one entry per coordinate component, each holding a value
    /// for every physical point of the list. The normal is taken at the points
    /// of the cell's face and interpolated onto the points of the face
    /// expansion.
    pub fn normals<M: VolumeMesh<Face = G>, I: PointsInterpolator>(
        &self,
        mesh: &M,
        interpolator: &I,
        normals: &mut [Vec<f64>],
    ) {
        let coordim = mesh.coordinate_dimension();
        assert!(
            normals.len() >= coordim,
            "Output has {} components but the mesh has {coordim} coordinates",
            normals.len()
        );
        for n in normals.iter().take(coordim) {
            assert!(n.len() >= self.npoints);
        }

        for (i, e) in self.expansions.iter().enumerate() {
            let Some(adjacent) = e.left_adjacent() else {
                panic!("Face {} has no adjacent cell", e.geometry().id());
            };
            let from = [
                mesh.face_points_key(adjacent.cell, adjacent.local_index, 0),
                mesh.face_points_key(adjacent.cell, adjacent.local_index, 1),
            ];
            let cell_normal = mesh.face_normal(adjacent.cell, adjacent.local_index);
            let start = self.phys_offset(i);
            let end = start + e.npoints();
            for (component, output) in cell_normal.iter().zip(normals.iter_mut()).take(coordim) {
                interpolator.interp_2d(from, component, e.points_keys(), &mut output[start..end]);
            }
        }
    }

    /// The points keys of element `i` with `scale` times as many points in each direction
    fn scaled_points_keys(&self, i: usize, scale: f64) -> [PointsKey; 2] {
        self.expansions[i].points_keys().map(|key| {
            let npoints = (key.npoints() as f64 * scale).floor() as usize;
            PointsKey::new(npoints, key.points_type())
        })
    }

    /// The total number of physical points after scaling every element's points by `scale`
    pub fn scaled_npoints(&self, scale: f64) -> usize {
        (0..self.exp_size())
            .map(|i| {
                let [a, b] = self.scaled_points_keys(i, scale);
                a.npoints() * b.npoints()
            })
            .sum()
    }

    /// Interpolate physical values onto point sets with `scale` times as many points
    ///
    /// Each element's values are written contiguously into `output`, in the
    /// order of the physical buffer.
    pub fn phys_interp_1d_scaled<I: PointsInterpolator>(
        &self,
        interpolator: &I,
        scale: f64,
        input: &[f64],
        output: &mut [f64],
    ) {
        assert!(input.len() >= self.npoints);
        assert!(output.len() >= self.scaled_npoints(scale));
        let mut out_offset = 0;
        for cnt in 0..self.exp_size() {
            let i = self.offset_elmt_id(cnt);
            let to = self.scaled_points_keys(i, scale);
            let nout = to[0].npoints() * to[1].npoints();
            let start = self.phys_offset(i);
            interpolator.interp_2d(
                self.expansions[i].points_keys(),
                &input[start..start + self.expansions[i].npoints()],
                to,
                &mut output[out_offset..out_offset + nout],
            );
            out_offset += nout;
        }
    }

    /// Galerkin project values on scaled point sets back onto each element's own points
    ///
    /// The inverse of [ExpList2D::phys_interp_1d_scaled]: `input` is laid out as
    /// that function's output and `output` as the physical buffer.
    pub fn phys_galerkin_projection_1d_scaled<I: PointsInterpolator>(
        &self,
        interpolator: &I,
        scale: f64,
        input: &[f64],
        output: &mut [f64],
    ) {
        assert!(input.len() >= self.scaled_npoints(scale));
        assert!(output.len() >= self.npoints);
        let mut in_offset = 0;
        for cnt in 0..self.exp_size() {
            let i = self.offset_elmt_id(cnt);
            let from = self.scaled_points_keys(i, scale);
            let nin = from[0].npoints() * from[1].npoints();
            let start = self.phys_offset(i);
            interpolator.galerkin_project_2d(
                from,
                &input[in_offset..in_offset + nin],
                self.expansions[i].points_keys(),
                &mut output[start..start + self.expansions[i].npoints()],
            );
            in_offset += nin;
        }
    }
}
