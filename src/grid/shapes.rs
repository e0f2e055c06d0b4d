//! Definition of various test shapes.
use crate::grid::{VolumeGrid, VolumeGridBuilder};
use crate::types::{BasisKey, ReferenceCellType};

/// Create a box of `nx` by `ny` by `nz` unit hexahedra
///
/// Faces normal to x are numbered first, then faces normal to y, then faces
/// normal to z, each set with x running fastest. Cell `i + nx * (j + ny * k)`
/// is the cell at position (i, j, k). Every cell requests `basis` on its faces.
pub fn hexahedral_box(nx: usize, ny: usize, nz: usize, basis: [BasisKey; 2]) -> VolumeGrid {
    assert!(nx > 0 && ny > 0 && nz > 0);
    let nxfaces = (nx + 1) * ny * nz;
    let nyfaces = nx * (ny + 1) * nz;
    let nzfaces = nx * ny * (nz + 1);

    let xface = |i: usize, j: usize, k: usize| i + (nx + 1) * (j + ny * k);
    let yface = |i: usize, j: usize, k: usize| nxfaces + i + nx * (j + (ny + 1) * k);
    let zface = |i: usize, j: usize, k: usize| nxfaces + nyfaces + i + nx * (j + ny * k);

    let mut b = VolumeGridBuilder::new_with_capacity(nxfaces + nyfaces + nzfaces, nx * ny * nz);
    for id in 0..nxfaces + nyfaces + nzfaces {
        b.add_face(id, ReferenceCellType::Quadrilateral);
    }
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let id = i + nx * (j + ny * k);
                b.add_cell(
                    id,
                    (
                        ReferenceCellType::Hexahedron,
                        vec![
                            zface(i, j, k),
                            yface(i, j, k),
                            xface(i, j, k),
                            xface(i + 1, j, k),
                            yface(i, j + 1, k),
                            zface(i, j, k + 1),
                        ],
                        basis,
                    ),
                );
                b.set_face_normals(
                    id,
                    vec![
                        [0.0, 0.0, -1.0],
                        [0.0, -1.0, 0.0],
                        [-1.0, 0.0, 0.0],
                        [1.0, 0.0, 0.0],
                        [0.0, 1.0, 0.0],
                        [0.0, 0.0, 1.0],
                    ],
                );
            }
        }
    }
    b.create_grid()
}

/// Create a column of `nz` triangular prisms stacked in the z direction
///
/// The triangular faces are numbered `0..=nz` from the bottom up; the three
/// quadrilateral faces of prism `k` are `nz + 1 + 3 * k + s`. Every cell
/// requests `basis` on its faces.
pub fn prism_column(nz: usize, basis: [BasisKey; 2]) -> VolumeGrid {
    assert!(nz > 0);
    let ntriangles = nz + 1;
    let mut b = VolumeGridBuilder::new_with_capacity(ntriangles + 3 * nz, nz);
    for id in 0..ntriangles {
        b.add_face(id, ReferenceCellType::Triangle);
    }
    for id in ntriangles..ntriangles + 3 * nz {
        b.add_face(id, ReferenceCellType::Quadrilateral);
    }
    let diagonal = 0.5f64.sqrt();
    for k in 0..nz {
        let side = ntriangles + 3 * k;
        b.add_cell(
            k,
            (
                ReferenceCellType::Prism,
                vec![k, side, side + 1, side + 2, k + 1],
                basis,
            ),
        );
        b.set_face_normals(
            k,
            vec![
                [0.0, 0.0, -1.0],
                [0.0, -1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [diagonal, diagonal, 0.0],
                [0.0, 0.0, 1.0],
            ],
        );
    }
    b.create_grid()
}
