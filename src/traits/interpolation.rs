//! Point-to-point operators
use crate::types::PointsKey;

/// Transfer of values between two tensor-product point distributions on the same cell
pub trait PointsInterpolator {
    /// Interpolate values sampled at the points `from` onto the points `to`
    ///
    /// `input` has `from[0].npoints() * from[1].npoints()` entries and `output`
    /// has `to[0].npoints() * to[1].npoints()` entries, with the first direction
    /// running fastest.
    fn interp_2d(
        &self,
        from: [PointsKey; 2],
        input: &[f64],
        to: [PointsKey; 2],
        output: &mut [f64],
    );

    /// Galerkin project values sampled at the points `from` onto the points `to`
    ///
    /// Buffer sizes are as for [PointsInterpolator::interp_2d].
    fn galerkin_project_2d(
        &self,
        from: [PointsKey; 2],
        input: &[f64],
        to: [PointsKey; 2],
        output: &mut [f64],
    );
}
