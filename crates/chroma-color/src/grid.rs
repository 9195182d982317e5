//! RGB sample grids.
//!
//! Visualization callers sweep the sRGB unit cube (or a 2D slice of it) and
//! push every sample through the pipeline. These generators produce those
//! sample sets; they carry no colorimetric meaning of their own.

use chroma_core::Triple;

/// All `(res + 1)³` corner samples of the RGB unit cube at the given
/// resolution, R-major (B varies fastest).
///
/// # Example
///
/// ```rust
/// use chroma_color::grid::unit_cube;
///
/// let points = unit_cube(2);
/// assert_eq!(points.len(), 27);
/// assert_eq!(points[0], [0.0, 0.0, 0.0]);
/// assert_eq!(points[26], [1.0, 1.0, 1.0]);
/// ```
pub fn unit_cube(res: usize) -> Vec<Triple> {
    let n = res + 1;
    let step = res.max(1) as f64; // res 0 degenerates to a single black sample
    let mut points = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                points.push([i as f64 / step, j as f64 / step, k as f64 / step]);
            }
        }
    }
    points
}

/// A 2D slice of the cube at fixed blue: `(res + 1)²` samples over R and G.
pub fn slice_b(res: usize, b: f64) -> Vec<Triple> {
    let n = res + 1;
    let step = res.max(1) as f64;
    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            points.push([i as f64 / step, j as f64 / step, b]);
        }
    }
    points
}
