//! Parallel batch conversion.
//!
//! Conversions are pure per-value functions, so a batch is embarrassingly
//! parallel: the route is computed once and mapped over the slice with
//! rayon. Per-value semantics are identical to the scalar
//! [`convert()`](crate::convert()).

use chroma_core::{Space, Triple};
use rayon::prelude::*;

use crate::Conversion;

/// Converts every triple in a slice from one space to another, in parallel.
///
/// # Example
///
/// ```rust
/// use chroma_color::batch::convert_slice;
/// use chroma_color::{grid, Space};
///
/// let points = grid::unit_cube(4);
/// let labs = convert_slice(&points, Space::Srgb, Space::Lab);
/// assert_eq!(labs.len(), points.len());
/// ```
pub fn convert_slice(values: &[Triple], from: Space, to: Space) -> Vec<Triple> {
    let conversion = Conversion::route(from, to);
    values.par_iter().map(|&v| conversion.apply(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, grid};

    #[test]
    fn test_matches_scalar_path() {
        let points = grid::unit_cube(6);
        let batch = convert_slice(&points, Space::Srgb, Space::Lab);
        for (point, lab) in points.iter().zip(&batch) {
            let scalar = convert(*point, Space::Srgb, Space::Lab);
            for c in 0..3 {
                // Bit-identical: same pure function, same inputs
                assert_eq!(lab[c], scalar[c]);
            }
        }
    }

    #[test]
    fn test_empty_slice() {
        let out = convert_slice(&[], Space::Srgb, Space::Hsv);
        assert!(out.is_empty());
    }
}
