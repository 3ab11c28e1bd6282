//! NumPy-style broadcasting utilities
//!
//! Broadcasting Rules (from NumPy):
//! 1. If arrays have different number of dimensions, prepend 1s to the smaller shape
//! 2. Arrays are compatible if for each dimension:
//!    - Dimensions are equal, OR
//!    - One of them is 1
//! 3. Result dimension = max(dim1, dim2) for each axis

use ndarray::{ArrayD, IxDyn};
use ndsearch_core::{NdSearchError, Result};

/// Compute the broadcast shape of two input shapes.
///
/// # Examples
///
/// - `[3, 1] + [1, 4] → [3, 4]`
/// - `[3, 4] + [4] → [3, 4]`
/// - `[3, 4] + [2, 4] → Error (incompatible)`
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>> {
    let ndim_a = shape_a.len();
    let ndim_b = shape_b.len();
    let ndim_out = ndim_a.max(ndim_b);

    let mut result = vec![0; ndim_out];

    // Iterate from right to left (trailing dimensions)
    for i in 0..ndim_out {
        let dim_a = if i < ndim_a {
            shape_a[ndim_a - 1 - i]
        } else {
            1
        };
        let dim_b = if i < ndim_b {
            shape_b[ndim_b - 1 - i]
        } else {
            1
        };

        if dim_a == dim_b || dim_a == 1 || dim_b == 1 {
            // A length-1 axis meeting a length-0 axis broadcasts to 0
            result[ndim_out - 1 - i] = if dim_a == 1 { dim_b } else { dim_a };
        } else {
            return Err(NdSearchError::IncompatibleShapes(
                shape_a.to_vec(),
                shape_b.to_vec(),
            ));
        }
    }

    Ok(result)
}

/// Three-way select with broadcasting: `cond != 0 ? x : y`.
///
/// All three inputs are broadcast to their common shape through ndarray
/// views, so nothing is materialized besides the result.
pub fn broadcast_select(
    cond: &ArrayD<f64>,
    x: &ArrayD<f64>,
    y: &ArrayD<f64>,
) -> Result<ArrayD<f64>> {
    let shape = broadcast_shapes(cond.shape(), x.shape())?;
    let shape = broadcast_shapes(&shape, y.shape())?;
    let dim = IxDyn(&shape);

    let view_err = |from: &[usize]| {
        NdSearchError::InvalidShape(format!("Cannot broadcast shape {from:?} to {shape:?}"))
    };
    let c = cond
        .broadcast(dim.clone())
        .ok_or_else(|| view_err(cond.shape()))?;
    let a = x.broadcast(dim.clone()).ok_or_else(|| view_err(x.shape()))?;
    let b = y.broadcast(dim).ok_or_else(|| view_err(y.shape()))?;

    Ok(ndarray::Zip::from(c)
        .and(a)
        .and(b)
        .map_collect(|&c, &a, &b| if c != 0.0 { a } else { b }))
}
