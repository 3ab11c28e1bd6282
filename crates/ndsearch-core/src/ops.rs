//! Engine primitive traits that backends implement
//!
//! These are the native operations the search adapter forwards to. Each
//! backend implements them once; [`crate::SearchingOps`] layers the
//! cross-backend conventions on top.

use crate::array::Array;
use crate::dtype::DType;
use crate::Result;

/// Array creation operations
pub trait CreationOps: Sized {
    type Array: Array;

    /// Create array of zeros
    fn zeros(shape: Vec<usize>, dtype: DType) -> Self::Array;

    /// Create array filled with value
    fn full(shape: Vec<usize>, value: f64, dtype: DType) -> Self::Array;

    /// Create 1-D array from range [start, stop) with step
    fn arange(start: f64, stop: f64, step: f64, dtype: DType) -> Result<Self::Array>;

    /// Create array from row-major data, normalized to `dtype`
    fn from_vec(data: Vec<f64>, shape: Vec<usize>, dtype: DType) -> Result<Self::Array>;
}

/// Dtype conversion
pub trait CastOps {
    type Array: Array;

    /// Copy of `arr` converted to `dtype`
    fn astype(arr: &Self::Array, dtype: DType) -> Self::Array;
}

/// Array manipulation operations used for result shaping
pub trait ManipulationOps {
    type Array: Array;

    /// Insert a length-1 axis at `axis`
    fn expand_dims(arr: &Self::Array, axis: usize) -> Result<Self::Array>;

    /// Concatenate arrays along an existing axis
    fn concatenate(arrays: &[&Self::Array], axis: usize) -> Result<Self::Array>;

    /// Stack arrays along a new axis
    fn stack(arrays: &[&Self::Array], axis: usize) -> Result<Self::Array>;
}

/// Native searching primitives
///
/// Index results come back in the backend's native index dtype
/// ([`crate::Backend::INDEX_DTYPE`]).
pub trait SearchPrimitives {
    type Array: Array;

    /// Index of the maximum along `axis`, or over the flattened array
    fn argmax_axis(arr: &Self::Array, axis: Option<isize>, keepdims: bool)
        -> Result<Self::Array>;

    /// Index of the minimum along `axis`, or over the flattened array
    fn argmin_axis(arr: &Self::Array, axis: Option<isize>, keepdims: bool)
        -> Result<Self::Array>;

    /// Per-axis coordinates of non-zero elements.
    ///
    /// With `size`, every coordinate array has exactly `size` entries:
    /// padded with `fill_value` or truncated in row-major order.
    fn nonzero_padded(
        arr: &Self::Array,
        size: Option<usize>,
        fill_value: i64,
    ) -> Result<Vec<Self::Array>>;

    /// Elementwise `condition ? x : y` with broadcasting
    fn select(condition: &Self::Array, x: &Self::Array, y: &Self::Array) -> Result<Self::Array>;

    /// `(count, ndim)` coordinates of non-zero elements, row-major
    fn coordinates(arr: &Self::Array) -> Self::Array;
}
