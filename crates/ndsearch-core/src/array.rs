//! Abstract array type that backends implement

use crate::dtype::DType;
use crate::error::{NdSearchError, Result};
use serde::{Deserialize, Serialize};

/// Metadata about an array (backend-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayMeta {
    pub shape: Vec<usize>,
    pub dtype: DType,
    pub strides: Vec<usize>,
    pub is_contiguous: bool,
}

impl ArrayMeta {
    pub fn new(shape: Vec<usize>, dtype: DType) -> Self {
        let strides = Self::compute_strides(&shape, dtype.size());
        Self {
            shape,
            dtype,
            strides,
            is_contiguous: true,
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn nbytes(&self) -> usize {
        self.size() * self.dtype.size()
    }

    /// Same shape, different element type
    pub fn with_dtype(&self, dtype: DType) -> Self {
        Self::new(self.shape.clone(), dtype)
    }

    fn compute_strides(shape: &[usize], item_size: usize) -> Vec<usize> {
        let mut strides = vec![item_size; shape.len()];
        for i in (0..shape.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
        strides
    }
}

/// Resolve a possibly negative axis against `ndim`.
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let resolved = if axis < 0 { axis + ndim as isize } else { axis };
    if resolved < 0 || resolved as usize >= ndim {
        return Err(NdSearchError::InvalidAxis { axis, ndim });
    }
    Ok(resolved as usize)
}

/// Core array trait that all backends implement
///
/// Arrays are owned by the backend; the search adapter only reads their
/// metadata and hands them back to backend primitives.
pub trait Array: Clone + std::fmt::Debug + Send + Sync {
    /// Get array metadata
    fn meta(&self) -> &ArrayMeta;

    /// Get shape
    fn shape(&self) -> &[usize] {
        &self.meta().shape
    }

    /// Get number of dimensions
    fn ndim(&self) -> usize {
        self.meta().ndim()
    }

    /// Get total number of elements
    fn size(&self) -> usize {
        self.meta().size()
    }

    /// Get data type
    fn dtype(&self) -> DType {
        self.meta().dtype
    }

    /// Elements as f64 in row-major order (for testing/comparison)
    fn as_f64_slice(&self) -> Vec<f64>;

    /// Create a float64 array from data and shape
    fn from_f64_vec(data: Vec<f64>, shape: Vec<usize>) -> Result<Self>
    where
        Self: Sized;

    /// Get element at flat (row-major) index
    fn get_flat(&self, index: usize) -> f64;
}
