//! CPU Array implementation using ndarray

use ndarray::{ArrayD, IxDyn};
use ndsearch_core::{Array, ArrayMeta, DType, NdSearchError, Result};

/// CPU-backed N-dimensional array
///
/// Values are held as `f64`; `meta.dtype` is authoritative and every
/// constructor normalizes the stored values to that dtype's value set.
#[derive(Debug, Clone)]
pub struct CpuArray {
    data: ArrayD<f64>,
    meta: ArrayMeta,
}

impl CpuArray {
    /// Create from ndarray, normalizing values to `dtype`
    pub fn from_ndarray_typed(data: ArrayD<f64>, dtype: DType) -> Self {
        let data = if dtype == DType::Float64 {
            data
        } else {
            data.mapv(|v| dtype.normalize(v))
        };
        let meta = ArrayMeta::new(data.shape().to_vec(), dtype);
        Self { data, meta }
    }

    /// Create from row-major data, normalizing values to `dtype`
    pub fn from_vec_typed(data: Vec<f64>, shape: Vec<usize>, dtype: DType) -> Result<Self> {
        let expected_size: usize = shape.iter().product();
        if data.len() != expected_size {
            return Err(NdSearchError::InvalidShape(format!(
                "Data length {} doesn't match shape {:?} (expected {})",
                data.len(),
                shape,
                expected_size
            )));
        }

        let arr = ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| NdSearchError::InvalidShape(e.to_string()))?;
        Ok(Self::from_ndarray_typed(arr, dtype))
    }

    /// Get underlying ndarray reference
    pub fn as_ndarray(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Copy converted to `dtype`
    pub fn cast(&self, dtype: DType) -> Self {
        if dtype == self.dtype() {
            return self.clone();
        }
        Self::from_ndarray_typed(self.data.clone(), dtype)
    }

    /// Create from shape with fill value
    pub fn full(shape: Vec<usize>, value: f64, dtype: DType) -> Self {
        Self::from_ndarray_typed(ArrayD::from_elem(IxDyn(&shape), value), dtype)
    }
}

impl Array for CpuArray {
    fn meta(&self) -> &ArrayMeta {
        &self.meta
    }

    fn as_f64_slice(&self) -> Vec<f64> {
        self.data.iter().cloned().collect()
    }

    fn from_f64_vec(data: Vec<f64>, shape: Vec<usize>) -> Result<Self> {
        Self::from_vec_typed(data, shape, DType::Float64)
    }

    fn get_flat(&self, index: usize) -> f64 {
        self.data.iter().nth(index).cloned().unwrap_or(f64::NAN)
    }
}

// Implement PartialEq for testing
impl PartialEq for CpuArray {
    fn eq(&self, other: &Self) -> bool {
        self.dtype() == other.dtype()
            && self.shape() == other.shape()
            && self.as_f64_slice() == other.as_f64_slice()
    }
}
