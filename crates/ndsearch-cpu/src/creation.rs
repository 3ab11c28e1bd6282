//! Array creation and dtype casting for CPU backend

use crate::{CpuArray, CpuBackend};
use ndarray::{ArrayD, IxDyn};
use ndsearch_core::{
    ops::{CastOps, CreationOps},
    DType, NdSearchError, Result,
};

impl CreationOps for CpuBackend {
    type Array = CpuArray;

    fn zeros(shape: Vec<usize>, dtype: DType) -> CpuArray {
        CpuArray::full(shape, 0.0, dtype)
    }

    fn full(shape: Vec<usize>, value: f64, dtype: DType) -> CpuArray {
        CpuArray::full(shape, value, dtype)
    }

    fn arange(start: f64, stop: f64, step: f64, dtype: DType) -> Result<CpuArray> {
        if step == 0.0 {
            return Err(NdSearchError::InvalidArgument(
                "Step cannot be zero".to_string(),
            ));
        }

        if (step > 0.0 && start >= stop) || (step < 0.0 && start <= stop) {
            return Ok(CpuArray::from_ndarray_typed(ArrayD::zeros(IxDyn(&[0])), dtype));
        }

        let n = ((stop - start) / step).ceil() as usize;
        let values: Vec<f64> = (0..n).map(|i| start + (i as f64) * step).collect();
        CpuArray::from_vec_typed(values, vec![n], dtype)
    }

    fn from_vec(data: Vec<f64>, shape: Vec<usize>, dtype: DType) -> Result<CpuArray> {
        CpuArray::from_vec_typed(data, shape, dtype)
    }
}

impl CastOps for CpuBackend {
    type Array = CpuArray;

    fn astype(arr: &CpuArray, dtype: DType) -> CpuArray {
        arr.cast(dtype)
    }
}
