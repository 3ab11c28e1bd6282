//! Array manipulation operations for CPU backend

use crate::{CpuArray, CpuBackend};
use ndarray::Axis;
use ndsearch_core::{ops::ManipulationOps, promote_types, Array, NdSearchError, Result};

impl ManipulationOps for CpuBackend {
    type Array = CpuArray;

    fn expand_dims(arr: &CpuArray, axis: usize) -> Result<CpuArray> {
        if axis > arr.ndim() {
            return Err(NdSearchError::InvalidAxis {
                axis: axis as isize,
                ndim: arr.ndim(),
            });
        }
        let data = arr.as_ndarray().clone().insert_axis(Axis(axis));
        Ok(CpuArray::from_ndarray_typed(data, arr.dtype()))
    }

    fn concatenate(arrays: &[&CpuArray], axis: usize) -> Result<CpuArray> {
        if arrays.is_empty() {
            return Err(NdSearchError::InvalidArgument(
                "Cannot concatenate empty array list".to_string(),
            ));
        }

        let first_shape = arrays[0].shape();
        if axis >= first_shape.len() {
            return Err(NdSearchError::InvalidAxis {
                axis: axis as isize,
                ndim: first_shape.len(),
            });
        }

        // Verify all arrays have compatible shapes
        for arr in arrays.iter().skip(1) {
            let shape = arr.shape();
            if shape.len() != first_shape.len() {
                return Err(NdSearchError::IncompatibleShapes(
                    first_shape.to_vec(),
                    shape.to_vec(),
                ));
            }
            for (i, (&s1, &s2)) in first_shape.iter().zip(shape.iter()).enumerate() {
                if i != axis && s1 != s2 {
                    return Err(NdSearchError::IncompatibleShapes(
                        first_shape.to_vec(),
                        shape.to_vec(),
                    ));
                }
            }
        }

        let dtype = arrays
            .iter()
            .skip(1)
            .fold(arrays[0].dtype(), |acc, a| promote_types(acc, a.dtype()));

        let nd_arrays: Vec<_> = arrays.iter().map(|a| a.as_ndarray().view()).collect();
        let result = ndarray::concatenate(Axis(axis), &nd_arrays)
            .map_err(|e| NdSearchError::InvalidArgument(e.to_string()))?;

        Ok(CpuArray::from_ndarray_typed(result, dtype))
    }

    fn stack(arrays: &[&CpuArray], axis: usize) -> Result<CpuArray> {
        if arrays.is_empty() {
            return Err(NdSearchError::InvalidArgument(
                "Cannot stack empty array list".to_string(),
            ));
        }

        let first_shape = arrays[0].shape();
        for arr in arrays.iter().skip(1) {
            if arr.shape() != first_shape {
                return Err(NdSearchError::IncompatibleShapes(
                    first_shape.to_vec(),
                    arr.shape().to_vec(),
                ));
            }
        }

        // Expand dims then concatenate
        let expanded = arrays
            .iter()
            .map(|a| Self::expand_dims(a, axis))
            .collect::<Result<Vec<CpuArray>>>()?;
        let refs: Vec<&CpuArray> = expanded.iter().collect();
        Self::concatenate(&refs, axis)
    }
}
