//! Native searching primitives for CPU backend

use crate::broadcast::broadcast_select;
use crate::{CpuArray, CpuBackend, INDEX_DTYPE};
use ndarray::{Array1, Array2, ArrayD, Axis, Dimension, IxDyn, Zip};
use ndsearch_core::{
    normalize_axis, ops::SearchPrimitives, promote_types, Array, NdSearchError, Result,
};

/// Position of the extreme value; ties keep the first, NaN always wins.
fn arg_extreme<'a, I>(mut values: I, better: fn(f64, f64) -> bool) -> usize
where
    I: Iterator<Item = &'a f64>,
{
    let Some(&first) = values.next() else {
        return 0;
    };
    if first.is_nan() {
        return 0;
    }
    let (mut best_idx, mut best) = (0, first);
    for (i, &v) in values.enumerate() {
        if v.is_nan() {
            return i + 1;
        }
        if better(v, best) {
            best_idx = i + 1;
            best = v;
        }
    }
    best_idx
}

fn arg_reduce(
    arr: &CpuArray,
    axis: Option<isize>,
    keepdims: bool,
    op: &'static str,
    better: fn(f64, f64) -> bool,
) -> Result<CpuArray> {
    let data = arr.as_ndarray();

    let Some(axis) = axis else {
        if data.is_empty() {
            return Err(NdSearchError::EmptyReduction { op });
        }
        let idx = arg_extreme(data.iter(), better) as f64;
        let shape = if keepdims { vec![1; data.ndim()] } else { vec![] };
        return Ok(CpuArray::from_ndarray_typed(
            ArrayD::from_elem(IxDyn(&shape), idx),
            INDEX_DTYPE,
        ));
    };

    let ax = normalize_axis(axis, data.ndim())?;
    if data.shape()[ax] == 0 {
        return Err(NdSearchError::EmptyReduction { op });
    }

    let mut result = Zip::from(data.lanes(Axis(ax)))
        .map_collect(|lane| arg_extreme(lane.iter(), better) as f64);
    if keepdims {
        result = result.insert_axis(Axis(ax));
    }
    Ok(CpuArray::from_ndarray_typed(result, INDEX_DTYPE))
}

impl SearchPrimitives for CpuBackend {
    type Array = CpuArray;

    fn argmax_axis(arr: &CpuArray, axis: Option<isize>, keepdims: bool) -> Result<CpuArray> {
        arg_reduce(arr, axis, keepdims, "argmax", |v, best| v > best)
    }

    fn argmin_axis(arr: &CpuArray, axis: Option<isize>, keepdims: bool) -> Result<CpuArray> {
        arg_reduce(arr, axis, keepdims, "argmin", |v, best| v < best)
    }

    fn nonzero_padded(
        arr: &CpuArray,
        size: Option<usize>,
        fill_value: i64,
    ) -> Result<Vec<CpuArray>> {
        let data = arr.as_ndarray();
        let ndim = data.ndim();
        if ndim == 0 {
            return Err(NdSearchError::InvalidArgument(
                "Calling nonzero on 0d arrays is not allowed; use argwhere instead".to_string(),
            ));
        }

        let mut indices: Vec<Vec<f64>> = vec![Vec::new(); ndim];
        for (idx, &val) in data.indexed_iter() {
            if val != 0.0 {
                for (d, axis_indices) in indices.iter_mut().enumerate() {
                    axis_indices.push(idx[d] as f64);
                }
            }
        }

        if let Some(size) = size {
            for axis_indices in &mut indices {
                axis_indices.resize(size, fill_value as f64);
            }
        }

        Ok(indices
            .into_iter()
            .map(|idx| CpuArray::from_ndarray_typed(Array1::from(idx).into_dyn(), INDEX_DTYPE))
            .collect())
    }

    fn select(condition: &CpuArray, x: &CpuArray, y: &CpuArray) -> Result<CpuArray> {
        let dtype = promote_types(x.dtype(), y.dtype());
        let result = broadcast_select(condition.as_ndarray(), x.as_ndarray(), y.as_ndarray())?;
        Ok(CpuArray::from_ndarray_typed(result, dtype))
    }

    fn coordinates(arr: &CpuArray) -> CpuArray {
        let data = arr.as_ndarray();
        let ndim = data.ndim();

        let mut flat: Vec<usize> = Vec::new();
        let mut count = 0;
        for (idx, &val) in data.indexed_iter() {
            if val != 0.0 {
                flat.extend_from_slice(idx.slice());
                count += 1;
            }
        }

        let coords = Array2::from_shape_fn((count, ndim), |(i, j)| flat[i * ndim + j] as f64);
        CpuArray::from_ndarray_typed(coords.into_dyn(), INDEX_DTYPE)
    }
}
