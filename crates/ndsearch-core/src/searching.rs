//! Array API searching functions
//!
//! Each function forwards to the matching [`SearchPrimitives`] call and then
//! normalizes the result: index dtype coercion, tuple vs stacked shaping and
//! optional output buffers. Nothing here inspects element values.

use crate::array::Array;
use crate::backend::{Backend, BackendArray};
use crate::dtype::DType;
use crate::error::{NdSearchError, Result};
use crate::ops::{CastOps, ManipulationOps, SearchPrimitives};
use crate::promotion::promote_types_of_inputs;
use serde::{Deserialize, Serialize};

/// Options for [`SearchingOps::argmax`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgmaxOptions {
    /// Axis to reduce; `None` searches the flattened array
    pub axis: Option<isize>,
    /// Keep the reduced axis with length one
    pub keepdims: bool,
    /// Cast the result to this dtype. Not restricted to index dtypes.
    pub output_dtype: Option<DType>,
}

/// Options for [`SearchingOps::argmin`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgminOptions {
    pub axis: Option<isize>,
    pub keepdims: bool,
    /// Requested index dtype. Anything other than int32/int64 falls back to
    /// int32; `None` keeps the native dtype if it already is one of those.
    pub dtype: Option<DType>,
}

impl Default for ArgminOptions {
    fn default() -> Self {
        Self {
            axis: None,
            keepdims: false,
            dtype: Some(DType::Int64),
        }
    }
}

/// Options for [`SearchingOps::nonzero`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonzeroOptions {
    /// Return one array per axis instead of a `(count, ndim)` array
    pub as_tuple: bool,
    /// Pad or truncate to exactly this many entries per axis
    pub size: Option<usize>,
    /// Padding value used when `size` exceeds the non-zero count
    pub fill_value: i64,
}

impl Default for NonzeroOptions {
    fn default() -> Self {
        Self {
            as_tuple: true,
            size: None,
            fill_value: 0,
        }
    }
}

/// Result of operations that return either per-axis arrays or one array
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutput<A> {
    Tuple(Vec<A>),
    Array(A),
}

impl<A> SearchOutput<A> {
    pub fn into_tuple(self) -> Option<Vec<A>> {
        match self {
            SearchOutput::Tuple(arrays) => Some(arrays),
            SearchOutput::Array(_) => None,
        }
    }

    pub fn into_array(self) -> Option<A> {
        match self {
            SearchOutput::Array(array) => Some(array),
            SearchOutput::Tuple(_) => None,
        }
    }
}

/// Standardized searching API, available on every [`Backend`]
pub trait SearchingOps: Backend {
    /// Indices of the maximum values.
    fn argmax(
        x: &BackendArray<Self>,
        opts: &ArgmaxOptions,
        out: Option<&mut BackendArray<Self>>,
    ) -> Result<BackendArray<Self>> {
        let _span = tracing::trace_span!("argmax", axis = ?opts.axis, keepdims = opts.keepdims)
            .entered();
        let mut ret = <Self as SearchPrimitives>::argmax_axis(x, opts.axis, opts.keepdims)?;
        if let Some(dtype) = opts.output_dtype {
            ret = <Self as CastOps>::astype(&ret, dtype);
        }
        write_out("argmax", &ret, out)?;
        Ok(ret)
    }

    /// Indices of the minimum values, always as int32 or int64.
    fn argmin(
        x: &BackendArray<Self>,
        opts: &ArgminOptions,
        out: Option<&mut BackendArray<Self>>,
    ) -> Result<BackendArray<Self>> {
        let _span = tracing::trace_span!("argmin", axis = ?opts.axis, keepdims = opts.keepdims)
            .entered();
        let ret = <Self as SearchPrimitives>::argmin_axis(x, opts.axis, opts.keepdims)?;
        let dtype = argmin_dtype(opts.dtype, ret.dtype());
        let ret = <Self as CastOps>::astype(&ret, dtype);
        write_out("argmin", &ret, out)?;
        Ok(ret)
    }

    /// Coordinates of the non-zero elements of `x`.
    fn nonzero(
        x: &BackendArray<Self>,
        opts: &NonzeroOptions,
    ) -> Result<SearchOutput<BackendArray<Self>>> {
        let _span = tracing::trace_span!("nonzero", as_tuple = opts.as_tuple, size = ?opts.size)
            .entered();
        let res = <Self as SearchPrimitives>::nonzero_padded(x, opts.size, opts.fill_value)?;
        if opts.as_tuple {
            return Ok(SearchOutput::Tuple(res));
        }
        let refs: Vec<&BackendArray<Self>> = res.iter().collect();
        Ok(SearchOutput::Array(<Self as ManipulationOps>::stack(&refs, 1)?))
    }

    /// Select from `x1` where `condition` holds, else from `x2`.
    ///
    /// With neither `x1` nor `x2` this is `nonzero(condition)` as a tuple.
    /// `out` only applies to the three-argument form.
    fn where_cond(
        condition: &BackendArray<Self>,
        x1: Option<&BackendArray<Self>>,
        x2: Option<&BackendArray<Self>>,
        out: Option<&mut BackendArray<Self>>,
    ) -> Result<SearchOutput<BackendArray<Self>>> {
        let _span = tracing::trace_span!("where").entered();
        match (x1, x2) {
            (None, None) => {
                if out.is_some() {
                    return Err(NdSearchError::InvalidArgument(
                        "where with only a condition returns a tuple and cannot write to out"
                            .to_string(),
                    ));
                }
                let res = <Self as SearchPrimitives>::nonzero_padded(condition, None, 0)?;
                Ok(SearchOutput::Tuple(res))
            }
            (Some(x1), Some(x2)) => {
                let (x1, x2) = promote_types_of_inputs::<Self>(x1, x2);
                let ret = <Self as SearchPrimitives>::select(condition, &x1, &x2)?;
                let ret = <Self as CastOps>::astype(&ret, x1.dtype());
                write_out("where", &ret, out)?;
                Ok(SearchOutput::Array(ret))
            }
            _ => Err(NdSearchError::InvalidArgument(
                "where requires both x1 and x2, or neither".to_string(),
            )),
        }
    }

    /// `(count, ndim)` coordinates of the non-zero elements of `x`.
    fn argwhere(
        x: &BackendArray<Self>,
        out: Option<&mut BackendArray<Self>>,
    ) -> Result<BackendArray<Self>> {
        let _span = tracing::trace_span!("argwhere").entered();
        let ret = <Self as SearchPrimitives>::coordinates(x);
        write_out("argwhere", &ret, out)?;
        Ok(ret)
    }
}

impl<B: Backend> SearchingOps for B {}

/// Dtype argmin returns for a requested dtype and the native result dtype.
pub fn argmin_dtype(requested: Option<DType>, native: DType) -> DType {
    match requested {
        Some(dtype) if dtype.is_index() => dtype,
        Some(dtype) => {
            tracing::trace!(requested = %dtype, "argmin dtype is not an index dtype, using int32");
            DType::Int32
        }
        None if native.is_index() => native,
        None => {
            tracing::trace!(native = %native, "native argmin dtype is not an index dtype, using int32");
            DType::Int32
        }
    }
}

fn write_out<A: Array>(op: &'static str, result: &A, out: Option<&mut A>) -> Result<()> {
    let Some(out) = out else {
        return Ok(());
    };
    if out.shape() != result.shape() {
        return Err(NdSearchError::OutShapeMismatch {
            expected: result.shape().to_vec(),
            got: out.shape().to_vec(),
        });
    }
    tracing::debug!(op, shape = ?result.shape(), dtype = %result.dtype(), "writing into out");
    *out = result.clone();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmin_dtype_requested_index_dtype() {
        assert_eq!(argmin_dtype(Some(DType::Int64), DType::Int32), DType::Int64);
        assert_eq!(argmin_dtype(Some(DType::Int32), DType::Int64), DType::Int32);
    }

    #[test]
    fn test_argmin_dtype_falls_back_to_int32() {
        for dtype in DType::ALL.into_iter().filter(|dt| !dt.is_index()) {
            assert_eq!(argmin_dtype(Some(dtype), DType::Int64), DType::Int32);
            assert_eq!(argmin_dtype(None, dtype), DType::Int32);
        }
    }

    #[test]
    fn test_argmin_dtype_none_keeps_native_index() {
        assert_eq!(argmin_dtype(None, DType::Int64), DType::Int64);
        assert_eq!(argmin_dtype(None, DType::Int32), DType::Int32);
    }

    #[test]
    fn test_option_defaults() {
        let argmin = ArgminOptions::default();
        assert_eq!(argmin.dtype, Some(DType::Int64));
        assert!(!argmin.keepdims);
        assert!(NonzeroOptions::default().as_tuple);
        assert_eq!(ArgmaxOptions::default().output_dtype, None);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: ArgminOptions = serde_json::from_str(r#"{"axis": -1}"#).unwrap();
        assert_eq!(opts.axis, Some(-1));
        assert_eq!(opts.dtype, Some(DType::Int64));

        let opts: ArgminOptions = serde_json::from_str(r#"{"dtype": null}"#).unwrap();
        assert_eq!(opts.dtype, None);

        let opts: NonzeroOptions =
            serde_json::from_str(r#"{"as_tuple": false, "size": 4, "fill_value": -1}"#).unwrap();
        assert_eq!(
            opts,
            NonzeroOptions {
                as_tuple: false,
                size: Some(4),
                fill_value: -1
            }
        );

        let opts: ArgmaxOptions = serde_json::from_str(r#"{"output_dtype": "int16"}"#).unwrap();
        assert_eq!(opts.output_dtype, Some(DType::Int16));
    }

    #[test]
    fn test_search_output_accessors() {
        let tuple: SearchOutput<u8> = SearchOutput::Tuple(vec![1, 2]);
        assert_eq!(tuple.clone().into_tuple(), Some(vec![1, 2]));
        assert_eq!(tuple.into_array(), None);
        assert_eq!(SearchOutput::Array(3u8).into_array(), Some(3));
    }
}
