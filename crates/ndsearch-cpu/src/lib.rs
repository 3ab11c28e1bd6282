//! CPU Backend for ndsearch
//!
//! Uses ndarray for storage and iteration. Native index results are int64,
//! or int32 with the `index-i32` feature.

mod array;
mod broadcast;
mod creation;
mod manipulation;
mod search;

pub use array::CpuArray;
pub use broadcast::{broadcast_select, broadcast_shapes};

use ndsearch_core::{Backend, DType};

#[cfg(not(feature = "index-i32"))]
pub(crate) const INDEX_DTYPE: DType = DType::Int64;

#[cfg(feature = "index-i32")]
pub(crate) const INDEX_DTYPE: DType = DType::Int32;

/// CPU backend using ndarray
pub struct CpuBackend;

impl Backend for CpuBackend {
    const INDEX_DTYPE: DType = INDEX_DTYPE;

    fn name() -> &'static str {
        "cpu"
    }

    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

// Re-export the array type
pub type Array = CpuArray;
