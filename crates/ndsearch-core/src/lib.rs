//! ndsearch Core - Backend traits, dtypes and the searching adapter
//!
//! Backends implement the primitive traits in [`ops`]. The Array API
//! searching functions (`argmax`, `argmin`, `nonzero`, `where`, `argwhere`)
//! are provided for every [`Backend`] by [`SearchingOps`], which normalizes
//! index dtypes and output shapes so all backends agree.

pub mod array;
pub mod backend;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod promotion;
pub mod searching;

pub use array::{normalize_axis, Array, ArrayMeta};
pub use backend::{Backend, BackendArray};
pub use dtype::DType;
pub use error::{NdSearchError, Result};
pub use promotion::{promote_types, promote_types_of_inputs};
pub use searching::{ArgmaxOptions, ArgminOptions, NonzeroOptions, SearchOutput, SearchingOps};
