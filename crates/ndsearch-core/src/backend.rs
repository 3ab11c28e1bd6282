//! Backend trait that combines all operations

use crate::dtype::DType;
use crate::ops::*;

/// Array type of a backend
pub type BackendArray<B> = <B as CreationOps>::Array;

/// A complete backend implementation
///
/// Backends implement the individual primitive traits; every `Backend`
/// automatically gets the search adapter through [`crate::SearchingOps`].
pub trait Backend:
    CreationOps
    + CastOps<Array = <Self as CreationOps>::Array>
    + ManipulationOps<Array = <Self as CreationOps>::Array>
    + SearchPrimitives<Array = <Self as CreationOps>::Array>
{
    /// Dtype the native search primitives return indices in
    const INDEX_DTYPE: DType;

    /// Backend name for identification
    fn name() -> &'static str;

    /// Backend version
    fn version() -> &'static str;
}
