//! Error types for ndsearch

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NdSearchError {
    #[error("Incompatible shapes for operation: {0:?} and {1:?}")]
    IncompatibleShapes(Vec<usize>, Vec<usize>),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid axis: {axis} for array with {ndim} dimensions")]
    InvalidAxis { axis: isize, ndim: usize },

    #[error("Attempt to get {op} of an empty sequence")]
    EmptyReduction { op: &'static str },

    #[error("Output buffer has shape {got:?}, expected {expected:?}")]
    OutShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, NdSearchError>;
