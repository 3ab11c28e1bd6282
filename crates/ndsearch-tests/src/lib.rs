//! Shared test suite for ndsearch backends
//!
//! Conformance tests for the searching adapter, written against the CPU
//! backend. Expected values follow NumPy / Array API behavior.

pub mod argmax;
pub mod argmin;
pub mod argwhere;
pub mod nonzero;
pub mod properties;
pub mod where_cond;

/// Test utilities
pub mod utils {
    use ndsearch_core::Array;

    /// Row-major multi-index of `flat` in `shape`
    pub fn unravel(mut flat: usize, shape: &[usize]) -> Vec<usize> {
        let mut index = vec![0; shape.len()];
        for d in (0..shape.len()).rev() {
            index[d] = flat % shape[d];
            flat /= shape[d];
        }
        index
    }

    /// Row-major flat offset of `index` in `shape`
    pub fn ravel(index: &[usize], shape: &[usize]) -> usize {
        index
            .iter()
            .zip(shape)
            .fold(0, |acc, (&i, &dim)| acc * dim + i)
    }

    /// Values of `arr` along `axis` at position `reduced` of the reduced
    /// (keepdims) shape.
    pub fn lane<A: Array>(arr: &A, axis: usize, reduced: usize) -> Vec<f64> {
        let shape = arr.shape();
        let mut reduced_shape = shape.to_vec();
        reduced_shape[axis] = 1;
        let mut index = unravel(reduced, &reduced_shape);
        (0..shape[axis])
            .map(|k| {
                index[axis] = k;
                arr.get_flat(ravel(&index, shape))
            })
            .collect()
    }

    /// Element values as i64 (for index arrays)
    pub fn as_indices<A: Array>(arr: &A) -> Vec<i64> {
        arr.as_f64_slice().iter().map(|&v| v as i64).collect()
    }

    /// Install a fmt subscriber honoring `RUST_LOG`, once per process
    #[cfg(test)]
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Macro to generate parameterized tests for different backends
#[macro_export]
macro_rules! backend_tests {
    ($backend:ty, $test_name:ident, $body:block) => {
        #[test]
        fn $test_name() {
            type B = $backend;
            $body
        }
    };
}
