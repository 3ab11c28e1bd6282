//! where tests - selection, promotion and the one-argument form

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use ndsearch_core::{
        ops::CreationOps, Array, DType, NdSearchError, NonzeroOptions, SearchOutput, SearchingOps,
    };
    use ndsearch_cpu::{CpuArray, CpuBackend};

    fn typed(data: Vec<f64>, shape: Vec<usize>, dtype: DType) -> CpuArray {
        CpuBackend::from_vec(data, shape, dtype).unwrap()
    }

    fn select(c: &CpuArray, x1: &CpuArray, x2: &CpuArray) -> CpuArray {
        CpuBackend::where_cond(c, Some(x1), Some(x2), None)
            .unwrap()
            .into_array()
            .unwrap()
    }

    #[test]
    fn test_where_selects_elementwise() {
        let c = typed(vec![1.0, 0.0, 1.0, 0.0], vec![2, 2], DType::Bool);
        let x1 = typed(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2], DType::Float64);
        let x2 = typed(vec![-1.0, -2.0, -3.0, -4.0], vec![2, 2], DType::Float64);
        let r = select(&c, &x1, &x2);
        assert_eq!(r.shape(), &[2, 2]);
        assert_eq!(r.as_f64_slice(), vec![1.0, -2.0, 3.0, -4.0]);
        assert_eq!(r.dtype(), DType::Float64);
    }

    #[test]
    fn test_where_promotes_mixed_dtypes() {
        let c = typed(vec![0.0, 1.0], vec![2], DType::Bool);
        let x1 = typed(vec![1.0, 2.0], vec![2], DType::Int32);
        let x2 = typed(vec![0.5, 0.5], vec![2], DType::Float32);
        let r = select(&c, &x1, &x2);
        assert_eq!(r.dtype(), DType::Float64);
        assert_eq!(r.as_f64_slice(), vec![0.5, 2.0]);

        let x1 = typed(vec![200.0, 7.0], vec![2], DType::UInt8);
        let x2 = typed(vec![-3.0, -3.0], vec![2], DType::Int8);
        let r = select(&c, &x1, &x2);
        assert_eq!(r.dtype(), DType::Int16);
        assert_eq!(r.as_f64_slice(), vec![-3.0, 7.0]);
    }

    #[test]
    fn test_where_broadcasts() {
        let c = typed(vec![1.0, 0.0, 1.0], vec![3, 1], DType::Bool);
        let x1 = typed(vec![1.0, 2.0], vec![2], DType::Int64);
        let x2 = typed(vec![0.0], vec![], DType::Int64);
        let r = select(&c, &x1, &x2);
        assert_eq!(r.shape(), &[3, 2]);
        assert_eq!(r.as_f64_slice(), vec![1.0, 2.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_where_numeric_condition() {
        let c = typed(vec![0.0, -2.5, f64::NAN], vec![3], DType::Float64);
        let x1 = typed(vec![1.0; 3], vec![3], DType::Int32);
        let x2 = typed(vec![0.0; 3], vec![3], DType::Int32);
        assert_eq!(select(&c, &x1, &x2).as_f64_slice(), vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_where_condition_only_matches_nonzero() {
        let c = typed(vec![0.0, 1.0, 1.0, 0.0, 0.0, 1.0], vec![3, 2], DType::Bool);
        let res = CpuBackend::where_cond(&c, None, None, None).unwrap();
        let expected = CpuBackend::nonzero(&c, &NonzeroOptions::default()).unwrap();
        assert_eq!(res, expected);
        let SearchOutput::Tuple(coords) = res else {
            panic!("expected per-axis coordinates");
        };
        assert_eq!(as_indices(&coords[0]), vec![0, 1, 2]);
        assert_eq!(as_indices(&coords[1]), vec![1, 0, 1]);
    }

    #[test]
    fn test_where_requires_both_operands() {
        let c = typed(vec![1.0], vec![1], DType::Bool);
        let x = typed(vec![1.0], vec![1], DType::Int32);
        assert!(matches!(
            CpuBackend::where_cond(&c, Some(&x), None, None),
            Err(NdSearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            CpuBackend::where_cond(&c, None, Some(&x), None),
            Err(NdSearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_where_writes_out() {
        let c = typed(vec![1.0, 0.0], vec![2], DType::Bool);
        let x1 = typed(vec![1.0, 2.0], vec![2], DType::Int16);
        let x2 = typed(vec![9.0, 9.0], vec![2], DType::Int16);
        let mut out = CpuBackend::zeros(vec![2], DType::Float64);
        let r = CpuBackend::where_cond(&c, Some(&x1), Some(&x2), Some(&mut out))
            .unwrap()
            .into_array()
            .unwrap();
        assert_eq!(out, r);
        assert_eq!(out.dtype(), DType::Int16);
        assert_eq!(out.as_f64_slice(), vec![1.0, 9.0]);
    }

    #[test]
    fn test_where_condition_only_rejects_out() {
        let c = typed(vec![1.0], vec![1], DType::Bool);
        let mut out = CpuBackend::zeros(vec![1], DType::Int64);
        assert!(CpuBackend::where_cond(&c, None, None, Some(&mut out)).is_err());
    }

    #[test]
    fn test_where_incompatible_shapes() {
        let c = typed(vec![1.0; 3], vec![3], DType::Bool);
        let x1 = typed(vec![1.0; 2], vec![2], DType::Int32);
        let x2 = typed(vec![1.0; 2], vec![2], DType::Int32);
        assert!(matches!(
            CpuBackend::where_cond(&c, Some(&x1), Some(&x2), None),
            Err(NdSearchError::IncompatibleShapes(_, _))
        ));
    }
}
