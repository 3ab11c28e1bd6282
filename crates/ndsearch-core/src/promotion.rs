//! Type promotion rules for binary operations

use crate::array::Array;
use crate::dtype::DType;
use crate::ops::CastOps;

/// Promote two dtypes to a common dtype for binary operations
///
/// Follows NumPy-like promotion rules:
/// - Bool loses to everything
/// - Floats always win over integers; float32 meets a 32/64-bit integer as float64
/// - Signed wins over unsigned when mixing, widened until both fit
/// - Otherwise the wider type wins
pub fn promote_types(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }
    if lhs.is_bool() {
        return rhs;
    }
    if rhs.is_bool() {
        return lhs;
    }

    if lhs.is_float() || rhs.is_float() {
        let (float, other) = if lhs.is_float() { (lhs, rhs) } else { (rhs, lhs) };
        return match (float, other) {
            (Float64, _) | (_, Float64) => Float64,
            (Float32, Int32 | Int64 | UInt32 | UInt64) => Float64,
            _ => Float32,
        };
    }

    if lhs.is_signed_int() && rhs.is_unsigned_int() {
        return promote_mixed_sign(lhs, rhs);
    }
    if rhs.is_signed_int() && lhs.is_unsigned_int() {
        return promote_mixed_sign(rhs, lhs);
    }

    if lhs.size() >= rhs.size() {
        lhs
    } else {
        rhs
    }
}

/// Cast both inputs to their promoted dtype
pub fn promote_types_of_inputs<B: CastOps>(
    x1: &B::Array,
    x2: &B::Array,
) -> (B::Array, B::Array) {
    let dtype = promote_types(x1.dtype(), x2.dtype());
    (B::astype(x1, dtype), B::astype(x2, dtype))
}

// Smallest signed type holding both; uint64 saturates at int64.
fn promote_mixed_sign(signed: DType, unsigned: DType) -> DType {
    if signed.size() > unsigned.size() {
        return signed;
    }
    match unsigned.size() {
        1 => DType::Int16,
        2 => DType::Int32,
        _ => DType::Int64,
    }
}
