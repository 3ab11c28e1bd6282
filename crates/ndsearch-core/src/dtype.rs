//! Data types supported by ndsearch

use crate::error::NdSearchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported element types
///
/// Names serialize to their NumPy spelling (`"int32"`, `"float64"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl DType {
    /// All dtypes, narrowest first within each kind
    pub const ALL: [DType; 11] = [
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
        DType::Float32,
        DType::Float64,
    ];

    /// Size in bytes
    pub fn size(&self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Float32 | DType::Int32 | DType::UInt32 => 4,
            DType::Float64 | DType::Int64 | DType::UInt64 => 8,
        }
    }

    /// String representation (NumPy compatible)
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, DType::Bool)
    }

    pub fn is_signed_int(&self) -> bool {
        matches!(self, DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64)
    }

    pub fn is_unsigned_int(&self) -> bool {
        matches!(
            self,
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64
        )
    }

    pub fn is_int(&self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Whether this dtype is an accepted index dtype (int32 or int64)
    pub fn is_index(&self) -> bool {
        matches!(self, DType::Int32 | DType::Int64)
    }

    /// Map an `f64` onto this dtype's value set.
    ///
    /// Integers truncate toward zero and wrap to their width (NaN becomes 0),
    /// `Bool` maps any non-zero value (NaN included) to 1, and `Float32`
    /// rounds through `f32`.
    pub fn normalize(&self, value: f64) -> f64 {
        match self {
            DType::Bool => {
                if value != 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            DType::Int8 => (value as i64) as i8 as f64,
            DType::Int16 => (value as i64) as i16 as f64,
            DType::Int32 => (value as i64) as i32 as f64,
            DType::Int64 => (value as i64) as f64,
            DType::UInt8 => (value as i64) as u8 as f64,
            DType::UInt16 => (value as i64) as u16 as f64,
            DType::UInt32 => (value as i64) as u32 as f64,
            DType::UInt64 => {
                if value < 0.0 {
                    (value as i64) as u64 as f64
                } else {
                    value as u64 as f64
                }
            }
            DType::Float32 => value as f32 as f64,
            DType::Float64 => value,
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DType {
    type Err = NdSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| NdSearchError::InvalidArgument(format!("Unknown dtype: {s}")))
    }
}

impl Default for DType {
    fn default() -> Self {
        DType::Float64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_names() {
        for dt in DType::ALL {
            assert_eq!(dt.as_str().parse::<DType>().unwrap(), dt);
        }
        assert!("complex64".parse::<DType>().is_err());
    }

    #[test]
    fn test_serde_uses_numpy_names() {
        assert_eq!(serde_json::to_string(&DType::UInt16).unwrap(), "\"uint16\"");
        let dt: DType = serde_json::from_str("\"int32\"").unwrap();
        assert_eq!(dt, DType::Int32);
    }

    #[test]
    fn test_normalize_integers_truncate_and_wrap() {
        assert_eq!(DType::Int32.normalize(2.9), 2.0);
        assert_eq!(DType::Int32.normalize(-2.9), -2.0);
        assert_eq!(DType::Int8.normalize(130.0), -126.0);
        assert_eq!(DType::UInt8.normalize(-1.0), 255.0);
        assert_eq!(DType::Int64.normalize(f64::NAN), 0.0);
    }

    #[test]
    fn test_normalize_bool_and_float32() {
        assert_eq!(DType::Bool.normalize(0.0), 0.0);
        assert_eq!(DType::Bool.normalize(-3.5), 1.0);
        assert_eq!(DType::Bool.normalize(f64::NAN), 1.0);
        assert_eq!(DType::Float32.normalize(0.1), 0.1f32 as f64);
    }

    #[test]
    fn test_index_dtypes() {
        let index: Vec<DType> = DType::ALL.into_iter().filter(DType::is_index).collect();
        assert_eq!(index, vec![DType::Int32, DType::Int64]);
    }
}
