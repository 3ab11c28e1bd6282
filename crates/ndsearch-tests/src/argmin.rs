//! argmin tests - index dtype normalization
