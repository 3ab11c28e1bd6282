//! argmax tests - Array API compatible
