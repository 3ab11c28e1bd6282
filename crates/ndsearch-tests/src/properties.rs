//! Property-based tests for the searching contract
