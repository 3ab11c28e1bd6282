//! argwhere tests
