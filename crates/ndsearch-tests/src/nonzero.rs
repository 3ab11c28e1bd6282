//! nonzero tests - tuple and stacked forms, static sizes
