//! Property-based tests for printing, differentiation and simplification.
