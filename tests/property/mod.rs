//! Property-based tests for document flattening

mod round_trip;
