//! Property-based tests for the coverage and ordering guarantees

mod invariants;
