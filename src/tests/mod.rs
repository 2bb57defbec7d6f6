//! Crate-internal property test suites.
