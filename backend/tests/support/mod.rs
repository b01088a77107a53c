//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; each
//! includes this module with `mod support;`.

pub mod stub_directory;
