//! Cross-crate integration tests for Laurea live in `tests/`.
