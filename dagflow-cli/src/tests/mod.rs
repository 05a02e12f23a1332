//! Unit tests for dagflow-cli, organized by module.
//!
//! Tests are BDD-style with Given/When/Then comments and descriptive names.
//! Fixture files are written to temporary directories.
