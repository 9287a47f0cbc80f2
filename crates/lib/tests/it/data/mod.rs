//! Data accessor integration tests
//!
//! This module tests the path-addressed operations of `Data`.
//! Tests are organized by operation for better maintainability.

mod append;
mod get_data;
