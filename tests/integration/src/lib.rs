//! Integration test utilities for the event board
//!
//! Provides helpers for running end-to-end tests against the REST API.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
