//! Common test utilities for assetree CLI, contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus a JSON data directory
//! - Assertion macros: `assert_output_contains!`, `assert_row_names!`
//! - Fixtures: API payloads for a small plant hierarchy

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
