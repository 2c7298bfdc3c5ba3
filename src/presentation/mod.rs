//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the asset source from configuration
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates the source with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_source;
