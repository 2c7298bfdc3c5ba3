//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `source/` - AssetSource implementations (JSON directory, in-memory)

pub mod source;

pub use source::{InMemorySource, JsonDirSource};
