//! Domain Layer
//!
//! The core of assetree - pure hierarchy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records, tree nodes and flattened rows
//! - `value_objects/` - Sensor attributes and filter predicates
//! - `services/` - Tree builder, filter engine, flattener
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Every transformation returns a new, owned tree
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
