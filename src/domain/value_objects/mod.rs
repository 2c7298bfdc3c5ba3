//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod filter;
mod sensor;

pub use filter::{FilterPredicate, StatusFilter};
pub use sensor::{ComponentStatus, SensorType};
