//! AssetSource implementations

mod json_dir;
mod memory;

pub use json_dir::JsonDirSource;
pub use memory::InMemorySource;
