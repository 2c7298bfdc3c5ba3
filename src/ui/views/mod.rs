pub mod browse;
pub mod companies;
pub mod detail;
pub mod tree;
