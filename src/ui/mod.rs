//! Terminal rendering for the assetree binary.
//!
//! - `theme` - colors, icons and connector glyphs
//! - `terminal` / `context` - capability detection and resolved output settings
//! - `primitives` / `blocks` - small styled pieces
//! - `widgets` - the asset tree widget and interactive loop
//! - `views` - per-command screens
//! - `json` - NDJSON output

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
