//! Asset tree widget: row rendering plus the interactive explorer loop.
//!
//! # Module Structure
//!
//! - `menu` - ExplorerView state and action handling
//! - `render` - Row, status bar and help rendering
//! - `input` - Key mapping and the crossterm event loop

pub mod input;
pub mod menu;
pub mod render;

pub use input::run_interactive;
pub use menu::{ExplorerView, Mode, ViewEvent};
pub use render::{render_help_bar, render_row, render_rows, render_status_bar, RowMarks, RowStyle};
