//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data) are inherited by all subcommands
//! - Without a subcommand the interactive explorer starts

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::StatusFilter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// assetree - browse location/asset/component hierarchies
#[derive(Parser, Debug)]
#[command(name = "assetree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'assetree' without arguments to open the interactive explorer.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory (overrides config and ASSETREE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List companies
    Companies,

    /// Print a company's asset tree
    Tree {
        /// Company id or name
        #[arg(short, long)]
        company: String,

        /// Only show nodes whose name contains this text (plus their ancestors)
        #[arg(short, long)]
        search: Option<String>,

        /// Only show components with this flag: energy, alert (alias: critical)
        #[arg(long, value_parser = parse_status)]
        status: Option<StatusFilter>,

        /// Expand every node
        #[arg(long, conflicts_with = "expand")]
        expand_all: bool,

        /// Expand the given node ids (repeatable)
        #[arg(long, value_name = "ID")]
        expand: Vec<String>,
    },

    /// Show the detail panel for one node
    Show {
        /// Company id or name
        #[arg(short, long)]
        company: String,

        /// Node id
        id: String,
    },

    /// Interactive explorer
    Browse {
        /// Company id or name (prompts when omitted)
        #[arg(short, long)]
        company: Option<String>,
    },
}

fn parse_status(value: &str) -> Result<StatusFilter, String> {
    value.parse()
}
