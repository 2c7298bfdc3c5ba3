//! Assetree CLI - asset hierarchy explorer
//!
//! Usage: assetree [COMMAND]
//!
//! Commands:
//!   companies  List companies
//!   tree       Print a company's asset tree
//!   show       Show the detail panel for one node
//!   browse     Interactive explorer (default)

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use assetree::presentation::{Cli, Commands};
use assetree::Config;

use commands::tree::TreeArgs;
use commands::Runtime;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if run(cli).is_err() {
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let result = dispatch(cli);
    if let Err(err) = &result {
        ui::error::print_error(err, json);
    }
    result
}

fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_or_default(Some(cwd.as_path()));
    let rt = Runtime {
        ui: UiContext::new(cli.json, cli.color, &config),
        config,
        data: cli.data,
    };

    match cli.command {
        None => commands::browse::cmd_browse(&rt, None),
        Some(Commands::Companies) => commands::companies::cmd_companies(&rt),
        Some(Commands::Tree {
            company,
            search,
            status,
            expand_all,
            expand,
        }) => commands::tree::cmd_tree(
            &rt,
            TreeArgs {
                company,
                search,
                status,
                expand_all,
                expand,
            },
        ),
        Some(Commands::Show { company, id }) => commands::show::cmd_show(&rt, &company, &id),
        Some(Commands::Browse { company }) => commands::browse::cmd_browse(&rt, company),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
