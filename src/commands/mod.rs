//! Command handlers
//!
//! Each handler receives the resolved `Runtime` (config, UI settings and
//! the `--data` override) and returns `anyhow::Result`.

pub mod browse;
pub mod companies;
pub mod show;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;

use assetree::application::{fetch, CompanySession, FetchOutcome};
use assetree::{AssetSource, Company, Config, TreeNode};

use crate::ui::context::UiContext;

/// Settings shared by all commands
pub struct Runtime {
    pub config: Config,
    pub ui: UiContext,
    pub data: Option<PathBuf>,
}

impl Runtime {
    pub fn source(&self) -> Result<Box<dyn AssetSource>> {
        Ok(assetree::presentation::create_source(
            &self.config,
            self.data.as_deref(),
        )?)
    }
}

/// Resolve `key` to a company and load its hierarchy.
///
/// Unlike the interactive explorer, one-shot commands report a failed fetch
/// as an error instead of showing an empty tree.
pub(crate) fn load_company(source: &dyn AssetSource, key: &str) -> Result<(Company, Vec<TreeNode>)> {
    let mut session = CompanySession::from_source(source)?;
    let ticket = session.switch_company(key)?;
    let payload = fetch(source, ticket.company_id())?;
    let forest = match session.accept(&ticket, Ok(payload)) {
        FetchOutcome::Accepted(forest) => forest,
        FetchOutcome::Stale => Vec::new(),
    };
    let company = session
        .active()
        .cloned()
        .ok_or_else(|| assetree::AssetreeError::CompanyNotFound {
            key: key.to_string(),
        })?;
    Ok((company, forest))
}
