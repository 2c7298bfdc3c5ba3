//! Browse command handler: the interactive explorer.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use is_terminal::IsTerminal;

use assetree::{AssetExplorer, AssetSource, CompanySession};

use super::Runtime;
use crate::ui::views::browse::render_screen;
use crate::ui::widgets::asset_tree::{run_interactive, ExplorerView, ViewEvent};

pub fn cmd_browse(rt: &Runtime, company: Option<String>) -> Result<()> {
    if rt.ui.json {
        bail!("browse is interactive and does not support --json; use 'assetree tree --json'");
    }
    if !rt.ui.caps.is_tty || !std::io::stdin().is_terminal() {
        bail!("browse needs an interactive terminal; use 'assetree tree' instead");
    }

    let source = rt.source()?;
    let mut session = CompanySession::from_source(&*source)?;
    let mut view = ExplorerView::new(
        AssetExplorer::new(rt.config.debounce()),
        rt.config.explorer.page_size,
    );

    let mut next = company.or_else(|| rt.config.explorer.default_company.clone());
    loop {
        let key = match next.take() {
            Some(key) => Some(key),
            None => pick_company(&session)?,
        };
        match key {
            Some(key) => open_company(&mut session, &mut view, &*source, &key)?,
            // picker dismissed before anything was opened
            None if view.company().is_none() => return Ok(()),
            None => {}
        }

        let ui = rt.ui;
        let event = run_interactive(&mut view, |view, width, height| {
            render_screen(view, &ui, width, height)
        })?;
        match event {
            ViewEvent::SwitchCompany => continue,
            ViewEvent::Quit | ViewEvent::Continue => return Ok(()),
        }
    }
}

fn open_company(
    session: &mut CompanySession,
    view: &mut ExplorerView,
    source: &dyn AssetSource,
    key: &str,
) -> Result<()> {
    let forest = session.load(source, key)?;
    let name = session
        .active()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| key.to_string());
    let notice = session.last_error().map(|e| format!("Could not load assets: {}", e));
    view.show_company(name, forest, notice);
    Ok(())
}

fn pick_company(session: &CompanySession) -> Result<Option<String>> {
    let companies = session.companies();
    if companies.is_empty() {
        bail!("no companies found in the data directory");
    }
    let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
    let default = session
        .active()
        .and_then(|active| companies.iter().position(|c| c.id == active.id))
        .unwrap_or(0);

    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a company")
        .items(&names)
        .default(default)
        .interact_opt()?;
    Ok(choice.map(|i| companies[i].id.clone()))
}
