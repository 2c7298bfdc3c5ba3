//! Companies command handler

use anyhow::Result;

use super::Runtime;
use crate::ui::json::{emit, event_with};
use crate::ui::views::companies::render_companies;

pub fn cmd_companies(rt: &Runtime) -> Result<()> {
    let source = rt.source()?;
    let companies = source.companies()?;
    tracing::info!(count = companies.len(), "listed companies");

    if rt.ui.json {
        for company in &companies {
            emit(event_with("company", "companies", company)?)?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "companies",
            "count": companies.len(),
        }))?;
        return Ok(());
    }

    print!("{}", render_companies(&companies, rt.ui.color, rt.ui.unicode));
    Ok(())
}
