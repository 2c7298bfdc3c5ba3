use assetree::AssetreeError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<AssetreeError>() {
        Some(assetree) => error_block(assetree),
        None => ErrorBlock::new(format!("{:#}", err)),
    }
    .render(supports_color, supports_unicode)
}

fn error_block(err: &AssetreeError) -> ErrorBlock {
    match err {
        AssetreeError::Json { file, message } => ErrorBlock::new(message.clone())
            .with_location(file.display().to_string())
            .with_fix("Check that the file holds the API payload (a JSON array of records)."),
        AssetreeError::Config { file, message } => ErrorBlock::new(message.clone())
            .with_location(file.display().to_string())
            .with_fix("Fix the TOML syntax or remove the offending key."),
        AssetreeError::DataDirNotFound { path } => ErrorBlock::new(err.to_string())
            .with_fix(format!(
                "Create {} or point --data / ASSETREE_DATA_DIR at the payload directory.",
                path.display()
            )),
        AssetreeError::CompanyNotFound { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Run 'assetree companies' to list company ids and names."),
        AssetreeError::NodeNotFound { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Run 'assetree tree --expand-all' to list node ids."),
        AssetreeError::Io(_) | AssetreeError::Fetch { .. } => ErrorBlock::new(err.to_string()),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
}
