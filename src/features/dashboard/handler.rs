use axum::response::Html;

use crate::core::error::AppError;
use crate::features::definitions::definitions;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const DEFINITIONS_PLACEHOLDER: &str = "{{DEFINITIONS_JSON}}";

pub fn render_index() -> Result<String, AppError> {
    let json = serde_json::to_string(&definitions())
        .map_err(|err| AppError::internal(format!("failed to serialise definitions: {err}")))?;
    // `<` only appears inside JSON strings, where the escape is equivalent.
    let embedded = json.replace('<', "\\u003c");

    Ok(INDEX_TEMPLATE.replace(DEFINITIONS_PLACEHOLDER, &embedded))
}

pub async fn handle_index() -> Result<Html<String>, AppError> {
    render_index().map(Html)
}
