//! Project metadata: rename the npm package after the site slug.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let mut package: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        AppError::ParseError { what: "package.json".to_string(), details: e.to_string() }
    })?;

    if let Some(object) = package.as_object_mut() {
        object.insert("name".to_string(), serde_json::Value::String(config.slug.clone()));
    }

    let rendered = serde_json::to_string_pretty(&package).map_err(|e| {
        AppError::ParseError { what: "package.json".to_string(), details: e.to_string() }
    })?;
    Ok(format!("{rendered}\n"))
}
