//! Home and catalog pages: per-page SEO metadata only.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const HOME_TITLE: &str = r#"title="Automotriz Copayapu[^"]*""#;
const HOME_DESCRIPTION: &str = r#"description="Compra y vende[^"]*""#;
const CATALOG_TITLE: &str = r#"title="Cat[^"]*""#;
const CATALOG_DESCRIPTION: &str = r#"description="Cat[^"]*""#;

pub(super) fn render_home(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let Some(seo) = &config.seo.home else {
        return Ok(content.to_string());
    };
    let out = replace_regex_first(content, HOME_TITLE, &format!("title=\"{}\"", seo.title))?;
    replace_regex_first(&out, HOME_DESCRIPTION, &format!("description=\"{}\"", seo.description))
}

pub(super) fn render_catalog(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let Some(seo) = &config.seo.catalog else {
        return Ok(content.to_string());
    };
    let out = replace_regex_first(content, CATALOG_TITLE, &format!("title=\"{}\"", seo.title))?;
    replace_regex_first(&out, CATALOG_DESCRIPTION, &format!("description=\"{}\"", seo.description))
}
