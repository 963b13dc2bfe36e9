//! Mobile menu: brand name.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_first;

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    Ok(replace_first(content, ">Wild Cars<", &format!(">{}<", config.name)))
}
