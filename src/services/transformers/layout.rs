//! Page shell: point the canonical site URL at the configured domain and
//! strip the template's debug logging.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_first;

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let out = replace_first(
        content,
        "'https://www.autoloa.cl'",
        &format!("'https://{}'", config.domain),
    );

    // Line-level filter; split keeps the trailing newline intact.
    let out = out
        .split('\n')
        .filter(|line| !line.trim_start().starts_with("console.log("))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(out)
}
