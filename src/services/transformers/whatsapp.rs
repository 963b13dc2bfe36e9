//! WhatsApp button: phone number and canned message.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const NUMBER_CONST: &str = r"const whatsappNumber = '[^']*'";
const MESSAGE_CONST: &str = r"const defaultMessage = '[^']*'";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    if config.whatsapp.number.is_empty() {
        return Ok(content.to_string());
    }

    let mut out = replace_regex_first(
        content,
        NUMBER_CONST,
        &format!("const whatsappNumber = '{}'", config.whatsapp.number),
    )?;
    if !config.whatsapp.message.is_empty() {
        out = replace_regex_first(
            &out,
            MESSAGE_CONST,
            &format!("const defaultMessage = '{}'", config.whatsapp.message),
        )?;
    }

    Ok(out)
}
