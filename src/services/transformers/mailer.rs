//! Outbound-mail routing for the contact form endpoint.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const TO_LIST: &str = r#"to: \["[^"]*"\]"#;
const CC_LINE: &str = r"(?m)cc: \[.*?\],?.*$";
const CC_LINE_WITH_LEAD: &str = r"(?m)\s*cc: \[.*?\],?.*$";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let Some(mail) = &config.email_service else {
        return Ok(content.to_string());
    };

    let mut out = content.to_string();

    if !mail.to.is_empty() {
        let list = serde_json::to_string(&mail.to).map_err(|e| AppError::ParseError {
            what: "mail recipient list".to_string(),
            details: e.to_string(),
        })?;
        out = replace_regex_first(&out, TO_LIST, &format!("to: {list}"))?;
    }

    if mail.cc.is_empty() {
        out = replace_regex_first(&out, CC_LINE_WITH_LEAD, "")?;
    } else {
        let list = serde_json::to_string(&mail.cc).map_err(|e| AppError::ParseError {
            what: "mail cc list".to_string(),
            details: e.to_string(),
        })?;
        out = replace_regex_first(&out, CC_LINE, &format!("cc: {list},"))?;
    }

    Ok(out)
}
