//! Navigation bar: logo asset, logo alt text, and social links.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::{replace_first, replace_regex_first};

pub(super) const FACEBOOK_HREF: &str = r#"href:\s*"https://web\.facebook\.com/[^"]*""#;
pub(super) const INSTAGRAM_HREF: &str = r#"href:\s*"https://www\.instagram\.com/[^"]*""#;

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let mut out = replace_first(content, "/logowildars.webp", "/logo.webp");
    out = replace_first(&out, "Wildcars Logo", &format!("{} Logo", config.name));

    if !config.social.facebook.is_empty() {
        out = replace_regex_first(
            &out,
            FACEBOOK_HREF,
            &format!("href: \"{}\"", config.social.facebook),
        )?;
    }
    if !config.social.instagram.is_empty() {
        out = replace_regex_first(
            &out,
            INSTAGRAM_HREF,
            &format!("href: \"{}\"", config.social.instagram),
        )?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<img src="/logowildars.webp" alt="Wildcars Logo" />
const social = [
  { href: "https://web.facebook.com/wildcarscl", icon: "facebook" },
  { href: "https://www.instagram.com/wildcarscl", icon: "instagram" },
];
"#;

    #[test]
    fn logo_and_social_links_are_rewritten() {
        let fragments = FragmentRenderer::new().unwrap();
        let mut config = SiteConfig {
            name: "Acme Motors".to_string(),
            slug: "acme".to_string(),
            domain: "acme.cl".to_string(),
            ..SiteConfig::default()
        };
        config.social.facebook = "https://web.facebook.com/acmemotors".to_string();

        let out = render(FIXTURE, &config, &fragments).unwrap();
        assert!(out.contains("/logo.webp"));
        assert!(out.contains("Acme Motors Logo"));
        assert!(out.contains(r#"href: "https://web.facebook.com/acmemotors""#));
        // Instagram unset: the template link stays.
        assert!(out.contains(r#"href: "https://www.instagram.com/wildcarscl""#));
    }
}
