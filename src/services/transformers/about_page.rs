//! About page: SEO metadata, slogan, brand-name sweep, and the optional
//! replacement of the main company paragraph.

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::{replace_first, replace_regex_first};

const TITLE_ATTR: &str = r#"title="Nosotros - [^"]*""#;
const DESCRIPTION_ATTR: &str = r#"description="Conoce m[^"]*""#;
const ABOUT_PARAGRAPH: &str =
    r"(?s)En <strong>[^<]*</strong>[^<]*trabajamos con transparencia.*?calidad\.";

const TEMPLATE_SLOGAN: &str =
    "Bienvenido a la experiencia Wildcars. Donde los buenos autos encuentran buenos dueños.";

// Brand sweep, most specific first so longer mentions never end up
// half-rewritten by a shorter one.
const BRAND_MENTIONS: [&str; 4] =
    ["Automotriz Copayapu", "Copayapu Automotriz", "Wildcars", "Wild Cars"];

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let mut out = content.to_string();

    if let Some(seo) = &config.seo.about {
        out = replace_regex_first(&out, TITLE_ATTR, &format!("title=\"{}\"", seo.title))?;
        out = replace_regex_first(
            &out,
            DESCRIPTION_ATTR,
            &format!("description=\"{}\"", seo.description),
        )?;
    }

    // The slogan sentence itself contains a brand mention, so it has to be
    // replaced before the sweep rewrites its anchor away.
    if let Some(slogan) = config.slogan.as_deref().filter(|s| !s.is_empty()) {
        out = replace_first(&out, TEMPLATE_SLOGAN, slogan);
    }

    for mention in BRAND_MENTIONS {
        out = out.replace(mention, &config.name);
    }

    if let Some(about) = config.about_text.as_deref().filter(|s| !s.is_empty()) {
        out = replace_regex_first(&out, ABOUT_PARAGRAPH, about)?;
    }

    Ok(out)
}
