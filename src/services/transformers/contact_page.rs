//! Contact page: SEO metadata and the known template contact details
//! (phones and emails are replaced positionally against the template's
//! sample values).

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::{replace_first, replace_regex_first};

const TITLE_ATTR: &str = r#"title="Contacto[^"]*""#;
const DESCRIPTION_ATTR: &str = r#"description="Estamos aqu[^"]*""#;
const MAP_EMBED_SRC: &str = r#"src="https://www\.google\.com/maps/embed[^"]*""#;

const TEMPLATE_PHONES: [&str; 3] = ["+56 9 4073 1529", "+56 9 7373 4208", "+56 9 4207 9452"];
const TEMPLATE_EMAILS: [&str; 3] = [
    "linaarevalo.copayapu@gmail.com",
    "estefaniacortes.copayapu@gmail.com",
    "paolagalan.copayapu@gmail.com",
];
const TEMPLATE_ADDRESS: &str = "Avda. Balmaceda N°4415, La Serena.";
const TEMPLATE_HOURS: &str = "Lun - Vie: 10:00 - 19:00<br>Sáb: 10:00 - 14:00";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    _fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let mut out = content.to_string();

    if let Some(seo) = &config.seo.contact {
        out = replace_regex_first(&out, TITLE_ATTR, &format!("title=\"{}\"", seo.title))?;
        out = replace_regex_first(
            &out,
            DESCRIPTION_ATTR,
            &format!("description=\"{}\"", seo.description),
        )?;
    }

    for (template_phone, phone) in TEMPLATE_PHONES.iter().zip(&config.contact.phones) {
        out = out.replace(template_phone, phone);
    }
    for (template_email, email) in TEMPLATE_EMAILS.iter().zip(&config.contact.emails) {
        out = out.replace(template_email, email);
    }

    if !config.contact.address.is_empty() {
        out = replace_first(&out, TEMPLATE_ADDRESS, &config.contact.address);
    }

    let hours = &config.contact.hours;
    if !hours.weekdays.is_empty() && !hours.saturday.is_empty() {
        out = replace_first(
            &out,
            TEMPLATE_HOURS,
            &format!("{}<br>{}", hours.weekdays, hours.saturday),
        );
    }

    if !config.contact.map_embed.is_empty() {
        out = replace_regex_first(
            &out,
            MAP_EMBED_SRC,
            &format!("src=\"{}\"", config.contact.map_embed),
        )?;
    }

    Ok(out)
}
