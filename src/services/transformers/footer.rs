//! Footer: social links, the contact-info array, brand mentions, and the
//! copyright line.

use chrono::{Datelike, Local};
use minijinja::context;

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::{navbar, replace_regex_first};

const CONTACT_INFO_ARRAY: &str = r"(?s)const contactInfo = \[.*?\];";
const COPYRIGHT_LINE: &str = r"© \d{4} .+?\. Todos los derechos reservados\.";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    let mut out = content.to_string();

    if !config.social.facebook.is_empty() {
        out = replace_regex_first(
            &out,
            navbar::FACEBOOK_HREF,
            &format!("href: \"{}\"", config.social.facebook),
        )?;
    }
    if !config.social.instagram.is_empty() {
        out = replace_regex_first(
            &out,
            navbar::INSTAGRAM_HREF,
            &format!("href: \"{}\"", config.social.instagram),
        )?;
    }

    let contact = &config.contact;
    if !contact.address.is_empty() || !contact.phones.is_empty() || !contact.emails.is_empty() {
        let mut entries = Vec::new();

        if !contact.address.is_empty() {
            let map_link =
                if contact.map_embed.is_empty() { "#" } else { contact.map_embed.as_str() };
            entries.push(fragments.render(
                "footer_contact_entry",
                context! {
                    kind => "Direccion",
                    value => contact.address.clone(),
                    icon => "fas fa-map-marker-alt",
                    link => map_link,
                    external => true,
                },
            )?);
        }

        for phone in &contact.phones {
            let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
            entries.push(fragments.render(
                "footer_contact_entry",
                context! {
                    kind => "Telefono",
                    value => phone.clone(),
                    icon => "fas fa-phone",
                    link => format!("tel:{dial}"),
                    external => false,
                },
            )?);
        }

        for email in &contact.emails {
            entries.push(fragments.render(
                "footer_contact_entry",
                context! {
                    kind => "Correo",
                    value => email.clone(),
                    icon => "fas fa-envelope",
                    link => format!("mailto:{email}"),
                    external => false,
                },
            )?);
        }

        let replacement = format!("const contactInfo = [\n{}\n];", entries.join(",\n"));
        out = replace_regex_first(&out, CONTACT_INFO_ARRAY, &replacement)?;
    }

    out = out.replace("Wildcars - Automotora", &config.name);
    out = out.replace(">Wildcars<", &format!(">{}<", config.name));

    let copyright =
        format!("© {} {}. Todos los derechos reservados.", Local::now().year(), config.name);
    out = replace_regex_first(&out, COPYRIGHT_LINE, &copyright)?;

    Ok(out)
}
