//! Interactive configuration wizard: a blocking prompt sequence producing the
//! same configuration shape a `--config` file provides.

use dialoguer::{Input, Select};

use crate::domain::{
    AppError, EmailService, SeoConfig, SeoPage, SiteConfig, palette,
};

pub(super) fn run() -> Result<SiteConfig, AppError> {
    println!();
    println!("  New site - initial configuration");
    println!("  ================================");
    println!();

    println!("--- IDENTITY ---");
    let name = required("  Business name")?;
    let slug = with_default("  Slug", derive_slug(&name))?;
    let domain = with_default("  Domain", format!("www.{slug}.cl"))?;
    let slogan = optional("  Slogan (optional)")?;

    println!();
    println!("--- PRIMARY COLOR ---");
    let names: Vec<&str> = palette::names().collect();
    let selection = Select::new()
        .with_prompt("  Palette")
        .items(&names)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    let color = names[selection].to_string();

    println!();
    println!("--- CONTACT ---");
    let address = optional("  Address")?;
    let phones = comma_list("  Phones (comma separated)")?;
    let emails = comma_list("  Emails (comma separated)")?;
    let hours_weekdays = with_default("  Weekday hours", "Lun - Vie: 10:00 - 19:00".to_string())?;
    let hours_saturday = with_default("  Saturday hours", "Sab: 10:00 - 14:00".to_string())?;

    println!();
    println!("--- SOCIAL ---");
    let facebook = optional("  Facebook URL")?;
    let instagram = optional("  Instagram URL")?;
    let whatsapp_number = optional("  WhatsApp number (with country code)")?;
    let whatsapp_message =
        with_default("  WhatsApp message", "Hola, en que te podemos ayudar?".to_string())?;

    println!();
    println!("--- CONTACT FORM ---");
    let mail_to = {
        let mut input = Input::<String>::new().with_prompt("  Recipient email").allow_empty(true);
        if let Some(first) = emails.first() {
            input = input.default(first.clone());
        }
        input.interact_text().map_err(prompt_error)?
    };
    let mail_cc = optional("  CC email (optional)")?;

    println!();
    let map_embed = optional("  Google Maps embed URL (optional)")?;

    let mut config = SiteConfig {
        name: name.clone(),
        slug,
        domain,
        slogan: Some(if slogan.is_empty() {
            "Tu automotora de confianza".to_string()
        } else {
            slogan
        }),
        ..SiteConfig::default()
    };
    config.colors.tailwind = color;
    config.contact.address = address;
    config.contact.phones = phones;
    config.contact.emails = emails.clone();
    config.contact.hours.weekdays = hours_weekdays;
    config.contact.hours.saturday = hours_saturday;
    config.contact.map_embed = map_embed;
    config.social.facebook = facebook;
    config.social.instagram = instagram;
    config.whatsapp.number = whatsapp_number;
    config.whatsapp.message = whatsapp_message;
    config.email_service = Some(EmailService {
        to: if mail_to.is_empty() {
            emails.into_iter().take(1).collect()
        } else {
            vec![mail_to]
        },
        cc: if mail_cc.is_empty() { Vec::new() } else { vec![mail_cc] },
    });
    config.seo = default_seo(&name);

    Ok(config)
}

fn default_seo(name: &str) -> SeoConfig {
    SeoConfig {
        home: Some(SeoPage {
            title: format!("{name} - Compra y venta de vehiculos"),
            description: format!("Compra y vende vehiculos con confianza en {name}."),
        }),
        catalog: Some(SeoPage {
            title: format!("Catalogo - {name}"),
            description: format!("Explora el catalogo de vehiculos de {name}."),
        }),
        contact: Some(SeoPage {
            title: format!("Contacto - {name}"),
            description: format!("Contactanos en {name}."),
        }),
        about: Some(SeoPage {
            title: format!("Nosotros - {name}"),
            description: format!("Conoce mas sobre {name}."),
        }),
    }
}

/// Lowercased, hyphenated, URL-safe slug suggestion from the business name.
fn derive_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::config_error(format!("Prompt failed: {e}"))
}

fn required(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new().with_prompt(prompt).interact_text().map_err(prompt_error)
}

fn optional(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn with_default(prompt: &str, default: String) -> Result<String, AppError> {
    Input::<String>::new().with_prompt(prompt).default(default).interact_text().map_err(prompt_error)
}

fn comma_list(prompt: &str) -> Result<Vec<String>, AppError> {
    let raw = optional(prompt)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(raw.split(',').map(|item| item.trim().to_string()).collect())
}
