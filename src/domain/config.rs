//! Site configuration document: the input every generation run is driven by.
//!
//! The document is deserialized from JSON with camelCase keys; unknown fields
//! are ignored. [`SiteConfig::validated`] is the only mutation the document
//! ever sees: it rejects incomplete identity data, rejects unknown palettes,
//! and fills every optional substructure so the rewrite rules never have to
//! branch on missing sections. The validated value is persisted verbatim as
//! the run's provenance snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::palette;

/// Central configuration entity for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Business display name.
    #[serde(default)]
    pub name: String,
    /// URL-safe project identifier; also the default destination directory.
    #[serde(default)]
    pub slug: String,
    /// Primary domain of the generated site.
    #[serde(default)]
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_text: Option<String>,
    #[serde(default)]
    pub colors: ColorSelection,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub whatsapp: WhatsappConfig,
    /// Outbound-mail routing; derived from the first contact email when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_service: Option<EmailService>,
    #[serde(default)]
    pub seo: SeoConfig,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    #[serde(default)]
    pub hero_slides: Vec<HeroSlide>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSelection {
    /// Target palette name; empty means the template's native palette.
    #[serde(default)]
    pub tailwind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub hours: BusinessHours,
    #[serde(default)]
    pub map_embed: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    #[serde(default)]
    pub weekdays: String,
    #[serde(default)]
    pub saturday: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappConfig {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailService {
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub cc: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<SeoPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<SeoPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<SeoPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<SeoPage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl SiteConfig {
    /// Validate identity fields and the palette selection, then fill defaults.
    ///
    /// The returned document is the one the whole pipeline works from and the
    /// one persisted as the provenance snapshot. Defaulting is additive: no
    /// supplied value is ever replaced.
    pub fn validated(mut self) -> Result<Self, AppError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if self.slug.trim().is_empty() {
            missing.push("slug".to_string());
        }
        if self.domain.trim().is_empty() {
            missing.push("domain".to_string());
        }
        if !missing.is_empty() {
            return Err(AppError::MissingRequiredFields(missing));
        }

        if !self.colors.tailwind.is_empty() && palette::find(&self.colors.tailwind).is_none() {
            return Err(AppError::UnknownPalette {
                name: self.colors.tailwind.clone(),
                available: palette::names().collect::<Vec<_>>().join(", "),
            });
        }
        if self.colors.tailwind.is_empty() {
            self.colors.tailwind = palette::SOURCE_PALETTE.to_string();
        }

        if self.email_service.is_none() {
            self.email_service = Some(EmailService {
                to: self.contact.emails.iter().take(1).cloned().collect(),
                cc: Vec::new(),
            });
        }

        Ok(self)
    }
}
