//! Targeted file transformers: the ordered catalogue of per-file rewrite
//! rules that customize a materialized tree from the validated configuration.
//!
//! Each rule is bound to exactly one file and one concern. Rules only see the
//! original template content and the configuration, never each other's
//! output, so the catalogue order carries no data dependency. A rule whose
//! anchor text is absent from the file leaves it unchanged; a missing target
//! file means the template itself is broken and is a fatal I/O error.

mod about_page;
mod contact_page;
mod footer;
mod hamburger;
mod hero;
mod layout;
mod mailer;
mod navbar;
mod package_meta;
mod seo_pages;
mod service_cards;
mod testimonials;
mod whatsapp;

use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;

type RenderFn = fn(&str, &SiteConfig, &FragmentRenderer) -> Result<String, AppError>;

/// One rewrite rule: a target file, a concern tag, and a renderer from config.
pub struct RewriteRule {
    /// Path of the target file, relative to the generated site root.
    pub path: &'static str,
    /// Short label for diagnostics and the generation report.
    pub concern: &'static str,
    render: RenderFn,
}

impl RewriteRule {
    /// Rewrite one file's content. Anchor misses come back unchanged.
    pub fn rewrite(
        &self,
        content: &str,
        config: &SiteConfig,
        fragments: &FragmentRenderer,
    ) -> Result<String, AppError> {
        (self.render)(content, config, fragments)
    }
}

/// The full rule catalogue, in pipeline order.
pub fn catalog() -> [RewriteRule; 14] {
    [
        RewriteRule {
            path: "package.json",
            concern: "project metadata",
            render: package_meta::render,
        },
        RewriteRule {
            path: "src/layouts/Layout.astro",
            concern: "page shell",
            render: layout::render,
        },
        RewriteRule {
            path: "src/components/navbar/Navbar.astro",
            concern: "navigation",
            render: navbar::render,
        },
        RewriteRule {
            path: "src/components/footer/Footer.astro",
            concern: "footer",
            render: footer::render,
        },
        RewriteRule {
            path: "src/components/hamburger-menu/Hamburger.astro",
            concern: "mobile menu",
            render: hamburger::render,
        },
        RewriteRule {
            path: "src/components/hero-slider/Hero.tsx",
            concern: "hero content",
            render: hero::render,
        },
        RewriteRule {
            path: "src/components/testimonials/Testimonials.astro",
            concern: "testimonials",
            render: testimonials::render,
        },
        RewriteRule {
            path: "src/components/service-cars/Services.astro",
            concern: "services listing",
            render: service_cards::render,
        },
        RewriteRule {
            path: "src/pages/contacto.astro",
            concern: "contact page",
            render: contact_page::render,
        },
        RewriteRule {
            path: "src/pages/nosotros.astro",
            concern: "about page",
            render: about_page::render,
        },
        RewriteRule {
            path: "src/pages/index.astro",
            concern: "home SEO",
            render: seo_pages::render_home,
        },
        RewriteRule {
            path: "src/pages/catalogo.astro",
            concern: "catalog SEO",
            render: seo_pages::render_catalog,
        },
        RewriteRule {
            path: "src/pages/api/send-email.ts",
            concern: "outbound-mail routing",
            render: mailer::render,
        },
        RewriteRule {
            path: "src/components/whatsapp-button/Whatsapp.astro",
            concern: "messaging button",
            render: whatsapp::render,
        },
    ]
}

/// Run every rule of the catalogue against the materialized tree.
pub fn apply_all(
    root: &Path,
    config: &SiteConfig,
    fragments: &FragmentRenderer,
) -> Result<(), AppError> {
    for rule in catalog() {
        let path = root.join(rule.path);
        let content = fs::read_to_string(&path)?;
        let rewritten = rule.rewrite(&content, config, fragments)?;
        if rewritten != content {
            fs::write(&path, rewritten)?;
        }
    }
    Ok(())
}

/// Replace the first occurrence of a literal anchor; no-op when absent.
pub(crate) fn replace_first(content: &str, anchor: &str, replacement: &str) -> String {
    content.replacen(anchor, replacement, 1)
}

/// Replace the first match of a regex anchor; no-op when absent.
///
/// The replacement is spliced verbatim (`NoExpand`) so `$` in configured text
/// can never be interpreted as a capture reference.
pub(crate) fn replace_regex_first(
    content: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String, AppError> {
    let re = Regex::new(pattern)
        .map_err(|e| AppError::Configuration(format!("Invalid rewrite pattern: {}", e)))?;
    Ok(re.replacen(content, 1, NoExpand(replacement)).into_owned())
}
