//! dealersite: generate customized car-dealership websites from a shared Astro template.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::generate::{GenerateOptions, GenerateReport};
pub use domain::{AppError, SiteConfig};

use services::{HttpTurnstileClient, TurnstileApiConfig};

/// Generate a site from an already-loaded configuration document.
///
/// Validates the configuration, materializes the template tree, applies the
/// per-file rewrites and the palette remap, provisions the Turnstile widget
/// when Cloudflare credentials are present in the environment, and persists
/// the `.env` file plus the `site.config.json` provenance snapshot.
pub fn generate(config: SiteConfig, options: &GenerateOptions) -> Result<GenerateReport, AppError> {
    let provisioner = HttpTurnstileClient::from_env(&TurnstileApiConfig::default())?;
    app::commands::generate::execute(config, options, provisioner.as_ref())
}
