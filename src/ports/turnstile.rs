use crate::domain::SiteConfig;

/// Credential pair returned by the anti-automation verification service.
///
/// The site key is safe to embed client-side; the secret is server-side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnstileCredential {
    pub sitekey: String,
    pub secret: String,
}

/// Registration request for one domain-scoped verification widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRequest {
    pub name: String,
    pub domains: Vec<String>,
}

impl WidgetRequest {
    /// Widget covering the site's bare domain, its `www.` form, and the
    /// platform-default preview domain.
    pub fn for_site(config: &SiteConfig) -> Self {
        let bare =
            config.domain.strip_prefix("www.").unwrap_or(config.domain.as_str()).to_string();
        let domains =
            vec![bare.clone(), format!("www.{bare}"), format!("{}.pages.dev", config.slug)];
        Self { name: config.name.clone(), domains }
    }
}

/// Soft dependency on the external verification service.
///
/// Implementations report their own diagnostics and degrade to `None`;
/// provisioning failure is never fatal to a generation run.
pub trait TurnstileProvisioner {
    fn provision(&self, request: &WidgetRequest) -> Option<TurnstileCredential>;
}
