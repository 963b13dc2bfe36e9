//! Cloudflare Turnstile client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::ports::{TurnstileCredential, TurnstileProvisioner, WidgetRequest};

const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Transport configuration for the widget-registration endpoint.
#[derive(Debug, Clone)]
pub struct TurnstileApiConfig {
    /// API root, e.g. `https://api.cloudflare.com/client/v4`.
    pub api_base: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TurnstileApiConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(), timeout_secs: 30 }
    }
}

/// HTTP client for the Turnstile widget API.
#[derive(Clone)]
pub struct HttpTurnstileClient {
    api_token: String,
    account_id: String,
    api_base: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTurnstileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTurnstileClient")
            .field("account_id", &self.account_id)
            .field("api_base", &self.api_base)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl HttpTurnstileClient {
    /// Create a new client with the given credentials and configuration.
    pub fn new(
        api_token: String,
        account_id: String,
        config: &TurnstileApiConfig,
    ) -> Result<Self, AppError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| AppError::Configuration(format!("Invalid Turnstile API base: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_token, account_id, api_base, client })
    }

    /// Create from the ambient `CLOUDFLARE_API_TOKEN` / `CLOUDFLARE_ACCOUNT_ID`
    /// credentials, or `None` when either is absent.
    ///
    /// Missing credentials are a normal "skip provisioning" outcome, not an
    /// error: generation must succeed with or without external connectivity.
    pub fn from_env(config: &TurnstileApiConfig) -> Result<Option<Self>, AppError> {
        let (Ok(api_token), Ok(account_id)) =
            (std::env::var("CLOUDFLARE_API_TOKEN"), std::env::var("CLOUDFLARE_ACCOUNT_ID"))
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(api_token, account_id, config)?))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/accounts/{}/challenges/widgets",
            self.api_base.as_str().trim_end_matches('/'),
            self.account_id
        )
    }

    /// Register one managed widget; errors carry the API or transport detail.
    pub fn create_widget(&self, request: &WidgetRequest) -> Result<TurnstileCredential, AppError> {
        let body = ApiRequest {
            name: &request.name,
            domains: &request.domains,
            mode: "managed",
            bot_fight_mode: false,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .map_err(|e| AppError::Configuration(format!("HTTP request failed: {}", e)))?;

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Configuration(format!("Failed to parse response: {}", e)))?;

        if !api_response.success {
            let errors = serde_json::to_string(&api_response.errors)
                .unwrap_or_else(|_| "[]".to_string());
            return Err(AppError::Configuration(format!("Widget creation rejected: {}", errors)));
        }

        let result = api_response
            .result
            .ok_or_else(|| AppError::Configuration("No widget in response".into()))?;

        Ok(TurnstileCredential { sitekey: result.sitekey, secret: result.secret })
    }
}

impl TurnstileProvisioner for HttpTurnstileClient {
    fn provision(&self, request: &WidgetRequest) -> Option<TurnstileCredential> {
        match self.create_widget(request) {
            Ok(credential) => {
                println!("    Widget created: {}", credential.sitekey);
                println!("    Domains: {}", request.domains.join(", "));
                Some(credential)
            }
            Err(e) => {
                println!("    Widget creation failed: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    name: &'a str,
    domains: &'a [String],
    mode: &'a str,
    bot_fight_mode: bool,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    #[serde(default)]
    result: Option<ApiWidget>,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiWidget {
    sitekey: String,
    secret: String,
}
