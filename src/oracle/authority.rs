//! HTTP client for the remote username validation authority

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

use super::RemoteAuthority;
use crate::error::{Result, UsernameForgeError};
use crate::types::CheckConfig;

/// Response message phrases that indicate a taken username
const TAKEN_PHRASES: &[&str] = &[
    "taken",
    "not available",
    "already exists",
    "unavailable",
    "in use",
];

/// Status codes the authority uses for taken or invalid usernames
const TAKEN_CODES: &[i64] = &[1, 2, 10];

/// Validation endpoint client with browser-like headers
pub struct HttpAuthority {
    client: Client,
    config: CheckConfig,
}

impl HttpAuthority {
    /// Create a new authority client
    pub fn new(config: CheckConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(browser_headers())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self { client, config }
    }
}

#[async_trait]
impl RemoteAuthority for HttpAuthority {
    async fn validate(&self, username: &str) -> Result<bool> {
        let timeout_secs = self.config.timeout.as_secs();

        let response = timeout(
            self.config.timeout,
            self.client
                .get(&self.config.endpoint)
                .query(&[
                    ("request.username", username),
                    ("request.birthday", self.config.birthday.as_str()),
                ])
                .send(),
        )
        .await
        .map_err(|_| UsernameForgeError::timeout("validation request", timeout_secs))?
        .map_err(UsernameForgeError::from)?;

        let status = response.status();
        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok());
                Err(UsernameForgeError::rate_limit(
                    format!("authority rate limited username '{}'", username),
                    retry_after,
                ))
            }
            400 | 403 => Err(UsernameForgeError::access_denied(
                format!("authority rejected request for '{}'", username),
                Some(status.as_u16()),
            )),
            code if !status.is_success() => Err(UsernameForgeError::network(
                format!("validation request failed with status {}", status),
                Some(code),
                Some(self.config.endpoint.clone()),
            )),
            _ => {
                let text = response.text().await.map_err(|e| {
                    UsernameForgeError::network(e.to_string(), None, Some(self.config.endpoint.clone()))
                })?;

                // 200 with an unparseable body counts as ambiguous
                let body: ValidateResponse = serde_json::from_str(&text)
                    .map_err(|e| UsernameForgeError::ambiguous(e.to_string(), Some(text)))?;

                Ok(parse_verdict(&body))
            }
        }
    }
}

/// Authority response body. The schema is authority-controlled, so both
/// fields are optional and unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Interpret the authority's response as an availability verdict.
///
/// Precedence: explicit "no error" code, then taken-indicator phrases,
/// then known taken/invalid codes; anything else is available as long
/// as no error indicator is present.
pub fn parse_verdict(body: &ValidateResponse) -> bool {
    if body.code == Some(0) {
        return true;
    }

    if let Some(message) = &body.message {
        let message = message.to_lowercase();
        if TAKEN_PHRASES.iter().any(|phrase| message.contains(phrase)) {
            return false;
        }
    }

    if let Some(code) = body.code {
        if TAKEN_CODES.contains(&code) {
            return false;
        }
    }

    body.message.is_none()
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.roblox.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.roblox.com"));
    headers
}
