// Device-code authentication against the Microsoft identity platform.
//
// The flow: request a device code, show the user a verification URL and a
// short code, then poll the token endpoint until they finish signing in (or
// the code expires). No client secret — this is a public-client flow.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Login endpoint base for the Microsoft identity platform.
pub const LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

/// Scope requested for calendar reads.
const SCOPE: &str = "https://graph.microsoft.com/.default offline_access";

#[derive(Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    #[serde(default = "default_interval")]
    interval: u64,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_interval() -> u64 {
    5
}

fn default_expires_in() -> u64 {
    900
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Device-code flow client for one tenant + application id.
pub struct DeviceCodeAuth {
    client: reqwest::Client,
    base_url: String,
    tenant: String,
    client_id: String,
}

impl DeviceCodeAuth {
    pub fn new(base_url: &str, tenant: &str, client_id: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("workback/0.1 (meeting-value-estimation)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tenant: tenant.to_string(),
            client_id: client_id.to_string(),
        })
    }

    /// Run the full flow and return an access token.
    ///
    /// Prints sign-in instructions and blocks (polling) until the user
    /// completes sign-in, the code expires, or the endpoint reports a
    /// terminal error.
    pub async fn acquire_token(&self) -> Result<String> {
        let device = self.request_device_code().await?;

        println!("\nTo sign in, visit: {}", device.verification_uri);
        println!("and enter the code: {}", device.user_code);
        println!("\nWaiting for sign-in...");

        self.poll_for_token(&device).await
    }

    async fn request_device_code(&self) -> Result<DeviceCodeResponse> {
        let url = format!(
            "{}/{}/oauth2/v2.0/devicecode",
            self.base_url, self.tenant
        );

        let response = self
            .client
            .post(&url)
            .form(&[("client_id", self.client_id.as_str()), ("scope", SCOPE)])
            .send()
            .await
            .context("Failed to initiate device-code authentication")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Device-code request returned {status}: {body}");
        }

        response
            .json()
            .await
            .context("Failed to parse device-code response")
    }

    async fn poll_for_token(&self, device: &DeviceCodeResponse) -> Result<String> {
        let url = format!("{}/{}/oauth2/v2.0/token", self.base_url, self.tenant);
        let mut interval = device.interval;
        let deadline = std::time::Instant::now() + Duration::from_secs(device.expires_in);

        while std::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_secs(interval)).await;

            let response = self
                .client
                .post(&url)
                .form(&[
                    (
                        "grant_type",
                        "urn:ietf:params:oauth:grant-type:device_code",
                    ),
                    ("client_id", self.client_id.as_str()),
                    ("device_code", device.device_code.as_str()),
                ])
                .send()
                .await
                .context("Token polling request failed")?;

            let token: TokenResponse = response
                .json()
                .await
                .context("Failed to parse token response")?;

            if let Some(access_token) = token.access_token {
                println!("Signed in.");
                return Ok(access_token);
            }

            match token.error.as_deref() {
                Some("authorization_pending") => {
                    debug!("Authorization pending, continuing to poll");
                }
                Some("slow_down") => {
                    // Endpoint asked us to back off.
                    interval += 5;
                    debug!(interval, "Token endpoint requested slower polling");
                }
                Some(error) => {
                    anyhow::bail!(
                        "Authentication failed: {}",
                        token.error_description.unwrap_or_else(|| error.to_string())
                    );
                }
                None => anyhow::bail!("Token endpoint returned neither a token nor an error"),
            }
        }

        anyhow::bail!("Authentication timed out before sign-in completed")
    }
}
