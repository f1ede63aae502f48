use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Well-known public client id usable for device-code sign-in without app
/// registration (Graph Explorer).
const DEFAULT_CLIENT_ID: &str = "04b07795-8ddb-461a-bbee-02f9e1bf7b46";

/// Central configuration loaded from environment variables.
///
/// No secrets are required — the device-code flow is a public-client flow.
/// A .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Application (client) id for the device-code flow.
    pub client_id: String,
    /// Directory id, or "common" for multi-tenant sign-in.
    pub tenant: String,
    /// Microsoft Graph API endpoint.
    pub graph_endpoint: String,
    /// Identity platform endpoint (override for testing).
    pub login_endpoint: String,
    /// Directory containing the ONNX embedding model files.
    pub model_dir: PathBuf,
    /// Where generated packages and scored JSON land.
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default — sign-in works out of the box with the public client id.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("WORKBACK_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::embedding::download::default_model_dir());

        Ok(Self {
            client_id: env::var("WORKBACK_CLIENT_ID")
                .unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string()),
            tenant: env::var("WORKBACK_TENANT").unwrap_or_else(|_| "common".to_string()),
            graph_endpoint: env::var("GRAPH_ENDPOINT")
                .unwrap_or_else(|_| crate::graph::client::DEFAULT_GRAPH_ENDPOINT.to_string()),
            login_endpoint: env::var("WORKBACK_LOGIN_ENDPOINT")
                .unwrap_or_else(|_| crate::graph::auth::LOGIN_BASE_URL.to_string()),
            model_dir,
            output_dir: env::var("WORKBACK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output")),
        })
    }

    /// Check that the embedding model files are on disk.
    /// Call this before any operation that needs the scoring engine.
    pub fn require_model(&self) -> Result<()> {
        if !crate::embedding::download::embedding_files_present(&self.model_dir) {
            anyhow::bail!(
                "Embedding model files not found in {}\n\
                 Run `workback download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
