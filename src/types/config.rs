use std::{env, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::dropbox::{API_ENDPOINT, AUTHORIZE_ENDPOINT, CONTENT_ENDPOINT};

pub const TOKEN_VAR: &str = "DROPBOX_TOKEN";
pub const CONTENT_ENDPOINT_VAR: &str = "DROPBOX_CONTENT_ENDPOINT";
pub const API_ENDPOINT_VAR: &str = "DROPBOX_API_ENDPOINT";

/// Everything a [`DropboxClient`](crate::DropboxClient) needs to build requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_content_endpoint")]
    pub content_endpoint: String,
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_authorize_endpoint")]
    pub authorize_endpoint: String,
}

fn default_content_endpoint() -> String {
    CONTENT_ENDPOINT.to_string()
}

fn default_api_endpoint() -> String {
    API_ENDPOINT.to_string()
}

fn default_authorize_endpoint() -> String {
    AUTHORIZE_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            content_endpoint: default_content_endpoint(),
            api_endpoint: default_api_endpoint(),
            authorize_endpoint: default_authorize_endpoint(),
        }
    }
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Points both the content and the RPC calls at `endpoint`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.content_endpoint = endpoint.clone();
        self.api_endpoint = endpoint;
        self
    }

    /// Reads a JSON config file. Missing endpoint fields fall back to the
    /// public Dropbox hosts.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;

        serde_json::from_str::<Config>(&raw)
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var(TOKEN_VAR).with_context(|| format!("reading {TOKEN_VAR}"))?;

        let mut config = Self::new(token);
        if let Ok(endpoint) = env::var(CONTENT_ENDPOINT_VAR) {
            config.content_endpoint = endpoint;
        }
        if let Ok(endpoint) = env::var(API_ENDPOINT_VAR) {
            config.api_endpoint = endpoint;
        }

        Ok(config)
    }
}
