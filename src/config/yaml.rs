use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::env::RawConfig;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in
/// the file override the environment.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "127.0.0.1"
///   port: 8080
///
/// playht:
///   user_id: "your-user-id"
///   api_key: "your-api-key"
///   model: "PlayDialog"
///   api_version: "v4"
///   auth_url: "https://api.play.ht/api/v4/websocket-auth"
///
/// page:
///   template_path: "/srv/tts/websocket.html"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub playht: Option<PlayHtYaml>,
    pub page: Option<PageYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Play.ht credentials and endpoint selection from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PlayHtYaml {
    pub user_id: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_version: Option<String>,
    pub auth_url: Option<String>,
}

/// HTML page configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PageYaml {
    pub template_path: Option<PathBuf>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Overlay the values present in this file onto `raw`.
    pub(super) fn apply(self, raw: &mut RawConfig) {
        if let Some(server) = self.server {
            overlay(&mut raw.host, server.host);
            overlay(&mut raw.port, server.port.map(|p| p.to_string()));
        }
        if let Some(playht) = self.playht {
            overlay(&mut raw.user_id, playht.user_id);
            overlay(&mut raw.api_key, playht.api_key);
            overlay(&mut raw.model, playht.model);
            overlay(&mut raw.api_version, playht.api_version);
            overlay(&mut raw.auth_url, playht.auth_url);
        }
        if let Some(page) = self.page {
            overlay(
                &mut raw.template_path,
                page.template_path.map(|p| p.to_string_lossy().into_owned()),
            );
        }
    }
}

fn overlay(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}
