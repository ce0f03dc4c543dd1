//! HTML page template with verbatim placeholder substitution.

use std::path::Path;

/// Placeholder replaced with the authenticated websocket URL.
pub const WEBSOCKET_URL_TOKEN: &str = "<%= WEBSOCKET_URL %>";

/// Placeholder replaced with the configured model name.
pub const SELECTED_MODEL_TOKEN: &str = "<%= SELECTED_MODEL %>";

/// HTML page source.
///
/// Loaded fresh for every request; edits on disk show up on the next page
/// load without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads the template from disk.
    pub async fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        tokio::fs::read_to_string(path).await.map(Self::from_string)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replaces every occurrence of each token with its value, in order.
    ///
    /// Values are inserted as-is, without HTML escaping.
    pub fn render(&self, substitutions: &[(&str, &str)]) -> String {
        substitutions
            .iter()
            .fold(self.source.clone(), |page, (token, value)| {
                page.replace(token, value)
            })
    }
}
