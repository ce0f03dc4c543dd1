//! Play.ht model and API revision selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PLAYHT_WS_AUTH_URL_V3, PLAYHT_WS_AUTH_URL_V4};

// =============================================================================
// Voice Engine / Model
// =============================================================================

/// Play.ht voice engine (model) a browser client can stream from.
///
/// The set is closed: a configured name must match one of these API strings
/// exactly.
///
/// - `Play30Mini` - Fast, multilingual (default)
/// - `PlayDialog` - Expressive, dialogue support
/// - `PlayDialogMultilingual` - Multilingual dialogue support
/// - `PlayDialogArabic` - Arabic dialogue support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlayHtModel {
    /// Play 3.0 mini - fast, multilingual (default)
    #[default]
    #[serde(rename = "Play3.0-mini")]
    Play30Mini,
    /// PlayDialog - expressive, dialogue support
    #[serde(rename = "PlayDialog")]
    PlayDialog,
    /// PlayDialog Multilingual - multilingual dialogue
    #[serde(rename = "PlayDialogMultilingual")]
    PlayDialogMultilingual,
    /// PlayDialog Arabic - Arabic dialogue support
    #[serde(rename = "PlayDialogArabic")]
    PlayDialogArabic,
}

impl PlayHtModel {
    /// Returns the Play.ht API string for this model.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tts_websocket::core::playht::PlayHtModel;
    ///
    /// assert_eq!(PlayHtModel::Play30Mini.as_str(), "Play3.0-mini");
    /// assert_eq!(PlayHtModel::PlayDialog.as_str(), "PlayDialog");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Play30Mini => "Play3.0-mini",
            Self::PlayDialog => "PlayDialog",
            Self::PlayDialogMultilingual => "PlayDialogMultilingual",
            Self::PlayDialogArabic => "PlayDialogArabic",
        }
    }

    /// Returns all accepted models.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Play30Mini,
            Self::PlayDialog,
            Self::PlayDialogMultilingual,
            Self::PlayDialogArabic,
        ]
    }

    /// Comma separated list of accepted API strings, for diagnostics.
    pub fn accepted_values() -> String {
        Self::all()
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PlayHtModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a model name is not one of the accepted API strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Play.ht model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for PlayHtModel {
    type Err = UnknownModel;

    /// Exact, case-sensitive match against the API strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

// =============================================================================
// API Revision
// =============================================================================

/// Revision of the websocket-auth endpoint.
///
/// `V3` hands out one URL for every engine, `V4` one URL per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V3,
    #[default]
    V4,
}

impl ApiVersion {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V3 => "v3",
            Self::V4 => "v4",
        }
    }

    /// The public Play.ht endpoint for this revision.
    #[inline]
    pub const fn default_auth_url(&self) -> &'static str {
        match self {
            Self::V3 => PLAYHT_WS_AUTH_URL_V3,
            Self::V4 => PLAYHT_WS_AUTH_URL_V4,
        }
    }

    /// Whether the response is keyed by model name.
    #[inline]
    pub const fn is_per_model(&self) -> bool {
        matches!(self, Self::V4)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an API revision string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Play.ht API version '{0}' (expected v3 or v4)")]
pub struct UnknownApiVersion(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownApiVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v3" | "3" => Ok(Self::V3),
            "v4" | "4" => Ok(Self::V4),
            _ => Err(UnknownApiVersion(s.to_string())),
        }
    }
}
