//! Startup gate on the platform version.
//!
//! The server refuses to start when the toolchain it was built with is older
//! than the crate's declared floor. The check compares major (and, through
//! [`ensure_min_version`], minor) components parsed with `semver`.

use semver::Version;
use thiserror::Error;

/// Compiler version captured by `build.rs`, e.g. `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
pub const BUILD_TOOLCHAIN: &str = env!("TTS_WEBSOCKET_RUSTC_VERSION");

/// Declared toolchain floor, from `rust-version` in `Cargo.toml`.
pub const MIN_TOOLCHAIN: &str = env!("CARGO_PKG_RUST_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeVersionError {
    #[error("unable to parse platform version '{0}'")]
    Unparseable(String),

    #[error("unsupported platform version {found}: major version {min_major} or later is required")]
    MajorTooOld { found: Version, min_major: u64 },

    #[error("unsupported platform version {found}: {required} or later is required")]
    TooOld { found: Version, required: Version },
}

/// Parses a version string such as `v20.11.1`, `rustc 1.85.0 (abc 2025-02-17)`,
/// `1.85` or `20`.
///
/// Missing minor/patch components default to zero.
pub fn parse_platform_version(raw: &str) -> Result<Version, RuntimeVersionError> {
    let unparseable = || RuntimeVersionError::Unparseable(raw.to_string());

    let token = raw
        .split_whitespace()
        .find(|t| t.trim_start_matches('v').starts_with(|c: char| c.is_ascii_digit()))
        .ok_or_else(unparseable)?;
    let token = token.trim_start_matches('v');

    // Drop pre-release/build suffixes (`-nightly`, `+abc`) and pad to three parts
    let core = token
        .split(['-', '+'])
        .next()
        .ok_or_else(unparseable)?;
    let mut parts: Vec<&str> = core.split('.').collect();
    if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(unparseable());
    }
    while parts.len() < 3 {
        parts.push("0");
    }

    Version::parse(&parts.join(".")).map_err(|_| unparseable())
}

/// Fails unless `version`'s major component is at least `min_major`.
pub fn ensure_min_major(version: &str, min_major: u64) -> Result<Version, RuntimeVersionError> {
    let found = parse_platform_version(version)?;
    if found.major < min_major {
        return Err(RuntimeVersionError::MajorTooOld { found, min_major });
    }
    Ok(found)
}

/// Fails unless `version` is at least `required`.
pub fn ensure_min_version(version: &str, required: &str) -> Result<Version, RuntimeVersionError> {
    let found = parse_platform_version(version)?;
    let required = parse_platform_version(required)?;
    if found < required {
        return Err(RuntimeVersionError::TooOld { found, required });
    }
    Ok(found)
}

/// Checks the toolchain this binary was built with against the declared floor.
pub fn check_toolchain() -> Result<Version, RuntimeVersionError> {
    let min = parse_platform_version(MIN_TOOLCHAIN)?;
    ensure_min_major(BUILD_TOOLCHAIN, min.major)?;
    ensure_min_version(BUILD_TOOLCHAIN, MIN_TOOLCHAIN)
}
