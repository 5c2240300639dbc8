// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Link Saver.

use thiserror::Error;

/// Top-level error type for all Link Saver operations.
#[derive(Debug, Error)]
pub enum LinkSaverError {
    // -- Validation errors --
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("could not reach {url}: {detail}")]
    Fetch { url: String, detail: String },

    #[error("link rejected: {0}")]
    Rejected(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no home directory available for storage")]
    NoHomeDir,

    // -- Platform bridge --
    #[error("browser not installed: {0}")]
    BrowserNotFound(String),

    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LinkSaverError>;
