// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for targets without native clipboard or process APIs.
//
// Every method returns `PlatformUnavailable` — the real implementation lives
// in the `desktop` module.

use linksaver_core::error::{LinkSaverError, Result};
use linksaver_core::types::Browser;

use crate::traits::{NativeBrowserOpen, NativeClipboard, PlatformBridge};

/// No-op bridge returned on non-desktop targets.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "unknown (stub)"
    }
}

impl NativeClipboard for StubBridge {
    fn copy_text(&self, _text: &str) -> Result<()> {
        tracing::warn!("NativeClipboard::copy_text called on stub bridge");
        Err(LinkSaverError::PlatformUnavailable)
    }

    fn read_text(&self) -> Result<Option<String>> {
        tracing::warn!("NativeClipboard::read_text called on stub bridge");
        Err(LinkSaverError::PlatformUnavailable)
    }
}

impl NativeBrowserOpen for StubBridge {
    fn open_link(&self, _url: &str, _browser: Browser) -> Result<()> {
        tracing::warn!("NativeBrowserOpen::open_link called on stub bridge");
        Err(LinkSaverError::PlatformUnavailable)
    }
}
