// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use linksaver_core::error::Result;
use linksaver_core::types::Browser;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeClipboard + NativeBrowserOpen + Send + Sync {
    /// OS name of the running platform (e.g. "linux", "windows", "macos").
    fn platform_name(&self) -> &str;
}

/// System clipboard passthrough.
pub trait NativeClipboard {
    /// Put `text` on the clipboard.
    fn copy_text(&self, text: &str) -> Result<()>;

    /// Current clipboard text. Returns `Ok(None)` when the clipboard is
    /// empty or holds non-text content.
    fn read_text(&self) -> Result<Option<String>>;
}

/// Launch a URL in a specific browser (or the system default).
pub trait NativeBrowserOpen {
    /// Open `url` with the given browser. A browser that is not installed
    /// maps to `LinkSaverError::BrowserNotFound`.
    fn open_link(&self, url: &str, browser: Browser) -> Result<()>;
}
