// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge — clipboard via arboard, browser launching via per-OS
// process invocation.
//
// Launch commands per OS:
//   windows: `cmd /c start [browser] <url>`
//   macos:   `open [-a <app>] <url>`
//   linux:   `<browser-command> <url>`, or `xdg-open <url>` for the default

use std::process::Command;

use linksaver_core::error::{LinkSaverError, Result};
use linksaver_core::types::Browser;
use tracing::{debug, warn};

use crate::traits::{NativeBrowserOpen, NativeClipboard, PlatformBridge};

/// Bridge implementation for desktop operating systems.
pub struct DesktopBridge;

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        std::env::consts::OS
    }
}

impl NativeClipboard for DesktopBridge {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| LinkSaverError::Bridge(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| LinkSaverError::Bridge(e.to_string()))?;
        debug!(len = text.len(), "text copied to clipboard");
        Ok(())
    }

    fn read_text(&self) -> Result<Option<String>> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| LinkSaverError::Bridge(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            // Empty or non-text clipboard content is not an error.
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(LinkSaverError::Bridge(e.to_string())),
        }
    }
}

impl NativeBrowserOpen for DesktopBridge {
    fn open_link(&self, url: &str, browser: Browser) -> Result<()> {
        debug!(url, %browser, "opening link");
        let output = launch_command(url, browser).output();

        match output {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(%browser, "browser executable not found");
                Err(LinkSaverError::BrowserNotFound(browser.to_string()))
            }
            Err(e) => Err(LinkSaverError::Io(e)),
        }
    }
}

#[cfg(target_os = "windows")]
fn launch_command(url: &str, browser: Browser) -> Command {
    let mut cmd = Command::new("cmd");
    match browser.command_name_windows() {
        Some(name) => cmd.args(["/c", "start", name, url]),
        None => cmd.args(["/c", "start", url]),
    };
    cmd
}

#[cfg(target_os = "macos")]
fn launch_command(url: &str, browser: Browser) -> Command {
    let mut cmd = Command::new("open");
    match browser.command_name_macos() {
        Some(name) => cmd.args(["-a", name, url]),
        None => cmd.arg(url),
    };
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch_command(url: &str, browser: Browser) -> Command {
    match browser.command_name_linux() {
        Some(name) => {
            let mut cmd = Command::new(name);
            cmd.arg(url);
            cmd
        }
        None => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_name_is_current_os() {
        assert_eq!(DesktopBridge.platform_name(), std::env::consts::OS);
    }

    #[test]
    fn launch_command_uses_browser_executable() {
        let cmd = launch_command("https://a.com", Browser::Firefox);
        let rendered = format!("{cmd:?}");
        assert!(rendered.contains("firefox") || rendered.contains("Firefox"));
        assert!(rendered.contains("https://a.com"));
    }

    #[test]
    fn launch_command_default_browser_delegates_to_os() {
        let cmd = launch_command("https://a.com", Browser::Default);
        let rendered = format!("{cmd:?}");
        // cmd/open/xdg-open depending on the OS, never a browser name.
        assert!(!rendered.contains("firefox"));
        assert!(rendered.contains("https://a.com"));
    }
}
