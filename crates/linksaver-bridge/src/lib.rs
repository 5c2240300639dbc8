// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native platform bridge abstractions for Link Saver.
//
// The traits let the storage and UI layers stay ignorant of how the host OS
// opens browsers or reaches the clipboard. Desktop targets get a real
// implementation; anything else gets a stub that reports the capability as
// unavailable.

pub mod traits;

#[cfg(not(target_family = "wasm"))]
pub mod desktop;

#[cfg(target_family = "wasm")]
pub mod stub;

/// The bridge implementation for the compile target.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(not(target_family = "wasm"))]
    {
        Box::new(desktop::DesktopBridge)
    }
    #[cfg(target_family = "wasm")]
    {
        Box::new(stub::StubBridge)
    }
}
