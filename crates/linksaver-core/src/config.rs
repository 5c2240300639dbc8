// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::Browser;

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Browser preselected when creating a new link.
    pub default_browser: Browser,
    /// Fetch title/description from the page while validating a new link.
    pub auto_fetch_metadata: bool,
    /// Show links already marked complete in the home list.
    pub show_completed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_browser: Browser::Default,
            auto_fetch_metadata: true,
            show_completed: true,
        }
    }
}
