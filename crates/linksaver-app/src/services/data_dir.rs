// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application data directory resolution.

use std::path::PathBuf;

use linksaver_store::file::ROOT_DIR;

/// Return the application data directory (`<home>/.link-saver`), creating it
/// if needed.  Falls back to a temp location when no home directory exists so
/// that config persistence degrades instead of failing.
pub fn data_dir() -> PathBuf {
    let dir = home_fallback().join(ROOT_DIR);
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn home_fallback() -> PathBuf {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    if let Some(home) = std::env::var_os(var) {
        return PathBuf::from(home);
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_dir() {
        assert!(data_dir().ends_with(ROOT_DIR));
    }
}
