// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Link Saver.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a saved link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub Uuid);

impl LinkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Browsers a link can be opened with.
///
/// Each variant maps to a per-OS launch command; `Default` delegates to the
/// system default handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Browser {
    Firefox,
    Chrome,
    Brave,
    /// The user's system default browser.
    #[default]
    Default,
}

impl Browser {
    /// All selectable browsers, in display order.
    pub fn all() -> [Browser; 4] {
        [Self::Default, Self::Firefox, Self::Chrome, Self::Brave]
    }

    /// Executable name used with `cmd /c start` on Windows.
    /// `None` means "let the OS pick".
    pub fn command_name_windows(&self) -> Option<&'static str> {
        Some(match self {
            Self::Firefox => "firefox",
            Self::Chrome => "chrome",
            Self::Brave => "brave",
            Self::Default => return None,
        })
    }

    /// Executable name on Linux platforms.
    pub fn command_name_linux(&self) -> Option<&'static str> {
        Some(match self {
            Self::Firefox => "firefox",
            Self::Chrome => "google-chrome",
            Self::Brave => "brave-browser",
            Self::Default => return None,
        })
    }

    /// Application name used with `open -a` on macOS.
    pub fn command_name_macos(&self) -> Option<&'static str> {
        Some(match self {
            Self::Firefox => "Firefox",
            Self::Chrome => "Google Chrome",
            Self::Brave => "Brave Browser",
            Self::Default => return None,
        })
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Firefox => f.write_str("Firefox"),
            Self::Chrome => f.write_str("Chrome"),
            Self::Brave => f.write_str("Brave"),
            Self::Default => f.write_str("Default Browser"),
        }
    }
}

impl From<&str> for Browser {
    /// Parse a browser name, case-insensitively. Unknown names fall back to
    /// the system default.
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "firefox" => Self::Firefox,
            "chrome" => Self::Chrome,
            "brave" => Self::Brave,
            _ => Self::Default,
        }
    }
}

/// The default tag applied when the user supplies none.
pub const DEFAULT_TAG: &str = "GeneralTag";

/// A saved webpage link.
///
/// `title` and `description` are `None` until the validator has fetched the
/// page; after validation they are always `Some` — `Some("")` when the page
/// itself has no title or description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Never empty; defaults to `[DEFAULT_TAG]`.
    pub tags: Vec<String>,
    /// Uppercase priority letter; `'A'` sorts highest.
    pub priority: char,
    pub browser: Browser,
    pub complete: bool,
    /// Creation date, formatted `{day} {Month} {year}`.
    pub date: String,
}

impl Link {
    /// Create a link with default values and a fresh id.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: LinkId::new(),
            url: url.into(),
            title: None,
            description: None,
            tags: vec![DEFAULT_TAG.to_string()],
            priority: 'A',
            browser: Browser::default(),
            complete: false,
            date: String::new(),
        }
    }

    /// Create a link stamped with today's local date.
    pub fn new_with_date(url: impl Into<String>) -> Self {
        Self::new(url).date(today())
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set tags from a whitespace-separated string, deduplicating while
    /// preserving first-seen order. An all-whitespace string keeps the default.
    pub fn tags(self, tags: &str) -> Self {
        let mut seen = Vec::new();
        for tag in tags.split_whitespace() {
            if !seen.iter().any(|s: &String| s == tag) {
                seen.push(tag.to_string());
            }
        }
        self.tags_vec(seen)
    }

    /// Set tags from a vec; an empty vec keeps the default tag.
    pub fn tags_vec(mut self, tags: Vec<String>) -> Self {
        if tags.is_empty() {
            self.tags = vec![DEFAULT_TAG.to_string()];
        } else {
            self.tags = tags;
        }
        self
    }

    pub fn priority(mut self, priority: char) -> Self {
        self.priority = priority;
        self
    }

    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = browser;
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// Today's local date as `{day} {Month} {year}`, e.g. `15 September 2022`.
pub fn today() -> String {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    let now = Local::now();
    format!(
        "{} {} {}",
        now.day(),
        MONTHS[now.month0() as usize],
        now.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_link_has_defaults() {
        let link = Link::new("http://example.com");
        assert_eq!(link.url, "http://example.com");
        assert_eq!(link.title, None);
        assert_eq!(link.tags, vec![DEFAULT_TAG.to_string()]);
        assert_eq!(link.priority, 'A');
        assert_eq!(link.browser, Browser::Default);
        assert!(!link.complete);
        assert!(link.date.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let link = Link::new("http://example.com")
            .title("Example")
            .description("An example website")
            .priority('C')
            .browser(Browser::Firefox)
            .complete(true)
            .date("11 October 2022");

        assert_eq!(link.title.as_deref(), Some("Example"));
        assert_eq!(link.description.as_deref(), Some("An example website"));
        assert_eq!(link.priority, 'C');
        assert_eq!(link.browser, Browser::Firefox);
        assert!(link.complete);
        assert_eq!(link.date, "11 October 2022");
    }

    #[test]
    fn tags_split_and_dedup() {
        let link = Link::new("http://example.com").tags("Videos Tutorial Videos Rust");
        assert_eq!(link.tags, vec!["Videos", "Tutorial", "Rust"]);
    }

    #[test]
    fn empty_tags_keep_default() {
        let link = Link::new("http://example.com").tags("   ");
        assert_eq!(link.tags, vec![DEFAULT_TAG.to_string()]);

        let link = Link::new("http://example.com").tags_vec(Vec::new());
        assert_eq!(link.tags, vec![DEFAULT_TAG.to_string()]);
    }

    #[test]
    fn browser_parsing_is_case_insensitive() {
        assert_eq!(Browser::from("firefox"), Browser::Firefox);
        assert_eq!(Browser::from("Chrome"), Browser::Chrome);
        assert_eq!(Browser::from("BRAVE"), Browser::Brave);
        assert_eq!(Browser::from("lynx"), Browser::Default);
    }

    #[test]
    fn default_browser_has_no_command_name() {
        assert_eq!(Browser::Default.command_name_windows(), None);
        assert_eq!(Browser::Default.command_name_linux(), None);
        assert_eq!(Browser::Default.command_name_macos(), None);
        assert_eq!(Browser::Chrome.command_name_linux(), Some("google-chrome"));
    }

    #[test]
    fn link_round_trips_through_json() {
        let link = Link::new_with_date("https://a.com").title("A");
        let json = serde_json::to_string(&link).expect("serialize");
        let back: Link = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, link);
    }
}
