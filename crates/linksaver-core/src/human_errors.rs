// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the UI.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so validation and storage failures can be shown to the user verbatim.

use crate::error::LinkSaverError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip, timeout — retrying may succeed.
    Transient,
    /// User must do something (fix the URL, install the browser).
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// A human-readable error with a plain English message and an actionable
/// suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the operation makes sense.
    pub retriable: bool,
    /// Severity level (drives icon/colour in the UI).
    pub severity: Severity,
}

/// Convert a `LinkSaverError` into a `HumanError`.
pub fn humanize_error(err: &LinkSaverError) -> HumanError {
    match err {
        // -- Validation --
        LinkSaverError::InvalidUrl(url) => HumanError {
            message: "That doesn't look like a valid web address.".into(),
            suggestion: format!(
                "Check the address and try again. A valid address looks like \
                 https://www.github.com. (You entered: {url})"
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LinkSaverError::Fetch { url, detail } => HumanError {
            message: "We couldn't reach that website.".into(),
            suggestion: format!(
                "Make sure the website is working and that you're connected \
                 to the internet, then try again. ({url}: {detail})"
            ),
            retriable: true,
            severity: Severity::Transient,
        },

        LinkSaverError::Rejected(detail) => HumanError {
            message: "This link can't be saved.".into(),
            suggestion: format!("Try a different address. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Storage --
        LinkSaverError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to write its data file.".into(),
                    suggestion: "Check the permissions on the .link-saver folder in your \
                                 home directory."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing your links.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage \
                                 may be full."
                        .into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        LinkSaverError::Serialization(_) => HumanError {
            message: "Your saved links file looks damaged.".into(),
            suggestion: "The links.json file may have been edited by hand. Restore it from \
                         a backup or remove it to start fresh."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        LinkSaverError::NoHomeDir => HumanError {
            message: "No place to store your links was found.".into(),
            suggestion: "Links will only be kept in memory for this session. Set the HOME \
                         environment variable to store them permanently."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Platform --
        LinkSaverError::BrowserNotFound(name) => HumanError {
            message: format!("{name} doesn't seem to be installed."),
            suggestion: "Install that browser, or edit the link to use your default \
                         browser instead."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        LinkSaverError::Bridge(_) => HumanError {
            message: "A device-specific feature didn't work.".into(),
            suggestion: "Try restarting the app. Some features may not be available on \
                         all devices."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        LinkSaverError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Clipboard and browser launching need a desktop environment.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_action_required() {
        let human = humanize_error(&LinkSaverError::InvalidUrl("youtubecom".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
        assert!(human.suggestion.contains("youtubecom"));
    }

    #[test]
    fn fetch_failure_is_transient() {
        let human = humanize_error(&LinkSaverError::Fetch {
            url: "https://a.com".into(),
            detail: "connection timed out".into(),
        });
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn corrupt_data_is_permanent() {
        let err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let human = humanize_error(&LinkSaverError::Serialization(err));
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn missing_browser_names_the_browser() {
        let human = humanize_error(&LinkSaverError::BrowserNotFound("Brave".into()));
        assert!(human.message.contains("Brave"));
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
