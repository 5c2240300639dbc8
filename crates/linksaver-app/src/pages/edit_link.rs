// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edit-link page — pre-filled form for an existing link.  Changes flow
// through the replace-by-id path and never touch the network.

use dioxus::prelude::*;

use linksaver_backend::validate_offline;
use linksaver_core::human_errors::humanize_error;
use linksaver_core::types::{Browser, Link};

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

/// Merge the form fields over an existing link.  Identity fields (id, date,
/// complete, description) are preserved.
fn merge_edit(
    seed: &Link,
    url: &str,
    title: &str,
    tags: &str,
    priority: &str,
    browser: Browser,
) -> Link {
    Link {
        url: url.trim().to_string(),
        title: Some(title.trim().to_string()),
        ..seed.clone()
    }
    .tags(tags)
    .priority(priority.chars().next().unwrap_or('A').to_ascii_uppercase())
    .browser(browser)
}

#[component]
pub fn EditLink(id: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let nav = use_navigator();

    // Snapshot the link under edit once; the form owns the fields from here.
    let seed = use_hook(|| {
        state
            .peek()
            .links
            .iter()
            .find(|l| l.id.to_string() == id)
            .cloned()
    });

    let Some(seed) = seed else {
        return rsx! {
            div {
                h1 { "Edit Link" }
                p { style: "color: #888;", "That link no longer exists." }
            }
        };
    };

    let mut url = use_signal(|| seed.url.clone());
    let mut title = use_signal(|| seed.title.clone().unwrap_or_default());
    let mut tags = use_signal(|| seed.tags.join(" "));
    let mut priority = use_signal(|| seed.priority.to_string());
    let mut browser = use_signal(|| seed.browser);
    let mut feedback = use_signal(|| None::<String>);

    let on_save = {
        let svc = svc.clone();
        let seed = seed.clone();
        move |_| {
            let updated = merge_edit(&seed, &url(), &title(), &tags(), &priority(), browser());
            let updated = match validate_offline(updated) {
                Ok(l) => l,
                Err(e) => {
                    let human = humanize_error(&e);
                    feedback.set(Some(format!("{} {}", human.message, human.suggestion)));
                    return;
                }
            };

            match svc.update_link(&updated) {
                Ok(true) => {
                    tracing::info!(id = %updated.id, "link updated");
                    state.write().refresh(&svc);
                    nav.push(Route::Home {});
                }
                Ok(false) => feedback.set(Some("That link no longer exists.".into())),
                Err(e) => {
                    let human = humanize_error(&e);
                    feedback.set(Some(format!("{} {}", human.message, human.suggestion)));
                }
            }
        }
    };

    rsx! {
        div {
            h1 { "Edit Link" }

            if let Some(message) = feedback() {
                p { style: "background: #f3f3f3; padding: 8px; border-radius: 6px;", "{message}" }
            }

            div { style: "display: flex; flex-direction: column; gap: 12px; max-width: 480px;",
                label { "URL"
                    input {
                        style: "width: 100%; padding: 8px;",
                        value: "{url}",
                        oninput: move |e| url.set(e.value()),
                    }
                }

                label { "Title"
                    input {
                        style: "width: 100%; padding: 8px;",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }

                label { "Tags (space separated)"
                    input {
                        style: "width: 100%; padding: 8px;",
                        value: "{tags}",
                        oninput: move |e| tags.set(e.value()),
                    }
                }

                label { "Priority (A–Z)"
                    input {
                        style: "width: 64px; padding: 8px;",
                        maxlength: 1,
                        value: "{priority}",
                        oninput: move |e| priority.set(e.value()),
                    }
                }

                label { "Open with"
                    select {
                        style: "padding: 8px;",
                        onchange: move |e| browser.set(Browser::from(e.value().as_str())),
                        for b in Browser::all() {
                            option { selected: b == browser(), value: "{b}", "{b}" }
                        }
                    }
                }

                div { style: "display: flex; gap: 8px;",
                    button {
                        style: "padding: 10px 16px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                        disabled: url().trim().is_empty(),
                        onclick: on_save,
                        "Save Changes"
                    }
                    button {
                        style: "padding: 10px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linksaver_core::types::DEFAULT_TAG;

    #[test]
    fn merge_preserves_identity_fields() {
        let seed = Link::new("https://old.com")
            .title("Old")
            .description("kept description")
            .complete(true)
            .date("11 October 2022");
        let id = seed.id;

        let merged = merge_edit(
            &seed,
            " https://new.com ",
            "New",
            "Rust Videos",
            "b",
            Browser::Firefox,
        );

        assert_eq!(merged.id, id);
        assert_eq!(merged.url, "https://new.com");
        assert_eq!(merged.title.as_deref(), Some("New"));
        assert_eq!(merged.description.as_deref(), Some("kept description"));
        assert_eq!(merged.tags, vec!["Rust", "Videos"]);
        assert_eq!(merged.priority, 'B');
        assert_eq!(merged.browser, Browser::Firefox);
        assert!(merged.complete);
        assert_eq!(merged.date, "11 October 2022");
    }

    #[test]
    fn merge_with_blank_fields_falls_back_to_defaults() {
        let seed = Link::new("https://a.com");
        let merged = merge_edit(&seed, "https://a.com", "", "  ", "", Browser::Default);

        assert_eq!(merged.title.as_deref(), Some(""));
        assert_eq!(merged.tags, vec![DEFAULT_TAG.to_string()]);
        assert_eq!(merged.priority, 'A');
    }
}
