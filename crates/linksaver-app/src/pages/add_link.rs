// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Add-link page — candidate form, clipboard prefill, and the
// append-and-validate flow.

use dioxus::prelude::*;

use linksaver_core::human_errors::humanize_error;
use linksaver_core::types::{Browser, Link};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn AddLink() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let default_browser = svc.config().default_browser;

    let mut url = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut priority = use_signal(|| "A".to_string());
    let mut browser = use_signal(move || default_browser);
    let mut saving = use_signal(|| false);
    let mut feedback = use_signal(|| None::<String>);

    let on_save = {
        let svc = svc.clone();
        move |_| {
            if saving() {
                return;
            }
            let candidate = Link::new_with_date(url().trim())
                .tags(&tags())
                .priority(priority().chars().next().unwrap_or('A').to_ascii_uppercase())
                .browser(browser());
            // Blank title means "fetch it from the page".
            let candidate = match title().trim() {
                "" => candidate,
                t => candidate.title(t),
            };

            saving.set(true);
            feedback.set(None);

            let svc = svc.clone();
            spawn(async move {
                match svc.add_link(candidate).await {
                    Ok(link) => {
                        tracing::info!(id = %link.id, "link added");
                        url.set(String::new());
                        title.set(String::new());
                        tags.set(String::new());
                        feedback.set(Some(format!(
                            "Saved \"{}\"",
                            link.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&link.url)
                        )));
                        state.write().refresh(&svc);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "add link failed");
                        let human = humanize_error(&e);
                        feedback.set(Some(format!("{} {}", human.message, human.suggestion)));
                    }
                }
                saving.set(false);
            });
        }
    };

    let on_paste = {
        let svc = svc.clone();
        move |_| match svc.clipboard_text() {
            Ok(Some(text)) => url.set(text.trim().to_string()),
            Ok(None) => feedback.set(Some("Clipboard is empty.".into())),
            Err(e) => feedback.set(Some(humanize_error(&e).message)),
        }
    };

    rsx! {
        div {
            h1 { "Add a Link" }

            if let Some(message) = feedback() {
                p { style: "background: #f3f3f3; padding: 8px; border-radius: 6px;", "{message}" }
            }

            div { style: "display: flex; flex-direction: column; gap: 12px; max-width: 480px;",
                label { "URL"
                    div { style: "display: flex; gap: 8px;",
                        input {
                            style: "flex: 1; padding: 8px;",
                            placeholder: "https://…",
                            value: "{url}",
                            oninput: move |e| url.set(e.value()),
                        }
                        button {
                            style: "padding: 8px 12px;",
                            onclick: on_paste,
                            "Paste"
                        }
                    }
                }

                label { "Title (leave blank to fetch from the page)"
                    input {
                        style: "width: 100%; padding: 8px;",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }

                label { "Tags (space separated)"
                    input {
                        style: "width: 100%; padding: 8px;",
                        placeholder: "Videos Tutorial Rust",
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

                button {
                    style: "padding: 10px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                    disabled: saving() || url().trim().is_empty(),
                    onclick: on_save,
                    if saving() { "Validating…" } else { "Save Link" }
                }
            }
        }
    }
}
