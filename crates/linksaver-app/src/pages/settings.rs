// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — config editing and (debug builds) sample link generation.

use dioxus::prelude::*;

use linksaver_core::human_errors::humanize_error;
use linksaver_core::types::Browser;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut feedback = use_signal(|| None::<String>);
    let config = state.read().config.clone();
    let platform = svc.platform_name();
    let data_dir = svc.data_dir().display().to_string();

    let save = {
        let svc = svc.clone();
        move |new_config: linksaver_core::AppConfig| {
            if let Err(e) = svc.save_config(&new_config) {
                feedback.set(Some(humanize_error(&e).message));
            }
            state.write().config = new_config;
        }
    };

    rsx! {
        div {
            h1 { "Settings" }

            if let Some(message) = feedback() {
                p { style: "background: #f3f3f3; padding: 8px; border-radius: 6px;", "{message}" }
            }

            div { style: "display: flex; flex-direction: column; gap: 16px; max-width: 480px;",
                label { "Default browser for new links"
                    select {
                        style: "padding: 8px; display: block; margin-top: 4px;",
                        onchange: {
                            let mut save = save.clone();
                            let config = config.clone();
                            move |e: Event<FormData>| {
                                let mut c = config.clone();
                                c.default_browser = Browser::from(e.value().as_str());
                                save(c);
                            }
                        },
                        for b in Browser::all() {
                            option { selected: b == config.default_browser, value: "{b}", "{b}" }
                        }
                    }
                }

                label {
                    input {
                        r#type: "checkbox",
                        checked: config.auto_fetch_metadata,
                        onchange: {
                            let mut save = save.clone();
                            let config = config.clone();
                            move |e: Event<FormData>| {
                                let mut c = config.clone();
                                c.auto_fetch_metadata = e.checked();
                                save(c);
                            }
                        },
                    }
                    " Fetch page title and description when saving"
                }

                label {
                    input {
                        r#type: "checkbox",
                        checked: config.show_completed,
                        onchange: {
                            let mut save = save.clone();
                            let config = config.clone();
                            move |e: Event<FormData>| {
                                let mut c = config.clone();
                                c.show_completed = e.checked();
                                save(c);
                            }
                        },
                    }
                    " Show completed links in the list"
                }

                p { style: "color: #888; font-size: 13px;",
                    "Platform: {platform}"
                    br {}
                    "Data directory: {data_dir}"
                }

                if cfg!(debug_assertions) {
                    GenerateSamples {}
                }
            }
        }
    }
}

/// Debug-only helper to populate a fresh install with random links.
#[component]
fn GenerateSamples() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    rsx! {
        button {
            style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white; align-self: flex-start;",
            onclick: move |_| {
                #[cfg(debug_assertions)]
                {
                    match svc.generate_samples() {
                        Ok(count) => {
                            tracing::info!(count, "sample links created");
                            state.write().refresh(&svc);
                        }
                        Err(e) => {
                            state.write().status_message =
                                Some(humanize_error(&e).message);
                        }
                    }
                }
            },
            "Generate sample links"
        }
    }
}
