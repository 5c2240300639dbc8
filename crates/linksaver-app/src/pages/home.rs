// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — the saved link list with open/copy/complete/delete actions.

use dioxus::prelude::*;

use linksaver_core::human_errors::humanize_error;
use linksaver_core::types::Link;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

const ACTION_STYLE: &str =
    "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px;";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    // Pick up links added on other pages.
    let svc_refresh = svc.clone();
    use_effect(move || {
        state.write().refresh(&svc_refresh);
    });

    let visible: Vec<Link> = state
        .read()
        .visible_links()
        .into_iter()
        .cloned()
        .collect();
    let link_count = visible.len();
    let filter = state.read().filter_tag.clone();
    let status = state.read().status_message.clone();

    rsx! {
        div {
            h1 { "Link Saver" }
            p { style: "color: #666;", "Your saved links" }

            if let Some(message) = status {
                p { style: "color: #b00; background: #fee; padding: 8px; border-radius: 6px;",
                    "{message}"
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { "Links" }
                if let Some(tag) = filter {
                    button {
                        style: "padding: 4px 10px; border-radius: 12px; border: 1px solid #007aff; background: #eaf3ff;",
                        onclick: move |_| {
                            state.write().filter_tag = None;
                        },
                        "Tag: {tag} ✕"
                    }
                }
            }

            if link_count == 0 {
                p { style: "color: #888;", "No links saved yet. Add one from the Add tab." }
            } else {
                p { style: "color: #666; font-size: 14px; margin-bottom: 8px;",
                    "{link_count} link(s)"
                }
                for link in visible {
                    LinkRow { link }
                }
            }
        }
    }
}

#[component]
fn LinkRow(link: Link) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let nav = use_navigator();

    let title = match link.title.as_deref() {
        Some("") | None => link.url.clone(),
        Some(t) => t.to_string(),
    };
    let tags = link.tags.clone();
    let done = link.complete;

    let open = {
        let svc = svc.clone();
        let link = link.clone();
        move |_| {
            if let Err(e) = svc.open_link(&link) {
                tracing::error!(error = %e, "open failed");
                state.write().status_message = Some(humanize_error(&e).message);
            }
        }
    };
    let copy = {
        let svc = svc.clone();
        let link = link.clone();
        move |_| match svc.copy_url(&link) {
            Ok(()) => state.write().status_message = None,
            Err(e) => state.write().status_message = Some(humanize_error(&e).message),
        }
    };
    let edit = {
        let id = link.id;
        move |_| {
            nav.push(Route::EditLink { id: id.to_string() });
        }
    };
    let toggle = {
        let svc = svc.clone();
        let link = link.clone();
        move |_| {
            if let Err(e) = svc.toggle_complete(&link) {
                state.write().status_message = Some(humanize_error(&e).message);
            }
            state.write().refresh(&svc);
        }
    };
    let delete = {
        let svc = svc.clone();
        let id = link.id;
        move |_| {
            if let Err(e) = svc.delete_link(id) {
                state.write().status_message = Some(humanize_error(&e).message);
            }
            state.write().refresh(&svc);
        }
    };

    rsx! {
        div { style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 12px; margin-bottom: 8px;",
            div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                strong {
                    style: if done { "text-decoration: line-through; color: #888;" } else { "" },
                    "{title}"
                }
                span { style: "color: #999; font-size: 12px;", "{link.priority} · {link.date}" }
            }
            p { style: "color: #007aff; font-size: 13px; margin: 4px 0; word-break: break-all;",
                "{link.url}"
            }
            div { style: "display: flex; gap: 6px; flex-wrap: wrap; margin: 4px 0;",
                for tag in tags {
                    button {
                        style: "padding: 2px 8px; border-radius: 10px; border: 1px solid #ccc; background: #f5f5f5; font-size: 12px;",
                        onclick: {
                            let tag = tag.clone();
                            move |_| {
                                state.write().filter_tag = Some(tag.clone());
                            }
                        },
                        "{tag}"
                    }
                }
            }
            div { style: "display: flex; gap: 8px; margin-top: 8px;",
                button { style: ACTION_STYLE, onclick: open, "Open" }
                button { style: ACTION_STYLE, onclick: copy, "Copy" }
                button { style: ACTION_STYLE, onclick: edit, "Edit" }
                button { style: ACTION_STYLE, onclick: toggle,
                    if done { "Undo" } else { "Done" }
                }
                button { style: ACTION_STYLE, onclick: delete, "Delete" }
            }
        }
    }
}
