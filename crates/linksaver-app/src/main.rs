// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Link Saver — desktop bookmark keeper
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use linksaver_core::human_errors::humanize_error;

use pages::add_link::AddLink;
use pages::edit_link::EditLink;
use pages::home::Home;
use pages::settings::Settings;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Link Saver starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Home {},
    #[route("/add")]
    AddLink {},
    #[route("/edit/:id")]
    EditLink { id: String },
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (storage backend, validator, bridge).
    // Failure here means the HTTP client could not be built; render the
    // reason instead of the app.
    let services = use_hook(|| {
        AppServices::init().map_err(|e| {
            tracing::error!(error = %e, "service initialisation failed");
            humanize_error(&e)
        })
    });

    match services {
        Ok(svc) => {
            // Provide services and state as context for all pages
            use_context_provider(|| svc.clone());
            use_context_provider(|| Signal::new(state::AppState::new(&svc)));

            rsx! {
                Router::<Route> {}
            }
        }
        Err(human) => rsx! {
            div { style: "padding: 32px; font-family: system-ui, sans-serif;",
                h1 { "Link Saver couldn't start" }
                p { "{human.message}" }
                p { style: "color: #666;", "{human.suggestion}" }
            }
        },
    }
}

/// Persistent bottom tab layout wrapping all pages.
#[component]
fn TabLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Bottom tab bar
            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Home {}, label: "Links", icon: "L" }
                TabButton { to: Route::AddLink {}, label: "Add", icon: "+" }
                TabButton { to: Route::Settings {}, label: "Settings", icon: "S" }
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}
