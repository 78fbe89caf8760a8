//! App Root Component
//!
//! Wires the shell to the browser, probes the session once, and renders the
//! page for the current route.

use chrono::Datelike;
use leptos::*;

use datavision::i18n::TextKey;
use datavision::router::Route;

use crate::pages::{DashboardPage, LoginPage};
use crate::state::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    // Back/forward and manual edits of the fragment
    let listener = window_event_listener(ev::hashchange, move |_| state.sync_route());
    on_cleanup(move || listener.remove());

    state.bootstrap();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1">
                {move || match state.route.get() {
                    Route::Login => view! { <LoginPage /> }.into_view(),
                    Route::Dashboard => view! { <DashboardPage /> }.into_view(),
                }}
            </main>

            <Footer state=state />
        </div>
    }
}

/// Footer with branding
#[component]
fn Footer(state: AppState) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto text-center text-sm text-gray-400">
                {move || copyright_line(year, &state.text(TextKey::AppName))}
                " "
                <a
                    href=AUTHOR_URL
                    target="_blank"
                    rel="noreferrer"
                    class="text-primary-300 underline"
                >
                    {move || state.text(TextKey::FooterBuiltBy)}
                </a>
            </div>
        </footer>
    }
}

const AUTHOR_URL: &str = "https://www.linkedin.com/in/hanisten-thivakaran-765043327";

fn copyright_line(year: i32, app_name: &str) -> String {
    format!("\u{a9} {} {} \u{b7}", year, app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2024, "UCCP DataVision"), "\u{a9} 2024 UCCP DataVision \u{b7}");
    }
}
