//! Result Components
//!
//! Query result and inline error cards for the dashboard.

use leptos::*;

use datavision::i18n::TextKey;
use datavision::views::ResultSummary;

use crate::state::use_app_state;

/// Count for the submitted filter and range
#[component]
pub fn ResultCard(summary: ResultSummary) -> impl IntoView {
    let state = use_app_state();
    let ResultSummary {
        filter,
        range,
        count,
    } = summary;

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <h2 class="text-xl font-semibold mb-4">{move || state.text(TextKey::ResultTitle)}</h2>
            <dl class="space-y-2">
                <div class="flex justify-between">
                    <dt class="text-gray-400">{move || state.text(TextKey::ResultCommunication)}</dt>
                    <dd class="font-medium">{filter}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-400">{move || state.text(TextKey::ResultDateRange)}</dt>
                    <dd class="font-medium">{range}</dd>
                </div>
                <div class="flex justify-between items-baseline">
                    <dt class="text-gray-400">{move || state.text(TextKey::ResultCount)}</dt>
                    <dd>
                        <span class="text-3xl font-bold text-primary-400">{count}</span>
                        " "
                        <span class="text-gray-400">{move || state.text(TextKey::ResultCountSuffix)}</span>
                    </dd>
                </div>
            </dl>
        </section>
    }
}

/// Inline error under a form
#[component]
pub fn ErrorCard(#[prop(into)] message: String) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-lg px-4 py-3 text-red-300" role="alert">
            <strong class="mr-2">{move || state.text(TextKey::ErrorTitle)}</strong>
            <span>{message}</span>
        </div>
    }
}
