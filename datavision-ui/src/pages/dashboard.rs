//! Dashboard Page
//!
//! Work code filter, date range and the resulting communication count.

use leptos::*;

use datavision::client::Backend;
use datavision::i18n::TextKey;
use datavision::query::Field;
use datavision::views::Dashboard;

use crate::components::{ErrorCard, LanguageSwitch, ResultCard};
use crate::state::{use_app_state, AppState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();
    let dashboard = create_rw_signal(Dashboard::new());

    // Mount guard; deferred so the redirect does not re-enter the render
    request_animation_frame(move || {
        let shell = state.shell();
        Dashboard::guard(shell.storage(), shell.router());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = dashboard.try_update(|d| d.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = state.client().count(&query).await;
            if let Some(route) = dashboard.try_update(|d| d.finish(outcome)).flatten() {
                state.navigate(route);
            }
        });
    };

    let error = move || {
        state
            .localize(|language, catalog| dashboard.with(|d| d.error_message(language, catalog)))
            .map(|message| view! { <ErrorCard message=message /> })
    };

    let result = move || {
        state
            .localize(|language, catalog| dashboard.with(|d| d.summary(language, catalog)))
            .map(|summary| view! { <ResultCard summary=summary /> })
    };

    view! {
        <div class="container mx-auto px-4 py-8 pb-24 space-y-8">
            <Header state=state />

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <QueryField state=state dashboard=dashboard field=Field::Workcode />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <QueryField state=state dashboard=dashboard field=Field::From />
                    <QueryField state=state dashboard=dashboard field=Field::To />
                </div>

                <button
                    type="submit"
                    disabled=move || !dashboard.with(Dashboard::can_submit)
                    class="w-full md:w-auto px-6 py-3 bg-primary-600 hover:bg-primary-700
                           disabled:bg-gray-600 rounded-lg font-medium transition-colors
                           flex items-center justify-center space-x-2"
                >
                    <Show when=move || dashboard.with(Dashboard::is_loading)>
                        <span class="inline-block loading-spinner w-4 h-4" />
                    </Show>
                    <span>
                        {move || {
                            state.localize(|language, catalog| {
                                dashboard.with(|d| d.submit_label(language, catalog))
                            })
                        }}
                    </span>
                </button>
            </form>

            {error}
            {result}
        </div>
    }
}

/// Title, signed-in user, language and logout
#[component]
fn Header(state: AppState) -> impl IntoView {
    view! {
        <header class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">{move || state.text(TextKey::AppTitle)}</h1>
                <p class="text-gray-400 mt-1">{move || state.text(TextKey::DashboardSubtitle)}</p>
            </div>
            <div class="flex items-center space-x-4">
                {move || {
                    state.user_name.get().map(|name| {
                        view! {
                            <span class="text-sm text-gray-400">
                                {state.text(TextKey::LoggedInAs)} " "
                                <span class="text-white font-medium">{name}</span>
                            </span>
                        }
                    })
                }}
                <LanguageSwitch />
                <button
                    on:click=move |_| state.logout()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    {move || state.text(TextKey::Logout)}
                </button>
            </div>
        </header>
    }
}

/// Labelled input bound to one query field
#[component]
fn QueryField(state: AppState, dashboard: RwSignal<Dashboard>, field: Field) -> impl IntoView {
    let (label, kind) = match field {
        Field::Workcode => (TextKey::WorkcodeLabel, "text"),
        Field::From => (TextKey::FromLabel, "date"),
        Field::To => (TextKey::ToLabel, "date"),
    };
    let placeholder = move || {
        (field == Field::Workcode).then(|| state.text(TextKey::WorkcodePlaceholder))
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{move || state.text(label)}</label>
            <input
                type=kind
                placeholder=placeholder
                required=field != Field::Workcode
                disabled=move || dashboard.with(Dashboard::is_loading)
                prop:value=move || dashboard.with(|d| d.form().get(field).to_string())
                on:input=move |ev| dashboard.update(|d| d.edit(field, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
