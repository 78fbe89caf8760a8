//! Login Page

use leptos::*;

use datavision::client::Backend;
use datavision::i18n::TextKey;
use datavision::views::LoginForm;

use crate::components::LanguageSwitch;
use crate::state::use_app_state;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();

    let form = create_rw_signal(LoginForm::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            let outcome = state.client().login(&request).await;
            let shell = state.shell();
            let user = form.try_update(|f| f.finish(outcome, shell.storage())).flatten();
            set_submitting.set(false);
            if let Some(user) = user {
                state.logged_in(user);
            }
        });
    };

    let error = move || {
        state
            .localize(|language, catalog| form.with(|f| f.error_message(language, catalog)))
            .map(|message| {
                view! {
                    <div class="text-red-400 text-sm" role="alert">{message}</div>
                }
            })
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 space-y-6">
                <div class="flex justify-end">
                    <LanguageSwitch />
                </div>

                <div class="text-center">
                    <h1 class="text-3xl font-bold">{move || state.text(TextKey::AppTitle)}</h1>
                    <p class="text-gray-400 mt-1">{move || state.text(TextKey::LoginSubtitle)}</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">
                            {move || state.text(TextKey::UsernameLabel)}
                        </label>
                        <input
                            type="text"
                            autocomplete="username"
                            required
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">
                            {move || state.text(TextKey::PasswordLabel)}
                        </label>
                        <input
                            type="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    {error}

                    <button
                        type="submit"
                        disabled=move || submitting.get() || !form.with(LoginForm::can_submit)
                        class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || state.text(TextKey::LoginSubmit)}
                    </button>
                </form>
            </div>
        </div>
    }
}
