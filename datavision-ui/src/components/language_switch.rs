//! Language Switch
//!
//! Select box over the supported languages. The choice is persisted.

use leptos::*;

use datavision::i18n::{Language, TextKey};

use crate::state::use_app_state;

#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let state = use_app_state();

    let on_change = move |ev| {
        let code = event_target_value(&ev);
        match Language::from_code(&code) {
            Some(language) => state.set_language(language),
            None => web_sys::console::warn_1(&format!("Unknown language: {}", code).into()),
        }
    };

    view! {
        <label class="flex items-center space-x-2 text-sm text-gray-400">
            <span>{move || state.text(TextKey::LanguageLabel)}</span>
            <select
                on:change=on_change
                class="bg-gray-700 rounded-lg px-3 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none text-white"
            >
                {Language::ALL
                    .iter()
                    .map(|&language| {
                        view! {
                            <option
                                value=language.code()
                                selected=move || state.language.get() == language
                            >
                                {language.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
