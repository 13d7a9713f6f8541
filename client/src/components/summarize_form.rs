//! Form for picking a summarize mode and entering the first value.

#[cfg(test)]
#[path = "summarize_form_test.rs"]
mod summarize_form_test;

use leptos::prelude::*;

use crate::state::summarize::SummarizeMode;

/// Modes offered by the form, in display order.
const FORM_MODES: [SummarizeMode; 2] = [SummarizeMode::Text, SummarizeMode::Url];

pub(crate) fn mode_label(mode: SummarizeMode) -> &'static str {
    match mode {
        SummarizeMode::Url => "URL",
        SummarizeMode::Text | SummarizeMode::Unset => "Text",
    }
}

pub(crate) fn input_placeholder(mode: SummarizeMode) -> &'static str {
    match mode {
        SummarizeMode::Url => "https://example.com/article",
        SummarizeMode::Text | SummarizeMode::Unset => "Paste or enter some text to summarize",
    }
}

/// Mode toggle plus a matching input. Submitting hands `(mode, value)` to
/// `on_submit`; validation is left to the caller.
#[component]
pub fn SummarizeForm(on_submit: Callback<(SummarizeMode, String)>) -> impl IntoView {
    let mode = RwSignal::new(SummarizeMode::Text);
    let value = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((mode.get_untracked(), value.get_untracked()));
        value.set(String::new());
    };

    view! {
        <form class="summarize-form" on:submit=on_form_submit>
            <div class="summarize-form__modes" role="tablist">
                {FORM_MODES
                    .iter()
                    .map(|&m| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="summarize-form__mode"
                                class:summarize-form__mode--active=move || mode.get() == m
                                on:click=move |_| mode.set(m)
                            >
                                {mode_label(m)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                if mode.get() == SummarizeMode::Url {
                    view! {
                        <input
                            class="summarize-form__input"
                            type="url"
                            placeholder=input_placeholder(SummarizeMode::Url)
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <textarea
                            class="summarize-form__input summarize-form__input--text"
                            rows="6"
                            placeholder=input_placeholder(SummarizeMode::Text)
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                        ></textarea>
                    }
                        .into_any()
                }
            }}
            <button class="btn btn--primary" type="submit">
                "Summarize"
            </button>
        </form>
    }
}
