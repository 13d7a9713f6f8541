//! Summarization panel: intro + launcher, then the edit box and result.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns a `RwSignal<SummarizeState>` and is the only writer. All
//! transitions go through `SummarizeState`; this module only wires DOM events
//! to them and runs the network call for each accepted submit.

#[cfg(test)]
#[path = "summarize_panel_test.rs"]
mod summarize_panel_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::modal_container::ModalContainer;
use crate::components::summarize_form::SummarizeForm;
use crate::net::api::HttpSummarizer;
use crate::state::summarize::{SubmitError, SummarizeMode, SummarizeRequest, SummarizeState};
use crate::util::browser;

const INTRO: &str = "Ency is a powerful text summarizer, which can give you a summary of a text or a URL. \
    It can also give you suggestions for Wikipedia articles, as well as important keywords. \
    Ency also gives you the choice on many points: you can choose the number of sentences, \
    but also whether or not to suggest articles, and more.";

const HOW_IT_WORKS: &[&str] = &[
    "Ency is an Artificial Intelligence based on Transformers, a recent Deep Learning model widely used for \
     summarization and translation tasks, and more generally for Natural Language Processing (NLP).",
    "Ency is based on the DistilBERT model, a variant of BERT, developed by Google Research. \
     It uses Transfer Learning to avoid weeks of training: a DistilBERT configuration is imported and the \
     model is rewritten on top of it.",
    "Ency runs on a small cloud instance with two CPUs, so an answer usually arrives in about ten seconds.",
];

pub(crate) fn edit_heading(mode: SummarizeMode) -> &'static str {
    match mode {
        SummarizeMode::Url => "Summarize Webpage",
        SummarizeMode::Text | SummarizeMode::Unset => "Summarize Text",
    }
}

/// User-facing reaction to a rejected submit; `None` means stay silent.
pub(crate) fn submit_error_alert(err: SubmitError) -> Option<String> {
    match err {
        SubmitError::EmptyValue => Some(err.to_string()),
        SubmitError::NoMode => None,
    }
}

/// Summarization panel rendered on the home page.
#[component]
pub fn SummarizePanel() -> impl IntoView {
    let state = RwSignal::new(SummarizeState::default());
    let api = use_context::<HttpSummarizer>().unwrap_or_default();

    // Runs the accepted request and feeds the outcome back into state.
    let start = Callback::new(move |request: SummarizeRequest| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::state::summarize::dispatch(&api, &request).await;
                if let Err(e) = &outcome {
                    log::error!("summarize request {} failed: {e}", request.id);
                }
                let applied = state.try_update(|s| s.finish(request.id, outcome)).unwrap_or(false);
                if !applied {
                    log::debug!("dropped stale summarize response {}", request.id);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, request);
        }
    });

    let handle_submitted = move |submitted: Option<Result<SummarizeRequest, SubmitError>>| match submitted {
        Some(Ok(request)) => start.run(request),
        Some(Err(err)) => {
            if let Some(message) = submit_error_alert(err) {
                browser::alert(&message);
            }
        }
        None => {}
    };

    let on_form_submit = Callback::new(move |(mode, value): (SummarizeMode, String)| {
        handle_submitted(state.try_update(|s| s.choose(mode, value)));
    });
    let on_resubmit = Callback::new(move |()| {
        handle_submitted(state.try_update(|s| s.submit(None, SummarizeMode::Unset)));
    });
    let on_back = Callback::new(move |()| state.update(SummarizeState::reset));
    let on_close_form = Callback::new(move |()| state.update(SummarizeState::close_form));

    let intro = move || {
        view! {
            <div class="summarize__intro">
                <SummarizeHeader show_back=false on_back=on_back/>
                <p class="summarize__blurb">{INTRO}</p>
                <button class="btn btn--primary" on:click=move |_| state.update(SummarizeState::open_form)>
                    "Summarise Stuff here!"
                </button>
                <ModalContainer
                    title="Summarize"
                    hidden=Signal::derive(move || state.with(|s| s.form_hidden))
                    on_close=on_close_form
                >
                    <SummarizeForm on_submit=on_form_submit/>
                </ModalContainer>
            </div>
            <div class="summarize__how">
                <DividerHeading text="How does it work"/>
                <ol class="summarize__how-list">
                    {HOW_IT_WORKS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ol>
            </div>
        }
    };

    view! {
        <div class="summarize">
            <Show when=move || state.with(|s| s.mode.is_set()) fallback=intro>
                <SummarizeHeader show_back=true on_back=on_back/>
                <EditValue state=state on_submit=on_resubmit/>
                <DividerHeading text="Summary"/>
                <div class="summarize__result">
                    <Show
                        when=move || state.with(|s| s.loading)
                        fallback=move || {
                            view! {
                                <p class="summarize__summary">{move || state.with(|s| s.summary.clone())}</p>
                                {move || {
                                    state
                                        .with(|s| s.error.clone())
                                        .map(|e| view! { <p class="summarize__error">{e}</p> })
                                }}
                            }
                        }
                    >
                        <div class="summarize__loading">
                            <LoadingSpinner size=16/>
                            <p>"This will take a few moments"</p>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Page title with an optional back arrow.
#[component]
fn SummarizeHeader(show_back: bool, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="summarize__header">
            <div>
                <h1 class="summarize__title">"Summarize"</h1>
                <hr class="summarize__rule"/>
            </div>
            {show_back
                .then(|| {
                    view! {
                        <button class="summarize__back" title="Back" on:click=move |_| on_back.run(())>
                            <svg viewBox="0 0 24 24" width="28" height="28" fill="none" stroke="currentColor" stroke-width="2">
                                <line x1="19" y1="12" x2="5" y2="12"></line>
                                <polyline points="12 19 5 12 12 5"></polyline>
                            </svg>
                        </button>
                    }
                })}
        </div>
    }
}

/// Editable copy of the submitted value with a "Summarize Again" button.
#[component]
fn EditValue(state: RwSignal<SummarizeState>, on_submit: Callback<()>) -> impl IntoView {
    let mode = move || state.with(|s| s.mode);
    let value = move || state.with(|s| s.value.clone());
    let on_input = move |ev: leptos::ev::Event| state.update(|s| s.change_input(event_target_value(&ev)));

    view! {
        <div class="summarize__edit">
            <h2 class="summarize__edit-heading">{move || edit_heading(mode())}</h2>
            <div class="summarize__edit-row">
                {move || {
                    if mode() == SummarizeMode::Url {
                        view! {
                            <input class="summarize__input" type="text" prop:value=value on:input=on_input/>
                        }
                            .into_any()
                    } else {
                        view! {
                            <textarea
                                class="summarize__input summarize__input--text"
                                cols="45"
                                rows="5"
                                placeholder="Paste or enter some text to summarize"
                                prop:value=value
                                on:input=on_input
                            ></textarea>
                        }
                            .into_any()
                    }
                }}
                <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                    "Summarize Again"
                </button>
            </div>
        </div>
    }
}

/// Centered heading drawn over a horizontal rule.
#[component]
fn DividerHeading(text: &'static str) -> impl IntoView {
    view! {
        <h4 class="divider-heading">
            <span>{text}</span>
        </h4>
    }
}
