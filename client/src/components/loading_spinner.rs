//! Indeterminate loading spinner.

#[cfg(test)]
#[path = "loading_spinner_test.rs"]
mod loading_spinner_test;

use leptos::prelude::*;

/// Inline style for a spinner of `size` quarter-rem units (so `16` is `4rem`).
fn spinner_style(size: u32) -> String {
    let rem = f64::from(size) * 0.25;
    format!("width: {rem}rem; height: {rem}rem;")
}

#[component]
pub fn LoadingSpinner(#[prop(default = 16)] size: u32) -> impl IntoView {
    view! { <div class="loading-spinner" style=spinner_style(size) role="status" aria-label="Loading"></div> }
}
