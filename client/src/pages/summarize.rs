//! Home page hosting the summarization panel.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::summarize_panel::SummarizePanel;

#[component]
pub fn SummarizePage() -> impl IntoView {
    view! {
        <Title text="Ency | Summarize"/>
        <main class="summarize-page">
            <SummarizePanel/>
        </main>
    }
}
