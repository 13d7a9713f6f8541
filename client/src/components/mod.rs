//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the summarization flow. Only `summarize_panel` holds
//! session state; the rest are presentational.

pub mod loading_spinner;
pub mod modal_container;
pub mod summarize_form;
pub mod summarize_panel;
