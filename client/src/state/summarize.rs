//! Summarization panel session state.
//!
//! DESIGN
//! ======
//! A request is split into a synchronous `submit` (validate, flip to loading,
//! hand back a [`SummarizeRequest`]) and a `finish` applied when the network
//! call resolves. Only the completion matching the latest request id is
//! applied, so a response arriving after `reset` or after a newer submit is
//! dropped instead of clobbering the current view.

#[cfg(test)]
#[path = "summarize_test.rs"]
mod summarize_test;

use crate::net::api::Summarizer;
use crate::net::types::ApiError;

/// Which kind of input the user is summarizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummarizeMode {
    /// No mode chosen yet; the panel shows its intro.
    #[default]
    Unset,
    Text,
    Url,
}

impl SummarizeMode {
    #[must_use]
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

/// Rejections raised before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("No value entered")]
    EmptyValue,
    #[error("No summarize mode selected")]
    NoMode,
}

/// One outbound summarization call, as resolved by [`SummarizeState::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub id: u64,
    pub mode: SummarizeMode,
    pub value: String,
}

/// Top-level view the panel should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Intro copy plus the form launcher.
    Intro,
    /// Edit box plus result area; `loading` selects spinner vs. summary.
    Editing { loading: bool },
}

/// Transient state for one summarization session.
#[derive(Clone, Debug)]
pub struct SummarizeState {
    pub mode: SummarizeMode,
    pub value: String,
    pub summary: String,
    pub loading: bool,
    pub form_hidden: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl Default for SummarizeState {
    fn default() -> Self {
        Self {
            mode: SummarizeMode::Unset,
            value: String::new(),
            summary: String::new(),
            loading: false,
            form_hidden: true,
            error: None,
            request_seq: 0,
        }
    }
}

impl SummarizeState {
    #[must_use]
    pub fn view(&self) -> PanelView {
        if self.mode.is_set() {
            PanelView::Editing { loading: self.loading }
        } else {
            PanelView::Intro
        }
    }

    /// Id of the most recently dispatched (or invalidated) request.
    #[must_use]
    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    pub fn open_form(&mut self) {
        self.form_hidden = false;
    }

    pub fn close_form(&mut self) {
        self.form_hidden = true;
    }

    pub fn change_input(&mut self, value: String) {
        self.value = value;
    }

    /// Handle a form submission: adopt the chosen mode and value, hide the
    /// form, then submit. The mode sticks even when the value is rejected,
    /// leaving the user on the edit view to fix it.
    ///
    /// # Errors
    ///
    /// Same as [`SummarizeState::submit`].
    pub fn choose(&mut self, mode: SummarizeMode, value: String) -> Result<SummarizeRequest, SubmitError> {
        self.mode = mode;
        self.value = value;
        self.form_hidden = true;
        self.submit(None, mode)
    }

    /// Resolve the effective value and mode and start a request.
    ///
    /// Values already held by the session win over the arguments: a
    /// non-blank `value` ignores `raw`, a chosen `mode` ignores `mode`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyValue`] when the effective value is blank and
    /// [`SubmitError::NoMode`] when no mode is known. State is untouched in
    /// both cases.
    pub fn submit(&mut self, raw: Option<&str>, mode: SummarizeMode) -> Result<SummarizeRequest, SubmitError> {
        let value = if self.value.trim().is_empty() { raw.unwrap_or_default() } else { self.value.as_str() };
        let value = value.trim();
        if value.is_empty() {
            return Err(SubmitError::EmptyValue);
        }
        let mode = if self.mode.is_set() { self.mode } else { mode };
        if !mode.is_set() {
            return Err(SubmitError::NoMode);
        }

        let value = value.to_owned();
        self.summary.clear();
        self.error = None;
        self.loading = true;
        self.request_seq += 1;
        Ok(SummarizeRequest { id: self.request_seq, mode, value })
    }

    /// Apply a request outcome. Returns `false` (and changes nothing) when
    /// the request has been superseded.
    pub fn finish(&mut self, id: u64, outcome: Result<String, ApiError>) -> bool {
        if id != self.request_seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(summary) => self.summary = summary,
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Return to the intro view. An in-flight request keeps running but its
    /// completion will be ignored.
    pub fn reset(&mut self) {
        self.mode = SummarizeMode::Unset;
        self.value.clear();
        self.summary.clear();
        self.error = None;
        self.loading = false;
        self.request_seq += 1;
    }
}

/// Issue exactly one API call for `request`, chosen by its mode.
///
/// # Errors
///
/// Whatever the API returns; an `Unset` mode never reaches the network.
pub async fn dispatch<S: Summarizer + ?Sized>(api: &S, request: &SummarizeRequest) -> Result<String, ApiError> {
    let response = match request.mode {
        SummarizeMode::Text => api.summarize_text(&request.value).await?,
        SummarizeMode::Url => api.summarize_url(&request.value).await?,
        SummarizeMode::Unset => return Err(ApiError::Request("no summarize mode selected".to_owned())),
    };
    Ok(response.output)
}
