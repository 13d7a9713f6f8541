use super::*;

#[test]
fn endpoints_append_summarize_paths() {
    let api = HttpSummarizer::new("https://ai.example.test");
    assert_eq!(api.text_endpoint(), "https://ai.example.test/summarize/text");
    assert_eq!(api.url_endpoint(), "https://ai.example.test/summarize/url");
}

#[test]
fn new_trims_trailing_slashes() {
    let api = HttpSummarizer::new("https://ai.example.test//");
    assert_eq!(api.base_url(), "https://ai.example.test");
}

#[test]
fn default_uses_build_time_base_url() {
    let api = HttpSummarizer::default();
    assert_eq!(api.base_url(), summarizer_base_url().trim_end_matches('/'));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let api = HttpSummarizer::default();
    let text = futures::executor::block_on(api.summarize_text("abc"));
    let url = futures::executor::block_on(api.summarize_url("http://example.com"));
    assert_eq!(text, Err(ApiError::Unavailable));
    assert_eq!(url, Err(ApiError::Unavailable));
}
