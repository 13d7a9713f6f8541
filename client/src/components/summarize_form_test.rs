use super::*;

#[test]
fn form_offers_text_then_url() {
    assert_eq!(FORM_MODES, [SummarizeMode::Text, SummarizeMode::Url]);
}

#[test]
fn mode_label_names_each_mode() {
    assert_eq!(mode_label(SummarizeMode::Text), "Text");
    assert_eq!(mode_label(SummarizeMode::Url), "URL");
}

#[test]
fn input_placeholder_depends_on_mode() {
    assert_eq!(input_placeholder(SummarizeMode::Text), "Paste or enter some text to summarize");
    assert!(input_placeholder(SummarizeMode::Url).starts_with("https://"));
}
