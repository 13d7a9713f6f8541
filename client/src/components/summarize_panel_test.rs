use super::*;

#[test]
fn edit_heading_follows_mode() {
    assert_eq!(edit_heading(SummarizeMode::Url), "Summarize Webpage");
    assert_eq!(edit_heading(SummarizeMode::Text), "Summarize Text");
}

#[test]
fn empty_value_raises_alert() {
    assert_eq!(submit_error_alert(SubmitError::EmptyValue).as_deref(), Some("No value entered"));
}

#[test]
fn missing_mode_stays_silent() {
    assert_eq!(submit_error_alert(SubmitError::NoMode), None);
}

#[test]
fn how_it_works_has_three_steps() {
    assert_eq!(HOW_IT_WORKS.len(), 3);
    assert!(HOW_IT_WORKS.iter().all(|step| !step.trim().is_empty()));
}
