use super::*;

#[test]
fn spinner_style_scales_by_quarter_rem() {
    assert_eq!(spinner_style(16), "width: 4rem; height: 4rem;");
    assert_eq!(spinner_style(6), "width: 1.5rem; height: 1.5rem;");
}
