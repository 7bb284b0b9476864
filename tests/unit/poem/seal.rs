use super::*;

#[test]
fn last_two_glyphs_stack_vertically() {
    let seal = SealSpec::new(Some("李清照"), 2024).unwrap();
    assert_eq!(seal.text(), "清照");
    assert_eq!(seal.layout(), SealLayout::Vertical);
}

#[test]
fn single_glyph_is_horizontal() {
    let seal = SealSpec::new(Some("白"), 2024).unwrap();
    assert_eq!(seal.text(), "白");
    assert_eq!(seal.layout(), SealLayout::Horizontal);
}

#[test]
fn blank_or_missing_names_use_the_default_glyph() {
    for name in [None, Some(""), Some("   "), Some("!!")] {
        let seal = SealSpec::new(name, 2024).unwrap();
        assert_eq!(seal.text(), DEFAULT_SEAL_GLYPH.to_string());
        assert_eq!(seal.layout(), SealLayout::Horizontal);
    }
}

#[test]
fn punctuation_and_spaces_are_skipped() {
    assert_eq!(SealSpec::new(Some("Ada Lovelace."), 2024).unwrap().text(), "ce");
    assert_eq!(SealSpec::new(Some("苏 轼"), 2024).unwrap().text(), "苏轼");
}

#[test]
fn long_names_are_rejected() {
    let name = "名".repeat(MAX_NAME_CHARS + 1);
    assert!(matches!(
        SealSpec::new(Some(&name), 2024),
        Err(InkError::Validation(_))
    ));
    assert!(SealSpec::new(Some(&"名".repeat(MAX_NAME_CHARS)), 2024).is_ok());
}

#[test]
fn sexagenary_cycle() {
    assert_eq!(sexagenary_label(1984), "甲子年");
    assert_eq!(sexagenary_label(2024), "甲辰年");
    assert_eq!(sexagenary_label(2025), "乙巳年");
    assert_eq!(sexagenary_label(2044), "甲子年");
    assert_eq!(sexagenary_label(4), "甲子年");
    assert_eq!(sexagenary_label(3), "癸亥年");
    assert_eq!(SealSpec::new(None, 2026).unwrap().year_label(), "丙午年");
}
