use super::*;
use crate::fonts::support::{MapLoader, test_font};

#[test]
fn style_keywords_parse() {
    for s in FontStyle::ALL {
        assert_eq!(FontStyle::parse(s.id()), Some(s));
        assert_eq!(FontStyle::parse(s.chinese_name()), Some(s));
    }
    assert_eq!(FontStyle::parse("KAISHU"), Some(FontStyle::Kaishu));
    assert_eq!(FontStyle::parse("gothic"), None);
    assert_eq!(FontStyle::parse_or_default("gothic"), FontStyle::Kaishu);
    assert_eq!(FontStyle::DEFAULT, FontStyle::Songti);
}

#[test]
fn nothing_loadable_lists_every_attempt() {
    let resolver = FontResolver::new(MapLoader::default());
    let err = resolver.resolve(FontStyle::Caoshu).unwrap_err();
    match &err {
        InkError::FontLoad { style, attempted } => {
            assert_eq!(style, "caoshu");
            assert_eq!(
                attempted,
                &vec![
                    FontStyle::Caoshu.locator().to_string(),
                    FontStyle::Songti.locator().to_string()
                ]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("font load error:"));
    assert_eq!(resolver.loader().calls(), 2);
}

#[test]
fn default_style_is_tried_once() {
    let resolver = FontResolver::new(MapLoader::default());
    let err = resolver.resolve(FontStyle::Songti).unwrap_err();
    let InkError::FontLoad { attempted, .. } = err else {
        panic!("expected font load error");
    };
    assert_eq!(attempted.len(), 1);
}

#[test]
fn garbage_bytes_are_not_a_font() {
    let junk = std::sync::Arc::new(b"not a font".to_vec());
    let resolver = FontResolver::new(MapLoader::all(junk));
    assert!(matches!(
        resolver.resolve(FontStyle::Kaishu),
        Err(InkError::FontLoad { .. })
    ));
}

#[test]
fn decorative_style_registers_the_default_as_fallback() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let resolver = FontResolver::new(MapLoader::all(font));
    let res = resolver.resolve(FontStyle::Xingshu).unwrap();
    assert_eq!(res.primary.style, FontStyle::Xingshu);
    assert_eq!(res.fallback.as_ref().map(|f| f.style), Some(FontStyle::Songti));
    assert!(!res.is_substituted());
    assert_eq!(res.assets().count(), 2);
    // Both assets come from the same file, so the family appears once.
    assert_eq!(res.family_list().len(), 2);
    assert_eq!(res.family_list().last().map(String::as_str), Some("serif"));
}

#[test]
fn missing_primary_falls_back_to_default_family() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let resolver = FontResolver::new(MapLoader::default().with(FontStyle::Songti, font));
    let res = resolver.resolve(FontStyle::Zhuanshu).unwrap();
    assert_eq!(res.requested, FontStyle::Zhuanshu);
    assert_eq!(res.primary.style, FontStyle::Songti);
    assert!(res.is_substituted());
    assert!(res.fallback.is_none());
    assert!(!res.primary.family.trim().is_empty());
}

#[test]
fn regular_script_has_no_fallback() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let resolver = FontResolver::new(MapLoader::all(font));
    let res = resolver.resolve(FontStyle::Kaishu).unwrap();
    assert!(res.fallback.is_none());
    assert_eq!(resolver.loader().calls(), 1);
}
