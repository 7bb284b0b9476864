use super::*;

#[test]
fn empty_seed_is_stable_and_nonzero() {
    assert_eq!(seed_hash(""), 3_338_908_027_751_811);
    assert!(seed_unit("") > 0.0);
}

#[test]
fn pinned_values() {
    assert_eq!(seed_hash("a"), 7_929_297_801_672_961);
    assert_eq!(seed_hash("李清照"), 3_698_189_355_416_435);
    assert_eq!(seed_hash("测试"), 1_053_496_714_314_104);
}

#[test]
fn iterates_scalar_values_not_utf16_units() {
    // U+1D11E is one scalar value but two UTF-16 code units.
    assert_eq!(seed_hash("\u{1d11e}"), 8_269_684_556_550_864);
}

#[test]
fn unit_stays_in_half_open_range() {
    for s in ["", "a", "李清照", "some much longer display name 123"] {
        let u = seed_unit(s);
        assert!((0.0..1.0).contains(&u), "{s}: {u}");
    }
    assert!(seed_hash("x") < HASH_SPAN);
}
