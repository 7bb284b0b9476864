use super::*;

#[test]
fn only_two_four_or_six_lines_are_accepted() {
    for n in [0usize, 1, 3, 5, 7, 8] {
        let err = Poem::new(vec!["月"; n]).unwrap_err();
        assert!(matches!(err, InkError::Validation(_)), "{n} lines");
        assert!(err.to_string().contains(&format!("got {n}")));
    }
    for n in LINE_COUNTS {
        assert_eq!(Poem::new(vec!["月"; n]).unwrap().len(), n);
    }
}

#[test]
fn size_table_has_no_interpolation() {
    assert_eq!(
        metrics_for(2),
        Some(VerseMetrics {
            font_size: 72.0,
            gap: 80.0
        })
    );
    assert_eq!(
        metrics_for(4),
        Some(VerseMetrics {
            font_size: 64.0,
            gap: 50.0
        })
    );
    assert_eq!(
        metrics_for(6),
        Some(VerseMetrics {
            font_size: 52.0,
            gap: 35.0
        })
    );
    assert_eq!(metrics_for(3), None);
    assert_eq!(metrics_for(5), None);
}

#[test]
fn lines_split_into_scalar_glyphs() {
    let line = VerseLine::new("  床前明月光 ");
    assert_eq!(line.len(), 5);
    assert_eq!(line.glyphs()[0], '床');
    assert_eq!(line.to_string(), "床前明月光");
    assert!(VerseLine::new("   ").is_empty());
}

#[test]
fn line_limit_follows_the_size_table() {
    let limits: Vec<usize> = LINE_COUNTS
        .iter()
        .map(|&n| metrics_for(n).unwrap().max_glyphs())
        .collect();
    assert_eq!(limits, vec![9, 10, 12]);
    for (n, max) in LINE_COUNTS.into_iter().zip(limits) {
        let fits = "字".repeat(max);
        assert!(Poem::new(vec![fits.as_str(); n]).is_ok(), "{n} lines x {max}");
        let long = "字".repeat(max + 1);
        let mut lines = vec!["月"; n];
        lines[n - 1] = long.as_str();
        let err = Poem::new(lines).unwrap_err();
        assert!(matches!(err, InkError::Validation(_)));
        assert!(err.to_string().contains(&format!("poem line {n}")), "{err}");
    }
}

#[test]
fn four_lines_of_twenty_are_rejected() {
    let line = "字".repeat(20);
    let err = Poem::new(vec![line.as_str(); 4]).unwrap_err();
    assert!(err.to_string().contains("max 10 for 4 lines"), "{err}");
}
