use std::sync::Arc;

use super::*;
use crate::foundation::core::Canvas;
use crate::fonts::{FontAsset, FontStyle};
use crate::frames::FrameId;
use crate::mount::compose_mounting;
use crate::tree::layout::layout_tree;
use crate::tree::node::Tag;

fn fonts() -> FontResolution {
    let asset = |style: FontStyle, family: &str| FontAsset {
        family: family.to_string(),
        bytes: Arc::new(Vec::new()),
        weight: 400,
        style,
        locator: style.locator().to_string(),
    };
    FontResolution {
        requested: FontStyle::Xingshu,
        primary: asset(FontStyle::Xingshu, "Zhi Mang Xing"),
        fallback: Some(asset(FontStyle::Songti, "Noto Serif SC")),
    }
}

fn quatrain() -> Poem {
    Poem::new(["床前明月光", "疑是地上霜", "举头望明月", "低头思故乡"]).unwrap()
}

fn seal(name: &str) -> SealSpec {
    SealSpec::new(Some(name), 2024).unwrap()
}

#[test]
fn four_lines_make_four_columns_first_rightmost() {
    let tree = build_poem_tree(&quatrain(), &seal("测试"), &fonts(), Canvas::default());
    let columns = tree.find(COLUMNS_KEY).unwrap();
    assert_eq!(columns.children.len(), 4);
    for (i, line) in quatrain().lines().iter().enumerate() {
        let col = tree.find(&line_key(i)).unwrap();
        assert_eq!(col.children.len(), line.len());
        assert_eq!(col.text_content(), line.to_string());
    }

    let laid = layout_tree(&tree, Canvas::default()).unwrap();
    let xs: Vec<f64> = (0..4)
        .map(|i| laid.rect_for_key(&line_key(i)).unwrap().x0)
        .collect();
    assert!(xs.windows(2).all(|w| w[0] > w[1]), "columns not right to left: {xs:?}");

    // Columns are font-size wide and separated by the table gap.
    let r0 = laid.rect_for_key(&line_key(0)).unwrap();
    let r1 = laid.rect_for_key(&line_key(1)).unwrap();
    assert_eq!(r0.width(), 64.0);
    assert_eq!(r0.x0 - r1.x1, 50.0);
}

#[test]
fn glyphs_run_top_to_bottom() {
    let tree = build_poem_tree(&quatrain(), &seal("测试"), &fonts(), Canvas::default());
    let laid = layout_tree(&tree, Canvas::default()).unwrap();
    let col = laid.find(&line_key(0)).unwrap();
    let ys: Vec<f64> = col.children.iter().map(|g| g.rect.y0).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(col.children.len(), 5);
}

#[test]
fn empty_line_keeps_one_space_glyph() {
    let poem = Poem::new(["明月", ""]).unwrap();
    let tree = build_poem_tree(&poem, &seal("测试"), &fonts(), Canvas::default());
    let col = tree.find(&line_key(1)).unwrap();
    assert_eq!(col.children.len(), 1);
    assert_eq!(col.children[0].tag, Tag::Text(" ".into()));
    assert_eq!(
        col.children[0].style.font.as_ref().map(|f| f.size),
        Some(72.0)
    );
}

#[test]
fn text_nodes_carry_primary_then_fallback_families() {
    let tree = build_poem_tree(&quatrain(), &seal("测试"), &fonts(), Canvas::default());
    let glyph = &tree.find(&line_key(0)).unwrap().children[0];
    let families = &glyph.style.font.as_ref().unwrap().families;
    assert_eq!(families, &vec!["Zhi Mang Xing", "Noto Serif SC", "serif"]);
}

#[test]
fn seal_stacks_by_glyph_count() {
    let two = build_poem_tree(&quatrain(), &seal("李清照"), &fonts(), Canvas::default());
    let square = two.find(SEAL_KEY).unwrap();
    assert_eq!(square.text_content(), "清照");
    assert_eq!(square.style.direction, Direction::Column);

    let one = build_poem_tree(&quatrain(), &seal("白"), &fonts(), Canvas::default());
    let square = one.find(SEAL_KEY).unwrap();
    assert_eq!(square.text_content(), "白");
    assert_eq!(square.style.direction, Direction::Row);
}

#[test]
fn seal_sits_bottom_left_under_the_year_label() {
    let tree = build_poem_tree(&quatrain(), &seal("李清照"), &fonts(), Canvas::default());
    assert_eq!(tree.find(YEAR_KEY).unwrap().text_content(), "甲辰年");

    let canvas = Canvas::default();
    let laid = layout_tree(&tree, canvas).unwrap();
    let poem = laid.rect_for_key(POEM_KEY).unwrap();
    let square = laid.rect_for_key(SEAL_KEY).unwrap();
    let year = laid.rect_for_key(YEAR_KEY).unwrap();
    assert_eq!(square.width(), f64::from(SEAL_SIZE));
    assert_eq!(square.y1, poem.y1 - f64::from(SEAL_OFFSET));
    assert!(year.y1 <= square.y0);
    assert!(square.x0 >= poem.x0 + f64::from(SEAL_OFFSET));
    let columns = laid.rect_for_key(COLUMNS_KEY).unwrap();
    assert_eq!(columns.intersect(square).area(), 0.0);
}

fn longest_poem(n: usize) -> Poem {
    let line = "字".repeat(crate::poem::metrics_for(n).unwrap().max_glyphs());
    Poem::new(vec![line.as_str(); n]).unwrap()
}

#[test]
fn longest_accepted_lines_stay_inside_every_slot() {
    let canvases = [
        Canvas::default(),
        Canvas::new(450, 600).unwrap(),
        Canvas::new(1200, 900).unwrap(),
    ];
    for canvas in canvases {
        for n in crate::poem::LINE_COUNTS {
            let poem = longest_poem(n);
            let tree = || build_poem_tree(&poem, &seal("李清照"), &fonts(), canvas);
            let mut mountings: Vec<Node> =
                FrameId::ALL.iter().map(|f| f.compose(tree(), canvas)).collect();
            if canvas == Canvas::default() {
                mountings.push(compose_mounting("李清照", tree()));
            }
            for root in &mountings {
                let laid = layout_tree(root, canvas).unwrap();
                check_fit(&laid, n).unwrap();
                let slot = laid.rect_for_key(CONTENT_KEY).unwrap();
                let first = laid.rect_for_key(&line_key(0)).unwrap();
                assert!(first.y1 <= slot.y1 + 0.5, "{n} lines @ {canvas:?}");
                assert!(first.y1 <= f64::from(canvas.height));
            }
        }
    }
}

#[test]
fn glyphs_scale_with_the_canvas() {
    assert_eq!(canvas_scale(Canvas::default()), 1.0);
    assert_eq!(canvas_scale(Canvas::new(450, 900).unwrap()), 0.5);
    let half = Canvas::new(450, 600).unwrap();
    let tree = build_poem_tree(&quatrain(), &seal("测试"), &fonts(), half);
    let laid = layout_tree(&tree, half).unwrap();
    assert_eq!(laid.rect_for_key(&line_key(0)).unwrap().width(), 32.0);
    assert_eq!(laid.rect_for_key(SEAL_KEY).unwrap().width(), f64::from(SEAL_SIZE) / 2.0);
}
