use super::*;
use crate::tree::node::{CONTENT_KEY, Corner, Edges, Inset};

fn canvas() -> Canvas {
    Canvas {
        width: 400,
        height: 300,
    }
}

#[test]
fn root_fill_covers_canvas() {
    let root = Node::boxed(Style::fill());
    let laid = layout_tree(&root, canvas()).unwrap();
    assert_eq!(laid.rect, Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn padding_and_border_shrink_the_slot() {
    let root = Node::boxed(Style {
        padding: Edges::trbl(10.0, 20.0, 30.0, 40.0),
        ..Style::fill()
    })
    .child(Node::slot(Node::boxed(Style::default())));
    let laid = layout_tree(&root, canvas()).unwrap();
    let slot = laid.rect_for_key(CONTENT_KEY).unwrap();
    assert_eq!(slot, Rect::new(40.0, 10.0, 380.0, 270.0));
}

#[test]
fn row_reverse_puts_first_child_rightmost() {
    let col = |k: &str| Node::boxed(Style::sized(50.0, 100.0)).keyed(k);
    let root = Node::boxed(Style {
        direction: Direction::RowReverse,
        gap: 10.0,
        ..Style::fill()
    })
    .with_children([col("a"), col("b"), col("c")]);
    let laid = layout_tree(&root, canvas()).unwrap();
    let a = laid.rect_for_key("a").unwrap();
    let b = laid.rect_for_key("b").unwrap();
    let c = laid.rect_for_key("c").unwrap();
    assert_eq!(a.x1, 400.0);
    assert!(a.x0 > b.x0 && b.x0 > c.x0);
    assert_eq!(a.x0 - b.x1, 10.0);
}

#[test]
fn absolute_children_are_pinned_to_corners() {
    let root = Node::boxed(Style::fill()).child(
        Node::boxed(Style {
            position: Position::Absolute,
            inset: Inset::corner(Corner::BottomRight, 8.0),
            ..Style::sized(20.0, 20.0)
        })
        .keyed("corner"),
    );
    let laid = layout_tree(&root, canvas()).unwrap();
    assert_eq!(
        laid.rect_for_key("corner"),
        Some(Rect::new(372.0, 272.0, 392.0, 292.0))
    );
}

#[test]
fn nested_rects_are_absolute() {
    let root = Node::boxed(Style {
        padding: Edges::all(12.0),
        ..Style::fill()
    })
    .child(
        Node::boxed(Style {
            padding: Edges::all(8.0),
            ..Style::sized(100.0, 100.0)
        })
        .child(Node::boxed(Style::sized(10.0, 10.0)).keyed("inner")),
    );
    let laid = layout_tree(&root, canvas()).unwrap();
    assert_eq!(
        laid.rect_for_key("inner"),
        Some(Rect::new(20.0, 20.0, 30.0, 30.0))
    );
}

#[test]
fn text_leaves_get_intrinsic_glyph_cells() {
    let font = crate::tree::node::Font {
        families: vec!["serif".into()],
        size: 40.0,
        color: crate::foundation::core::Color::rgb(0, 0, 0),
        weight: 400,
    };
    let root = Node::boxed(Style {
        align: Align::Start,
        ..Style::fill()
    })
    .child(
        Node::text(
            "明月",
            Style {
                font: Some(font),
                ..Style::default()
            },
        )
        .keyed("t"),
    );
    let laid = layout_tree(&root, canvas()).unwrap();
    let t = laid.rect_for_key("t").unwrap();
    assert_eq!(t.width(), 80.0);
    assert_eq!(t.height(), 48.0);
}

#[test]
fn walk_visits_in_paint_order() {
    let root = Node::boxed(Style::fill())
        .child(Node::boxed(Style::default()).keyed("a"))
        .child(Node::boxed(Style::default()).keyed("b"));
    let laid = layout_tree(&root, canvas()).unwrap();
    let mut seen = Vec::new();
    laid.walk(&mut |n, depth| seen.push((n.node.key.clone(), depth)));
    assert_eq!(
        seen,
        vec![
            (None, 0),
            (Some("a".to_string()), 1),
            (Some("b".to_string()), 1)
        ]
    );
}
