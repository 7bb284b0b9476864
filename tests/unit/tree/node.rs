use super::*;

#[test]
fn slot_is_keyed_and_grows() {
    let slot = Node::slot(Node::text("月", Style::sized(10.0, 10.0)));
    assert_eq!(slot.key.as_deref(), Some(CONTENT_KEY));
    assert_eq!(slot.style.grow, 1.0);
    assert_eq!(slot.children.len(), 1);
}

#[test]
fn find_and_count_walk_depth_first() {
    let tree = Node::boxed(Style::fill())
        .child(Node::boxed(Style::default()).keyed("a").child(Node::text("床", Style::default())))
        .child(Node::boxed(Style::default()).keyed("b").child(Node::text("前", Style::default())));
    assert_eq!(tree.count(), 5);
    assert_eq!(tree.find("b").map(Node::text_content).as_deref(), Some("前"));
    assert!(tree.find("missing").is_none());
    assert_eq!(tree.text_content(), "床前");
}

#[test]
fn corner_flips_mirror_the_top_left_drawing() {
    assert_eq!(Corner::TopLeft.flip(), Flip::NONE);
    assert_eq!(Corner::BottomRight.flip(), Flip { x: true, y: true });
    let inset = Inset::corner(Corner::BottomLeft, 6.0);
    assert_eq!(inset.bottom, Some(Dim::Px(6.0)));
    assert_eq!(inset.left, Some(Dim::Px(6.0)));
    assert_eq!(inset.top, None);
}
