use super::*;
use crate::foundation::core::Rect;
use crate::tree::layout::{LaidOut, layout_tree};
use crate::tree::node::{CONTENT_KEY, Corner, Style};

fn content() -> Node {
    Node::text("春眠不觉晓", Style::default())
}

fn canvases() -> [Canvas; 3] {
    [
        Canvas::default(),
        Canvas {
            width: 1200,
            height: 900,
        },
        Canvas {
            width: 600,
            height: 600,
        },
    ]
}

fn contains_slot(n: &LaidOut<'_>) -> bool {
    n.node.key.as_deref() == Some(CONTENT_KEY) || n.children.iter().any(contains_slot)
}

/// Every node that is neither an ancestor nor a descendant of the slot stays clear of it.
fn assert_clear(n: &LaidOut<'_>, slot: Rect, frame: FrameId) {
    if n.node.key.as_deref() == Some(CONTENT_KEY) {
        return;
    }
    if !contains_slot(n) {
        let overlap = n.rect.intersect(slot).area();
        assert!(overlap == 0.0, "{frame}: decoration {:?} overlaps slot {slot:?}", n.rect);
    }
    for c in &n.children {
        assert_clear(c, slot, frame);
    }
}

#[test]
fn parse_round_trips_every_id() {
    for f in FrameId::ALL {
        assert_eq!(FrameId::parse(f.id()), f);
        assert_eq!(f.to_string(), f.id());
    }
    assert_eq!(FrameId::parse(" Modern_Black "), FrameId::ModernBlack);
}

#[test]
fn unknown_ids_compose_like_none() {
    let canvas = Canvas::default();
    assert_eq!(FrameId::parse("unknown"), FrameId::None);
    assert_eq!(FrameId::parse(""), FrameId::None);
    assert_eq!(
        compose_frame("unknown", content(), canvas),
        FrameId::None.compose(content(), canvas)
    );
}

#[test]
fn every_frame_has_exactly_one_slot_holding_the_content() {
    for f in FrameId::ALL {
        let tree = f.compose(content(), Canvas::default());
        let slot = tree.find(CONTENT_KEY).unwrap_or_else(|| panic!("{f}: no slot"));
        assert_eq!(slot.text_content(), "春眠不觉晓");
        assert_eq!(tree.text_content(), "春眠不觉晓", "{f}: frame adds text");
        assert_eq!(tree.scope.as_deref(), Some(format!("frame-{}", f.id()).as_str()));
    }
}

#[test]
fn slot_keeps_sixty_percent_and_stays_clear_of_decoration() {
    for canvas in canvases() {
        for f in FrameId::ALL {
            let tree = f.compose(content(), canvas);
            let laid = layout_tree(&tree, canvas).unwrap();
            let slot = laid.rect_for_key(CONTENT_KEY).unwrap();
            assert!(
                slot.width() >= 0.6 * f64::from(canvas.width),
                "{f} @ {canvas:?}: slot width {}",
                slot.width()
            );
            assert!(
                slot.height() >= 0.6 * f64::from(canvas.height),
                "{f} @ {canvas:?}: slot height {}",
                slot.height()
            );
            assert_clear(&laid, slot, f);
        }
    }
}

#[test]
fn frames_are_pure() {
    for f in FrameId::ALL {
        assert_eq!(
            f.compose(content(), Canvas::default()),
            f.compose(content(), Canvas::default())
        );
    }
}

#[test]
fn wood_mouldings_have_three_layers_and_their_own_corners() {
    let canvas = Canvas::default();
    for f in [FrameId::Redwood, FrameId::GoldenWood] {
        let tree = f.compose(content(), canvas);
        let laid = layout_tree(&tree, canvas).unwrap();
        let rail = laid.rect_for_key("rail").unwrap();
        let bead = laid.rect_for_key("bead").unwrap();
        let lip = laid.rect_for_key("lip").unwrap();
        let mat = laid.rect_for_key("mat").unwrap();
        for (outer, inner) in [(rail, bead), (bead, lip), (lip, mat)] {
            assert!(inner.x0 > outer.x0 && inner.y1 < outer.y1, "{f}: {inner:?} in {outer:?}");
        }
    }

    let red = FrameId::Redwood.compose(content(), canvas);
    let gold = FrameId::GoldenWood.compose(content(), canvas);
    for corner in Corner::ALL {
        let id = corner.id();
        assert!(red.find(&format!("flourish-{id}")).is_some());
        assert!(red.find(&format!("inlay-{id}")).is_none());
        assert!(gold.find(&format!("inlay-{id}")).is_some());
        assert!(gold.find(&format!("flourish-{id}")).is_none());
    }
}

#[test]
fn cloud_brocade_draws_an_arc_in_each_corner() {
    let canvas = Canvas::default();
    let tree = FrameId::CloudBrocade.compose(content(), canvas);
    let laid = layout_tree(&tree, canvas).unwrap();
    let slot = laid.rect_for_key(CONTENT_KEY).unwrap();
    for corner in Corner::ALL {
        let cell = laid.find(&format!("arc-{}", corner.id())).unwrap();
        assert!(cell.node.style.clip);
        let ring = &cell.children[0];
        assert!(ring.node.style.radius > 0.0);
        assert!(ring.rect.width() > cell.rect.width());
        assert_eq!(cell.rect.intersect(slot).area(), 0.0);
    }
    assert!(tree.style.radius > 0.0);
}
