use crate::foundation::core::{Canvas, Color};
use crate::frames::frac;
use crate::tree::node::{Direction, Edges, Node, Paint, Style};

const PAPER: Color = Color::rgb(0xfb, 0xf8, 0xf1);

/// Flat paper with even margins and no decoration.
pub fn none(content: Node, canvas: Canvas) -> Node {
    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::vh(frac(canvas.height, 0.06), frac(canvas.width, 0.06)),
        background: vec![Paint::Solid(PAPER)],
        ..Style::fill()
    })
    .child(Node::slot(content))
}
