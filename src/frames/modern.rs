use crate::foundation::core::{Canvas, Color};
use crate::frames::frac;
use crate::style::texture::TextureKind;
use crate::tree::node::{Border, Direction, Edges, Line, Node, Paint, Shadow, Style};

const FRAME_BLACK: Color = Color::rgb(0x14, 0x14, 0x14);
const MAT_WHITE: Color = Color::rgb(0xfd, 0xfd, 0xfb);
const BEVEL: Color = Color::rgb(0xd6, 0xd3, 0xcc);

const COBALT: Color = Color::rgb(0x1c, 0x3f, 0x94);
const GLAZE: Color = Color::rgb(0xf6, 0xf8, 0xfb);

/// Thin black gallery frame with a wide white mat.
pub fn modern_black(content: Node, canvas: Canvas) -> Node {
    let m = canvas.width.min(canvas.height);
    let mat = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.09)),
        background: vec![Paint::Solid(MAT_WHITE)],
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 2.0,
            blur: 8.0,
            spread: 0.0,
            color: Color::rgba(0, 0, 0, 90),
            inset: true,
        }],
        ..Style::default()
    })
    .child(
        Node::boxed(Style {
            grow: 1.0,
            direction: Direction::Column,
            border: Some(Border {
                width: 1.0,
                color: BEVEL,
                line: Line::Solid,
            }),
            ..Style::default()
        })
        .child(Node::slot(content)),
    );

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.025)),
        background: vec![Paint::Solid(FRAME_BLACK)],
        ..Style::fill()
    })
    .child(mat)
}

/// 青花: cobalt key-fret band on white glaze.
pub fn porcelain(content: Node, canvas: Canvas) -> Node {
    let m = canvas.width.min(canvas.height);
    let fret = TextureKind::KeyFret.generate(COBALT.with_alpha(0.85), 2.0);

    let panel = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.05)),
        background: vec![Paint::Solid(GLAZE)],
        border: Some(Border {
            width: 6.0,
            color: COBALT,
            line: Line::Double,
        }),
        radius: 4.0,
        ..Style::default()
    })
    .child(Node::slot(content));

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.06)),
        background: vec![
            Paint::Solid(GLAZE),
            Paint::Pattern {
                asset: fret,
                opacity: 1.0,
            },
        ],
        border: Some(Border {
            width: 3.0,
            color: COBALT,
            line: Line::Solid,
        }),
        ..Style::fill()
    })
    .child(panel)
}
