//! Soft pastel cards sharing one layout.

use crate::foundation::core::{Canvas, Color};
use crate::frames::frac;
use crate::tree::node::{Border, Direction, Edges, Line, LinearGradient, Node, Paint, Shadow, Style};

/// Colors of one pastel card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PastelPalette {
    /// Canvas ground.
    pub ground: Color,
    /// Ground gradient end.
    pub ground_end: Color,
    /// Card surface.
    pub card: Color,
    /// Dashed stitch line.
    pub stitch: Color,
}

/// 樱粉.
pub const PINK: PastelPalette = PastelPalette {
    ground: Color::rgb(0xf9, 0xd9, 0xe0),
    ground_end: Color::rgb(0xf3, 0xc1, 0xcd),
    card: Color::rgb(0xff, 0xf7, 0xf9),
    stitch: Color::rgb(0xe0, 0x8f, 0xa3),
};

/// 薄荷.
pub const MINT: PastelPalette = PastelPalette {
    ground: Color::rgb(0xd4, 0xf0, 0xe3),
    ground_end: Color::rgb(0xb8, 0xe4, 0xd0),
    card: Color::rgb(0xf6, 0xfd, 0xf9),
    stitch: Color::rgb(0x74, 0xc2, 0x9f),
};

/// 天青.
pub const SKY: PastelPalette = PastelPalette {
    ground: Color::rgb(0xd6, 0xe8, 0xf7),
    ground_end: Color::rgb(0xbd, 0xd8, 0xf0),
    card: Color::rgb(0xf6, 0xfa, 0xfe),
    stitch: Color::rgb(0x7f, 0xaa, 0xd6),
};

/// 杏黄.
pub const APRICOT: PastelPalette = PastelPalette {
    ground: Color::rgb(0xfb, 0xe3, 0xc8),
    ground_end: Color::rgb(0xf6, 0xd0, 0xa6),
    card: Color::rgb(0xff, 0xfa, 0xf3),
    stitch: Color::rgb(0xe0, 0xa4, 0x62),
};

/// Rounded card with a dashed stitch on a gradient ground.
pub fn pastel(palette: PastelPalette, content: Node, canvas: Canvas) -> Node {
    let m = canvas.width.min(canvas.height);
    let stitch = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.035)),
        border: Some(Border {
            width: 2.0,
            color: palette.stitch,
            line: Line::Dashed,
        }),
        radius: 14.0,
        ..Style::default()
    })
    .child(Node::slot(content));

    let card = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.025)),
        background: vec![Paint::Solid(palette.card)],
        radius: 24.0,
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 8.0,
            blur: 24.0,
            spread: 0.0,
            color: palette.stitch.with_alpha(0.35),
            inset: false,
        }],
        ..Style::default()
    })
    .child(stitch);

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.06)),
        background: vec![Paint::Linear(LinearGradient::two(
            160,
            palette.ground,
            palette.ground_end,
        ))],
        ..Style::fill()
    })
    .child(card)
}
