//! Silk-mounted frames: the hanging scroll and the brocade border.

use crate::foundation::core::{Canvas, Color};
use crate::frames::frac;
use crate::style::texture::TextureKind;
use crate::tree::node::{
    Border, Corner, Dim, Direction, Edges, GradientStop, Inset, Line, LinearGradient, Node, Paint,
    Position, Shadow, Style,
};

const WALL: Color = Color::rgb(0xed, 0xe6, 0xd8);
const SILK: Color = Color::rgb(0xe6, 0xd7, 0xb5);
const SILK_BAND: Color = Color::rgb(0xb9, 0x9c, 0x66);
const SILK_EDGE: Color = Color::rgb(0xa6, 0x8a, 0x57);
const PAPER: Color = Color::rgb(0xf8, 0xf2, 0xe2);
const ROLLER_LIGHT: Color = Color::rgb(0x7b, 0x4a, 0x2b);
const ROLLER_DARK: Color = Color::rgb(0x3b, 0x20, 0x11);

const BROCADE: Color = Color::rgb(0x1f, 0x3b, 0x63);
const GOLD: Color = Color::rgb(0xd4, 0xaf, 0x37);

/// 立轴: silk hanging scroll between two wooden rollers.
pub fn silk_scroll(content: Node, canvas: Canvas) -> Node {
    let side = frac(canvas.width, 0.08);
    let knob = frac(canvas.width, 0.03);

    let paper = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(canvas.width.min(canvas.height), 0.03)),
        background: vec![Paint::Solid(PAPER)],
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 0.0,
            blur: 4.0,
            spread: 0.0,
            color: Color::rgba(0x5a, 0x44, 0x20, 50),
            inset: true,
        }],
        ..Style::default()
    })
    .child(Node::slot(content));

    let body = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::vh(frac(canvas.height, 0.03), frac(canvas.width, 0.04)),
        background: vec![
            Paint::Solid(SILK),
            Paint::Linear(LinearGradient::two(
                90,
                Color::rgba(255, 255, 255, 40),
                Color::rgba(0, 0, 0, 20),
            )),
        ],
        border: Some(Border {
            width: 1.0,
            color: SILK_EDGE,
            line: Line::Solid,
        }),
        ..Style::default()
    })
    .child(paper);

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::vh(0.0, side),
        background: vec![Paint::Solid(WALL)],
        ..Style::fill()
    })
    .with_children([
        roller(frac(canvas.height, 0.035), knob),
        band(frac(canvas.height, 0.06)),
        body,
        band(frac(canvas.height, 0.04)),
        roller(frac(canvas.height, 0.045), knob),
    ])
}

fn band(height: f32) -> Node {
    Node::boxed(Style {
        height: Dim::Px(height),
        shrink: 0.0,
        background: vec![Paint::Solid(SILK_BAND)],
        ..Style::default()
    })
}

fn roller(height: f32, overhang: f32) -> Node {
    Node::boxed(Style {
        height: Dim::Px(height),
        shrink: 0.0,
        margin: Edges::vh(0.0, -overhang),
        radius: height / 2.0,
        background: vec![Paint::Linear(LinearGradient {
            angle_deg: 180,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: ROLLER_LIGHT,
                },
                GradientStop {
                    offset: 0.5,
                    color: ROLLER_DARK,
                },
                GradientStop {
                    offset: 1.0,
                    color: ROLLER_LIGHT,
                },
            ],
        })],
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 3.0,
            blur: 6.0,
            spread: 0.0,
            color: Color::rgba(0, 0, 0, 70),
            inset: false,
        }],
        ..Style::default()
    })
}

/// 云锦: gold cloud brocade around a paper panel, with rounded arcs in each corner.
pub fn cloud_brocade(content: Node, canvas: Canvas) -> Node {
    let m = canvas.width.min(canvas.height);
    let band = frac(m, 0.07);
    let radius = frac(m, 0.02);
    let clouds = TextureKind::CloudSwirl.generate(GOLD.with_alpha(0.7), 1.5);

    let paper = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(frac(m, 0.045)),
        background: vec![Paint::Solid(PAPER)],
        border: Some(Border {
            width: 1.0,
            color: SILK_EDGE,
            line: Line::Solid,
        }),
        radius: (radius - 4.0).max(0.0),
        ..Style::default()
    })
    .child(Node::slot(content));

    let fillet = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(4.0),
        background: vec![Paint::Linear(LinearGradient::two(
            135,
            GOLD,
            Color::rgb(0x9c, 0x7a, 0x1e),
        ))],
        radius,
        ..Style::default()
    })
    .child(paper);

    let arcs = Corner::ALL.iter().map(|&corner| corner_arc(corner, band));

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(band),
        background: vec![
            Paint::Solid(BROCADE),
            Paint::Pattern {
                asset: clouds,
                opacity: 0.9,
            },
        ],
        border: Some(Border {
            width: 6.0,
            color: GOLD,
            line: Line::Double,
        }),
        radius,
        ..Style::fill()
    })
    .with_children(arcs)
    .child(fillet)
}

/// Quarter ring centred on the outer corner, clipped to a band-sized cell.
fn corner_arc(corner: Corner, band: f32) -> Node {
    let r = band * 0.7;
    let ring = Node::boxed(Style {
        position: Position::Absolute,
        inset: Inset::corner(corner, -r),
        radius: r,
        border: Some(Border {
            width: 2.0,
            color: GOLD,
            line: Line::Solid,
        }),
        ..Style::sized(2.0 * r, 2.0 * r)
    });
    Node::boxed(Style {
        position: Position::Absolute,
        inset: Inset::corner(corner, 0.0),
        clip: true,
        ..Style::sized(band, band)
    })
    .keyed(format!("arc-{}", corner.id()))
    .child(ring)
}
