//! Carved wood mouldings.

use crate::foundation::core::{Canvas, Color};
use crate::frames::frac;
use crate::tree::node::{
    Align, Border, Corner, Direction, Edges, GradientStop, Inset, Line, LinearGradient, Node,
    Paint, Position, Shadow, Style,
};

/// Corner treatment of a moulding.
#[derive(Clone, Copy)]
enum Corners {
    /// Carved block with a round flourish.
    Flourish,
    /// Flat block holding an inlaid square.
    Inlay(Color),
}

struct Wood {
    light: Color,
    mid: Color,
    dark: Color,
    mat: Color,
    fillet: Option<Color>,
    corners: Corners,
}

const REDWOOD: Wood = Wood {
    light: Color::rgb(0x8a, 0x3b, 0x2a),
    mid: Color::rgb(0x5e, 0x21, 0x17),
    dark: Color::rgb(0x3a, 0x12, 0x0c),
    mat: Color::rgb(0xf4, 0xec, 0xdc),
    fillet: None,
    corners: Corners::Flourish,
};

const GOLDEN_WOOD: Wood = Wood {
    light: Color::rgb(0xe8, 0xc8, 0x7a),
    mid: Color::rgb(0xb8, 0x8a, 0x3e),
    dark: Color::rgb(0x7a, 0x55, 0x1f),
    mat: Color::rgb(0xfa, 0xf4, 0xe6),
    fillet: Some(Color::rgb(0xc9, 0xa2, 0x4e)),
    corners: Corners::Inlay(Color::rgb(0xf3, 0xe9, 0xd2)),
};

/// 红木: three-layer moulding with carved corner flourishes.
pub fn redwood(content: Node, canvas: Canvas) -> Node {
    moulding(&REDWOOD, content, canvas)
}

/// Gilded moulding with inlaid corners and a gold fillet around the mat.
pub fn golden_wood(content: Node, canvas: Canvas) -> Node {
    moulding(&GOLDEN_WOOD, content, canvas)
}

fn moulding(wood: &Wood, content: Node, canvas: Canvas) -> Node {
    let m = canvas.width.min(canvas.height);
    let rail = frac(m, 0.055);
    let bead = frac(m, 0.012);
    let lip = frac(m, 0.008);
    let mat_pad = frac(m, 0.05);

    let grain = LinearGradient {
        angle_deg: 135,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: wood.light,
            },
            GradientStop {
                offset: 0.45,
                color: wood.mid,
            },
            GradientStop {
                offset: 1.0,
                color: wood.dark,
            },
        ],
    };

    let mat = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(mat_pad),
        background: vec![Paint::Solid(wood.mat)],
        border: Some(match wood.fillet {
            Some(gold) => Border {
                width: 4.0,
                color: gold,
                line: Line::Double,
            },
            None => Border {
                width: 2.0,
                color: wood.dark,
                line: Line::Solid,
            },
        }),
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 2.0,
            blur: 10.0,
            spread: 0.0,
            color: Color::rgba(0, 0, 0, 60),
            inset: true,
        }],
        ..Style::default()
    })
    .keyed("mat")
    .child(Node::slot(content));

    // Inner step of the moulding, darkest.
    let lip_layer = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(lip),
        background: vec![Paint::Solid(wood.dark)],
        ..Style::default()
    })
    .keyed("lip")
    .child(mat);

    // Rounded bead between rail and lip; the gradient runs against the rail grain.
    let bead_layer = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(bead),
        background: vec![Paint::Linear(LinearGradient::two(315, wood.light, wood.dark))],
        border: Some(Border {
            width: 1.0,
            color: wood.dark,
            line: Line::Solid,
        }),
        ..Style::default()
    })
    .keyed("bead")
    .child(lip_layer);

    let blocks = Corner::ALL
        .iter()
        .map(|&corner| corner_block(wood, corner, rail));

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(rail),
        background: vec![Paint::Linear(grain)],
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 0.0,
            blur: 6.0,
            spread: 1.0,
            color: wood.light.with_alpha(0.5),
            inset: true,
        }],
        ..Style::fill()
    })
    .keyed("rail")
    .with_children(blocks)
    .child(bead_layer)
}

fn corner_block(wood: &Wood, corner: Corner, rail: f32) -> Node {
    let block = Style {
        position: Position::Absolute,
        inset: Inset::corner(corner, 0.0),
        justify: Align::Center,
        align: Align::Center,
        border: Some(Border {
            width: 1.0,
            color: wood.dark,
            line: Line::Solid,
        }),
        ..Style::sized(rail, rail)
    };
    match wood.corners {
        Corners::Flourish => {
            let d = rail * 0.6;
            Node::boxed(Style {
                background: vec![Paint::Linear(LinearGradient::two(45, wood.dark, wood.mid))],
                ..block
            })
            .keyed(format!("flourish-{}", corner.id()))
            .child(Node::boxed(Style {
                radius: d / 2.0,
                border: Some(Border {
                    width: 1.5,
                    color: wood.light,
                    line: Line::Solid,
                }),
                background: vec![Paint::Solid(wood.mid)],
                ..Style::sized(d, d)
            }))
        }
        Corners::Inlay(inlay) => {
            let d = rail * 0.56;
            Node::boxed(Style {
                background: vec![Paint::Solid(wood.mid)],
                ..block
            })
            .keyed(format!("inlay-{}", corner.id()))
            .child(Node::boxed(Style {
                background: vec![Paint::Solid(inlay)],
                border: Some(Border {
                    width: 3.0,
                    color: wood.fillet.unwrap_or(wood.dark),
                    line: Line::Double,
                }),
                ..Style::sized(d, d)
            }))
        }
    }
}
