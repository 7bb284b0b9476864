//! Generated mountings: a seeded frame built from [`StyleParameters`].

use crate::foundation::core::{Color, Hsl};
use crate::style::ornament::ORNAMENT_SIZE;
use crate::style::params::StyleParameters;
use crate::tree::node::{
    Animation, Blend, Border, Corner, Dim, Direction, Edges, GradientStop, Inset, Line,
    LinearGradient, Node, Paint, Position, Shadow, Style,
};

/// Fallback identifier when sanitizing leaves nothing.
pub const DEFAULT_IDENTIFIER: &str = "mount";

const MAX_IDENTIFIER_CHARS: usize = 64;
/// Space between the canvas edge and the frame; holds the shadows and halo.
const WALL_MARGIN: f32 = 24.0;
/// Frame ground between the outer edge and the paper panel.
const MAT: f32 = 28.0;
const ORNAMENT_INSET: f32 = 6.0;
const DIVIDER_WIDTH: f32 = 3.0;
/// The sweep bar rests just left of the frame; the first keyframe leaves the panel clean.
const SWEEP_WIDTH: f32 = 0.16;
const SWEEP_TRAVEL: f32 = 1200.0;
const GRAIN_OPACITY: f32 = 0.07;

/// Normalize an identifier into a seed and scope key.
///
/// Alphanumerics (any script) are kept, ASCII is lowercased, every run of other characters
/// becomes a single `-`, and leading/trailing `-` are trimmed. Empty results map to
/// [`DEFAULT_IDENTIFIER`].
pub fn sanitize_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
        if out.chars().count() >= MAX_IDENTIFIER_CHARS {
            break;
        }
    }
    if out.is_empty() {
        DEFAULT_IDENTIFIER.to_string()
    } else {
        out
    }
}

/// Compose a generated mounting around `content`.
///
/// The sanitized identifier is both the seed and the scope of every generated definition id,
/// so two mountings can share one document without id collisions.
pub fn compose_mounting(identifier: &str, content: Node) -> Node {
    let seed = sanitize_identifier(identifier);
    let params = StyleParameters::from_seed(&seed);
    compose_with_params(&params, &format!("mount-{seed}"), content)
}

/// Compose a mounting from already derived parameters.
#[tracing::instrument(skip(params, content), fields(seed = %params.seed))]
pub fn compose_with_params(params: &StyleParameters, scope: &str, content: Node) -> Node {
    let base = params.hsl();
    let wall = Hsl::new(base.h, (base.s / 6).max(6), 90).to_color();
    let radius = params.corner_radius as f32;
    let border = params.border_width as f32;

    let shadows: Vec<Shadow> = params
        .shadows
        .iter()
        .map(|l| Shadow {
            dx: 0.0,
            dy: l.offset_y as f32,
            blur: l.blur as f32,
            spread: l.spread as f32,
            color: Color::rgb(0, 0, 0).with_alpha(l.alpha),
            inset: false,
        })
        .chain(std::iter::once(Shadow {
            dx: 0.0,
            dy: 0.0,
            blur: params.halo_radius as f32,
            spread: 0.0,
            color: base.lighten(25).to_color_alpha(0.35),
            inset: false,
        }))
        .collect();

    let paper = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::trbl(
            params.padding.top as f32,
            params.padding.side as f32,
            params.padding.bottom as f32,
            params.padding.side as f32,
        ),
        background: vec![Paint::Solid(params.paper)],
        border: Some(Border {
            width: DIVIDER_WIDTH,
            color: params.divider,
            line: Line::Double,
        }),
        radius: (radius - 6.0).max(2.0),
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 1.0,
            blur: 6.0,
            spread: 0.0,
            color: params.stroke.with_alpha(0.18),
            inset: true,
        }],
        ..Style::default()
    })
    .keyed("paper")
    .child(Node::slot(content));

    let mut frame_children = vec![sweep_bar(params), paper];
    if let Some(ornament) = &params.ornament {
        frame_children.extend(Corner::ALL.iter().map(|&corner| {
            Node::vector(
                ornament.asset.clone(),
                Style {
                    position: Position::Absolute,
                    inset: Inset::corner(corner, ORNAMENT_INSET),
                    flip: corner.flip(),
                    ..Style::sized(ORNAMENT_SIZE as f32, ORNAMENT_SIZE as f32)
                },
            )
            .keyed(format!("ornament-{}", corner.id()))
        }));
    }

    let frame = Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        padding: Edges::all(MAT),
        background: vec![
            Paint::Solid(params.background),
            Paint::Pattern {
                asset: params.texture_asset.clone(),
                opacity: 0.6,
            },
            Paint::Linear(params.sheen.clone()),
        ],
        border: Some(Border {
            width: border,
            color: params.stroke,
            line: Line::Solid,
        }),
        radius,
        shadows,
        animation: Some(Animation::Breathe {
            secs: params.breathing_secs,
        }),
        clip: true,
        ..Style::default()
    })
    .keyed("frame")
    .with_children(frame_children);

    let grain = Node::boxed(Style {
        background: vec![Paint::Pattern {
            asset: params.grain.clone(),
            opacity: 1.0,
        }],
        opacity: GRAIN_OPACITY,
        blend: Blend::Multiply,
        ..Style::overlay()
    })
    .keyed("grain");

    Node::boxed(Style {
        direction: Direction::Column,
        padding: Edges::all(WALL_MARGIN),
        background: vec![Paint::Solid(wall)],
        ..Style::fill()
    })
    .scoped(scope)
    .keyed("mount")
    .child(frame)
    .child(grain)
}

fn sweep_bar(params: &StyleParameters) -> Node {
    let clear = Color::rgba(255, 255, 255, 0);
    Node::boxed(Style {
        position: Position::Absolute,
        inset: Inset {
            top: Some(Dim::Px(0.0)),
            bottom: Some(Dim::Px(0.0)),
            left: Some(Dim::Percent(-SWEEP_WIDTH)),
            right: None,
        },
        width: Dim::Percent(SWEEP_WIDTH),
        background: vec![Paint::Linear(LinearGradient {
            angle_deg: 90,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: clear,
                },
                GradientStop {
                    offset: 0.5,
                    color: Color::rgb(255, 255, 255).with_alpha(0.22),
                },
                GradientStop {
                    offset: 1.0,
                    color: clear,
                },
            ],
        })],
        blend: Blend::Screen,
        animation: Some(Animation::Sweep {
            secs: params.sweep_secs,
            distance: SWEEP_TRAVEL,
        }),
        ..Style::default()
    })
    .keyed("sweep")
}

#[cfg(test)]
#[path = "../../tests/unit/mount/composer.rs"]
mod tests;
