//! Verse and seal → glyph-box tree.

use crate::foundation::core::{Canvas, Color, Rect};
use crate::foundation::error::{InkError, InkResult};
use crate::fonts::FontResolution;
use crate::poem::seal::{SealLayout, SealSpec};
use crate::poem::verse::{LEADING, Poem, VerseLine};
use crate::tree::layout::LaidOut;
use crate::tree::node::{
    Align, Border, CONTENT_KEY, Dim, Direction, Edges, Font, Inset, Line, Node, Paint, Position,
    Shadow, Style,
};

/// Key of the poem root.
pub const POEM_KEY: &str = "poem";
/// Key of the row-reversed column container.
pub const COLUMNS_KEY: &str = "columns";
/// Key of the seal square.
pub const SEAL_KEY: &str = "seal";
/// Key of the year label column.
pub const YEAR_KEY: &str = "year";

/// Edge length of the seal square.
pub const SEAL_SIZE: f32 = 76.0;
/// Distance of the seal group from the bottom-left corner of the poem box.
pub const SEAL_OFFSET: f32 = 28.0;

const INK: Color = Color::rgb(0x1e, 0x1b, 0x18);
const SEAL_RED: Color = Color::rgb(0xb8, 0x32, 0x2a);
const SEAL_RIM: Color = Color::rgb(0x7d, 0x1d, 0x16);
const SEAL_GLYPH: Color = Color::rgb(0xfd, 0xf1, 0xe3);
const YEAR_INK: Color = Color::rgb(0x6b, 0x5b, 0x4b);
const YEAR_SIZE: f32 = 20.0;
/// Slack for float rounding in taffy rects.
const FIT_EPSILON: f64 = 0.5;

/// Key of the column for verse line `i` (0 = first, rightmost).
pub fn line_key(i: usize) -> String {
    format!("line-{i}")
}

/// Size factor of `canvas` against the default canvas the size table is set for.
pub fn canvas_scale(canvas: Canvas) -> f32 {
    let base = Canvas::default();
    (canvas.width as f32 / base.width as f32).min(canvas.height as f32 / base.height as f32)
}

/// Build the poem tree: verse columns right to left, seal and year label at the bottom left.
///
/// Glyph sizes, gaps and the seal follow the size table scaled by [`canvas_scale`].
#[tracing::instrument(skip_all, fields(lines = poem.len()))]
pub fn build_poem_tree(
    poem: &Poem,
    seal: &SealSpec,
    fonts: &FontResolution,
    canvas: Canvas,
) -> Node {
    let families = fonts.family_list();
    let k = canvas_scale(canvas);
    let metrics = poem.metrics().scaled(k);

    let columns = Node::boxed(Style {
        direction: Direction::RowReverse,
        gap: metrics.gap,
        align: Align::Start,
        ..Style::default()
    })
    .keyed(COLUMNS_KEY)
    .with_children(
        poem.lines()
            .iter()
            .enumerate()
            .map(|(i, line)| verse_column(line, metrics.font_size, &families).keyed(line_key(i))),
    );

    Node::boxed(Style {
        grow: 1.0,
        direction: Direction::Column,
        justify: Align::Center,
        align: Align::Center,
        ..Style::default()
    })
    .keyed(POEM_KEY)
    .child(columns)
    .child(seal_group(seal, &families, k))
}

/// Reject a laid-out document whose verse columns leave the content slot.
pub fn check_fit(laid: &LaidOut<'_>, line_count: usize) -> InkResult<()> {
    let Some(slot) = laid.rect_for_key(CONTENT_KEY) else {
        return Ok(());
    };
    for i in 0..line_count {
        let Some(column) = laid.rect_for_key(&line_key(i)) else {
            continue;
        };
        if !contains(slot, column) {
            return Err(InkError::validation(format!(
                "poem line {} does not fit the {:.0}x{:.0} content area",
                i + 1,
                slot.width(),
                slot.height()
            )));
        }
    }
    Ok(())
}

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 - FIT_EPSILON
        && inner.y0 >= outer.y0 - FIT_EPSILON
        && inner.x1 <= outer.x1 + FIT_EPSILON
        && inner.y1 <= outer.y1 + FIT_EPSILON
}

fn font(families: &[String], size: f32, color: Color) -> Font {
    Font {
        families: families.to_vec(),
        size,
        color,
        weight: 400,
    }
}

fn glyph(ch: char, size: f32, font: &Font) -> Node {
    Node::text(
        ch.to_string(),
        Style {
            font: Some(font.clone()),
            shrink: 0.0,
            ..Style::sized(size, size * LEADING)
        },
    )
}

fn verse_column(line: &VerseLine, size: f32, families: &[String]) -> Node {
    let f = font(families, size, INK);
    let glyphs: Vec<Node> = if line.is_empty() {
        vec![glyph(' ', size, &f)]
    } else {
        line.glyphs().iter().map(|&c| glyph(c, size, &f)).collect()
    };
    Node::boxed(Style {
        direction: Direction::Column,
        align: Align::Center,
        shrink: 0.0,
        ..Style::default()
    })
    .with_children(glyphs)
}

fn seal_group(seal: &SealSpec, families: &[String], k: f32) -> Node {
    let year_size = YEAR_SIZE * k;
    let year_font = font(families, year_size, YEAR_INK);
    let year = Node::boxed(Style {
        direction: Direction::Column,
        align: Align::Center,
        ..Style::default()
    })
    .keyed(YEAR_KEY)
    .with_children(seal.year_label().chars().map(|c| glyph(c, year_size, &year_font)));

    let (direction, size) = match seal.layout() {
        SealLayout::Vertical => (Direction::Column, 28.0 * k),
        SealLayout::Horizontal => (Direction::Row, 46.0 * k),
    };
    let seal_font = Font {
        weight: 700,
        ..font(families, size, SEAL_GLYPH)
    };
    let square = Node::boxed(Style {
        direction,
        justify: Align::Center,
        align: Align::Center,
        background: vec![Paint::Solid(SEAL_RED)],
        border: Some(Border {
            width: 3.0 * k,
            color: SEAL_RIM,
            line: Line::Solid,
        }),
        radius: 4.0,
        shadows: vec![Shadow {
            dx: 0.0,
            dy: 0.0,
            blur: 6.0,
            spread: 1.0,
            color: SEAL_RIM.with_alpha(0.6),
            inset: true,
        }],
        padding: Edges::all(4.0 * k),
        shrink: 0.0,
        ..Style::sized(SEAL_SIZE * k, SEAL_SIZE * k)
    })
    .keyed(SEAL_KEY)
    .with_children(seal.text().chars().map(|c| glyph(c, size, &seal_font)));

    Node::boxed(Style {
        position: Position::Absolute,
        inset: Inset {
            bottom: Some(Dim::Px(SEAL_OFFSET * k)),
            left: Some(Dim::Px(SEAL_OFFSET * k)),
            ..Inset::default()
        },
        direction: Direction::Column,
        align: Align::Center,
        gap: 8.0 * k,
        ..Style::default()
    })
    .child(year)
    .child(square)
}

#[cfg(test)]
#[path = "../../tests/unit/poem/layout.rs"]
mod tests;
