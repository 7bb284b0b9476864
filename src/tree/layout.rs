//! Flexbox layout of a [`Node`] tree via taffy.

use taffy::prelude::{AvailableSpace, NodeId, Size};
use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto, Position as TaffyPosition, Style as TaffyStyle,
};

use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{InkError, InkResult, Stage};
use crate::tree::node::{Align, Dim, Direction, Node, Position, Style, Tag};

/// A node with its absolute border-box rectangle.
#[derive(Debug)]
pub struct LaidOut<'a> {
    /// Source node.
    pub node: &'a Node,
    /// Absolute rectangle in canvas px.
    pub rect: Rect,
    /// Laid-out children, same order as `node.children`.
    pub children: Vec<LaidOut<'a>>,
}

impl<'a> LaidOut<'a> {
    /// Depth-first search for a keyed node.
    pub fn find(&self, key: &str) -> Option<&LaidOut<'a>> {
        if self.node.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Rectangle of the first node carrying `key`.
    pub fn rect_for_key(&self, key: &str) -> Option<Rect> {
        self.find(key).map(|n| n.rect)
    }

    /// Visit every node in paint order together with its depth.
    pub fn walk(&self, f: &mut impl FnMut(&LaidOut<'a>, usize)) {
        self.walk_at(0, f);
    }

    fn walk_at(&self, depth: usize, f: &mut impl FnMut(&LaidOut<'a>, usize)) {
        f(self, depth);
        for c in &self.children {
            c.walk_at(depth + 1, f);
        }
    }
}

/// Lay out `root` on a canvas. The root is placed in a canvas-sized container, so
/// percentage sizes on the root resolve against the canvas.
#[tracing::instrument(skip(root), fields(nodes = root.count()))]
pub fn layout_tree(root: &Node, canvas: Canvas) -> InkResult<LaidOut<'_>> {
    let err = |e: taffy::TaffyError| InkError::shaping(Stage::Layout, e.to_string());

    let mut taffy = taffy::TaffyTree::<Size<f32>>::new();
    let root_id = build(&mut taffy, root).map_err(err)?;

    let w = canvas.width as f32;
    let h = canvas.height as f32;
    let container = taffy
        .new_with_children(
            TaffyStyle {
                display: Display::Flex,
                size: Size {
                    width: Dimension::length(w),
                    height: Dimension::length(h),
                },
                ..TaffyStyle::default()
            },
            &[root_id],
        )
        .map_err(err)?;

    taffy
        .compute_layout_with_measure(
            container,
            Size {
                width: AvailableSpace::Definite(w),
                height: AvailableSpace::Definite(h),
            },
            |known, _available, _id, ctx, _style| {
                let intrinsic = ctx.map(|c| *c).unwrap_or(Size::ZERO);
                Size {
                    width: known.width.unwrap_or(intrinsic.width),
                    height: known.height.unwrap_or(intrinsic.height),
                }
            },
        )
        .map_err(err)?;

    collect(&taffy, root, root_id, 0.0, 0.0).map_err(err)
}

fn build(
    taffy: &mut taffy::TaffyTree<Size<f32>>,
    node: &Node,
) -> Result<NodeId, taffy::TaffyError> {
    let style = to_taffy(&node.style);
    if node.children.is_empty() {
        return taffy.new_leaf_with_context(style, intrinsic_size(node));
    }
    let mut ids = Vec::with_capacity(node.children.len());
    for c in &node.children {
        ids.push(build(taffy, c)?);
    }
    taffy.new_with_children(style, &ids)
}

/// Intrinsic size of leaves. Text assumes square CJK glyph cells of the font size.
fn intrinsic_size(node: &Node) -> Size<f32> {
    match &node.tag {
        Tag::Text(t) => {
            let size = node.style.font.as_ref().map(|f| f.size).unwrap_or(16.0);
            let n = t.chars().count().max(1) as f32;
            Size {
                width: size * n,
                height: size * 1.2,
            }
        }
        Tag::Vector(a) => Size {
            width: a.width as f32,
            height: a.height as f32,
        },
        Tag::Box => Size::ZERO,
    }
}

fn collect<'a>(
    taffy: &taffy::TaffyTree<Size<f32>>,
    node: &'a Node,
    id: NodeId,
    origin_x: f64,
    origin_y: f64,
) -> Result<LaidOut<'a>, taffy::TaffyError> {
    let l = taffy.layout(id)?;
    let x = origin_x + f64::from(l.location.x);
    let y = origin_y + f64::from(l.location.y);
    let rect = Rect::new(
        x,
        y,
        x + f64::from(l.size.width),
        y + f64::from(l.size.height),
    );

    let child_ids = taffy.children(id)?;
    let mut children = Vec::with_capacity(node.children.len());
    for (child, cid) in node.children.iter().zip(child_ids) {
        children.push(collect(taffy, child, cid, x, y)?);
    }
    Ok(LaidOut {
        node,
        rect,
        children,
    })
}

fn dim(d: Dim) -> Dimension {
    match d {
        Dim::Auto => Dimension::auto(),
        Dim::Px(v) => Dimension::length(v),
        Dim::Percent(p) => Dimension::percent(p),
    }
}

fn inset_dim(d: Option<Dim>) -> LengthPercentageAuto {
    match d {
        None | Some(Dim::Auto) => LengthPercentageAuto::auto(),
        Some(Dim::Px(v)) => LengthPercentageAuto::length(v),
        Some(Dim::Percent(p)) => LengthPercentageAuto::percent(p),
    }
}

fn to_taffy(s: &Style) -> TaffyStyle {
    let lp = |v: f32| LengthPercentage::length(v.max(0.0));
    let border = s.border.map(|b| b.width).unwrap_or(0.0);

    TaffyStyle {
        display: Display::Flex,
        position: match s.position {
            Position::Relative => TaffyPosition::Relative,
            Position::Absolute => TaffyPosition::Absolute,
        },
        inset: taffy::geometry::Rect {
            top: inset_dim(s.inset.top),
            right: inset_dim(s.inset.right),
            bottom: inset_dim(s.inset.bottom),
            left: inset_dim(s.inset.left),
        },
        size: Size {
            width: dim(s.width),
            height: dim(s.height),
        },
        min_size: Size {
            width: Dimension::length(0.0),
            height: Dimension::length(0.0),
        },
        padding: taffy::geometry::Rect {
            top: lp(s.padding.top),
            right: lp(s.padding.right),
            bottom: lp(s.padding.bottom),
            left: lp(s.padding.left),
        },
        margin: taffy::geometry::Rect {
            top: LengthPercentageAuto::length(s.margin.top),
            right: LengthPercentageAuto::length(s.margin.right),
            bottom: LengthPercentageAuto::length(s.margin.bottom),
            left: LengthPercentageAuto::length(s.margin.left),
        },
        border: taffy::geometry::Rect {
            top: lp(border),
            right: lp(border),
            bottom: lp(border),
            left: lp(border),
        },
        flex_direction: match s.direction {
            Direction::Row => FlexDirection::Row,
            Direction::RowReverse => FlexDirection::RowReverse,
            Direction::Column => FlexDirection::Column,
        },
        justify_content: Some(match s.justify {
            Align::Start | Align::Stretch => JustifyContent::FlexStart,
            Align::Center => JustifyContent::Center,
            Align::End => JustifyContent::FlexEnd,
            Align::SpaceBetween => JustifyContent::SpaceBetween,
        }),
        align_items: Some(match s.align {
            Align::Start | Align::SpaceBetween => AlignItems::FlexStart,
            Align::Center => AlignItems::Center,
            Align::End => AlignItems::FlexEnd,
            Align::Stretch => AlignItems::Stretch,
        }),
        gap: Size {
            width: lp(s.gap),
            height: lp(s.gap),
        },
        flex_grow: s.grow.max(0.0),
        flex_shrink: s.shrink.max(0.0),
        ..TaffyStyle::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/layout.rs"]
mod tests;
