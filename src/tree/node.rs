//! Layered node tree shared by frames, mountings and the poem layout.
//!
//! A [`Node`] is plain data: a tag, a style, optional identifying key/scope, and children.
//! Nothing here touches fonts, files or a renderer; [`crate::tree::layout`] turns a tree into
//! positioned boxes and [`crate::tree::svg`] into markup.

use crate::foundation::core::Color;
use crate::style::asset::VectorAsset;

/// Key of the single content slot each frame exposes.
pub const CONTENT_KEY: &str = "content";

/// Node payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    /// Plain box.
    Box,
    /// Text run; glyph boxes carry exactly one glyph.
    Text(String),
    /// Embedded vector asset stretched to the node's box.
    Vector(VectorAsset),
}

/// Box dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dim {
    /// Sized by content / flex.
    #[default]
    Auto,
    /// Absolute length in px.
    Px(f32),
    /// Fraction of the parent (`1.0` = 100%).
    Percent(f32),
}

/// Per-edge lengths in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Left edge.
    pub left: f32,
}

impl Edges {
    /// Same length on every edge.
    pub const fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Vertical / horizontal pair.
    pub const fn vh(v: f32, h: f32) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Explicit edges in CSS order.
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Offsets of an absolutely positioned box from its parent's edges. `None` = auto.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inset {
    /// Top offset.
    pub top: Option<Dim>,
    /// Right offset.
    pub right: Option<Dim>,
    /// Bottom offset.
    pub bottom: Option<Dim>,
    /// Left offset.
    pub left: Option<Dim>,
}

impl Inset {
    /// Pin to all four edges with the same offset.
    pub fn fill(v: f32) -> Self {
        Self {
            top: Some(Dim::Px(v)),
            right: Some(Dim::Px(v)),
            bottom: Some(Dim::Px(v)),
            left: Some(Dim::Px(v)),
        }
    }

    /// Pin to one corner.
    pub fn corner(corner: Corner, v: f32) -> Self {
        let d = Some(Dim::Px(v));
        match corner {
            Corner::TopLeft => Self {
                top: d,
                left: d,
                ..Self::default()
            },
            Corner::TopRight => Self {
                top: d,
                right: d,
                ..Self::default()
            },
            Corner::BottomLeft => Self {
                bottom: d,
                left: d,
                ..Self::default()
            },
            Corner::BottomRight => Self {
                bottom: d,
                right: d,
                ..Self::default()
            },
        }
    }
}

/// Box corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-left.
    BottomLeft,
    /// Bottom-right.
    BottomRight,
}

impl Corner {
    /// All four corners, clockwise from top-left.
    pub const ALL: [Corner; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Short key suffix (`tl`, `tr`, `bl`, `br`).
    pub fn id(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
        }
    }

    /// Mirror that maps a top-left drawing onto this corner.
    pub fn flip(self) -> Flip {
        match self {
            Self::TopLeft => Flip::NONE,
            Self::TopRight => Flip { x: true, y: false },
            Self::BottomLeft => Flip { x: false, y: true },
            Self::BottomRight => Flip { x: true, y: true },
        }
    }
}

/// Positioning scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// In flow.
    #[default]
    Relative,
    /// Out of flow, placed by [`Style::inset`] against the parent.
    Absolute,
}

/// Main axis direction of a box's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Right to left (first child rightmost).
    RowReverse,
    /// Top to bottom.
    Column,
}

/// Alignment along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Pack at the start.
    Start,
    /// Center.
    Center,
    /// Pack at the end.
    End,
    /// Stretch (cross axis) / start (main axis).
    #[default]
    Stretch,
    /// Distribute with no outer space (main axis only).
    SpaceBetween,
}

/// Color stop of a gradient; `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Stop color (alpha honored).
    pub color: Color,
}

/// Linear gradient across a box; `angle_deg` follows CSS (0 = to top, 90 = to right).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    /// CSS angle in degrees. Only multiples of 45 are used by the builders.
    pub angle_deg: i32,
    /// Ordered stops.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Two-stop gradient.
    pub fn two(angle_deg: i32, from: Color, to: Color) -> Self {
        Self {
            angle_deg,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }
}

/// One background layer; layers paint bottom to top.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat fill.
    Solid(Color),
    /// Linear gradient.
    Linear(LinearGradient),
    /// Radial gradient centered in the box.
    Radial(Vec<GradientStop>),
    /// Tiled vector asset.
    Pattern {
        /// Tile asset.
        asset: VectorAsset,
        /// Layer opacity.
        opacity: f32,
    },
}

/// Border line style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Line {
    /// Single solid line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Two lines with a gap, each a third of the width.
    Double,
}

/// Box border. The width also takes layout space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Width in px.
    pub width: f32,
    /// Line color.
    pub color: Color,
    /// Line style.
    pub line: Line,
}

/// Box shadow; `inset` shadows paint inside the border edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Horizontal offset.
    pub dx: f32,
    /// Vertical offset.
    pub dy: f32,
    /// Blur radius.
    pub blur: f32,
    /// Spread.
    pub spread: f32,
    /// Color with alpha.
    pub color: Color,
    /// Inner shadow.
    pub inset: bool,
}

/// Compositing mode for a node against what is below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    /// Source over.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
    /// Soft light.
    SoftLight,
}

/// Mirroring applied to a node's own paint (used for corner ornaments).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flip {
    /// Mirror horizontally.
    pub x: bool,
    /// Mirror vertically.
    pub y: bool,
}

impl Flip {
    /// No mirroring.
    pub const NONE: Flip = Flip { x: false, y: false };
}

/// Text settings for [`Tag::Text`] nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Preference list, most preferred first.
    pub families: Vec<String>,
    /// Size in px.
    pub size: f32,
    /// Fill color.
    pub color: Color,
    /// Weight (400 regular, 700 bold).
    pub weight: u16,
}

/// Looping animation attached to a node. Static renders show the first keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animation {
    /// Opacity pulse of the whole node.
    Breathe {
        /// Period in seconds.
        secs: f64,
    },
    /// Horizontal travel across the parent.
    Sweep {
        /// Period in seconds.
        secs: f64,
        /// Travel distance in px.
        distance: f32,
    },
}

/// Layout and paint properties of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Positioning scheme.
    pub position: Position,
    /// Offsets for absolute positioning.
    pub inset: Inset,
    /// Width.
    pub width: Dim,
    /// Height.
    pub height: Dim,
    /// Padding in px.
    pub padding: Edges,
    /// Margin in px.
    pub margin: Edges,
    /// Child direction.
    pub direction: Direction,
    /// Main-axis alignment of children.
    pub justify: Align,
    /// Cross-axis alignment of children.
    pub align: Align,
    /// Gap between children in px.
    pub gap: f32,
    /// Flex grow factor.
    pub grow: f32,
    /// Flex shrink factor.
    pub shrink: f32,
    /// Background layers, bottom first.
    pub background: Vec<Paint>,
    /// Border.
    pub border: Option<Border>,
    /// Corner radius in px.
    pub radius: f32,
    /// Shadows, painted in order.
    pub shadows: Vec<Shadow>,
    /// Node opacity.
    pub opacity: f32,
    /// Compositing mode.
    pub blend: Blend,
    /// Mirroring of the node's own paint.
    pub flip: Flip,
    /// Text settings.
    pub font: Option<Font>,
    /// Looping animation.
    pub animation: Option<Animation>,
    /// Clip children to the padding box.
    pub clip: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            position: Position::Relative,
            inset: Inset::default(),
            width: Dim::Auto,
            height: Dim::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Row,
            justify: Align::Start,
            align: Align::Stretch,
            gap: 0.0,
            grow: 0.0,
            shrink: 1.0,
            background: Vec::new(),
            border: None,
            radius: 0.0,
            shadows: Vec::new(),
            opacity: 1.0,
            blend: Blend::Normal,
            flip: Flip::NONE,
            font: None,
            animation: None,
            clip: false,
        }
    }
}

impl Style {
    /// Full-size box (100% x 100%).
    pub fn fill() -> Self {
        Self {
            width: Dim::Percent(1.0),
            height: Dim::Percent(1.0),
            ..Self::default()
        }
    }

    /// Fixed-size box.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width: Dim::Px(width),
            height: Dim::Px(height),
            ..Self::default()
        }
    }

    /// Absolutely positioned overlay covering the parent.
    pub fn overlay() -> Self {
        Self {
            position: Position::Absolute,
            inset: Inset::fill(0.0),
            ..Self::default()
        }
    }

    /// Flex item that takes the remaining space.
    pub fn grow() -> Self {
        Self {
            grow: 1.0,
            shrink: 1.0,
            ..Self::default()
        }
    }
}

/// Node of the layered tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Payload.
    pub tag: Tag,
    /// Identifying key, used for lookups after layout (e.g. [`CONTENT_KEY`]).
    pub key: Option<String>,
    /// Scope that prefixes generated definition ids below this node.
    pub scope: Option<String>,
    /// Style.
    pub style: Style,
    /// Children, painted in order.
    pub children: Vec<Node>,
}

impl Node {
    /// Plain box.
    pub fn boxed(style: Style) -> Self {
        Self {
            tag: Tag::Box,
            key: None,
            scope: None,
            style,
            children: Vec::new(),
        }
    }

    /// Text leaf.
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        Self {
            tag: Tag::Text(text.into()),
            ..Self::boxed(style)
        }
    }

    /// Vector asset leaf.
    pub fn vector(asset: VectorAsset, style: Style) -> Self {
        Self {
            tag: Tag::Vector(asset),
            ..Self::boxed(style)
        }
    }

    /// Content slot wrapping `content`; grows to fill its parent.
    pub fn slot(content: Node) -> Self {
        Self::boxed(Style {
            grow: 1.0,
            direction: Direction::Column,
            ..Style::default()
        })
        .keyed(CONTENT_KEY)
        .child(content)
    }

    /// Attach a key.
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach a definition scope.
    pub fn scoped(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for a keyed node.
    pub fn find(&self, key: &str) -> Option<&Node> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Concatenated text of all text leaves, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Tag::Text(t) = &self.tag {
            out.push_str(t);
        }
        for c in &self.children {
            c.collect_text(out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/node.rs"]
mod tests;
