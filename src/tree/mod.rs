//! Layered node tree: data model, flex layout and SVG emission.

pub mod layout;
pub mod node;
pub mod svg;

pub use layout::{LaidOut, layout_tree};
pub use node::{
    Align, Animation, Blend, Border, CONTENT_KEY, Corner, Dim, Direction, Edges, Flip, Font,
    GradientStop, Inset, Line, LinearGradient, Node, Paint, Position, Shadow, Style, Tag,
};
pub use svg::{SvgOptions, to_svg};
