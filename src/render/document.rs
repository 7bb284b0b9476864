//! Frame selection and vector document assembly.

use crate::foundation::core::Canvas;
use crate::foundation::error::InkResult;
use crate::frames::FrameId;
use crate::mount::{compose_mounting, sanitize_identifier};
use crate::tree::layout::layout_tree;
use crate::tree::node::Node;
use crate::tree::svg::{SvgOptions, to_svg};

const GENERATED_KEYWORD: &str = "generated";
const SEED_PREFIX: &str = "seed:";

/// What wraps the poem: a curated frame or a mounting generated from a seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mounting {
    /// One of the hand-authored frames.
    Frame(FrameId),
    /// Seeded mounting; the seed is sanitized on composition.
    Generated(String),
}

impl Default for Mounting {
    fn default() -> Self {
        Self::Frame(FrameId::None)
    }
}

impl Mounting {
    /// Interpret a request's frame field.
    ///
    /// `generated` seeds from `name`, `seed:<text>` seeds from `<text>`, anything else is a
    /// frame id (unknown ids select [`FrameId::None`]).
    pub fn parse(frame: &str, name: Option<&str>) -> Self {
        let frame = frame.trim();
        if frame.eq_ignore_ascii_case(GENERATED_KEYWORD) {
            return Self::Generated(name.unwrap_or_default().to_string());
        }
        if let Some(seed) = frame.strip_prefix(SEED_PREFIX) {
            return Self::Generated(seed.to_string());
        }
        Self::Frame(FrameId::parse(frame))
    }

    /// Wrap `content`.
    pub fn compose(&self, content: Node, canvas: Canvas) -> Node {
        match self {
            Self::Frame(id) => id.compose(content, canvas),
            Self::Generated(seed) => compose_mounting(seed, content),
        }
    }
}

impl std::fmt::Display for Mounting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Frame(id) => write!(f, "frame '{id}'"),
            Self::Generated(seed) => write!(f, "mounting '{}'", sanitize_identifier(seed)),
        }
    }
}

/// Lay out `root` on `canvas` and serialize it.
#[tracing::instrument(skip(root, opts), fields(nodes = root.count()))]
pub fn document_svg(root: &Node, canvas: Canvas, opts: &SvgOptions) -> InkResult<String> {
    let laid = layout_tree(root, canvas)?;
    to_svg(&laid, canvas, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
