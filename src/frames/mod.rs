//! Hand-authored frame variants.
//!
//! Each variant is a pure `fn(content, canvas) -> Node` that wraps the content in a single slot
//! keyed [`CONTENT_KEY`](crate::tree::node::CONTENT_KEY). Decorations stay outside the slot and
//! the slot keeps at least 60% of the canvas in both dimensions.

/// Modern and porcelain matting.
pub mod modern;
pub mod pastel;
/// The undecorated default.
pub mod plain;
pub mod scroll;
pub mod wood;

use crate::foundation::core::Canvas;
use crate::tree::node::Node;

/// Curated frame identifier. Unknown ids parse to [`FrameId::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameId {
    /// 绫裱立轴: silk hanging scroll with wooden rollers.
    SilkScroll,
    /// 红木: deep redwood moulding.
    Redwood,
    /// 金木: gilded wood moulding.
    GoldenWood,
    /// 云锦: cloud-pattern brocade border.
    CloudBrocade,
    /// Thin black gallery frame with a wide white mat.
    ModernBlack,
    /// Pastel card, pink.
    PastelPink,
    /// Pastel card, mint.
    PastelMint,
    /// Pastel card, sky blue.
    PastelSky,
    /// Pastel card, apricot.
    PastelApricot,
    /// 青花: blue-and-white porcelain border.
    Porcelain,
    /// Flat, undecorated paper.
    #[default]
    None,
}

impl FrameId {
    /// Every id, curated variants first and [`FrameId::None`] last.
    pub const ALL: [FrameId; 11] = [
        Self::SilkScroll,
        Self::Redwood,
        Self::GoldenWood,
        Self::CloudBrocade,
        Self::ModernBlack,
        Self::PastelPink,
        Self::PastelMint,
        Self::PastelSky,
        Self::PastelApricot,
        Self::Porcelain,
        Self::None,
    ];

    /// Parse a string id; never fails.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::SilkScroll => "silk_scroll",
            Self::Redwood => "redwood",
            Self::GoldenWood => "golden_wood",
            Self::CloudBrocade => "cloud_brocade",
            Self::ModernBlack => "modern_black",
            Self::PastelPink => "pastel_pink",
            Self::PastelMint => "pastel_mint",
            Self::PastelSky => "pastel_sky",
            Self::PastelApricot => "pastel_apricot",
            Self::Porcelain => "porcelain",
            Self::None => "none",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::SilkScroll => "绫裱立轴",
            Self::Redwood => "红木",
            Self::GoldenWood => "金木",
            Self::CloudBrocade => "云锦",
            Self::ModernBlack => "简约黑框",
            Self::PastelPink => "樱粉",
            Self::PastelMint => "薄荷",
            Self::PastelSky => "天青",
            Self::PastelApricot => "杏黄",
            Self::Porcelain => "青花",
            Self::None => "无",
        }
    }

    /// Wrap `content` in this frame.
    pub fn compose(self, content: Node, canvas: Canvas) -> Node {
        let tree = match self {
            Self::SilkScroll => scroll::silk_scroll(content, canvas),
            Self::CloudBrocade => scroll::cloud_brocade(content, canvas),
            Self::Redwood => wood::redwood(content, canvas),
            Self::GoldenWood => wood::golden_wood(content, canvas),
            Self::ModernBlack => modern::modern_black(content, canvas),
            Self::Porcelain => modern::porcelain(content, canvas),
            Self::PastelPink => pastel::pastel(pastel::PINK, content, canvas),
            Self::PastelMint => pastel::pastel(pastel::MINT, content, canvas),
            Self::PastelSky => pastel::pastel(pastel::SKY, content, canvas),
            Self::PastelApricot => pastel::pastel(pastel::APRICOT, content, canvas),
            Self::None => plain::none(content, canvas),
        };
        tree.scoped(format!("frame-{}", self.id()))
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Parse `id` and compose; unknown ids compose the undecorated frame.
pub fn compose_frame(id: &str, content: Node, canvas: Canvas) -> Node {
    FrameId::parse(id).compose(content, canvas)
}

/// Margin as a fraction of a canvas edge, in px.
pub(crate) fn frac(edge: u32, f: f32) -> f32 {
    (edge as f32 * f).round()
}

#[cfg(test)]
#[path = "../../tests/unit/frames/mod.rs"]
mod tests;
