//! Repeating background tiles for generated mountings.
//!
//! Every tile is a pure function of its kind, stroke color and line width. Tiles are drawn in
//! a `0 0 w h` user space and are seamless when repeated.

use crate::foundation::core::Color;
use crate::foundation::math::fmt_num;
use crate::style::asset::{AssetKind, VectorAsset};
use crate::style::rng::SeededRng;

/// The eight texture templates, in seed-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureKind {
    /// 云纹: interlocking cloud curls.
    CloudSwirl,
    /// 鱼鳞: overlapping scale arcs.
    FishScale,
    /// 回纹: square key-fret meander.
    KeyFret,
    /// Regular dot grid.
    DotGrid,
    /// Diagonal crosshatch.
    Crosshatch,
    /// 缠枝: floral scrollwork vine.
    FloralScroll,
    /// Short paper fibres.
    FibrousNoise,
    /// 菱格: lozenge lattice.
    LozengeLattice,
}

impl TextureKind {
    /// All kinds, indexed by the texture draw.
    pub const ALL: [TextureKind; 8] = [
        Self::CloudSwirl,
        Self::FishScale,
        Self::KeyFret,
        Self::DotGrid,
        Self::Crosshatch,
        Self::FloralScroll,
        Self::FibrousNoise,
        Self::LozengeLattice,
    ];

    /// Kind for a texture index; out-of-range indices wrap.
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::CloudSwirl => "cloud_swirl",
            Self::FishScale => "fish_scale",
            Self::KeyFret => "key_fret",
            Self::DotGrid => "dot_grid",
            Self::Crosshatch => "crosshatch",
            Self::FloralScroll => "floral_scroll",
            Self::FibrousNoise => "fibrous_noise",
            Self::LozengeLattice => "lozenge_lattice",
        }
    }

    /// Generate the tile asset.
    pub fn generate(self, stroke: Color, line_width: f64) -> VectorAsset {
        let lw = fmt_num(line_width.max(0.5));
        let hex = stroke.to_hex_rgb();
        let op = fmt_num(stroke.opacity());
        let stroked =
            |inner: &str| format!(r#"<g fill="none" stroke="{hex}" stroke-opacity="{op}" stroke-width="{lw}" stroke-linecap="round" stroke-linejoin="round">{inner}</g>"#);
        let filled = |inner: &str| format!(r#"<g fill="{hex}" fill-opacity="{op}">{inner}</g>"#);

        let (w, h, body) = match self {
            Self::CloudSwirl => (
                48.0,
                48.0,
                stroked(concat!(
                    r#"<path d="M6 30 C6 20 20 18 22 26 C24 32 16 34 14 28"/>"#,
                    r#"<path d="M22 26 C26 18 40 20 40 30"/>"#,
                    r#"<path d="M30 6 C30 0 42 -2 44 6 C45 11 39 12 38 8"/>"#,
                    r#"<path d="M30 54 C30 48 42 46 44 54"/>"#,
                )),
            ),
            Self::FishScale => (
                24.0,
                12.0,
                stroked(concat!(
                    r#"<path d="M0 12 A12 12 0 0 1 24 12"/>"#,
                    r#"<path d="M-12 6 A12 12 0 0 1 12 6"/>"#,
                    r#"<path d="M12 6 A12 12 0 0 1 36 6"/>"#,
                )),
            ),
            Self::KeyFret => (
                32.0,
                32.0,
                stroked(r#"<path d="M2 30 V2 H30 V26 H8 V8 H24 V20 H14 V14"/>"#),
            ),
            Self::DotGrid => (
                16.0,
                16.0,
                filled(r#"<circle cx="8" cy="8" r="1.6"/><circle cx="0" cy="0" r="0.8"/><circle cx="16" cy="16" r="0.8"/>"#),
            ),
            Self::Crosshatch => (
                12.0,
                12.0,
                stroked(r#"<path d="M0 0 L12 12 M12 0 L0 12"/>"#),
            ),
            Self::FloralScroll => (
                56.0,
                56.0,
                stroked(concat!(
                    r#"<path d="M0 28 C14 8 28 48 42 28 S56 20 56 28"/>"#,
                    r#"<path d="M14 18 q6 -8 12 -2 q-6 6 -12 2 Z"/>"#,
                    r#"<path d="M36 40 q6 8 12 2 q-6 -6 -12 -2 Z"/>"#,
                    r#"<circle cx="28" cy="28" r="3"/>"#,
                )),
            ),
            Self::FibrousNoise => (40.0, 40.0, stroked(&fibres(stroke))),
            Self::LozengeLattice => (
                24.0,
                24.0,
                stroked(r#"<path d="M12 0 L24 12 L12 24 L0 12 Z"/><path d="M12 8 L16 12 L12 16 L8 12 Z"/>"#),
            ),
        };

        VectorAsset::new(AssetKind::Texture, w, h, body)
    }
}

/// Short strokes at positions taken from a side stream keyed by the stroke color, so the tile
/// depends only on its inputs and never consumes the main parameter stream. Draws only go
/// through `+ - * /`.
fn fibres(stroke: Color) -> String {
    let mut rng = SeededRng::from_seed(&format!("fibre:{stroke}"));
    let mut out = String::from(r#"<path d=""#);
    for i in 0..14 {
        let x = rng.range(0.0, 40.0);
        let y = rng.range(0.0, 40.0);
        let len = rng.range(3.0, 9.0);
        let slope = rng.range(-0.6, 0.6);
        let dx = len;
        let dy = len * slope;
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!(
            "M{} {} l{} {}",
            fmt_num(x),
            fmt_num(y),
            fmt_num(dx),
            fmt_num(dy)
        ));
    }
    out.push_str(r#""/>"#);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/style/texture.rs"]
mod tests;
