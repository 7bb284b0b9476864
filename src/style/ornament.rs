use crate::foundation::core::Color;
use crate::foundation::math::fmt_num;
use crate::style::asset::{AssetKind, VectorAsset};

/// Edge length of a corner ornament in user units.
pub const ORNAMENT_SIZE: f64 = 48.0;

/// Corner flourish templates. Each is drawn for the top-left corner; the composer mirrors it
/// for the other three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentKind {
    /// 如意 cloud-head scroll.
    Ruyi,
    /// Key-fret bracket.
    FretBracket,
    /// Plum blossom with a short branch.
    Blossom,
}

impl OrnamentKind {
    /// All kinds, indexed by the ornament draw.
    pub const ALL: [OrnamentKind; 3] = [Self::Ruyi, Self::FretBracket, Self::Blossom];

    /// Kind for an ornament index; out-of-range indices wrap.
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Ruyi => "ruyi",
            Self::FretBracket => "fret_bracket",
            Self::Blossom => "blossom",
        }
    }

    /// Generate the ornament asset using the derived stroke and accent colors.
    pub fn generate(self, stroke: Color, accent: Color, line_width: f64) -> VectorAsset {
        let lw = fmt_num(line_width.max(1.0));
        let s = stroke.to_hex_rgb();
        let a = accent.to_hex_rgb();
        let body = match self {
            Self::Ruyi => format!(
                concat!(
                    r#"<g fill="none" stroke="{s}" stroke-width="{lw}" stroke-linecap="round">"#,
                    r#"<path d="M4 44 V14 Q4 4 14 4 H44"/>"#,
                    r#"<path d="M12 30 C8 20 20 12 26 18 C32 24 22 30 18 24"/>"#,
                    r#"</g>"#,
                    r#"<circle cx="14" cy="14" r="3" fill="{a}"/>"#,
                ),
                s = s,
                a = a,
                lw = lw,
            ),
            Self::FretBracket => format!(
                concat!(
                    r#"<g fill="none" stroke="{s}" stroke-width="{lw}" stroke-linejoin="miter">"#,
                    r#"<path d="M4 44 V4 H44"/>"#,
                    r#"<path d="M12 36 V12 H36 V28 H20 V20 H28"/>"#,
                    r#"</g>"#,
                    r#"<rect x="2" y="2" width="6" height="6" fill="{a}"/>"#,
                ),
                s = s,
                a = a,
                lw = lw,
            ),
            Self::Blossom => format!(
                concat!(
                    r#"<path d="M4 44 C10 30 18 22 34 14" fill="none" stroke="{s}" stroke-width="{lw}" stroke-linecap="round"/>"#,
                    r#"<g fill="{a}" fill-opacity="0.85">"#,
                    r#"<circle cx="16" cy="10" r="4"/><circle cx="22" cy="14" r="4"/>"#,
                    r#"<circle cx="20" cy="21" r="4"/><circle cx="12" cy="21" r="4"/>"#,
                    r#"<circle cx="10" cy="14" r="4"/>"#,
                    r#"</g>"#,
                    r#"<circle cx="16" cy="16" r="2" fill="{s}"/>"#,
                ),
                s = s,
                a = a,
                lw = lw,
            ),
        };
        VectorAsset::new(AssetKind::Ornament, ORNAMENT_SIZE, ORNAMENT_SIZE, body)
    }
}
