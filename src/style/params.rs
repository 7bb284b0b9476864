//! Seed → style parameter derivation.
//!
//! The draw order below is a compatibility contract: reordering, adding or removing a draw
//! changes the visuals of every existing seed.
//!
//! | # | draw | mapping |
//! |---|------|---------|
//! | 1 | palette index | `floor(r * 8)` |
//! | 2 | hue jitter | `round((r - 0.5) * 30)` |
//! | 3 | saturation jitter | `round((r - 0.5) * 20)` |
//! | 4 | lightness jitter | `round((r - 0.5) * 10)` |
//! | 5 | corner radius | `8 + round(r * 14)` |
//! | 6 | border width | `1 + round(r * 3)` |
//! | 7 | shadow blur | `12 + round(r * 20)` |
//! | 8 | shadow spread | `round(r * 6)` |
//! | 9 | shadow alpha | `0.12 + r * 0.2` |
//! | 10 | texture index | `floor(r * 8)` |
//! | 11 | ornament present | `r > 0.2` |
//! | 12 | ornament index (only when present) | `floor(r * 3)` |
//! | 13 | halo radius | `16 + round(r * 24)` |
//! | 14 | breathing period | `4 + r * 4` s |
//! | 15 | sweep period | `6 + r * 6` s |
//! | 16 | base padding | `28 + r * 16` |
//! | 17 | top factor | `1.6 + r * 0.4` |
//! | 18 | bottom factor | `1.3 + r * 0.3` |

use crate::foundation::core::{Color, Hsl};
use crate::foundation::math::{round_half_up, round_i32, round2};
use crate::style::asset::VectorAsset;
use crate::style::grain::generate_grain;
use crate::style::ornament::OrnamentKind;
use crate::style::palette::{BASE_COLORS, BaseColor};
use crate::style::rng::SeededRng;
use crate::style::texture::TextureKind;
use crate::tree::node::{GradientStop, LinearGradient};

/// Number of draws consumed when the ornament is absent; one more when present.
pub const DRAWS_WITHOUT_ORNAMENT: u32 = 17;

/// One box-shadow layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShadowLayer {
    /// Vertical offset in px.
    pub offset_y: f64,
    /// Blur radius in px.
    pub blur: f64,
    /// Spread in px.
    pub spread: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// Selected corner ornament.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CornerOrnament {
    /// Template.
    pub kind: OrnamentKind,
    /// Generated asset (top-left orientation).
    pub asset: VectorAsset,
}

/// Tian-tou / di-jiao paddings of the paper panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Paddings {
    /// Top ("heaven's head").
    pub top: u32,
    /// Bottom ("earth's foot").
    pub bottom: u32,
    /// Left and right.
    pub side: u32,
}

/// Complete, reproducible style bundle for a generated mounting.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StyleParameters {
    /// Seed the bundle was derived from.
    pub seed: String,
    /// Index into [`BASE_COLORS`].
    pub palette_index: usize,
    /// Base pigment before jitter.
    pub base: BaseColor,
    /// Jittered hue in degrees.
    pub hue: i32,
    /// Jittered saturation percent.
    pub saturation: i32,
    /// Jittered lightness percent.
    pub lightness: i32,
    /// Corner radius in px.
    pub corner_radius: u32,
    /// Outer border width in px.
    pub border_width: u32,
    /// Outer (wide, soft) and inner (tight) shadow layers.
    pub shadows: [ShadowLayer; 2],
    /// Outer frame ground color.
    pub background: Color,
    /// Diagonal sheen drawn over the ground.
    pub sheen: LinearGradient,
    /// Texture template.
    pub texture: TextureKind,
    /// Generated texture tile.
    pub texture_asset: VectorAsset,
    /// Corner ornament, absent for ~20% of seeds.
    pub ornament: Option<CornerOrnament>,
    /// Halo glow radius in px.
    pub halo_radius: u32,
    /// Generated grain tile.
    pub grain: VectorAsset,
    /// Breathing shadow period in seconds.
    pub breathing_secs: f64,
    /// Sweep highlight period in seconds.
    pub sweep_secs: f64,
    /// Paper panel color.
    pub paper: Color,
    /// Paper paddings.
    pub padding: Paddings,
    /// Double divider line color.
    pub divider: Color,
    /// Stroke color for texture and ornament lines.
    pub stroke: Color,
}

impl StyleParameters {
    /// Derive the bundle for `seed`.
    pub fn from_seed(seed: &str) -> Self {
        let mut rng = SeededRng::from_seed(seed);
        Self::from_rng(seed, &mut rng)
    }

    /// Derive the bundle from an already seeded stream, consuming draws in contract order.
    pub fn from_rng(seed: &str, rng: &mut SeededRng) -> Self {
        // 1-4: palette and jitter.
        let palette_index = rng.index(BASE_COLORS.len());
        let base = BASE_COLORS[palette_index];
        let hue_jitter = rng.jitter(30.0);
        let sat_jitter = rng.jitter(20.0);
        let light_jitter = rng.jitter(10.0);
        let color = Hsl::new(
            base.hsl.h + hue_jitter,
            base.hsl.s + sat_jitter,
            base.hsl.l + light_jitter,
        );

        // 5-6: geometry.
        let corner_radius = (8 + round_i32(rng.next_f64() * 14.0)) as u32;
        let border_width = (1 + round_i32(rng.next_f64() * 3.0)) as u32;

        // 7-9: shadow.
        let blur = f64::from(12 + round_i32(rng.next_f64() * 20.0));
        let spread = f64::from(round_i32(rng.next_f64() * 6.0));
        let alpha = round2(0.12 + rng.next_f64() * 0.2);
        let shadows = [
            ShadowLayer {
                offset_y: round_half_up(blur / 4.0),
                blur,
                spread,
                alpha,
            },
            ShadowLayer {
                offset_y: round_half_up(blur / 8.0),
                blur: round_half_up(blur / 2.0),
                spread: round_half_up(spread / 2.0),
                alpha: round2(alpha * 0.6),
            },
        ];

        // 10: texture.
        let texture = TextureKind::from_index(rng.index(TextureKind::ALL.len()));

        // 11-12: ornament; the index is only drawn when the ornament is present.
        let has_ornament = rng.above(0.2);
        let ornament_kind = if has_ornament {
            Some(OrnamentKind::from_index(rng.index(OrnamentKind::ALL.len())))
        } else {
            None
        };

        // 13-15: halo and animation timings.
        let halo_radius = (16 + round_i32(rng.next_f64() * 24.0)) as u32;
        let breathing_secs = round2(4.0 + rng.next_f64() * 4.0);
        let sweep_secs = round2(6.0 + rng.next_f64() * 6.0);

        // 16-18: paddings, rounded only at the end.
        let base_padding = 28.0 + rng.next_f64() * 16.0;
        let top_factor = 1.6 + rng.next_f64() * 0.4;
        let bottom_factor = 1.3 + rng.next_f64() * 0.3;
        let padding = Paddings {
            top: round_half_up(base_padding * top_factor) as u32,
            bottom: round_half_up(base_padding * bottom_factor) as u32,
            side: round_half_up(base_padding) as u32,
        };

        // Derived colors; no further draws.
        let stroke_hsl = color.lighten(-35);
        let stroke = stroke_hsl.to_color();
        let background = color.to_color();
        let sheen = LinearGradient {
            angle_deg: 135,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: color.lighten(22).to_color_alpha(0.35),
                },
                GradientStop {
                    offset: 0.5,
                    color: color.to_color_alpha(0.0),
                },
                GradientStop {
                    offset: 1.0,
                    color: color.lighten(-18).to_color_alpha(0.3),
                },
            ],
        };
        let paper = Hsl::new(color.h, (color.s / 5).max(8), 95).to_color();
        let divider = color.lighten(-20).to_color();
        let accent = Hsl::new(color.h + 180, color.s, 50).to_color();

        let texture_asset =
            texture.generate(stroke.with_alpha(0.35), f64::from(border_width) * 0.6);
        let ornament = ornament_kind.map(|kind| CornerOrnament {
            kind,
            asset: kind.generate(stroke, accent, f64::from(border_width)),
        });
        let grain = generate_grain(color);

        Self {
            seed: seed.to_string(),
            palette_index,
            base,
            hue: color.h,
            saturation: color.s,
            lightness: color.l,
            corner_radius,
            border_width,
            shadows,
            background,
            sheen,
            texture,
            texture_asset,
            ornament,
            halo_radius,
            grain,
            breathing_secs,
            sweep_secs,
            paper,
            padding,
            divider,
            stroke,
        }
    }

    /// Jittered palette color.
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }

    /// `true` when the four corner ornaments are drawn.
    pub fn has_corner_ornament(&self) -> bool {
        self.ornament.is_some()
    }

    /// Canonical JSON encoding; byte-identical for equal seeds.
    pub fn to_json(&self) -> crate::foundation::error::InkResult<String> {
        serde_json::to_string(self)
            .map_err(|e| crate::foundation::error::InkError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/params.rs"]
mod tests;
