use crate::foundation::core::Hsl;
use crate::style::asset::{AssetKind, VectorAsset};

/// Edge length of the grain tile.
pub const GRAIN_TILE: f64 = 160.0;

/// Turbulence seed for a jittered palette color.
pub fn grain_seed(color: Hsl) -> u32 {
    ((color.h * 31 + color.s * 7 + color.l) as u32) % 997
}

/// Monochrome fractal-noise tile. The filter id is keyed by the turbulence seed, so two
/// grains with the same seed share an identical definition.
pub fn generate_grain(color: Hsl) -> VectorAsset {
    let seed = grain_seed(color);
    let body = format!(
        concat!(
            r#"<filter id="grain-{seed}" x="0" y="0" width="100%" height="100%">"#,
            r#"<feTurbulence type="fractalNoise" baseFrequency="0.85" numOctaves="2" seed="{seed}" stitchTiles="stitch"/>"#,
            r#"<feColorMatrix type="saturate" values="0"/>"#,
            r#"</filter>"#,
            r#"<rect width="{t}" height="{t}" filter="url(#grain-{seed})"/>"#,
        ),
        seed = seed,
        t = GRAIN_TILE,
    );
    VectorAsset::new(AssetKind::Grain, GRAIN_TILE, GRAIN_TILE, body)
}
