//! Seeded style derivation for generated mountings.

/// Generated vector assets.
pub mod asset;
/// Paper grain overlays.
pub mod grain;
pub mod hash;
/// Corner ornaments.
pub mod ornament;
/// Seeded palettes.
pub mod palette;
pub mod params;
/// Seeded random numbers.
pub mod rng;
pub mod texture;

pub use asset::{AssetKind, VectorAsset};
pub use hash::{seed_hash, seed_unit};
pub use ornament::OrnamentKind;
pub use palette::{BASE_COLORS, BaseColor};
pub use params::{CornerOrnament, Paddings, ShadowLayer, StyleParameters};
pub use rng::SeededRng;
pub use texture::TextureKind;
