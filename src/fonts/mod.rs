//! Font loading and style resolution.

/// Font byte sources.
pub mod loader;
pub mod resolver;

pub use loader::{CachedFontLoader, FontLoader, FsFontLoader};
pub use resolver::{FontAsset, FontResolution, FontResolver, FontStyle, family_from_bytes};

#[cfg(test)]
#[path = "../../tests/unit/fonts/support.rs"]
pub(crate) mod support;
