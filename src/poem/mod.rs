//! Verse validation, seal derivation and the glyph-box layout.

pub mod layout;
/// Seal glyphs and the year label.
pub mod seal;
/// Verse lines and the size table.
pub mod verse;

pub use layout::{
    COLUMNS_KEY, POEM_KEY, SEAL_KEY, YEAR_KEY, build_poem_tree, canvas_scale, check_fit, line_key,
};
pub use seal::{DEFAULT_SEAL_GLYPH, MAX_NAME_CHARS, SealLayout, SealSpec, sexagenary_label};
pub use verse::{
    LEADING, LINE_COUNTS, Poem, REFERENCE_SLOT_HEIGHT, VerseLine, VerseMetrics, metrics_for,
};
