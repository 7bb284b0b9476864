use crate::foundation::error::{InkError, InkResult};

/// Seal text when the name is absent or has no usable glyphs.
pub const DEFAULT_SEAL_GLYPH: char = '印';

/// Longest accepted subject name, in Unicode scalar values.
pub const MAX_NAME_CHARS: usize = 32;

const STEMS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const BRANCHES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Glyph stacking inside the seal square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SealLayout {
    /// Single glyph.
    Horizontal,
    /// Two glyphs, one above the other.
    Vertical,
}

/// Seal derived from a subject name, plus the year label drawn above it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SealSpec {
    text: String,
    layout: SealLayout,
    year_label: String,
}

impl SealSpec {
    /// Derive the seal from the last one or two glyphs of `name`.
    ///
    /// Only alphanumeric characters count as glyphs. A missing or blank name yields
    /// [`DEFAULT_SEAL_GLYPH`]; names longer than [`MAX_NAME_CHARS`] are rejected.
    pub fn new(name: Option<&str>, year: i32) -> InkResult<Self> {
        let name = name.map(str::trim).unwrap_or("");
        let count = name.chars().count();
        if count > MAX_NAME_CHARS {
            return Err(InkError::validation(format!(
                "name has {count} characters (max {MAX_NAME_CHARS})"
            )));
        }

        let glyphs: Vec<char> = name.chars().filter(|c| c.is_alphanumeric()).collect();
        let tail = &glyphs[glyphs.len().saturating_sub(2)..];
        let text: String = if tail.is_empty() {
            DEFAULT_SEAL_GLYPH.to_string()
        } else {
            tail.iter().collect()
        };
        let layout = if text.chars().count() == 2 {
            SealLayout::Vertical
        } else {
            SealLayout::Horizontal
        };
        Ok(Self {
            text,
            layout,
            year_label: sexagenary_label(year),
        })
    }

    /// Seal glyphs (one or two).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Glyph stacking.
    pub fn layout(&self) -> SealLayout {
        self.layout
    }

    /// Three-glyph year label, e.g. `甲辰年`.
    pub fn year_label(&self) -> &str {
        &self.year_label
    }
}

/// Stem-branch name of a Gregorian year, e.g. 2024 → `甲辰年`.
pub fn sexagenary_label(year: i32) -> String {
    let cycle = (i64::from(year) - 4).rem_euclid(60) as usize;
    let mut s = String::with_capacity(9);
    s.push(STEMS[cycle % 10]);
    s.push(BRANCHES[cycle % 12]);
    s.push('年');
    s
}

#[cfg(test)]
#[path = "../../tests/unit/poem/seal.rs"]
mod tests;
