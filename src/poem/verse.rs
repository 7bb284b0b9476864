use crate::foundation::error::{InkError, InkResult};

/// Accepted verse line counts.
pub const LINE_COUNTS: [usize; 3] = [2, 4, 6];

/// Glyph box height as a multiple of the font size.
pub const LEADING: f32 = 1.1;

/// Smallest content slot height any mounting leaves on the default canvas (60% of 1200 px).
pub const REFERENCE_SLOT_HEIGHT: f32 = 720.0;

/// Glyph size and column gap for a line count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerseMetrics {
    /// Glyph font size in px.
    pub font_size: f32,
    /// Gap between columns in px.
    pub gap: f32,
}

/// Fixed size table; counts outside [`LINE_COUNTS`] have no entry.
pub fn metrics_for(line_count: usize) -> Option<VerseMetrics> {
    let (font_size, gap) = match line_count {
        2 => (72.0, 80.0),
        4 => (64.0, 50.0),
        6 => (52.0, 35.0),
        _ => return None,
    };
    Some(VerseMetrics { font_size, gap })
}

impl VerseMetrics {
    /// Entry multiplied by a canvas size factor.
    pub fn scaled(self, k: f32) -> Self {
        Self {
            font_size: self.font_size * k,
            gap: self.gap * k,
        }
    }

    /// Height of one glyph box.
    pub fn advance(self) -> f32 {
        self.font_size * LEADING
    }

    /// Longest line whose column fits the reference slot.
    pub fn max_glyphs(self) -> usize {
        (REFERENCE_SLOT_HEIGHT / self.advance()).floor() as usize
    }
}

/// One verse line, rendered top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerseLine {
    glyphs: Vec<char>,
}

impl VerseLine {
    /// Split a line into glyphs; surrounding whitespace is dropped.
    pub fn new(text: &str) -> Self {
        Self {
            glyphs: text.trim().chars().collect(),
        }
    }

    /// Glyphs in reading order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph count.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `true` for a blank line.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl std::fmt::Display for VerseLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.glyphs.iter().try_for_each(|c| std::fmt::Write::write_char(f, *c))
    }
}

/// A validated poem of 2, 4 or 6 lines; the first line renders rightmost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<VerseLine>,
}

impl Poem {
    /// Validate and build a poem.
    pub fn new<I, S>(lines: I) -> InkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<VerseLine> = lines.into_iter().map(|l| VerseLine::new(l.as_ref())).collect();
        if !LINE_COUNTS.contains(&lines.len()) {
            return Err(InkError::validation(format!(
                "poem must have 2, 4 or 6 lines (got {})",
                lines.len()
            )));
        }
        let poem = Self { lines };
        let max = poem.metrics().max_glyphs();
        if let Some((i, l)) = poem.lines.iter().enumerate().find(|(_, l)| l.len() > max) {
            return Err(InkError::validation(format!(
                "poem line {} has {} glyphs (max {max} for {} lines)",
                i + 1,
                l.len(),
                poem.len()
            )));
        }
        Ok(poem)
    }

    /// Lines in reading order.
    pub fn lines(&self) -> &[VerseLine] {
        &self.lines
    }

    /// Line count (2, 4 or 6).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Size table entry for this poem.
    pub fn metrics(&self) -> VerseMetrics {
        metrics_for(self.lines.len()).unwrap_or(VerseMetrics {
            font_size: 64.0,
            gap: 50.0,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poem/verse.rs"]
mod tests;
