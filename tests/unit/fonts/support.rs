//! Font fixtures shared by unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{FontLoader, FontStyle};

const CANDIDATES: &[&str] = &[
    "fonts/test.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Bytes of any usable font: `INKFRAME_TEST_FONT`, then a few well-known paths.
pub(crate) fn test_font() -> Option<Arc<Vec<u8>>> {
    let from_env = std::env::var_os("INKFRAME_TEST_FONT").map(std::path::PathBuf::from);
    from_env
        .into_iter()
        .chain(CANDIDATES.iter().map(std::path::PathBuf::from))
        .find_map(|p| std::fs::read(p).ok())
        .map(Arc::new)
}

/// In-memory loader keyed by locator that counts every call.
#[derive(Default)]
pub(crate) struct MapLoader {
    fonts: HashMap<String, Arc<Vec<u8>>>,
    calls: AtomicUsize,
}

impl MapLoader {
    pub(crate) fn with(mut self, style: FontStyle, bytes: Arc<Vec<u8>>) -> Self {
        self.fonts.insert(style.locator().to_string(), bytes);
        self
    }

    /// Loader serving `bytes` for every style.
    pub(crate) fn all(bytes: Arc<Vec<u8>>) -> Self {
        FontStyle::ALL
            .into_iter()
            .fold(Self::default(), |l, s| l.with(s, Arc::clone(&bytes)))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FontLoader for MapLoader {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fonts
            .get(locator)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no font at '{locator}'"))
    }
}
