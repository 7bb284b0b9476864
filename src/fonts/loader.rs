use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context as _;

use crate::foundation::error::{InkError, InkResult};

/// Source of font bytes keyed by a relative locator.
pub trait FontLoader: Send + Sync {
    /// Load the font at `locator`.
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>>;
}

impl<T: FontLoader + ?Sized> FontLoader for Arc<T> {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        (**self).load(locator)
    }
}

impl<T: FontLoader + ?Sized> FontLoader for &T {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        (**self).load(locator)
    }
}

/// Reads fonts from a root directory.
#[derive(Clone, Debug)]
pub struct FsFontLoader {
    root: PathBuf,
}

impl FsFontLoader {
    /// Loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Font root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FontLoader for FsFontLoader {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        let norm = normalize_rel_path(locator)?;
        let path = self.root.join(Path::new(&norm));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;
        Ok(Arc::new(bytes))
    }
}

/// Caller-owned cache in front of another loader. Failures are not cached.
#[derive(Debug)]
pub struct CachedFontLoader<L> {
    inner: L,
    cache: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl<L: FontLoader> CachedFontLoader<L> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Wrapped loader.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Number of cached locators.
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl<L: FontLoader> FontLoader for CachedFontLoader<L> {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locator)
        {
            return Ok(Arc::clone(hit));
        }
        // The lock is not held across the load; concurrent misses may both read the file.
        let bytes = self.inner.load(locator)?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locator.to_string(), Arc::clone(&bytes));
        Ok(bytes)
    }
}

/// Normalize and validate font-root-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> InkResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(InkError::validation("font locators must be relative"));
    }
    if s.is_empty() {
        return Err(InkError::validation("font locator must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(InkError::validation("font locators must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(InkError::validation("font locator must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/loader.rs"]
mod tests;
