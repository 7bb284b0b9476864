use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

struct Counting {
    calls: AtomicUsize,
}

impl FontLoader for Counting {
    fn load(&self, locator: &str) -> anyhow::Result<Arc<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if locator.starts_with("missing") {
            anyhow::bail!("no such font: {locator}");
        }
        Ok(Arc::new(locator.as_bytes().to_vec()))
    }
}

#[test]
fn normalize_rel_path_rejects_escapes() {
    assert_eq!(normalize_rel_path("a/./b.ttf").unwrap(), "a/b.ttf");
    assert_eq!(normalize_rel_path("a\\b.ttf").unwrap(), "a/b.ttf");
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.ttf").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn fs_loader_reads_relative_to_root() {
    let dir = std::env::temp_dir().join(format!("inkframe-fonts-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("kaishu")).unwrap();
    std::fs::write(dir.join("kaishu/a.ttf"), b"bytes").unwrap();

    let loader = FsFontLoader::new(&dir);
    assert_eq!(loader.load("kaishu/a.ttf").unwrap().as_slice(), b"bytes");
    let err = loader.load("kaishu/missing.ttf").unwrap_err();
    assert!(format!("{err:#}").contains("read font bytes"));
    assert!(loader.load("../outside.ttf").is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cache_serves_hits_without_calling_inner() {
    let cached = CachedFontLoader::new(Counting {
        calls: AtomicUsize::new(0),
    });
    let a = cached.load("kaishu/a.ttf").unwrap();
    let b = cached.load("kaishu/a.ttf").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
    assert_eq!(cached.len(), 1);

    assert!(cached.load("missing/x.ttf").is_err());
    assert!(cached.load("missing/x.ttf").is_err());
    assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);
    assert_eq!(cached.len(), 1);

    cached.clear();
    assert!(cached.is_empty());
}
