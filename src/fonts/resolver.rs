//! Script style → font bytes, with a single designated fallback family.

use std::sync::Arc;

use crate::foundation::error::{InkError, InkResult};
use crate::fonts::loader::FontLoader;

/// Named script styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// 楷书, regular script.
    Kaishu,
    /// 行书, running script.
    Xingshu,
    /// 草书, cursive script.
    Caoshu,
    /// 隶书, clerical script.
    Lishu,
    /// 篆书, seal script.
    Zhuanshu,
    /// 宋体, print face. Designated default family.
    Songti,
}

impl FontStyle {
    /// Every style.
    pub const ALL: [FontStyle; 6] = [
        Self::Kaishu,
        Self::Xingshu,
        Self::Caoshu,
        Self::Lishu,
        Self::Zhuanshu,
        Self::Songti,
    ];

    /// Family used when a style's own font cannot be loaded.
    pub const DEFAULT: FontStyle = FontStyle::Songti;

    /// Parse a keyword (`kaishu`) or its Chinese name (`楷书`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s) || f.chinese_name() == s)
    }

    /// Parse, mapping unknown keywords to [`FontStyle::Kaishu`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(style = s, "unknown font style; using kaishu");
            Self::Kaishu
        })
    }

    /// Stable keyword.
    pub fn id(self) -> &'static str {
        match self {
            Self::Kaishu => "kaishu",
            Self::Xingshu => "xingshu",
            Self::Caoshu => "caoshu",
            Self::Lishu => "lishu",
            Self::Zhuanshu => "zhuanshu",
            Self::Songti => "songti",
        }
    }

    /// Chinese name of the script.
    pub fn chinese_name(self) -> &'static str {
        match self {
            Self::Kaishu => "楷书",
            Self::Xingshu => "行书",
            Self::Caoshu => "草书",
            Self::Lishu => "隶书",
            Self::Zhuanshu => "篆书",
            Self::Songti => "宋体",
        }
    }

    /// Configured family name; the name embedded in the font bytes wins when present.
    pub fn family(self) -> &'static str {
        match self {
            Self::Kaishu => "LXGW WenKai",
            Self::Xingshu => "Zhi Mang Xing",
            Self::Caoshu => "Liu Jian Mao Cao",
            Self::Lishu => "ZCOOL XiaoWei",
            Self::Zhuanshu => "Long Cang",
            Self::Songti => "Noto Serif SC",
        }
    }

    /// Font-root-relative path of the style's font file.
    pub fn locator(self) -> &'static str {
        match self {
            Self::Kaishu => "kaishu/LXGWWenKai-Regular.ttf",
            Self::Xingshu => "xingshu/ZhiMangXing-Regular.ttf",
            Self::Caoshu => "caoshu/LiuJianMaoCao-Regular.ttf",
            Self::Lishu => "lishu/ZCOOLXiaoWei-Regular.ttf",
            Self::Zhuanshu => "zhuanshu/LongCang-Regular.ttf",
            Self::Songti => "songti/NotoSerifSC-Regular.otf",
        }
    }

    /// `true` for the stylized scripts that may lack glyphs the print face has.
    pub fn is_decorative(self) -> bool {
        !matches!(self, Self::Kaishu | Self::Songti)
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Loaded font.
#[derive(Clone, Debug, PartialEq)]
pub struct FontAsset {
    /// Family name used in `font-family` lists.
    pub family: String,
    /// Font file bytes.
    pub bytes: Arc<Vec<u8>>,
    /// Weight (400 regular).
    pub weight: u16,
    /// Style this asset was loaded for.
    pub style: FontStyle,
    /// Locator the bytes came from.
    pub locator: String,
}

/// Primary font plus an optional fallback registered alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontResolution {
    /// Style the caller asked for.
    pub requested: FontStyle,
    /// Font text is set in.
    pub primary: FontAsset,
    /// Font that catches glyphs missing from `primary`.
    pub fallback: Option<FontAsset>,
}

impl FontResolution {
    /// `font-family` preference list: primary, fallback, then a generic.
    pub fn family_list(&self) -> Vec<String> {
        let mut out = vec![self.primary.family.clone()];
        if let Some(fb) = &self.fallback
            && fb.family != self.primary.family
        {
            out.push(fb.family.clone());
        }
        out.push("serif".to_string());
        out
    }

    /// Every asset that must be registered with the shaper.
    pub fn assets(&self) -> impl Iterator<Item = &FontAsset> {
        std::iter::once(&self.primary).chain(self.fallback.as_ref())
    }

    /// `true` when the requested style could not be loaded and the default family stands in.
    pub fn is_substituted(&self) -> bool {
        self.primary.style != self.requested
    }
}

/// Resolves a [`FontStyle`] to loaded fonts through a [`FontLoader`].
#[derive(Debug)]
pub struct FontResolver<L> {
    loader: L,
}

impl<L: FontLoader> FontResolver<L> {
    /// Resolver reading through `loader`.
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Underlying loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Load the style's font, falling back to [`FontStyle::DEFAULT`].
    ///
    /// When the primary is a decorative script its locator differs from the default, so the
    /// default family is also loaded (best effort) as a glyph fallback. If neither the primary
    /// nor the default loads, the error lists every attempted locator.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, style: FontStyle) -> InkResult<FontResolution> {
        let default = FontStyle::DEFAULT;
        let mut attempted = vec![style.locator().to_string()];

        match self.load_asset(style) {
            Ok(primary) => {
                let fallback = if style.is_decorative() && style.locator() != default.locator() {
                    match self.load_asset(default) {
                        Ok(fb) => Some(fb),
                        Err(err) => {
                            tracing::debug!(error = %err, "fallback family unavailable");
                            None
                        }
                    }
                } else {
                    None
                };
                tracing::debug!(
                    family = %primary.family,
                    fallback = fallback.as_ref().map(|f| f.family.as_str()),
                    "fonts resolved"
                );
                Ok(FontResolution {
                    requested: style,
                    primary,
                    fallback,
                })
            }
            Err(err) => {
                if style.locator() == default.locator() {
                    tracing::warn!(error = %err, "default font failed to load");
                    return Err(InkError::font_load(style.id(), attempted));
                }
                tracing::warn!(
                    error = %err,
                    default = default.id(),
                    "primary font failed to load; using default family"
                );
                attempted.push(default.locator().to_string());
                let primary = self.load_asset(default).map_err(|err| {
                    tracing::warn!(error = %err, "default font failed to load");
                    InkError::font_load(style.id(), attempted.clone())
                })?;
                Ok(FontResolution {
                    requested: style,
                    primary,
                    fallback: None,
                })
            }
        }
    }

    fn load_asset(&self, style: FontStyle) -> anyhow::Result<FontAsset> {
        let bytes = self.loader.load(style.locator())?;
        let family = family_from_bytes(&bytes)
            .map_err(|e| e.context(format!("probe '{}'", style.locator())))?
            .unwrap_or_else(|| style.family().to_string());
        Ok(FontAsset {
            family,
            bytes,
            weight: 400,
            style,
            locator: style.locator().to_string(),
        })
    }
}

/// Family name registered from `bytes`. `Ok(None)` for a face without a name, an error when the
/// bytes hold no font face.
pub fn family_from_bytes(bytes: &[u8]) -> anyhow::Result<Option<String>> {
    let mut font_ctx = parley::FontContext::default();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| anyhow::anyhow!("no font families registered from font bytes"))?;
    Ok(font_ctx
        .collection
        .family_name(family_id)
        .map(|s| s.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resolver.rs"]
mod tests;
