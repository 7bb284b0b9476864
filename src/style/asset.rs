use base64::Engine as _;

use crate::foundation::math::fmt_num;

/// Kind tag mixed into the content address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Repeating background tile.
    Texture,
    /// Corner flourish.
    Ornament,
    /// Film-grain overlay.
    Grain,
}

impl AssetKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Texture => "tx",
            Self::Ornament => "or",
            Self::Grain => "gr",
        }
    }
}

/// Generated, content-addressed SVG fragment.
///
/// `body` is markup for the inside of an `<svg>` element whose user space is
/// `0 0 width height`. The id is derived only from the kind, size and markup, so equal inputs
/// always produce equal ids.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VectorAsset {
    /// Content address, e.g. `tx-1f2e...`.
    pub id: String,
    /// Asset kind.
    pub kind: AssetKind,
    /// Tile/viewbox width in user units.
    pub width: f64,
    /// Tile/viewbox height in user units.
    pub height: f64,
    /// Inner SVG markup.
    pub body: String,
}

impl VectorAsset {
    /// Build an asset and compute its content address.
    pub fn new(kind: AssetKind, width: f64, height: f64, body: String) -> Self {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(kind.prefix().as_bytes());
        h.update(&[0]);
        h.update(fmt_num(width).as_bytes());
        h.update(&[0]);
        h.update(fmt_num(height).as_bytes());
        h.update(&[0]);
        h.update(body.as_bytes());
        let id = format!("{}-{:016x}", kind.prefix(), h.digest());
        Self {
            id,
            kind,
            width,
            height,
            body,
        }
    }

    /// Standalone SVG document for this asset.
    pub fn to_svg_document(&self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{}</svg>"#,
            self.body
        )
    }

    /// `data:image/svg+xml;base64,...` form of [`VectorAsset::to_svg_document`].
    pub fn to_data_uri(&self) -> String {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(self.to_svg_document().as_bytes());
        format!("data:image/svg+xml;base64,{encoded}")
    }

    /// `<pattern>` definition that tiles the asset in user space, scoped by `id`.
    pub fn to_pattern_def(&self, id: &str) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        format!(
            r#"<pattern id="{id}" patternUnits="userSpaceOnUse" width="{w}" height="{h}">{}</pattern>"#,
            self.body
        )
    }
}
