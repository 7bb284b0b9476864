//! SVG document → pixels → PNG.

use std::io::Cursor;
use std::sync::Arc;

use crate::fonts::FontResolution;
use crate::foundation::error::{InkError, InkResult, Stage};

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in px.
    pub width: u32,
    /// Height in px.
    pub height: u32,
    /// `width * height * 4` bytes, row-major.
    pub data: Vec<u8>,
}

/// Font database holding exactly the resolved font bytes; no system fonts.
pub fn font_database(fonts: Option<&FontResolution>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if let Some(fonts) = fonts {
        for asset in fonts.assets() {
            db.load_font_data(asset.bytes.as_ref().clone());
        }
        // Generic `serif` in family lists resolves to the last-registered family.
        let generic = fonts
            .fallback
            .as_ref()
            .map_or(&fonts.primary.family, |f| &f.family);
        db.set_serif_family(generic.clone());
    }
    Arc::new(db)
}

/// Parse an SVG document with text shaped against `fonts`.
#[tracing::instrument(skip_all, fields(bytes = svg.len()))]
pub fn parse_svg(svg: &str, fonts: Option<&FontResolution>) -> InkResult<usvg::Tree> {
    let mut opts = usvg::Options {
        fontdb: font_database(fonts),
        font_resolver: make_font_resolver(),
        ..Default::default()
    };
    if let Some(fonts) = fonts {
        opts.font_family = fonts.primary.family.clone();
    }
    usvg::Tree::from_str(svg, &opts)
        .map_err(|e| InkError::shaping(Stage::Shaping, format!("parse svg tree: {e}")))
}

/// Rasterize a parsed tree, scaled to `width` x `height`.
#[tracing::instrument(skip(tree))]
pub fn rasterize(tree: &usvg::Tree, width: u32, height: u32) -> InkResult<RasterImage> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| InkError::raster(Stage::Raster, "failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(RasterImage {
        width,
        height,
        data,
    })
}

/// Encode pixels as PNG.
pub fn encode_png(image: RasterImage) -> InkResult<Vec<u8>> {
    let RasterImage {
        width,
        height,
        data,
    } = image;
    let img = image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| InkError::raster(Stage::Encode, "pixel buffer does not match size"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| InkError::raster(Stage::Encode, format!("encode png: {e}")))?;
    Ok(buf)
}

/// Parse, rasterize at the document's intrinsic size, and encode.
pub fn svg_to_png(svg: &str, fonts: Option<&FontResolution>) -> InkResult<Vec<u8>> {
    let tree = parse_svg(svg, fonts)?;
    let size = tree.size().to_int_size();
    let image = rasterize(&tree, size.width(), size.height())?;
    encode_png(image)
}

fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            // Only registered faces are present.
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
