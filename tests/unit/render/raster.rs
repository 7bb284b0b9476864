use super::*;
use crate::fonts::support::test_font;
use crate::fonts::{FontAsset, FontStyle};
use crate::foundation::core::Canvas;
use crate::frames::FrameId;
use crate::render::document::document_svg;
use crate::tree::node::{Node, Style};
use crate::tree::svg::SvgOptions;

fn frame_only_svg(frame: FrameId, canvas: Canvas) -> String {
    let root = frame.compose(Node::boxed(Style::sized(100.0, 100.0)), canvas);
    document_svg(&root, canvas, &SvgOptions { animations: false }).unwrap()
}

#[test]
fn frame_without_text_rasterizes_without_fonts() {
    let canvas = Canvas::new(300, 400).unwrap();
    let png = svg_to_png(&frame_only_svg(FrameId::Redwood, canvas), None).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (300, 400));
    // The moulding paints the corner opaque.
    assert_eq!(img.get_pixel(2, 2)[3], 255);
}

#[test]
fn rasterization_is_deterministic() {
    let canvas = Canvas::new(240, 320).unwrap();
    let svg = frame_only_svg(FrameId::PastelMint, canvas);
    assert_eq!(svg_to_png(&svg, None).unwrap(), svg_to_png(&svg, None).unwrap());
}

#[test]
fn rasterize_scales_to_target_size() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
    let tree = parse_svg(svg, None).unwrap();
    let img = rasterize(&tree, 20, 20).unwrap();
    assert_eq!(img.data.len(), 20 * 20 * 4);
    assert_eq!(&img.data[..4], &[255, 0, 0, 255]);
}

#[test]
fn malformed_svg_is_a_shaping_error() {
    let err = parse_svg("<svg", None).unwrap_err();
    assert!(matches!(err, InkError::Shaping { stage: Stage::Shaping, .. }), "{err}");
}

#[test]
fn mismatched_buffer_is_an_encode_error() {
    let err = encode_png(RasterImage {
        width: 4,
        height: 4,
        data: vec![0; 3],
    })
    .unwrap_err();
    assert!(matches!(err, InkError::Rasterization { stage: Stage::Encode, .. }), "{err}");
}

#[test]
fn font_database_holds_only_resolved_fonts() {
    assert_eq!(font_database(None).len(), 0);

    let Some(bytes) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let asset = FontAsset {
        family: "Test Face".into(),
        bytes,
        weight: 400,
        style: FontStyle::Songti,
        locator: FontStyle::Songti.locator().into(),
    };
    let fonts = FontResolution {
        requested: FontStyle::Songti,
        primary: asset,
        fallback: None,
    };
    let db = font_database(Some(&fonts));
    assert!(db.len() >= 1);
    assert!(db.faces().all(|f| matches!(f.source, usvg::fontdb::Source::Binary(_))));
}
