use std::sync::Arc;

use super::*;
use crate::fonts::FontAsset;
use crate::fonts::support::{MapLoader, test_font};
use crate::frames::FrameId;

const POEM: [&str; 4] = ["床前明月光", "疑是地上霜", "举头望明月", "低头思故乡"];

fn placeholder_fonts() -> FontResolution {
    FontResolution {
        requested: FontStyle::Kaishu,
        primary: FontAsset {
            family: "LXGW WenKai".into(),
            bytes: Arc::new(Vec::new()),
            weight: 400,
            style: FontStyle::Kaishu,
            locator: FontStyle::Kaishu.locator().into(),
        },
        fallback: None,
    }
}

fn request() -> RenderRequest {
    RenderRequest::new(POEM, Some("李白"), 2024)
        .unwrap()
        .with_mounting(Mounting::Frame(FrameId::ModernBlack))
        .with_canvas(Canvas::new(450, 600).unwrap())
}

#[test]
fn output_format_parses() {
    assert_eq!(OutputFormat::parse("PNG").unwrap(), OutputFormat::Png);
    assert_eq!(OutputFormat::parse(" svg ").unwrap(), OutputFormat::Svg);
    assert!(matches!(OutputFormat::parse("gif"), Err(InkError::Validation(_))));
}

#[test]
fn request_validation_precedes_everything() {
    let err = RenderRequest::new(["一", "二", "三"], None, 2024).unwrap_err();
    assert!(err.is_client_error());
    let err = RenderRequest::new(POEM, Some(&"长".repeat(40)), 2024).unwrap_err();
    assert!(matches!(err, InkError::Validation(_)));
}

#[test]
fn columns_overflowing_the_slot_are_rejected() {
    let line = "字".repeat(12);
    let req = RenderRequest::new(vec![line.as_str(); 6], Some("李白"), 2024)
        .unwrap()
        .with_mounting(Mounting::Generated("李清照".into()))
        .with_canvas(Canvas::new(300, 400).unwrap())
        .with_format(OutputFormat::Svg);
    let err = render_with_fonts(&req, &placeholder_fonts()).unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("does not fit"), "{err}");

    let fits = req.with_canvas(Canvas::default());
    assert!(render_with_fonts(&fits, &placeholder_fonts()).is_ok());
}

#[test]
fn svg_output_needs_no_rasterizer() {
    let req = request()
        .with_mounting(Mounting::Generated("李清照".into()))
        .with_format(OutputFormat::Svg);
    let out = render_with_fonts(&req, &placeholder_fonts()).unwrap();
    assert!(out.png.is_none());
    assert_eq!(out.bytes(), out.svg.as_bytes());
    assert!(out.data_uri().starts_with("data:image/svg+xml;base64,"));
    assert!(out.svg.contains(r#"font-family="&apos;LXGW WenKai&apos;, serif""#));
    assert!(out.svg.contains(">床<"));
    assert!(out.svg.contains("<animate"));
    assert!(!out.substituted);
}

#[test]
fn svg_is_byte_identical_across_calls() {
    let req = request().with_mounting(Mounting::Generated("李清照".into()));
    let fonts = placeholder_fonts();
    assert_eq!(build_svg(&req, &fonts).unwrap(), build_svg(&req, &fonts).unwrap());
}

#[test]
fn missing_fonts_fail_with_context() {
    let loader = MapLoader::default();
    let err = render(&request(), &loader).unwrap_err();
    let InkError::FontLoad { style, attempted } = &err else {
        panic!("expected font load error, got {err}");
    };
    assert_eq!(style, "kaishu");
    assert_eq!(attempted.len(), 2);
    assert_eq!(loader.calls(), 2);
}

#[test]
fn pool_rejects_zero_threads() {
    assert!(matches!(RenderPool::new(Some(0)), Err(InkError::Validation(_))));
    let pool = RenderPool::new(Some(2)).unwrap();
    assert_eq!(pool.threads(), 2);
    assert_eq!(pool.rasterizations(), 0);
}

#[test]
fn end_to_end_png_is_reproducible() {
    let Some(bytes) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let loader = MapLoader::all(bytes);
    let a = render(&request(), &loader).unwrap();
    let b = render(&request(), &loader).unwrap();

    let png = a.png.as_deref().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(a, b);
    assert!(a.data_uri().starts_with("data:image/png;base64,"));
    assert!(!a.svg.contains("<animate"));

    let img = image::load_from_memory(png).unwrap();
    assert_eq!((img.width(), img.height()), (450, 600));
}

#[test]
fn pool_renders_and_counts() {
    let Some(bytes) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let fonts = crate::fonts::FontResolver::new(MapLoader::all(bytes))
        .resolve(FontStyle::Kaishu)
        .unwrap();
    let pool = Arc::new(RenderPool::new(Some(1)).unwrap());
    let direct = render_with_fonts(&request(), &fonts).unwrap();
    let pooled = pool.render(&request(), &fonts).unwrap();
    assert_eq!(direct, pooled);
    assert_eq!(pool.rasterizations(), 1);

    let (tx, rx) = std::sync::mpsc::channel();
    let req = request().with_format(OutputFormat::Svg);
    pool.spawn(move |p| {
        let _ = tx.send(p.render(&req, &fonts).map(|r| r.svg.len()));
    });
    assert!(rx.recv().unwrap().unwrap() > 0);
    assert_eq!(pool.rasterizations(), 1);
}
