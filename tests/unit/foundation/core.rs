use super::*;

#[test]
fn canvas_rejects_degenerate_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, Canvas::MAX_DIM + 1).is_err());
    let c = Canvas::new(900, 1200).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 900.0, 1200.0));
}

#[test]
fn hsl_wraps_and_clamps() {
    let c = Hsl::new(-10, 120, -5);
    assert_eq!(c, Hsl { h: 350, s: 100, l: 0 });
    assert_eq!(Hsl::new(365, 50, 50).h, 5);
    assert_eq!(Hsl::new(10, 50, 20).lighten(-35).l, 0);
}

#[test]
fn hsl_to_color_primaries() {
    assert_eq!(Hsl::new(0, 100, 50).to_color(), Color::rgb(255, 0, 0));
    assert_eq!(Hsl::new(120, 100, 50).to_color(), Color::rgb(0, 255, 0));
    assert_eq!(Hsl::new(240, 100, 50).to_color(), Color::rgb(0, 0, 255));
    assert_eq!(Hsl::new(0, 0, 100).to_color(), Color::rgb(255, 255, 255));
}

#[test]
fn color_hex_and_display() {
    let c = Color::hex("#1a2b3c").unwrap();
    assert_eq!(c, Color::rgb(0x1a, 0x2b, 0x3c));
    assert_eq!(c.to_string(), "#1a2b3c");
    assert_eq!(c.with_alpha(0.5).to_string(), "#1a2b3c80");
    assert_eq!(c.with_alpha(0.5).opacity(), 0.502);
    assert!(Color::hex("#12345").is_err());
}

#[test]
fn color_mix_endpoints() {
    let a = Color::rgb(0, 0, 0);
    let b = Color::rgb(255, 255, 255);
    assert_eq!(a.mix(b, 0.0), a);
    assert_eq!(a.mix(b, 1.0), b);
    assert_eq!(a.mix(b, 0.5), Color::rgb(128, 128, 128));
}
