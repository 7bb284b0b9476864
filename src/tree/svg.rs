//! SVG emission for laid-out node trees.
//!
//! Paint order per node: outer shadows, background layers, inset shadows, border, own content
//! (text or vector), then children. Definitions (gradients, patterns, filters, clips) are
//! collected into a single `<defs>` block with ids derived from the nearest node scope and a
//! traversal counter, so equal trees always produce byte-identical documents.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Color, Rect};
use crate::foundation::error::{InkError, InkResult, Stage};
use crate::foundation::math::fmt_num;
use crate::tree::layout::LaidOut;
use crate::tree::node::{Animation, Blend, Flip, GradientStop, Line, Paint, Shadow, Tag};

const DEFAULT_SCOPE: &str = "ink";

/// Emission options.
#[derive(Clone, Copy, Debug)]
pub struct SvgOptions {
    /// Emit `<animate>` elements for nodes with an [`Animation`]. Rasterizers ignore them.
    pub animations: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { animations: true }
    }
}

/// Serialize a laid-out tree into a standalone SVG document of the canvas size.
#[tracing::instrument(skip(root, opts))]
pub fn to_svg(root: &LaidOut<'_>, canvas: Canvas, opts: &SvgOptions) -> InkResult<String> {
    let mut w = Writer {
        opts: *opts,
        defs: String::new(),
        body: String::new(),
        counter: 0,
        patterns: BTreeSet::new(),
    };
    w.node(root, DEFAULT_SCOPE)
        .map_err(|_| InkError::shaping(Stage::Shaping, "failed to format svg markup"))?;

    let mut out = String::with_capacity(w.defs.len() + w.body.len() + 256);
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        canvas.width, canvas.height
    )
    .map_err(|_| InkError::shaping(Stage::Shaping, "failed to format svg markup"))?;
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    out.push_str(&w.body);
    out.push_str("</svg>");
    Ok(out)
}

/// Escape text for element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `font-family` value: named families quoted, CSS generics bare.
pub fn font_family_list(families: &[String]) -> String {
    families
        .iter()
        .map(|f| {
            let f = f.trim();
            match f {
                "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" => f.to_string(),
                _ => format!("'{}'", f.replace('\'', "")),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

struct Writer {
    opts: SvgOptions,
    defs: String,
    body: String,
    counter: usize,
    patterns: BTreeSet<String>,
}

impl Writer {
    fn next_id(&mut self, scope: &str, kind: &str) -> String {
        self.counter += 1;
        format!("{scope}-{kind}{}", self.counter)
    }

    fn node(&mut self, n: &LaidOut<'_>, parent_scope: &str) -> std::fmt::Result {
        let scope = n.node.scope.as_deref().unwrap_or(parent_scope).to_string();
        let style = &n.node.style;
        let r = n.rect;

        self.body.push_str("<g");
        if style.opacity < 1.0 {
            write!(self.body, r#" opacity="{}""#, fmt_num(f64::from(style.opacity)))?;
        }
        if let Some(mode) = blend_css(style.blend) {
            write!(self.body, r#" style="mix-blend-mode:{mode}""#)?;
        }
        self.body.push('>');

        if self.opts.animations
            && let Some(anim) = style.animation
        {
            self.animation(anim)?;
        }

        let radius = f64::from(style.radius)
            .min(r.width() / 2.0)
            .min(r.height() / 2.0)
            .max(0.0);

        for s in style.shadows.iter().filter(|s| !s.inset) {
            self.outer_shadow(r, radius, s, &scope)?;
        }

        let flip = flip_transform(style.flip, r);
        if let Some(t) = &flip {
            write!(self.body, r#"<g transform="{t}">"#)?;
        }
        for paint in &style.background {
            self.paint(r, radius, paint, &scope)?;
        }
        let insets: Vec<&Shadow> = style.shadows.iter().filter(|s| s.inset).collect();
        if !insets.is_empty() {
            let clip = self.clip_def(r, radius, &scope)?;
            write!(self.body, r#"<g clip-path="url(#{clip})">"#)?;
            for s in insets {
                self.inset_shadow(r, radius, s, &scope)?;
            }
            self.body.push_str("</g>");
        }
        if let Some(b) = style.border {
            self.border(r, radius, f64::from(b.width), b.color, b.line)?;
        }
        match &n.node.tag {
            Tag::Box => {}
            Tag::Text(text) => self.text(n, text)?,
            Tag::Vector(asset) => {
                write!(
                    self.body,
                    r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">{}</svg>"#,
                    fmt_num(r.x0),
                    fmt_num(r.y0),
                    fmt_num(r.width()),
                    fmt_num(r.height()),
                    fmt_num(asset.width),
                    fmt_num(asset.height),
                    asset.body
                )?;
            }
        }
        if flip.is_some() {
            self.body.push_str("</g>");
        }

        if !n.children.is_empty() {
            let clipped = if style.clip {
                let clip = self.clip_def(r, radius, &scope)?;
                write!(self.body, r#"<g clip-path="url(#{clip})">"#)?;
                true
            } else {
                false
            };
            for c in &n.children {
                self.node(c, &scope)?;
            }
            if clipped {
                self.body.push_str("</g>");
            }
        }

        self.body.push_str("</g>");
        Ok(())
    }

    fn animation(&mut self, anim: Animation) -> std::fmt::Result {
        match anim {
            Animation::Breathe { secs } => write!(
                self.body,
                r#"<animate attributeName="opacity" values="1;0.82;1" dur="{}s" repeatCount="indefinite"/>"#,
                fmt_num(secs)
            ),
            Animation::Sweep { secs, distance } => write!(
                self.body,
                r#"<animateTransform attributeName="transform" type="translate" from="0 0" to="{} 0" dur="{}s" repeatCount="indefinite"/>"#,
                fmt_num(f64::from(distance)),
                fmt_num(secs)
            ),
        }
    }

    fn outer_shadow(&mut self, r: Rect, radius: f64, s: &Shadow, scope: &str) -> std::fmt::Result {
        let spread = f64::from(s.spread);
        let (dx, dy) = (f64::from(s.dx), f64::from(s.dy));
        let sr = Rect::new(
            r.x0 - spread + dx,
            r.y0 - spread + dy,
            r.x1 + spread + dx,
            r.y1 + spread + dy,
        );
        let filter = self.blur_def(f64::from(s.blur), scope)?;
        rect_open(&mut self.body, sr, radius + spread.max(0.0))?;
        fill_attrs(&mut self.body, s.color)?;
        if let Some(f) = filter {
            write!(self.body, r#" filter="url(#{f})""#)?;
        }
        self.body.push_str("/>");
        Ok(())
    }

    fn inset_shadow(&mut self, r: Rect, radius: f64, s: &Shadow, scope: &str) -> std::fmt::Result {
        let blur = f64::from(s.blur);
        let spread = f64::from(s.spread);
        let width = (blur + spread).max(1.0) * 2.0;
        let sr = Rect::new(
            r.x0 + f64::from(s.dx),
            r.y0 + f64::from(s.dy),
            r.x1 + f64::from(s.dx),
            r.y1 + f64::from(s.dy),
        );
        let filter = self.blur_def(blur, scope)?;
        rect_open(&mut self.body, sr, radius)?;
        write!(
            self.body,
            r#" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            s.color.to_hex_rgb(),
            fmt_num(s.color.opacity()),
            fmt_num(width)
        )?;
        if let Some(f) = filter {
            write!(self.body, r#" filter="url(#{f})""#)?;
        }
        self.body.push_str("/>");
        Ok(())
    }

    fn blur_def(&mut self, blur: f64, scope: &str) -> Result<Option<String>, std::fmt::Error> {
        if blur <= 0.0 {
            return Ok(None);
        }
        let id = self.next_id(scope, "blur");
        write!(
            self.defs,
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
            fmt_num(blur / 2.0)
        )?;
        Ok(Some(id))
    }

    fn clip_def(&mut self, r: Rect, radius: f64, scope: &str) -> Result<String, std::fmt::Error> {
        let id = self.next_id(scope, "clip");
        write!(self.defs, r#"<clipPath id="{id}">"#)?;
        rect_open(&mut self.defs, r, radius)?;
        self.defs.push_str("/></clipPath>");
        Ok(id)
    }

    fn paint(&mut self, r: Rect, radius: f64, paint: &Paint, scope: &str) -> std::fmt::Result {
        match paint {
            Paint::Solid(c) => {
                rect_open(&mut self.body, r, radius)?;
                fill_attrs(&mut self.body, *c)?;
            }
            Paint::Linear(g) => {
                let id = self.next_id(scope, "lin");
                let (x1, y1, x2, y2) = css_angle_vector(g.angle_deg);
                write!(
                    self.defs,
                    r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    fmt_num(x1),
                    fmt_num(y1),
                    fmt_num(x2),
                    fmt_num(y2)
                )?;
                stops(&mut self.defs, &g.stops)?;
                self.defs.push_str("</linearGradient>");
                rect_open(&mut self.body, r, radius)?;
                write!(self.body, r#" fill="url(#{id})""#)?;
            }
            Paint::Radial(s) => {
                let id = self.next_id(scope, "rad");
                write!(
                    self.defs,
                    r#"<radialGradient id="{id}" cx="0.5" cy="0.5" r="0.5">"#
                )?;
                stops(&mut self.defs, s)?;
                self.defs.push_str("</radialGradient>");
                rect_open(&mut self.body, r, radius)?;
                write!(self.body, r#" fill="url(#{id})""#)?;
            }
            Paint::Pattern { asset, opacity } => {
                let id = format!("{scope}-{}", asset.id);
                if self.patterns.insert(id.clone()) {
                    self.defs.push_str(&asset.to_pattern_def(&id));
                }
                rect_open(&mut self.body, r, radius)?;
                write!(self.body, r#" fill="url(#{id})""#)?;
                if *opacity < 1.0 {
                    write!(self.body, r#" opacity="{}""#, fmt_num(f64::from(*opacity)))?;
                }
            }
        }
        self.body.push_str("/>");
        Ok(())
    }

    fn border(
        &mut self,
        r: Rect,
        radius: f64,
        width: f64,
        color: Color,
        line: Line,
    ) -> std::fmt::Result {
        if width <= 0.0 {
            return Ok(());
        }
        let stroke = |w: &mut Self, inset: f64, sw: f64, dash: Option<String>| -> std::fmt::Result {
            let sr = Rect::new(r.x0 + inset, r.y0 + inset, r.x1 - inset, r.y1 - inset);
            rect_open(&mut w.body, sr, (radius - inset).max(0.0))?;
            write!(
                w.body,
                r#" fill="none" stroke="{}" stroke-width="{}""#,
                color.to_hex_rgb(),
                fmt_num(sw)
            )?;
            if color.a < 255 {
                write!(w.body, r#" stroke-opacity="{}""#, fmt_num(color.opacity()))?;
            }
            if let Some(d) = dash {
                write!(w.body, r#" stroke-dasharray="{d}""#)?;
            }
            w.body.push_str("/>");
            Ok(())
        };
        match line {
            Line::Solid => stroke(self, width / 2.0, width, None),
            Line::Dashed => stroke(
                self,
                width / 2.0,
                width,
                Some(format!("{} {}", fmt_num(width * 3.0), fmt_num(width * 2.0))),
            ),
            Line::Double => {
                let third = width / 3.0;
                stroke(self, third / 2.0, third, None)?;
                stroke(self, width - third / 2.0, third, None)
            }
        }
    }

    fn text(&mut self, n: &LaidOut<'_>, text: &str) -> std::fmt::Result {
        let Some(font) = &n.node.style.font else {
            return Ok(());
        };
        let c = n.rect.center();
        write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" font-weight="{}" fill="{}""#,
            fmt_num(c.x),
            fmt_num(c.y),
            escape_xml(&font_family_list(&font.families)),
            fmt_num(f64::from(font.size)),
            font.weight,
            font.color.to_hex_rgb()
        )?;
        if font.color.a < 255 {
            write!(self.body, r#" fill-opacity="{}""#, fmt_num(font.color.opacity()))?;
        }
        write!(self.body, ">{}</text>", escape_xml(text))
    }
}

/// Writes an unterminated `<rect` opening so callers can append paint attributes.
fn rect_open(out: &mut String, r: Rect, radius: f64) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        fmt_num(r.x0),
        fmt_num(r.y0),
        fmt_num(r.width().max(0.0)),
        fmt_num(r.height().max(0.0))
    )?;
    if radius > 0.0 {
        write!(out, r#" rx="{}""#, fmt_num(radius))?;
    }
    Ok(())
}

fn fill_attrs(out: &mut String, c: Color) -> std::fmt::Result {
    write!(out, r#" fill="{}""#, c.to_hex_rgb())?;
    if c.a < 255 {
        write!(out, r#" fill-opacity="{}""#, fmt_num(c.opacity()))?;
    }
    Ok(())
}

fn stops(out: &mut String, stops: &[GradientStop]) -> std::fmt::Result {
    for s in stops {
        write!(
            out,
            r#"<stop offset="{}" stop-color="{}""#,
            fmt_num(s.offset),
            s.color.to_hex_rgb()
        )?;
        if s.color.a < 255 {
            write!(out, r#" stop-opacity="{}""#, fmt_num(s.color.opacity()))?;
        }
        out.push_str("/>");
    }
    Ok(())
}

/// Gradient vector in bounding-box units for a CSS angle (0 = to top, clockwise).
fn css_angle_vector(angle_deg: i32) -> (f64, f64, f64, f64) {
    let a = f64::from(angle_deg.rem_euclid(360)).to_radians();
    let dx = a.sin() / 2.0;
    let dy = -a.cos() / 2.0;
    (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
}

fn flip_transform(flip: Flip, r: Rect) -> Option<String> {
    if flip == Flip::NONE {
        return None;
    }
    let (sx, tx) = if flip.x { (-1.0, r.x0 + r.x1) } else { (1.0, 0.0) };
    let (sy, ty) = if flip.y { (-1.0, r.y0 + r.y1) } else { (1.0, 0.0) };
    Some(format!(
        "matrix({} 0 0 {} {} {})",
        fmt_num(sx),
        fmt_num(sy),
        fmt_num(tx),
        fmt_num(ty)
    ))
}

fn blend_css(blend: Blend) -> Option<&'static str> {
    match blend {
        Blend::Normal => None,
        Blend::Multiply => Some("multiply"),
        Blend::Screen => Some("screen"),
        Blend::Overlay => Some("overlay"),
        Blend::SoftLight => Some("soft-light"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/svg.rs"]
mod tests;
