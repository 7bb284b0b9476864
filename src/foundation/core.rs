use crate::foundation::error::{InkError, InkResult};
use crate::foundation::math::round_half_up;

pub use kurbo::Rect;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest accepted edge length.
    pub const MAX_DIM: u32 = 8_192;

    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> InkResult<Self> {
        if width == 0 || height == 0 {
            return Err(InkError::validation("canvas width/height must be > 0"));
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(InkError::validation(format!(
                "canvas too large: {width}x{height} (max {0}x{0})",
                Self::MAX_DIM
            )));
        }
        Ok(Self { width, height })
    }

    /// Full-canvas rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 900,
            height: 1200,
        }
    }
}

/// Straight-alpha sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. Only used for the authored frame palettes.
    pub fn hex(s: &str) -> InkResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let byte = |i: usize| {
            s.get(i..i + 2)
                .and_then(|p| u8::from_str_radix(p, 16).ok())
                .ok_or_else(|| InkError::validation(format!("invalid hex color '#{s}'")))
        };
        match s.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(InkError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            )),
        }
    }

    /// Same color with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = round_half_up(alpha.clamp(0.0, 1.0) * 255.0) as u8;
        Self { a, ..self }
    }

    /// Alpha as a fraction, rounded to three decimals for stable markup.
    pub fn opacity(self) -> f64 {
        (f64::from(self.a) / 255.0 * 1000.0).round() / 1000.0
    }

    /// `#rrggbb` without alpha; pair with [`Color::opacity`] in SVG attributes.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend towards `other` by `t` in `[0, 1]`.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            round_half_up(f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Integer HSL triple: hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: i32,
    /// Saturation percent.
    pub s: i32,
    /// Lightness percent.
    pub l: i32,
}

impl Hsl {
    /// Construct with hue wrapped into `[0, 360)` and s/l clamped into `[0, 100]`.
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360),
            s: s.clamp(0, 100),
            l: l.clamp(0, 100),
        }
    }

    /// Shift lightness by `delta` percent, clamped.
    pub fn lighten(self, delta: i32) -> Self {
        Self::new(self.h, self.s, self.l + delta)
    }

    /// Shift saturation by `delta` percent, clamped.
    pub fn saturate(self, delta: i32) -> Self {
        Self::new(self.h, self.s + delta, self.l)
    }

    /// Convert to opaque sRGB.
    pub fn to_color(self) -> Color {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        if self.s == 0 {
            let v = to_u8(l);
            return Color::rgb(v, v, v);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Color::rgb(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Convert to sRGB with alpha.
    pub fn to_color_alpha(self, alpha: f64) -> Color {
        self.to_color().with_alpha(alpha)
    }
}

fn to_u8(x: f64) -> u8 {
    round_half_up(x.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
