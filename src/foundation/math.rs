/// Round half up (`floor(x + 0.5)`), matching the rounding used by the seed derivation.
///
/// `f64::round` rounds half away from zero, which differs for negative halves (`-2.5`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// [`round_half_up`] as an integer.
pub(crate) fn round_i32(x: f64) -> i32 {
    round_half_up(x) as i32
}

/// Round to two decimals for values that end up in markup or JSON.
pub(crate) fn round2(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}

/// Format a length for SVG attributes: integers print without a fraction, others with at most
/// two decimals.
pub(crate) fn fmt_num(x: f64) -> String {
    let r = round2(x);
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.2}");
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
