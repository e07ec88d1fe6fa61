//! `%g`-style number formatting for data labels.
//!
//! `plot(1)` labels carry a fixed number of significant digits with trailing
//! zeros dropped. Exponent form (`1.23e+04`) kicks in when the decimal
//! exponent is below -4 or at least the digit count, so `1000` at three
//! digits prints as `1e+03` and `0.0001` stays fixed.

use std::fmt::{self, Write};

/// Format `v` with `digits` significant digits (at least one).
#[must_use]
pub fn format_sig(v: f64, digits: usize) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_sig(&mut s, v, digits);
    s
}

pub fn write_sig<W: Write>(out: &mut W, v: f64, digits: usize) -> fmt::Result {
    let digits = digits.max(1);
    if v.is_nan() {
        return out.write_str("NaN");
    }
    if v.is_infinite() {
        return out.write_str(if v > 0.0 { "+Inf" } else { "-Inf" });
    }
    if v.is_sign_negative() {
        out.write_char('-')?;
    }
    if v == 0.0 {
        return out.write_char('0');
    }

    // Let the standard formatter do the rounding: "d.ddde[-]x"
    let sci = format!("{:.*e}", digits - 1, v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or_default();

    let mut sig: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let kept = sig.trim_end_matches('0').len().max(1);
    sig.truncate(kept);

    let max_exp = i32::try_from(digits).unwrap_or(i32::MAX);
    if exp < -4 || exp >= max_exp {
        let (first, rest) = sig.split_at(1);
        out.write_str(first)?;
        if !rest.is_empty() {
            out.write_char('.')?;
            out.write_str(rest)?;
        }
        let sign = if exp < 0 { '-' } else { '+' };
        return write!(out, "e{sign}{:02}", exp.unsigned_abs());
    }

    if let Ok(int_len) = usize::try_from(exp + 1) {
        // int_len >= 1: digits straddle (or precede) the decimal point
        if sig.len() <= int_len {
            out.write_str(&sig)?;
            for _ in sig.len()..int_len {
                out.write_char('0')?;
            }
        } else {
            let (int, frac) = sig.split_at(int_len);
            write!(out, "{int}.{frac}")?;
        }
    } else {
        out.write_str("0.")?;
        for _ in 0..(-exp - 1) {
            out.write_char('0')?;
        }
        out.write_str(&sig)?;
    }
    Ok(())
}
