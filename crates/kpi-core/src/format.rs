// File: crates/kpi-core/src/format.rs
// Summary: Missing-safe number formatting for card values.

/// Shown in place of any absent or non-numeric value.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Fixed-decimal number formatter with thousands grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: usize,
    pub decimal_point: &'static str,
    pub thousands_sep: &'static str,
}

impl NumberFormat {
    /// One decimal, space-grouped thousands.
    pub const KPI: NumberFormat = NumberFormat { decimals: 1, decimal_point: ".", thousands_sep: " " };

    /// Format `value`, or the placeholder when it is NaN.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return PLACEHOLDER.to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "\u{221e}".to_string() } else { "-\u{221e}".to_string() };
        }

        let scale = 10f64.powi(self.decimals as i32);
        // f64::round is half away from zero; huge values have no fraction to round
        let scaled = value * scale;
        let mut rounded = if scaled.is_finite() { scaled.round() / scale } else { value };
        if rounded == 0.0 {
            rounded = 0.0; // drop the sign of -0.0
        }

        let fixed = format!("{:.*}", self.decimals, rounded.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + 4);
        if rounded < 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part, self.thousands_sep));
        if let Some(f) = frac_part {
            out.push_str(self.decimal_point);
            out.push_str(f);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self { Self::KPI }
}

fn group_thousands(digits: &str, sep: &str) -> String {
    if sep.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    let lead = digits.len() % 3;
    if lead > 0 {
        out.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push_str(sep);
        }
        // digits are ASCII
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}

/// Card formatter: one decimal place, or the placeholder glyph.
pub fn format_value(value: f64) -> String {
    NumberFormat::KPI.format(value)
}

/// Same as [`format_value`] for an optional value; `None` is the placeholder.
pub fn format_metric(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| PLACEHOLDER.to_string())
}
