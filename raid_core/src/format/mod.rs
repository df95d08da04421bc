//! Presentation formatting for derived metrics

mod number;

pub use number::{number_to_string, round_half_up, to_fixed};

/// Default fraction digits for [`format_fixed`]
pub const DEFAULT_DECIMALS: usize = 2;

/// Abbreviate large values: `1.5M`, `500k`, `999`
///
/// One decimal place is kept for the `M`/`k` forms, with a trailing `.0`
/// dropped. Smaller values are rounded to a whole number. Non-finite input
/// renders as `"0"`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    if value >= 1_000_000.0 {
        return format!("{}M", strip_point_zero(to_fixed(value / 1_000_000.0, 1)));
    }
    if value >= 1_000.0 {
        return format!("{}k", strip_point_zero(to_fixed(value / 1_000.0, 1)));
    }
    number_to_string(round_half_up(value))
}

/// Fixed-point text with `decimals` fraction digits; non-finite renders as `"0"`
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    to_fixed(value, decimals)
}

/// [`format_fixed`] with [`DEFAULT_DECIMALS`]
pub fn format_decimal(value: f64) -> String {
    format_fixed(value, DEFAULT_DECIMALS)
}

fn strip_point_zero(text: String) -> String {
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_millions() {
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(2_000_000.0), "2M");
        assert_eq!(format_compact(12_340_000.0), "12.3M");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(format_compact(500_000.0), "500k");
        assert_eq!(format_compact(1_250.0), "1.3k");
        assert_eq!(format_compact(1_000.0), "1k");
    }

    #[test]
    fn test_compact_small() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(4.5), "5");
        assert_eq!(format_compact(0.2), "0");
        assert_eq!(format_compact(-0.4), "0");
    }

    #[test]
    fn test_compact_rounds_into_next_unit_text() {
        // 999,999 is still in the k range; one decimal rounds it up
        assert_eq!(format_compact(999_999.0), "1000k");
    }

    #[test]
    fn test_compact_non_finite() {
        assert_eq!(format_compact(f64::NAN), "0");
        assert_eq!(format_compact(f64::INFINITY), "0");
        assert_eq!(format_compact(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(format_fixed(5.0, 1), "5.0");
        assert_eq!(format_fixed(4.166666, 2), "4.17");
        assert_eq!(format_decimal(1.0 / 3.0), "0.33");
        assert_eq!(format_fixed(f64::NAN, 2), "0");
        assert_eq!(format_fixed(f64::INFINITY, 1), "0");
    }
}
