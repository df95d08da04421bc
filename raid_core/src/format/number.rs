//! Number-to-text conversions matching the browser's output
//!
//! Shared links and on-screen values were historically produced by a web
//! client. These helpers render `f64` exactly the way that client did so the
//! same counters always produce the same text.

/// Enough fraction digits to print any finite `f64` without rounding
const EXACT_DIGITS: usize = 1100;
/// Largest fraction-digit count [`to_fixed`] honours
pub const MAX_FIXED_DECIMALS: usize = 100;

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Shortest round-trip text for `value`
///
/// Plain decimal notation for magnitudes in `[1e-6, 1e21)`, exponential
/// (`1e+21`, `1.5e-7`) outside it. Negative zero prints as `0`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    let (digits, exponent) = shortest_digits(value.abs());
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp = n - 1;
        let exp_sign = if exp >= 0 { "+" } else { "-" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exp.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Significant digits and decimal exponent of the shortest round-trip form
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` gives the shortest digits as `d.ddde<exp>`
    let (digits, exponent) = split_scientific(&format!("{:e}", value));
    match even_tie_digits(value, &digits, exponent) {
        Some(even) => (even, exponent),
        None => (digits, exponent),
    }
}

fn split_scientific(sci: &str) -> (String, i32) {
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci, 0),
    };
    (mantissa.chars().filter(|c| *c != '.').collect(), exponent)
}

/// When the value sits exactly halfway between two equally short candidates,
/// `{:e}` keeps the upper one. Returns the lower candidate if its last digit
/// is the even one and it still reads back as `value`.
fn even_tie_digits(value: f64, digits: &str, exponent: i32) -> Option<String> {
    let last = *digits.as_bytes().last()?;
    if (last - b'0') % 2 == 0 {
        return None;
    }

    let mut lower = digits[..digits.len() - 1].to_string();
    lower.push(char::from(last - 1));

    let (exact, exact_exponent) = split_scientific(&format!("{:.*e}", EXACT_DIGITS, value));
    let exact = exact.trim_end_matches('0');
    if exact_exponent != exponent || exact.len() != lower.len() + 1 {
        return None;
    }
    if !exact.starts_with(lower.as_str()) || !exact.ends_with('5') {
        return None;
    }

    let candidate = format!("{}e{}", lower, exponent - (lower.len() as i32 - 1));
    match candidate.parse::<f64>() {
        Ok(parsed) if parsed == value => Some(lower),
        _ => None,
    }
}

/// Fixed-point text with exactly `decimals` fraction digits
///
/// Rounds on the exact binary value, with exact ties going away from zero,
/// so `0.25` becomes `0.3` while `1.005` (stored just below) becomes `1.00`.
/// Magnitudes of `1e21` and above fall back to [`number_to_string`].
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }

    let decimals = decimals.min(MAX_FIXED_DECIMALS);
    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - decimals;
    let text = String::from_utf8_lossy(&digits);
    if decimals == 0 {
        format!("{}{}", sign, text)
    } else {
        format!("{}{}.{}", sign, &text[..int_len], &text[int_len..])
    }
}
