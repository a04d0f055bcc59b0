//! Fixed scientific-notation field formatting.
//!
//! Downstream readers of the detection files expect the C++ iostream
//! rendering (`std::scientific` with `std::setprecision(5)`): five digits
//! after the decimal point and a signed two-digit exponent, e.g.
//! `-2.04560e+01`.

/// Format `value` in fixed scientific notation with 5 fractional digits.
pub fn sci5(value: f64) -> String {
    let s = format!("{value:.5e}");
    // Rust renders the exponent bare ("1.00000e-3"); pad it to the two-digit
    // signed form.
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => s,
    }
}
