// Numeric helpers shared by the sampler and the dataset writer.

use rand::Rng;

/// Uniform draw in `[low, high)`.
///
/// One `f64` is consumed from the generator per call (a single `next_u64`
/// under rand's standard conversion), which is what makes the per-ray draw
/// order reproducible. With `low == high` every draw returns `low`, so a
/// degenerate bounding-box axis still consumes its draw.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}

/// Format a value to 6 significant digits, C `printf` `%g` style: trailing
/// zeros stripped, scientific notation when the exponent falls outside
/// [-4, 6). Used for the dataset header's center line and progress output.
pub fn format_sig(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round to 6 significant digits first; the fixed/scientific choice uses
    // the exponent after rounding (999999.5 formats as 1e+06, not 1000000).
    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = sci.split_once('e').expect("scientific form has an exponent");
    let exp: i32 = exp.parse().expect("exponent is an integer");

    if exp < -4 || exp >= 6 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        let decimals = (5 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }
}
