//! Result magnitude formatting.

/// Render a magnitude with up to 8 decimal digits, stripping trailing
/// zeros and a trailing decimal point (`5.00000000` displays as `5`).
pub fn format_magnitude(value: f64) -> String {
    let fixed = format!("{:.8}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
