const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];
const SI_SIGNIFICANT_DIGITS: i32 = 6;

/// Formats an axis value with an SI prefix and no trailing zeros.
///
/// `12000` becomes `"12k"`, `1_500_000` becomes `"1.5M"` and `0.5` becomes
/// `"500m"`. Values are rounded to six significant digits before the prefix
/// is chosen, so `999_999.7` renders as `"1M"`.
#[must_use]
pub fn format_si_abbreviated(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = round_significant(value.abs(), SI_SIGNIFICANT_DIGITS);
    let exponent = rounded.log10().floor() as i32;
    let prefix_power = exponent.div_euclid(3).clamp(-8, 8);
    let scaled = rounded / 10_f64.powi(prefix_power * 3);

    let decimals = (SI_SIGNIFICANT_DIGITS - 1 - (exponent - prefix_power * 3)).max(0) as usize;
    let mut digits = format!("{scaled:.decimals$}");
    trim_trailing_zeros(&mut digits);

    let prefix = SI_PREFIXES[(prefix_power + 8) as usize];
    format!("{sign}{digits}{prefix}")
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let exponent = value.log10().floor() as i32;
    let factor = 10_f64.powi(digits - 1 - exponent);
    (value * factor).round() / factor
}

fn trim_trailing_zeros(digits: &mut String) {
    if digits.contains('.') {
        let trimmed = digits.trim_end_matches('0').trim_end_matches('.').len();
        digits.truncate(trimmed);
    }
}
