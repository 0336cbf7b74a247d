//! Number formatting for the dashboard. All functions are total over finite input.

/// Shown in place of a value that is not known.
pub const PLACEHOLDER: &str = "—";

/// Dollar amount with an M/K suffix above the thresholds.
///
/// `12_345_678.0` -> `$12.35M`, `4_560.0` -> `$4.56K`, `12.5` -> `$12.50`.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

/// Token price without the currency symbol.
///
/// Below 0.0001 uses exponential notation since fixed point loses every
/// significant digit there.
pub fn format_price(value: f64) -> String {
    if value < 0.0001 {
        format!("{:.2e}", value)
    } else if value < 0.01 {
        format!("{:.6}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// 24h change as an arrow plus absolute percentage, e.g. `↑ 3.10%`.
pub fn format_change(change: f64) -> String {
    let arrow = if change >= 0.0 { '↑' } else { '↓' };
    format!("{} {:.2}%", arrow, change.abs())
}

/// Token count in billions, no decimals, e.g. `10B`.
pub fn format_billions(value: f64) -> String {
    format!("{:.0}B", value / 1_000_000_000.0)
}

/// Format an optional value, falling back to the placeholder.
pub fn or_placeholder(value: Option<f64>, f: impl Fn(f64) -> String) -> String {
    value.map(f).unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_small_values() {
        for v in [0.0, 0.004, 1.0, 12.5, 999.99, 999.994] {
            let s = format_magnitude(v);
            assert!(s.starts_with('$'), "{}", s);
            assert!(!s.ends_with('M') && !s.ends_with('K'), "{}", s);
            let decimals = s.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 2, "{}", s);
        }
        assert_eq!(format_magnitude(12.5), "$12.50");
    }

    #[test]
    fn test_magnitude_thousands() {
        assert_eq!(format_magnitude(1_000.0), "$1.00K");
        assert_eq!(format_magnitude(4_560.0), "$4.56K");
        assert_eq!(format_magnitude(999_000.0), "$999.00K");
    }

    #[test]
    fn test_magnitude_millions() {
        for v in [1_000_000.0, 12_345_678.0, 9.9e12] {
            assert!(format_magnitude(v).ends_with('M'));
        }
        assert_eq!(format_magnitude(12_345_678.0), "$12.35M");
    }

    #[test]
    fn test_price_exponential() {
        let s = format_price(0.000005);
        assert!(s.contains('e'), "{}", s);
        assert_eq!(s, "5.00e-6");
        assert_eq!(format_price(0.0), "0.00e0");
    }

    #[test]
    fn test_price_six_decimals() {
        assert_eq!(format_price(0.005), "0.005000");
        assert_eq!(format_price(0.0001), "0.000100");
    }

    #[test]
    fn test_price_four_decimals() {
        assert_eq!(format_price(1.23456789), "1.2346");
        assert_eq!(format_price(0.01), "0.0100");
    }

    #[test]
    fn test_change() {
        assert_eq!(format_change(3.1), "↑ 3.10%");
        assert_eq!(format_change(0.0), "↑ 0.00%");
        assert_eq!(format_change(-12.5), "↓ 12.50%");
    }

    #[test]
    fn test_billions() {
        assert_eq!(format_billions(10_000_000_000.0), "10B");
        assert_eq!(format_billions(2_400_000_000.0), "2B");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(or_placeholder(None, format_magnitude), PLACEHOLDER);
        assert_eq!(or_placeholder(Some(5.0), format_magnitude), "$5.00");
    }
}
