//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: u64 = 1024;

/// Formats a byte count the way the file browser displays it.
///
/// Zero is the special case `"0B"`. Anything else is scaled into the
/// largest unit that keeps the value at or above 1, rounded to two
/// decimals (exact halves go to the even digit), and always printed
/// with at least one decimal digit: `1024` becomes `"1.0 KB"`, `1536`
/// becomes `"1.5 KB"`, `512` becomes `"512.0 B"`. Values past the
/// terabyte range stay in `TB`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < UNITS.len() && bytes / scale >= STEP {
        scale *= STEP;
        unit += 1;
    }

    let value = ((bytes as f64 / scale as f64) * 100.0).round_ties_even() / 100.0;
    format!("{} {}", decimal(value), UNITS[unit])
}

fn decimal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0B");
    }

    #[test]
    fn test_plain_bytes_keep_a_decimal() {
        assert_eq!(format_size(1), "1.0 B");
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1 << 30), "1.0 GB");
        assert_eq!(format_size(1 << 40), "1.0 TB");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.205078...
        assert_eq!(format_size(1234), "1.21 KB");
        // 5_000_000 / 1024^2 = 4.768371...
        assert_eq!(format_size(5_000_000), "4.77 MB");
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        // 1152 / 1024 = 1.125, 1664 / 1024 = 1.625
        assert_eq!(format_size(1152), "1.12 KB");
        assert_eq!(format_size(1664), "1.62 KB");
        // 1408 / 1024 = 1.375
        assert_eq!(format_size(1408), "1.38 KB");
    }

    #[test]
    fn test_huge_values_stay_in_terabytes() {
        assert_eq!(format_size(2048 << 40), "2048.0 TB");
    }
}
