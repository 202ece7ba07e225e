//! Number formatting for the mini-app UI.
//!
//! Address truncation lives in [`shared::utils`]; these helpers cover coin
//! and TON amounts.

/// Format a number with commas (e.g. 1234567.89 -> "1,234,567.89").
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format a TON amount with 2 decimal places, as shown next to balances.
pub fn format_ton(amount: f64) -> String {
    format_number(amount, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn test_format_ton() {
        assert_eq!(format_ton(2_450_000.0), "2,450,000.00");
        assert_eq!(format_ton(0.5), "0.50");
    }
}
