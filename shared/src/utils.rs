//! # Shared Utility Functions
//!
//! Display helpers used by the mini-app client (and any future server-side
//! rendering of the same data).
//!
//! - [`format_address`] - Format a TON address with ellipsis
//! - [`truncate_address`] - `format_address` with default lengths
//! - [`format_coins`] - Thousands-separated coin amounts

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is. User-friendly TON addresses are ASCII (base64url), so byte slicing
/// is safe here.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "EQDrjaLahLkMB-hMCmkzOyBuHJ139ZUYmPHu6RRBKnbdLIYI";
/// assert_eq!(format_address(addr, 6, 4), "EQDrja...LIYI");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix and
/// 4-character suffix used across the UI.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format an integer coin amount with comma separators
/// (e.g. `5430` -> `"5,430"`).
pub fn format_coins(coins: u64) -> String {
    let digits = coins.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "EQDrjaLahLkMB-hMCmkzOyBuHJ139ZUYmPHu6RRBKnbdLIYI";
        assert_eq!(format_address(addr, 6, 4), "EQDrja...LIYI");
        assert_eq!(format_address(addr, 4, 4), "EQDr...LIYI");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "EQDrjaLahLkMB-hMCmkzOyBuHJ139ZUYmPHu6RRBKnbdLIYI";
        assert_eq!(truncate_address(addr), "EQDrja...LIYI");
    }

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(0), "0");
        assert_eq!(format_coins(999), "999");
        assert_eq!(format_coins(5430), "5,430");
        assert_eq!(format_coins(2_450_000), "2,450,000");
    }
}
