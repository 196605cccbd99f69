//! Normalizes raw form values into the numbers a valuation needs.
//!
//! Bad input never surfaces as an error: it falls back to a default.

pub const DEFAULT_QUANTITY: u32 = 1;
pub const DEFAULT_FRIEND_COUNT: u32 = 0;

/// Quantity of units harvested; anything unusable or below one becomes 1.
pub fn parse_quantity(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(value) if value >= 1 => clamp_u32(value),
        _ => DEFAULT_QUANTITY,
    }
}

/// Friends in the server; anything unusable or negative becomes 0.
pub fn parse_friend_count(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(value) if value >= 0 => clamp_u32(value),
        _ => DEFAULT_FRIEND_COUNT,
    }
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Reads an optional sign and the leading digits, ignoring whatever follows
/// ("12abc" is 12, "3.7" is 3). Returns `None` when there are no digits.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    // Overlong input saturates instead of failing.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
