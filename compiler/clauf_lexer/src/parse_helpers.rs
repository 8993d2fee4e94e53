//! Numeric Parsing Helpers
//!
//! Zero-allocation parsing of integer literal digits with `'` separators.

/// Parse `digits` in `radix`, skipping `'` separators.
///
/// Returns `None` on overflow of `u64` or on a digit outside `radix`.
#[inline]
pub(crate) fn parse_int_skip_separators(digits: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in digits.chars() {
        if c == '\'' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_int_skip_separators("16", 10), Some(16));
        assert_eq!(parse_int_skip_separators("1'000'000", 10), Some(1_000_000));
    }

    #[test]
    fn test_other_bases() {
        assert_eq!(parse_int_skip_separators("10", 16), Some(16));
        assert_eq!(parse_int_skip_separators("dead'BEEF", 16), Some(0xdead_beef));
        assert_eq!(parse_int_skip_separators("1'0", 2), Some(2));
        assert_eq!(parse_int_skip_separators("010", 8), Some(8));
        assert_eq!(parse_int_skip_separators("0", 8), Some(0));
    }

    #[test]
    fn test_u64_boundary() {
        assert_eq!(
            parse_int_skip_separators("18446744073709551615", 10),
            Some(u64::MAX)
        );
        assert_eq!(parse_int_skip_separators("18446744073709551616", 10), None);
        assert_eq!(
            parse_int_skip_separators("1'0000'0000'0000'0000", 16),
            None
        );
    }

    #[test]
    fn test_digit_outside_radix() {
        assert_eq!(parse_int_skip_separators("19", 8), None);
    }
}
