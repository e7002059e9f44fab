/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FIX checksum calculation.
//!
//! The FIX checksum is the sum of all bytes preceding the `10=` field
//! modulo 256, written as three zero-padded digits.

/// Calculates the FIX checksum for the given data.
///
/// # Arguments
/// * `data` - The message bytes up to, not including, the `10=` field
///
/// # Example
/// ```
/// use fixassert_core::checksum::calculate_checksum;
///
/// let data = b"8=FIX.4.4\x019=5\x0135=0\x01";
/// assert_eq!(calculate_checksum(data), 163);
/// ```
#[inline]
#[must_use]
pub fn calculate_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Formats a checksum value as the three-digit text used in tag 10.
#[inline]
#[must_use]
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:03}")
}

/// Parses the three-digit text of tag 10.
///
/// # Returns
/// `Some(checksum)` if the text is exactly three ASCII digits below 256.
#[must_use]
pub fn parse_checksum(text: &str) -> Option<u8> {
    if text.len() != 3 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_checksum_empty() {
        assert_eq!(calculate_checksum(b""), 0);
    }

    #[test]
    fn test_calculate_checksum_wraps() {
        let data = vec![255u8; 1000];
        let expected = ((255u32 * 1000) % 256) as u8;
        assert_eq!(calculate_checksum(&data), expected);
    }

    #[test]
    fn test_calculate_checksum_heartbeat() {
        let data = b"8=FIX.4.0\x019=61\x0135=A\x0134=1\x0149=BANZAI\x0152=20200408-06:49:07\x0156=EXEC\x0198=0\x01108=30\x01";
        assert_eq!(format_checksum(calculate_checksum(data)), "015");
    }

    #[test]
    fn test_format_checksum() {
        assert_eq!(format_checksum(0), "000");
        assert_eq!(format_checksum(42), "042");
        assert_eq!(format_checksum(255), "255");
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum("000"), Some(0));
        assert_eq!(parse_checksum("042"), Some(42));
        assert_eq!(parse_checksum("255"), Some(255));
        assert_eq!(parse_checksum("256"), None);
        assert_eq!(parse_checksum("42"), None);
        assert_eq!(parse_checksum("+42"), None);
        assert_eq!(parse_checksum("12X"), None);
    }
}
