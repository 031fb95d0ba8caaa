use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// E.164-like: optional `+`, 2-15 digits, first digit 1-9
    static ref MEMBER_PHONE: Regex = Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap();
}

/// Whether a member phone number is acceptable for delegation
pub fn is_valid_member_phone(phone_number: &str) -> bool {
    MEMBER_PHONE.is_match(phone_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_member_phone("+15551234567"));
        assert!(is_valid_member_phone("15551234567"));
        assert!(is_valid_member_phone("+49"));
        assert!(is_valid_member_phone("12"));
        // 15 digits is the ceiling
        assert!(is_valid_member_phone("+123456789012345"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_member_phone("abc"));
        assert!(!is_valid_member_phone(""));
        assert!(!is_valid_member_phone("+"));
        // single digit is too short
        assert!(!is_valid_member_phone("7"));
        // leading zero
        assert!(!is_valid_member_phone("+0551234567"));
        // 16 digits is too long
        assert!(!is_valid_member_phone("+1234567890123456"));
        // separators are not tolerated
        assert!(!is_valid_member_phone("+1 555 123 4567"));
        assert!(!is_valid_member_phone("+1-555-123-4567"));
    }
}
