//! Account number generation with a Luhn check digit.
//!
//! Format: `[type:2][currency:3][timestamp tail:10][random:3][check:1]`,
//! 19 characters total. The alphanumeric prefix participates in the
//! checksum through a letter-to-digit mapping, so a corrupted type or
//! currency code fails validation just like a corrupted digit.

use jiff::Timestamp;
use rand::Rng;

/// Total length of a generated account number
pub const ACCOUNT_NUMBER_LENGTH: usize = 19;

/// Compute the Luhn check digit over an alphanumeric base.
///
/// Digits contribute their value; letters contribute their alphabet
/// position (A=1 .. Z=26) reduced mod 10 before the alternating
/// doubling. Processing runs right to left; the rightmost base digit
/// is never doubled, doubling starts at the second position from the
/// right.
pub fn check_digit(base: &str) -> u32 {
    let mut sum = 0u32;
    let mut double = false;

    for c in base.chars().rev() {
        let mut digit = if let Some(d) = c.to_digit(10) {
            d
        } else {
            let letter_value = (c.to_ascii_uppercase() as u32).wrapping_sub('A' as u32) + 1;
            letter_value % 10
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    (10 - (sum % 10)) % 10
}

/// Normalize a type code to exactly two uppercase characters, padding
/// short codes with `0`
fn type_prefix(type_code: &str) -> String {
    let mut prefix: String = type_code.to_uppercase().chars().take(2).collect();
    while prefix.len() < 2 {
        prefix.push('0');
    }
    prefix
}

/// Build an account number from fully specified inputs.
///
/// Split out from [`generate`] so tests can fix the clock and the
/// random component.
pub fn generate_with(type_code: &str, currency_code: &str, millis: i64, random: u16) -> String {
    let prefix = type_prefix(type_code);
    let currency = currency_code.to_uppercase();

    // Last 10 digits of the epoch-millisecond timestamp
    let millis_str = millis.to_string();
    let tail_start = millis_str.len().saturating_sub(10);
    let timestamp_tail = format!("{:0>10}", &millis_str[tail_start..]);

    let base = format!("{prefix}{currency}{timestamp_tail}{:03}", random % 1000);
    let check = check_digit(&base);
    format!("{base}{check}")
}

/// Generate a fresh account number for the given account type and
/// currency codes
pub fn generate(type_code: &str, currency_code: &str) -> String {
    let millis = Timestamp::now().as_millisecond();
    let random = rand::rng().random_range(0..1000u16);
    generate_with(type_code, currency_code, millis, random)
}

/// Check that an account number is long enough and carries a matching
/// Luhn check digit
pub fn is_valid(account_number: &str) -> bool {
    if account_number.chars().count() < ACCOUNT_NUMBER_LENGTH {
        return false;
    }

    let Some(last) = account_number.chars().last() else {
        return false;
    };
    let Some(provided) = last.to_digit(10) else {
        return false;
    };

    let base: String = {
        let count = account_number.chars().count();
        account_number.chars().take(count - 1).collect()
    };
    provided == check_digit(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_numbers_have_the_fixed_shape() {
        let n = generate_with("SA", "USD", 1_738_521_234_567, 42);
        assert_eq!(n.chars().count(), ACCOUNT_NUMBER_LENGTH);
        assert!(n.starts_with("SAUSD"));
        // [type:2][currency:3][tail:10][random:3][check:1]
        assert_eq!(&n[5..15], "8521234567");
        assert_eq!(&n[15..18], "042");
    }

    #[test]
    fn check_digit_matches_fixed_vectors() {
        // Rightmost digit is not doubled: 8 + (1*2) = 10 → check 0
        assert_eq!(check_digit("18"), 0);
        // Full 18-character base as produced by generate_with
        assert_eq!(check_digit("SAUSD8521234567042"), 4);
        let n = generate_with("SA", "USD", 1_738_521_234_567, 42);
        assert_eq!(n, "SAUSD85212345670424");
    }

    #[test]
    fn generated_numbers_validate() {
        let n = generate_with("SA", "USD", 1_738_521_234_567, 567);
        assert!(is_valid(&n));
        let n = generate_with("ch", "eur", 1_700_000_000_001, 0);
        assert!(n.starts_with("CHEUR"));
        assert!(is_valid(&n));
    }

    #[test]
    fn one_character_type_codes_are_zero_padded() {
        let n = generate_with("X", "COP", 1_738_521_234_567, 999);
        assert!(n.starts_with("X0COP"));
        assert_eq!(n.chars().count(), ACCOUNT_NUMBER_LENGTH);
        assert!(is_valid(&n));
    }

    #[test]
    fn long_type_codes_are_truncated_to_two_characters() {
        let n = generate_with("SAVINGS", "USD", 1_738_521_234_567, 1);
        assert!(n.starts_with("SAUSD"));
    }

    #[test]
    fn corrupting_any_position_breaks_validation() {
        let n = generate_with("SA", "USD", 1_738_521_234_567, 314);
        assert!(is_valid(&n));

        // Flip one digit in the numeric body
        let mut corrupted: Vec<char> = n.chars().collect();
        let d = corrupted[10].to_digit(10).unwrap();
        corrupted[10] = char::from_digit((d + 1) % 10, 10).unwrap();
        let corrupted: String = corrupted.into_iter().collect();
        assert!(!is_valid(&corrupted));

        // Swap a letter in the prefix
        let swapped = n.replacen("SA", "SB", 1);
        assert!(!is_valid(&swapped));
    }

    #[test]
    fn short_or_non_digit_checked_numbers_are_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("SAUSD12345"));
        let mut n = generate_with("SA", "USD", 1_738_521_234_567, 5);
        n.pop();
        n.push('X');
        assert!(!is_valid(&n));
    }

    #[test]
    fn check_digit_handles_all_letter_input() {
        // Letters reduce mod 10 before doubling, so the digit is total
        let d = check_digit("ABCDEFGHIJ");
        assert!(d < 10);
        let with_check = format!("ABCDEFGHIJ{d}");
        let base: String = with_check.chars().take(10).collect();
        assert_eq!(check_digit(&base), d);
    }
}
