//! Format-as-you-type mask for `dd/mm/yyyy` deadline fields.
//!
//! The mask only groups digits. It never checks that the day or month is in
//! range, so `31/02/2024` is a perfectly good output.

/// Separator inserted between the day, month and year groups.
pub const SEPARATOR: char = '/';

/// Digits kept from the input; anything after the 8th is dropped.
pub const MAX_DIGITS: usize = 8;

/// Length of a fully typed date, `DD/MM/YYYY`.
pub const MAX_LEN: usize = MAX_DIGITS + 2;

/// Digit positions that are preceded by a separator (start of month, start of year).
const GROUP_STARTS: [usize; 2] = [2, 4];

/// Rewrites the raw contents of a deadline field into its masked form.
///
/// Non-digits are stripped (including separators from a previous pass, which
/// makes the mask idempotent), the first eight digits are kept, and a `/` is
/// placed before the month and before the year as soon as a digit exists
/// there.
///
/// ```
/// use taskflow::format_date_input;
///
/// assert_eq!(format_date_input("2512"), "25/12");
/// assert_eq!(format_date_input("abc25xx12yy2024zz99"), "25/12/2024");
/// ```
pub fn format_date_input(raw: &str) -> String {
    let mut masked = String::with_capacity(MAX_LEN);
    let digits = raw.chars().filter(char::is_ascii_digit).take(MAX_DIGITS);
    for (i, digit) in digits.enumerate() {
        if GROUP_STARTS.contains(&i) {
            masked.push(SEPARATOR);
        }
        masked.push(digit);
    }
    masked
}

/// Whether a masked value holds a full `DD/MM/YYYY` date.
pub fn is_complete(masked: &str) -> bool {
    masked.len() == MAX_LEN && format_date_input(masked) == masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        let cases = [
            ("", ""),
            ("5", "5"),
            ("25", "25"),
            ("251", "25/1"),
            ("2512", "25/12"),
            ("25122", "25/12/2"),
            ("25122024", "25/12/2024"),
            ("25/12/2024", "25/12/2024"),
            ("abc25xx12yy2024zz99", "25/12/2024"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_date_input(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_only_non_digits_is_empty() {
        assert_eq!(format_date_input("//--ab  "), "");
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic and full-width digits are not ASCII digits.
        assert_eq!(format_date_input("٢٥１２0102"), "01/02");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(format_date_input("31022024"), "31/02/2024");
        assert_eq!(format_date_input("99999999"), "99/99/9999");
    }

    #[test]
    fn test_retyping_after_cursor_jump() {
        // Editing the middle of a masked value leaves stray separators behind.
        assert_eq!(format_date_input("25/1/2/2024"), "25/12/2024");
        assert_eq!(format_date_input("25//12"), "25/12");
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete("25/12/2024"));
        assert!(!is_complete("25/12/202"));
        assert!(!is_complete("2512202400"));
        assert!(!is_complete(""));
    }
}
