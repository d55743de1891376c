//! CPF (Cadastro de Pessoas Físicas) checksum validation.
//!
//! A CPF is an 11-digit Brazilian taxpayer identifier whose last two digits
//! are check digits computed from the preceding ones via weighted mod-11
//! sums. Validation here is strict: the candidate must be exactly 11 ASCII
//! digits, with no trimming and no stripping of the dots/dashes commonly used
//! to format CPFs on paper.

/// Weights for the first check digit, applied to digits 0..=8.
const FIRST_CHECK_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to digits 0..=9.
const SECOND_CHECK_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Decide whether `candidate` is a structurally and arithmetically valid CPF.
///
/// Every input maps to a verdict; there is no error path. A candidate is
/// rejected when any of the following holds:
///
/// - its length is not exactly 11 characters;
/// - any character is not an ASCII decimal digit;
/// - all 11 digits are identical ("00000000000" through "99999999999" are
///   reserved-invalid even where the checksum arithmetic would pass);
/// - either check digit disagrees with the weighted mod-11 computation.
///
/// The function is pure and safe to call concurrently from any context.
pub fn is_valid(candidate: &str) -> bool {
    let Some(digits) = digit_sequence(candidate) else {
        return false;
    };

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9], &FIRST_CHECK_WEIGHTS)
        && digits[10] == check_digit(&digits[..10], &SECOND_CHECK_WEIGHTS)
}

/// Reinterpret the candidate as exactly 11 digit values, position preserving.
///
/// Returns `None` unless the candidate is 11 characters long and every
/// character is an ASCII decimal digit. This is the only constructor of the
/// digit sequence, so downstream arithmetic never sees malformed input.
fn digit_sequence(candidate: &str) -> Option<[u32; 11]> {
    if candidate.chars().count() != 11 {
        return None;
    }

    let mut digits = [0u32; 11];
    for (slot, ch) in digits.iter_mut().zip(candidate.chars()) {
        *slot = ch.to_digit(10)?;
    }
    Some(digits)
}

/// Compute the expected check digit for a digit prefix under the given
/// weights: the weighted sum mod 11 maps to 0 when the remainder is below 2,
/// otherwise to 11 minus the remainder.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
