use crate::normalization::normalize;
use crate::pattern;
use crate::validation::{sum_all_digits, Validator};

/// Validates Spanish CIF numbers (corporate identifiers).
///
/// CIF numbers structure is defined at:
///     BOE number 49. February 26th, 2008 (article 2)
///
/// Organization types P, Q, S, N, W and R take a letter check character;
/// every other type takes a digit. Some historical sources accept either
/// for a few types; this implementation fixes the choice solely by the
/// leading type letter, the stricter of the two observed variants.
pub struct CifValidator;

const LETTER_CHECK_TYPES: &str = "PQSNWR";
const CHECK_LETTERS: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

impl Validator for CifValidator {
    fn is_valid(&self, doc_number: &str) -> bool {
        let doc_number = normalize(doc_number);
        if !pattern::matches_cif_format(&doc_number) {
            return false;
        }
        match check_character(&doc_number) {
            Some(expected) => doc_number.ends_with(expected),
            None => false,
        }
    }
}

/// Luhn-like check over the 7-digit body: digits in odd positions
/// (1-indexed) are doubled and digit-summed, digits in even positions are
/// added as-is. Expects a structurally valid CIF.
fn check_character(doc_number: &str) -> Option<char> {
    let type_char = doc_number.chars().next()?;
    let central_digits = &doc_number[1..8];

    let mut even_sum = 0;
    let mut odd_sum = 0;
    for (position, digit_char) in central_digits.chars().enumerate() {
        let digit = digit_char.to_digit(10)?;
        if position % 2 == 0 {
            odd_sum += sum_all_digits(digit * 2);
        } else {
            even_sum += digit;
        }
    }
    let numeric_check = (10 - (even_sum + odd_sum) % 10) % 10;

    if LETTER_CHECK_TYPES.contains(type_char) {
        Some(CHECK_LETTERS[numeric_check as usize])
    } else {
        char::from_digit(numeric_check, 10)
    }
}
