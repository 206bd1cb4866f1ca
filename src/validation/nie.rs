use crate::normalization::normalize;
use crate::pattern;
use crate::validation::{personal_check_letter, Validator, NUMBER_LENGTH};

/// Validates Spanish NIE numbers (foreign resident identifiers).
///
/// The check letter algorithm is identical to the NIF one after replacing
/// the leading letter: X with 0, Y with 1 and Z with 2. Only the leading
/// letter is substituted; the written check letter itself may legitimately
/// be an X or a Z.
pub struct NieValidator;

impl Validator for NieValidator {
    fn is_valid(&self, doc_number: &str) -> bool {
        let doc_number = normalize(doc_number);
        if !pattern::matches_nie_format(&doc_number) {
            return false;
        }
        let substituted_leading = match doc_number.chars().next() {
            Some('X') => '0',
            Some('Y') => '1',
            Some('Z') => '2',
            _ => return false,
        };
        let mut body = String::with_capacity(NUMBER_LENGTH);
        body.push(substituted_leading);
        body.push_str(&doc_number[1..NUMBER_LENGTH]);
        match personal_check_letter(&body) {
            Some(expected) => doc_number[NUMBER_LENGTH..].starts_with(expected),
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::validation::*;

    #[test]
    fn test_valid_nie() {
        let valid_ids = vec![
            "X6089822C",
            "Y6089822B",
            "Z6089822W",
            // lowercase input is uppercased before checking
            "x6089822c",
        ];
        for id in valid_ids {
            assert!(NieValidator.is_valid(id));
        }
    }

    #[test]
    fn test_invalid_nie() {
        let invalid_ids = vec![
            // leading letter outside X, Y, Z
            "T4549522K",
            // too short: letter-leading numbers are never zero-padded
            "X689822C",
            // wrong check letter
            "X6389822C",
            // digit in the check position
            "X60898221",
            "",
        ];
        for id in invalid_ids {
            assert!(!NieValidator.is_valid(id));
        }
    }
}
