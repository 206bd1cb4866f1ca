const DOC_LENGTH: usize = 9;

/// Uppercase a raw document number and restore elided leading zeros.
///
/// Personal numbers are sometimes written without their leading zeros, so a
/// digit-leading input shorter than 9 characters is left-padded with '0'.
/// Letter-leading documents (NIE, CIF) are never padded: they must already
/// carry their full 9 characters.
pub fn normalize(doc_number: &str) -> String {
    let mut normalized = doc_number.to_ascii_uppercase();
    let digit_leading = normalized
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false);
    if digit_leading {
        let char_count = normalized.chars().count();
        if char_count < DOC_LENGTH {
            let padding = "0".repeat(DOC_LENGTH - char_count);
            normalized.insert_str(0, &padding);
        }
    }
    normalized
}
