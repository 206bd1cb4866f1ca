use lazy_static::lazy_static;
use regex::Regex;

// One anchored pattern per structural shape, compiled once per process.
// These check format only; the check character is verified separately.
lazy_static! {
    static ref NIF_PATTERN: Regex = Regex::new("^[0-9]{8}[A-Z]$").unwrap();
    static ref NIE_PATTERN: Regex = Regex::new("^[XYZ][0-9]{7}[A-Z0-9]$").unwrap();
    static ref CIF_LETTER_CHECK_PATTERN: Regex = Regex::new("^[PQSNWR][0-9]{7}[A-Z0-9]$").unwrap();
    static ref CIF_DIGIT_CHECK_PATTERN: Regex = Regex::new("^[ABCDEFGHJUV][0-9]{8}$").unwrap();
}

/// 8 digits followed by a letter. Input must already be normalized.
pub fn matches_nif_format(doc_number: &str) -> bool {
    NIF_PATTERN.is_match(doc_number)
}

/// X, Y or Z followed by 7 digits and an alphanumeric check position.
pub fn matches_nie_format(doc_number: &str) -> bool {
    NIE_PATTERN.is_match(doc_number)
}

/// Either CIF branch: organization types taking a letter check character,
/// or those taking a digit.
pub fn matches_cif_format(doc_number: &str) -> bool {
    CIF_LETTER_CHECK_PATTERN.is_match(doc_number) || CIF_DIGIT_CHECK_PATTERN.is_match(doc_number)
}
