use crate::normalization::normalize;
use crate::pattern;
use crate::validation::{personal_check_letter, Validator, NUMBER_LENGTH};

/// Validates Spanish NIF numbers: 8 digits plus a mod-23 check letter.
///
/// Algorithm works as described in:
///     http://www.interior.gob.es/es/web/servicios-al-ciudadano/dni/calculo-del-digito-de-control-del-nif-nie
pub struct NifValidator;

impl Validator for NifValidator {
    fn is_valid(&self, doc_number: &str) -> bool {
        let doc_number = normalize(doc_number);
        if !pattern::matches_nif_format(&doc_number) {
            return false;
        }
        let (body, written_letter) = doc_number.split_at(NUMBER_LENGTH);
        match personal_check_letter(body) {
            Some(expected) => written_letter.starts_with(expected),
            None => false,
        }
    }
}
