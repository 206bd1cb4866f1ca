use spanish_id::{is_valid_id_number, DocumentType, UnsupportedTypeError, Validator};

#[test]
fn nif_validation() {
    assert_eq!(is_valid_id_number("27905344L", "NIF"), Ok(true));
    // not a valid NIF format
    assert_eq!(is_valid_id_number("L27905344", "NIF"), Ok(false));
    assert_eq!(is_valid_id_number("L27915344", "NIF"), Ok(false));
    // shorter NIF, filled with zeros on the start before checking
    assert_eq!(is_valid_id_number("977169Z", "NIF"), Ok(true));
}

#[test]
fn nie_validation() {
    assert_eq!(is_valid_id_number("X6089822C", "NIE"), Ok(true));
    // invalid NIE format
    assert_eq!(is_valid_id_number("T4549522K", "NIE"), Ok(false));
    // shorter than expected
    assert_eq!(is_valid_id_number("X689822C", "NIE"), Ok(false));
    // calculated check letter does not match
    assert_eq!(is_valid_id_number("X6389822C", "NIE"), Ok(false));
}

#[test]
fn cif_validation() {
    // numeric check digit
    assert_eq!(is_valid_id_number("G28667152", "CIF"), Ok(true));
    // letter check character
    assert_eq!(is_valid_id_number("W2849191H", "CIF"), Ok(true));
    // shorter than expected
    assert_eq!(is_valid_id_number("G2866752", "CIF"), Ok(false));
    // starts with a number
    assert_eq!(is_valid_id_number("52849191H", "CIF"), Ok(false));
    // check digit cannot be a letter when the type is G
    assert_eq!(is_valid_id_number("G2866715P", "CIF"), Ok(false));
    // calculated check digit does not match
    assert_eq!(is_valid_id_number("W2949191H", "CIF"), Ok(false));
}

#[test]
fn type_tag_is_case_insensitive() {
    for doc in ["G28667152", "W2849191H", "invalid"] {
        assert_eq!(
            is_valid_id_number(doc, "cif"),
            is_valid_id_number(doc, "CIF")
        );
    }
    assert_eq!(is_valid_id_number("27905344L", "nif"), Ok(true));
    assert_eq!(is_valid_id_number("X6089822C", "Nie"), Ok(true));
}

#[test]
fn unsupported_type_is_an_error() {
    assert_eq!(
        is_valid_id_number("27905344L", "PASSPORT"),
        Err(UnsupportedTypeError("PASSPORT".to_string()))
    );
    assert_eq!(
        is_valid_id_number("27905344L", ""),
        Err(UnsupportedTypeError(String::new()))
    );
}

#[test]
fn parsed_document_types_validate_directly() {
    let document_type: DocumentType = "nie".parse().unwrap();
    assert_eq!(document_type, DocumentType::Nie);
    assert!(document_type.is_valid("X6089822C"));
    assert!(!document_type.is_valid("X6389822C"));
}
