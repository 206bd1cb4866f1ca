use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of supported Spanish identification document kinds.
/// NIF and NIE are personal numbers, CIF is corporate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DocumentType {
    Nif,
    Nie,
    Cif,
}

/// The requested document type is not one of NIF, NIE or CIF. This is the
/// only failure mode of the dispatch entry point; invalid documents are
/// reported as `false`, not as errors.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("unsupported document type: {0}")]
pub struct UnsupportedTypeError(pub String);

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Nif => "NIF",
            DocumentType::Nie => "NIE",
            DocumentType::Cif => "CIF",
        }
    }
}

impl FromStr for DocumentType {
    type Err = UnsupportedTypeError;

    fn from_str(doc_type: &str) -> Result<Self, Self::Err> {
        match doc_type.to_ascii_uppercase().as_str() {
            "NIF" => Ok(DocumentType::Nif),
            "NIE" => Ok(DocumentType::Nie),
            "CIF" => Ok(DocumentType::Cif),
            _ => Err(UnsupportedTypeError(doc_type.to_string())),
        }
    }
}
