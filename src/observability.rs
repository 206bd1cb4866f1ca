use lazy_static::lazy_static;
use metrics::{counter, Counter};

use crate::document_type::DocumentType;

const TYPE: &str = "type";

/// Counters for validation outcomes, labeled by document type. They go
/// through the `metrics` facade, so nothing is recorded unless the
/// embedding application installs a recorder.
pub struct ValidationMetrics {
    pub checked: Counter,
    pub rejected: Counter,
}

impl ValidationMetrics {
    fn new(document_type: DocumentType) -> Self {
        ValidationMetrics {
            checked: counter!("document_validation.checked", TYPE => document_type.as_str()),
            rejected: counter!("document_validation.rejected", TYPE => document_type.as_str()),
        }
    }
}

lazy_static! {
    static ref NIF_METRICS: ValidationMetrics = ValidationMetrics::new(DocumentType::Nif);
    static ref NIE_METRICS: ValidationMetrics = ValidationMetrics::new(DocumentType::Nie);
    static ref CIF_METRICS: ValidationMetrics = ValidationMetrics::new(DocumentType::Cif);
}

pub fn validation_metrics(document_type: DocumentType) -> &'static ValidationMetrics {
    match document_type {
        DocumentType::Nif => &NIF_METRICS,
        DocumentType::Nie => &NIE_METRICS,
        DocumentType::Cif => &CIF_METRICS,
    }
}
