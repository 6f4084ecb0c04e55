//! Generalization anonymization strategy

use super::CellTransform;
use crate::anonymization::config::AnonymizationMethod;
use crate::domain::CellValue;

/// Category label written in place of generalized values
pub const GENERALIZED_LABEL: &str = "Generalized";

/// Generalize strategy - coarsens every value to a single bucket
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralizeStrategy;

impl CellTransform for GeneralizeStrategy {
    fn transform(&self, _value: &CellValue) -> CellValue {
        CellValue::String(GENERALIZED_LABEL.to_string())
    }

    fn method(&self) -> AnonymizationMethod {
        AnonymizationMethod::Generalize
    }
}
