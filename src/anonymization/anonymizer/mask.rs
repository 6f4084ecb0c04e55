//! Mask anonymization strategy

use super::CellTransform;
use crate::anonymization::config::AnonymizationMethod;
use crate::domain::CellValue;

/// Sentinel written in place of masked values
pub const MASK_SENTINEL: &str = "****";

/// Mask strategy - replaces every value with [`MASK_SENTINEL`]
///
/// The sentinel has a fixed length and type, so nothing about the original
/// value leaks through.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaskStrategy;

impl CellTransform for MaskStrategy {
    fn transform(&self, _value: &CellValue) -> CellValue {
        CellValue::String(MASK_SENTINEL.to_string())
    }

    fn method(&self) -> AnonymizationMethod {
        AnonymizationMethod::Mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        let strategy = MaskStrategy;
        assert_eq!(
            strategy.transform(&CellValue::from("a@x.com")),
            CellValue::from("****")
        );
        assert_eq!(strategy.transform(&CellValue::Integer(12345)), CellValue::from("****"));
    }

    #[test]
    fn test_mask_is_idempotent() {
        let strategy = MaskStrategy;
        let once = strategy.transform(&CellValue::Boolean(true));
        assert_eq!(strategy.transform(&once), once);
    }
}
