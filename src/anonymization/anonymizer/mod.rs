//! Anonymization strategy module
//!
//! Each [`AnonymizationMethod`] maps to one [`CellTransform`] strategy. The
//! mapping is resolved once per engine call by [`resolve`], so the per-cell
//! loop never inspects the method.

pub mod generalize;
pub mod hash;
pub mod mask;

use crate::anonymization::config::AnonymizationMethod;
use crate::config::SecretString;
use crate::domain::CellValue;

pub use generalize::{GeneralizeStrategy, GENERALIZED_LABEL};
pub use hash::HashStrategy;
pub use mask::{MaskStrategy, MASK_SENTINEL};

/// A pure, deterministic per-cell transform
///
/// Implementations only see non-missing values; the engine passes missing
/// cells through untouched.
pub trait CellTransform: Send + Sync {
    /// Transform a non-missing cell value
    fn transform(&self, value: &CellValue) -> CellValue;

    /// Method this strategy implements
    fn method(&self) -> AnonymizationMethod;
}

/// Resolve the strategy for a method
///
/// The salt is only used by [`HashStrategy`].
pub fn resolve(method: AnonymizationMethod, salt: Option<&SecretString>) -> Box<dyn CellTransform> {
    match method {
        AnonymizationMethod::Hash => Box::new(HashStrategy::new(salt.cloned())),
        AnonymizationMethod::Mask => Box::new(MaskStrategy),
        AnonymizationMethod::Generalize => Box::new(GeneralizeStrategy),
    }
}
