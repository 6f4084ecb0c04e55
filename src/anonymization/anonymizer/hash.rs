//! Hash anonymization strategy

use super::CellTransform;
use crate::anonymization::config::AnonymizationMethod;
use crate::config::SecretString;
use crate::domain::CellValue;
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};

/// Hash strategy - replaces the canonical value with its SHA-256 hex digest
///
/// Equal inputs always yield equal digests within and across runs unless a
/// salt is configured.
#[derive(Default)]
pub struct HashStrategy {
    salt: Option<SecretString>,
}

impl HashStrategy {
    /// Create a new hash strategy with an optional salt
    pub fn new(salt: Option<SecretString>) -> Self {
        Self { salt }
    }

    /// Hex digest of a string
    pub fn digest(&self, text: &str) -> String {
        let mut hasher = Sha256::new();
        if let Some(ref salt) = self.salt {
            hasher.update(salt.expose_secret().as_str().as_bytes());
        }
        hasher.update(text.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }
}

impl CellTransform for HashStrategy {
    fn transform(&self, value: &CellValue) -> CellValue {
        CellValue::String(self.digest(&value.canonical_string()))
    }

    fn method(&self) -> AnonymizationMethod {
        AnonymizationMethod::Hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_known_digest() {
        let strategy = HashStrategy::default();
        // sha256("abc")
        assert_eq!(
            strategy.digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_transform_is_fixed_length_hex() {
        let strategy = HashStrategy::default();
        let CellValue::String(digest) = strategy.transform(&CellValue::from("a@x.com")) else {
            panic!("hash should produce a string");
        };
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_uses_canonical_string() {
        let strategy = HashStrategy::default();
        assert_eq!(
            strategy.transform(&CellValue::Integer(42)),
            strategy.transform(&CellValue::from("42"))
        );
        assert_ne!(
            strategy.transform(&CellValue::Integer(3)),
            strategy.transform(&CellValue::Number(3.0))
        );
    }

    #[test]
    fn test_salt_changes_digest() {
        let plain = HashStrategy::default();
        let salted = HashStrategy::new(Some(secret_string("pepper".to_string())));
        let value = CellValue::from("Alice");
        assert_ne!(plain.transform(&value), salted.transform(&value));
        assert_eq!(salted.transform(&value), salted.transform(&value));
    }
}
