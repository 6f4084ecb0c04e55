//! Result type alias for Anonymo

use super::errors::AnonymoError;

/// Result type alias for Anonymo operations
///
/// # Examples
///
/// ```
/// use anonymo::domain::result::Result;
/// use anonymo::domain::errors::AnonymoError;
///
/// fn failing_function() -> Result<()> {
///     Err(AnonymoError::InvalidPageSize)
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, AnonymoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
