//! Input validation for submitted reviews.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value too short.
    TooShort { field: String, min: usize, actual: usize },
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Rating outside the star range.
    RatingOutOfRange(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooShort { field, min, actual } => {
                write!(f, "{} is too short ({} chars, min {})", field, actual, min)
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::RatingOutOfRange(rating) => write!(
                f,
                "rating must be between {} and {} stars, got {}",
                MIN_RATING, MAX_RATING, rating
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Minimum length of review text.
pub const MIN_REVIEW_LENGTH: usize = 10;

/// Maximum length of review text.
pub const MAX_REVIEW_LENGTH: usize = 2000;

/// Maximum length of a reviewer name.
pub const MAX_NAME_LENGTH: usize = 64;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Validate review text length (in characters).
pub fn validate_review_text(text: &str) -> Result<(), ValidationError> {
    let actual = text.trim().chars().count();

    if actual < MIN_REVIEW_LENGTH {
        return Err(ValidationError::TooShort {
            field: "review".to_string(),
            min: MIN_REVIEW_LENGTH,
            actual,
        });
    }

    if actual > MAX_REVIEW_LENGTH {
        return Err(ValidationError::TooLong {
            field: "review".to_string(),
            max: MAX_REVIEW_LENGTH,
            actual,
        });
    }

    Ok(())
}

/// Validate a star rating.
pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Validate a reviewer name length. Empty names are allowed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let actual = name.trim().chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_review_text() {
        assert!(validate_review_text("Great tool, love it").is_ok());
        assert!(matches!(
            validate_review_text("  short   "),
            Err(ValidationError::TooShort { actual: 5, .. })
        ));
        assert!(validate_review_text(&"a".repeat(MAX_REVIEW_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_eq!(validate_rating(0), Err(ValidationError::RatingOutOfRange(0)));
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("").is_ok());
        assert!(validate_name(&"n".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_display() {
        let err = ValidationError::RatingOutOfRange(9);
        assert_eq!(err.to_string(), "rating must be between 1 and 5 stars, got 9");
    }
}
