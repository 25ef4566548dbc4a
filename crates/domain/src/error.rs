//! Common error types used across the workspace.
//!
//! The model itself accepts any input. These errors only surface when a
//! caller opts into validation or looks something up that is not there.

/// Top-level error for inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// An entity failed its invariant checks.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup did not match anything.
    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// An entity with the same key is already registered.
    #[error("duplicate entity")]
    Duplicate(#[from] DuplicateError),
}

/// Invariant violations reported by [`Validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// A lookup by key found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

/// A registration collided with an existing entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key} already exists")]
pub struct DuplicateError {
    pub entity: &'static str,
    pub key: String,
}

/// Opt-in invariant checks.
///
/// Nothing in the model calls this on its own; constructors and mutators
/// accept out-of-range values unchanged.
pub trait Validate {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check that an integer field lies within `min..=max`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] when `value` falls outside.
pub fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Check that a name is not empty.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for an empty or blank name.
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_value_on_range_bounds() {
        assert!(check_range("rating", 0, 0, 100).is_ok());
        assert!(check_range("rating", 100, 0, 100).is_ok());
    }

    #[test]
    fn should_reject_value_above_range() {
        let err = check_range("rating", 101, 0, 100).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "rating",
                value: 101,
                min: 0,
                max: 100,
            }
        );
        assert_eq!(err.to_string(), "rating must be within 0..=100, got 101");
    }

    #[test]
    fn should_reject_blank_name() {
        assert_eq!(check_name("   "), Err(ValidationError::EmptyName));
        assert!(check_name("Kitchen").is_ok());
    }

    #[test]
    fn should_convert_not_found_into_inventory_error() {
        let err: InventoryError = NotFoundError {
            entity: "User",
            key: "Arden".to_string(),
        }
        .into();
        assert!(matches!(err, InventoryError::NotFound(_)));
    }

    #[test]
    fn should_describe_duplicate_with_entity_and_key() {
        let err = DuplicateError {
            entity: "User",
            key: "Nazir".to_string(),
        };
        assert_eq!(err.to_string(), "User Nazir already exists");
    }
}
