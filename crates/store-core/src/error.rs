//! # Error Types
//!
//! Domain-specific error types for store-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  store-core errors (this file)                                         │
//! │  ├── CoreError            - General domain errors                      │
//! │  └── ConfigurationError   - Construction-time validation failures      │
//! │                                                                         │
//! │  register binary                                                       │
//! │  └── anyhow::Error        - Settings loading + context for the user    │
//! │                                                                         │
//! │  Flow: ConfigurationError → CoreError → anyhow → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Pricing and scanning never fail; only construction does

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A pricing rule from settings could not be built.
    ///
    /// ## When This Occurs
    /// - A settings file gives a discount above 100%
    /// - A rain check or two-for-one price is negative
    #[error("Invalid {kind} pricing rule: {source}")]
    InvalidPricingRule {
        kind: &'static str,
        #[source]
        source: ConfigurationError,
    },

    /// An item from settings or the command line could not be built.
    #[error("Invalid item '{name}': {source}")]
    InvalidItem {
        name: String,
        #[source]
        source: ConfigurationError,
    },
}

// =============================================================================
// Configuration Error
// =============================================================================

/// Construction-time validation errors.
///
/// Items and pricing rules are checked once, when they are built. After that
/// every pricing operation is a total function over well-formed values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: String },

    /// Floating point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed item spec).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPricingRule {
            kind: "coupon",
            source: ConfigurationError::OutOfRange {
                field: "discount (%)".to_string(),
                min: 0,
                max: 100,
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid coupon pricing rule: discount (%) must be between 0 and 100"
        );
    }

    #[test]
    fn test_configuration_error_messages() {
        let err = ConfigurationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ConfigurationError::Negative {
            field: "weight".to_string(),
            value: "-1.5".to_string(),
        };
        assert_eq!(err.to_string(), "weight must not be negative (got -1.5)");
    }
}
