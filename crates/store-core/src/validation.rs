//! # Validation Module
//!
//! Construction-time validation for items and pricing rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Settings / CLI (register binary)                             │
//! │  ├── Type validation (deserialization, item spec parsing)              │
//! │  └── Immediate feedback on stderr                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (store-core)                                    │
//! │  ├── THIS MODULE: Item::new, WeightedItem::new, Coupon::new, ...       │
//! │  └── Invalid values never reach the pricing engine                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing (store-core)                                         │
//! │  └── Total functions: scan, subtotal and total never fail              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use store_core::validation::{validate_item_name, validate_price_cents};
//!
//! validate_item_name("Beans").unwrap();
//! validate_price_cents("unit price", 499).unwrap();
//! ```

use crate::error::ConfigurationError;
use crate::types::BPS_PER_WHOLE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ConfigurationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use store_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Pencil").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ConfigurationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use store_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("unit price", 1099).is_ok());
/// assert!(validate_price_cents("unit price", 0).is_ok());
/// assert!(validate_price_cents("unit price", -100).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ConfigurationError::Negative {
            field: field.to_string(),
            value: cents.to_string(),
        });
    }

    Ok(())
}

/// Validates an item weight.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative
pub fn validate_weight(weight: f64) -> ValidationResult<()> {
    if !weight.is_finite() {
        return Err(ConfigurationError::NotFinite {
            field: "weight".to_string(),
        });
    }

    if weight < 0.0 {
        return Err(ConfigurationError::Negative {
            field: "weight".to_string(),
            value: weight.to_string(),
        });
    }

    Ok(())
}

/// Validates a fraction of a whole (`0.0..=1.0`).
pub fn validate_fraction(field: &str, fraction: f64) -> ValidationResult<()> {
    if !fraction.is_finite() {
        return Err(ConfigurationError::NotFinite {
            field: field.to_string(),
        });
    }

    if !(0.0..=1.0).contains(&fraction) {
        return Err(ConfigurationError::OutOfRange {
            field: format!("{field} (%)"),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Between 0 and 10000 (0% to 100% off)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > BPS_PER_WHOLE {
        return Err(ConfigurationError::OutOfRange {
            field: "discount (bps)".to_string(),
            min: 0,
            max: BPS_PER_WHOLE as i64,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > BPS_PER_WHOLE {
        return Err(ConfigurationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: BPS_PER_WHOLE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
