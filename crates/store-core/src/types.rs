//! # Domain Types
//!
//! Rate and snapshot types shared by items, pricing rules and receipts.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  DiscountRate   │   │ ReceiptSummary  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  parts / 10^n   │   │  id (UUID)      │       │
//! │  │  1000 = 10%     │   │  15/100 = 15%   │   │  lines          │       │
//! │  └─────────────────┘   └─────────────────┘   │  total_cents    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigurationError;
use crate::validation::{validate_discount_bps, validate_fraction, ValidationResult};

/// Basis points in one whole (100%).
pub const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the default rate for taxable items)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for TaxRate {
    /// Taxable goods are charged 10% unless told otherwise.
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Most decimal places a discount may carry.
pub const MAX_DISCOUNT_DECIMALS: u32 = 18;

/// Share of a price taken off by a discount.
///
/// Held as the exact decimal `parts / 10^decimals`, so `0.12345` stays
/// `12345 / 100000` and never drifts to the nearest basis point. A 200 cent
/// item at 15% off is charged `floor(200 × 0.85) = 170`. Always within
/// `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate {
    parts: u64,
    decimals: u32,
}

impl DiscountRate {
    /// Creates a discount rate from basis points.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::types::DiscountRate;
    ///
    /// assert!(DiscountRate::from_bps(2000).is_ok());  // 20% off
    /// assert!(DiscountRate::from_bps(10001).is_err()); // more than the price
    /// ```
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        validate_discount_bps(bps)?;
        Ok(DiscountRate::normalized(u64::from(bps), 4))
    }

    /// Creates a discount rate from a fraction of the price (`0.15` = 15% off).
    ///
    /// The fraction is read as the shortest decimal that prints back to the
    /// same `f64`, so `0.00004` means exactly four parts in a hundred thousand.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    /// use store_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_fraction(0.12345).unwrap();
    /// // 30000 × 0.87655 = 26296.5
    /// assert_eq!(Money::from_cents(30000).apply_discount(rate).cents(), 26296);
    /// ```
    pub fn from_fraction(fraction: f64) -> ValidationResult<Self> {
        validate_fraction("discount", fraction)?;
        if fraction == 0.0 {
            return Ok(DiscountRate::none());
        }

        let invalid = |reason: String| ConfigurationError::InvalidFormat {
            field: "discount".to_string(),
            reason,
        };

        // f64 Display never uses an exponent: "1", "0.15", "0.00004".
        let text = fraction.to_string();
        let (whole, digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let decimals = digits.len() as u32;
        if decimals > MAX_DISCOUNT_DECIMALS {
            return Err(invalid(format!(
                "more than {MAX_DISCOUNT_DECIMALS} decimal places"
            )));
        }

        let parts = format!("{whole}{digits}")
            .parse::<u64>()
            .map_err(|err| invalid(err.to_string()))?;
        Ok(DiscountRate::normalized(parts, decimals))
    }

    /// Strips trailing zeros so equal rates compare equal.
    fn normalized(mut parts: u64, mut decimals: u32) -> Self {
        while decimals > 0 && parts % 10 == 0 {
            parts /= 10;
            decimals -= 1;
        }
        DiscountRate { parts, decimals }
    }

    /// Numerator of the discount over [`DiscountRate::scale`].
    #[inline]
    pub const fn parts(&self) -> u64 {
        self.parts
    }

    /// Denominator of the discount, `10^decimals`.
    #[inline]
    pub const fn scale(&self) -> u64 {
        10u64.pow(self.decimals)
    }

    /// The discount as a fraction (for display only).
    pub fn fraction(&self) -> f64 {
        self.parts as f64 / self.scale() as f64
    }

    /// No discount at all.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate {
            parts: 0,
            decimals: 0,
        }
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ConfigurationError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        DiscountRate::from_fraction(fraction)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.fraction()
    }
}

// =============================================================================
// Receipt Summary
// =============================================================================

/// A line on a finalized receipt.
/// Uses snapshot pattern to freeze item data at time of printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Item name at time of sale (frozen).
    pub name: String,
    /// Charged price in cents (before any pricing rule).
    pub price_cents: i64,
    /// Tax in cents, present only for taxable items.
    pub tax_cents: Option<i64>,
}

/// Serializable snapshot of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    /// Plain sum of line prices.
    pub total_cents: i64,
    /// Sum of tax over taxable lines.
    pub tax_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_default_is_ten_percent() {
        assert_eq!(TaxRate::default().bps(), 1000);
        assert_eq!(TaxRate::from_bps(825).bps(), 825);
    }

    #[test]
    fn test_discount_rate_from_fraction() {
        let fifteen = DiscountRate::from_fraction(0.15).unwrap();
        assert_eq!((fifteen.parts(), fifteen.scale()), (15, 100));
        assert_eq!(fifteen, DiscountRate::from_bps(1500).unwrap());
        assert_eq!(DiscountRate::from_fraction(1.0).unwrap().parts(), 1);
        assert_eq!(DiscountRate::from_fraction(0.0).unwrap(), DiscountRate::none());
        assert!(DiscountRate::from_fraction(1.5).is_err());
        assert!(DiscountRate::from_fraction(-0.1).is_err());
        assert!(DiscountRate::from_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_discount_rate_keeps_every_decimal_place() {
        let tiny = DiscountRate::from_fraction(0.00004).unwrap();
        assert_eq!((tiny.parts(), tiny.scale()), (4, 100_000));

        let odd = DiscountRate::from_fraction(0.12345).unwrap();
        assert_eq!((odd.parts(), odd.scale()), (12_345, 100_000));
    }

    #[test]
    fn test_discount_rate_rejects_too_many_decimals() {
        assert!(matches!(
            DiscountRate::from_fraction(1e-20),
            Err(ConfigurationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_discount_rate_deserialize_validates() {
        let rate: DiscountRate = serde_json::from_str("0.25").unwrap();
        assert_eq!(rate, DiscountRate::from_bps(2500).unwrap());
        assert!(serde_json::from_str::<DiscountRate>("2.0").is_err());
    }
}
