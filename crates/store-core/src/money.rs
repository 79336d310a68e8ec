//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    200 × (1 - 0.85) = 29.999999999999996  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    200 × 8500 / 10000 = 170 cents exactly                              │
//! │                                                                         │
//! │  The only float that ever touches money is an item weight, and the     │
//! │  product is truncated straight back to whole cents.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use store_core::money::Money;
//!
//! let price = Money::from_cents(499); // $4.99
//!
//! let doubled = price * 2;                     // $9.98
//! let total = price + Money::from_cents(99);   // $5.98
//! assert_eq!(total.to_string(), "$5.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::{DiscountRate, TaxRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and differences
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Price of `weight` units at `per_unit` each, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// // 1.999 lb of beef at $5.00/lb is $9.99, not $10.00
    /// let price = Money::from_weight(Money::from_cents(500), 1.999);
    /// assert_eq!(price.cents(), 999);
    /// ```
    pub fn from_weight(per_unit: Money, weight: f64) -> Self {
        Money((per_unit.0 as f64 * weight).trunc() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax, rounding half a cent up.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    /// use store_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1005); // $10.05
    /// // $10.05 × 10% = $1.005 → rounds to $1.01
    /// assert_eq!(price.calculate_tax(TaxRate::from_bps(1000)).cents(), 101);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large amounts from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Applies a discount and returns what is still payable,
    /// `floor(amount × (1 − discount))`, computed exactly in integers.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    /// use store_core::types::DiscountRate;
    ///
    /// let milk = Money::from_cents(200);
    /// let rate = DiscountRate::from_bps(1500).unwrap(); // 15% off
    /// assert_eq!(milk.apply_discount(rate).cents(), 170);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let scale = rate.scale() as i128;
        let payable = (self.0 as i128 * (scale - rate.parts() as i128)).div_euclid(scale);
        Money::from_cents(payable as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, with a leading `-` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (for "charge n units" calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-50)), "-$0.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(1);
        assert_eq!(c.cents(), 1499);
    }

    #[test]
    fn test_sum() {
        let total: Money = [199, 250, 51].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 500);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_from_weight_truncates() {
        let per_lb = Money::from_cents(500);
        assert_eq!(Money::from_weight(per_lb, 1.999).cents(), 999);
        assert_eq!(Money::from_weight(per_lb, 2.0).cents(), 1000);
        assert_eq!(Money::from_weight(per_lb, 0.0).cents(), 0);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(Money::from_cents(1000).calculate_tax(rate).cents(), 100);
        assert_eq!(Money::from_cents(1005).calculate_tax(rate).cents(), 101);
        assert_eq!(Money::from_cents(1004).calculate_tax(rate).cents(), 100);
        assert_eq!(Money::from_cents(4).calculate_tax(rate).cents(), 0);
        assert_eq!(Money::from_cents(5).calculate_tax(rate).cents(), 1);
    }

    #[test]
    fn test_discount_rounds_down() {
        let twenty_off = DiscountRate::from_bps(2000).unwrap();
        assert_eq!(Money::from_cents(200).apply_discount(twenty_off).cents(), 160);
        assert_eq!(Money::from_cents(300).apply_discount(twenty_off).cents(), 240);
        // 199 × 0.8 = 159.2
        assert_eq!(Money::from_cents(199).apply_discount(twenty_off).cents(), 159);

        assert_eq!(
            Money::from_cents(999).apply_discount(DiscountRate::none()).cents(),
            999
        );
        assert_eq!(
            Money::from_cents(999)
                .apply_discount(DiscountRate::from_bps(10_000).unwrap())
                .cents(),
            0
        );
    }

    #[test]
    fn test_discount_below_one_basis_point() {
        let tiny = DiscountRate::from_fraction(0.00004).unwrap();
        assert_eq!(Money::from_cents(100_000).apply_discount(tiny).cents(), 99_996);

        // 30000 × 0.87655 = 26296.5
        let odd = DiscountRate::from_fraction(0.12345).unwrap();
        assert_eq!(Money::from_cents(30_000).apply_discount(odd).cents(), 26_296);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), zero);
    }
}
