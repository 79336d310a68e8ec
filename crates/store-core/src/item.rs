//! # Items
//!
//! Everything that can be scanned implements [`Priceable`]: a name and a
//! price in cents. Concrete pricing strategies are small value types; tax is
//! a separate capability attached by wrapping.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Priceable (trait)          Taxable (trait, needs Priceable)           │
//! │   ├── Item                   └── Taxed<P: Priceable>                    │
//! │   ├── WeightedItem                ├── Taxed<Item>                       │
//! │   └── Taxed<P> ──────────────────►└── Taxed<WeightedItem>              │
//! │                                                                         │
//! │   A taxed lamp is `Taxed::new(Item::new("Lamp", 1999)?)`:               │
//! │   still an Item for pricing, plus `tax()`.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::{
    validate_item_name, validate_price_cents, validate_tax_rate_bps, validate_weight,
    ValidationResult,
};

// =============================================================================
// Capabilities
// =============================================================================

/// The minimal capability every sellable item exposes.
///
/// Receipts hold items as `Box<dyn Priceable>`, so implementations must be
/// `Debug + Send + Sync` and own their data.
pub trait Priceable: fmt::Debug + Send + Sync {
    /// Display name; also the key pricing rules match on.
    fn name(&self) -> &str;

    /// Price in cents.
    fn price(&self) -> Money;

    /// Returns the tax view of this item, if it carries tax.
    fn as_taxable(&self) -> Option<&dyn Taxable> {
        None
    }
}

/// Derived-tax capability layered onto a [`Priceable`].
pub trait Taxable: Priceable {
    /// Rate applied to `price()`.
    fn tax_rate(&self) -> TaxRate {
        TaxRate::default()
    }

    /// Tax in cents: `price × rate`, rounded to the nearest cent (half up).
    fn tax(&self) -> Money {
        self.price().calculate_tax(self.tax_rate())
    }
}

impl<T: Priceable + ?Sized> Priceable for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self) -> Money {
        (**self).price()
    }

    fn as_taxable(&self) -> Option<&dyn Taxable> {
        (**self).as_taxable()
    }
}

// =============================================================================
// Item
// =============================================================================

/// An item sold at a fixed price per unit.
///
/// ## Example
/// ```rust
/// use store_core::item::{Item, Priceable};
///
/// let beans = Item::new("Beans", 499).unwrap();
/// assert_eq!(beans.name(), "Beans");
/// assert_eq!(beans.price().cents(), 499);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    unit_price: Money,
}

impl Item {
    /// Creates an item.
    ///
    /// ## Errors
    /// `ConfigurationError` if the name is empty or the price is negative.
    pub fn new(name: impl Into<String>, unit_price_cents: i64) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents("unit price", unit_price_cents)?;

        Ok(Item {
            name,
            unit_price: Money::from_cents(unit_price_cents),
        })
    }

    /// Freezes the current name and price of any other item.
    ///
    /// The snapshot is a plain fixed-price item: a weighed item becomes an
    /// item at whatever its weight came to.
    pub fn from_priceable(other: &dyn Priceable) -> Self {
        Item {
            name: other.name().to_string(),
            unit_price: other.price(),
        }
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

impl Priceable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Weighted Item
// =============================================================================

/// An item priced by weight (e.g. produce, meat counter).
///
/// `price()` is `price_per_unit_weight × weight` truncated to whole cents.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    name: String,
    price_per_unit_weight: Money,
    weight: f64,
}

impl WeightedItem {
    /// Creates a weighed item.
    ///
    /// ## Errors
    /// `ConfigurationError` for an empty name, a negative price, or a weight
    /// that is negative, NaN or infinite.
    pub fn new(
        name: impl Into<String>,
        price_per_unit_weight_cents: i64,
        weight: f64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents("price per unit weight", price_per_unit_weight_cents)?;
        validate_weight(weight)?;

        Ok(WeightedItem {
            name,
            price_per_unit_weight: Money::from_cents(price_per_unit_weight_cents),
            weight,
        })
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn price_per_unit_weight(&self) -> Money {
        self.price_per_unit_weight
    }
}

impl Priceable for WeightedItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        Money::from_weight(self.price_per_unit_weight, self.weight)
    }
}

// =============================================================================
// Taxed Wrapper
// =============================================================================

/// Attaches tax to any item without changing how it is priced.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxed<P> {
    inner: P,
    rate: TaxRate,
}

impl<P: Priceable> Taxed<P> {
    /// Wraps an item at the default rate (10%).
    pub fn new(inner: P) -> Self {
        Taxed {
            inner,
            rate: TaxRate::default(),
        }
    }

    /// Wraps an item at a specific rate.
    pub fn with_rate(inner: P, rate: TaxRate) -> ValidationResult<Self> {
        validate_tax_rate_bps(rate.bps())?;
        Ok(Taxed { inner, rate })
    }

    /// Returns the wrapped item.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priceable> Priceable for Taxed<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn price(&self) -> Money {
        self.inner.price()
    }

    fn as_taxable(&self) -> Option<&dyn Taxable> {
        Some(self)
    }
}

impl<P: Priceable> Taxable for Taxed<P> {
    fn tax_rate(&self) -> TaxRate {
        self.rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    #[test]
    fn test_item_price_is_unit_price() {
        let pencil = Item::new("Pencil", 99).unwrap();
        assert_eq!(pencil.name(), "Pencil");
        assert_eq!(pencil.price(), Money::from_cents(99));
        assert_eq!(pencil.unit_price().cents(), 99);
        assert!(pencil.as_taxable().is_none());
    }

    #[test]
    fn test_item_rejects_bad_input() {
        assert!(matches!(
            Item::new("Beans", -1),
            Err(ConfigurationError::Negative { .. })
        ));
        assert!(matches!(
            Item::new("", 100),
            Err(ConfigurationError::Required { .. })
        ));
        assert!(Item::new("Free sample", 0).is_ok());
    }

    #[test]
    fn test_long_names_are_accepted() {
        let name = "Extra large family pack ".repeat(20);
        assert_eq!(Item::new(name.as_str(), 100).unwrap().name(), name);
        assert!(WeightedItem::new(name.as_str(), 500, 1.0).is_ok());
    }

    #[test]
    fn test_weighted_item_truncates() {
        let beef = WeightedItem::new("Beef", 500, 1.999).unwrap();
        assert_eq!(beef.price().cents(), 999);
        assert_eq!(beef.weight(), 1.999);

        let apples = WeightedItem::new("Apples", 199, 2.5).unwrap();
        // 497.5 → 497
        assert_eq!(apples.price().cents(), 497);
    }

    #[test]
    fn test_weighted_item_rejects_bad_input() {
        assert!(WeightedItem::new("Beef", -500, 1.0).is_err());
        assert!(WeightedItem::new("Beef", 500, -1.0).is_err());
        assert!(WeightedItem::new("Beef", 500, f64::NAN).is_err());
        assert!(WeightedItem::new("Beef", 500, 0.0).is_ok());
    }

    #[test]
    fn test_snapshot_freezes_price() {
        let beef = WeightedItem::new("Beef", 500, 1.999).unwrap();
        let frozen = Item::from_priceable(&beef);
        assert_eq!(frozen.name(), "Beef");
        assert_eq!(frozen.price().cents(), 999);
    }

    #[test]
    fn test_taxed_item_default_rate() {
        let lamp = Taxed::new(Item::new("Lamp", 1005).unwrap());
        assert_eq!(lamp.name(), "Lamp");
        assert_eq!(lamp.price().cents(), 1005);
        // 100.5 rounds to 101
        assert_eq!(lamp.tax().cents(), 101);
        assert_eq!(lamp.tax_rate().bps(), 1000);
    }

    #[test]
    fn test_taxed_is_visible_through_trait_object() {
        let boxed: Box<dyn Priceable> = Box::new(Taxed::new(Item::new("Soap", 250).unwrap()));
        let tax = boxed.as_taxable().map(|t| t.tax());
        assert_eq!(tax, Some(Money::from_cents(25)));
    }

    #[test]
    fn test_taxed_weighted_item() {
        let charcoal = Taxed::with_rate(
            WeightedItem::new("Charcoal", 300, 2.0).unwrap(),
            TaxRate::from_bps(825),
        )
        .unwrap();
        assert_eq!(charcoal.price().cents(), 600);
        // 49.5 rounds to 50
        assert_eq!(charcoal.tax().cents(), 50);
        assert_eq!(charcoal.into_inner().weight(), 2.0);
    }

    #[test]
    fn test_taxed_rejects_rate_over_whole() {
        let item = Item::new("Lamp", 100).unwrap();
        assert!(Taxed::with_rate(item, TaxRate::from_bps(20_000)).is_err());
    }
}
