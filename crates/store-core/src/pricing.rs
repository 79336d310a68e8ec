//! # Pricing Rules
//!
//! A pricing scheme turns the full list of scanned items into an amount due.
//! Rules are not per-item: several need to count across the whole list, so
//! every rule sees the entire receipt in one call.
//!
//! ## Available Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule              Matches by name        Charges                       │
//! │  ────────────────  ─────────────────────  ──────────────────────────── │
//! │  TwoForOnePricing  every match            2 of each 3 at single_price   │
//! │                                           (non-matching items: nothing) │
//! │  GroupedPricing    the required set       discount on the set, only if  │
//! │                                           the set is exactly present    │
//! │  Coupon            first match only       % off that one item           │
//! │  RainCheck         first match only       flat price for that one item  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules hold only their configured parameters. `apply` is a pure function
//! of those parameters and the item list.

use crate::item::Priceable;
use crate::money::Money;
use crate::types::DiscountRate;
use crate::validation::{validate_price_cents, ValidationResult};

/// Computes the charge for an entire ordered list of items.
pub trait PricingScheme {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money;
}

/// Sum of `price()` over all items, no rule applied.
pub fn plain_total(items: &[Box<dyn Priceable>]) -> Money {
    items.iter().map(|item| item.price()).sum()
}

/// Charges the first item named `name` with `charge`, every other item at
/// full price.
fn charge_first_match(
    items: &[Box<dyn Priceable>],
    name: &str,
    charge: impl Fn(Money) -> Money,
) -> Money {
    let mut applied = false;
    items
        .iter()
        .map(|item| {
            if !applied && item.name() == name {
                applied = true;
                charge(item.price())
            } else {
                item.price()
            }
        })
        .sum()
}

// =============================================================================
// Two For One
// =============================================================================

/// Buy two, get the third free, for a single product.
///
/// Only matching items are charged; everything else on the list contributes
/// nothing to this rule's total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoForOnePricing {
    item_name: String,
    single_price: Money,
}

impl TwoForOnePricing {
    pub fn new(item_name: impl Into<String>, single_price_cents: i64) -> ValidationResult<Self> {
        validate_price_cents("single price", single_price_cents)?;
        Ok(TwoForOnePricing {
            item_name: item_name.into(),
            single_price: Money::from_cents(single_price_cents),
        })
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn single_price(&self) -> Money {
        self.single_price
    }
}

impl PricingScheme for TwoForOnePricing {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money {
        let matching = items
            .iter()
            .filter(|item| item.name() == self.item_name)
            .count() as i64;
        let groups_of_three = matching / 3;
        let remainder = matching % 3;
        self.single_price * (groups_of_three * 2 + remainder)
    }
}

// =============================================================================
// Grouped
// =============================================================================

/// Discount on a set of items bought together.
///
/// The rule fires only when the number of items whose name is in the set is
/// exactly the size of the set (duplicates count). Otherwise nothing is
/// discounted and the whole list is charged at full price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPricing {
    items_required: Vec<String>,
    discount: DiscountRate,
}

impl GroupedPricing {
    pub fn new<I, S>(items_required: I, discount: DiscountRate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupedPricing {
            items_required: items_required.into_iter().map(Into::into).collect(),
            discount,
        }
    }

    pub fn items_required(&self) -> &[String] {
        &self.items_required
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    fn is_required(&self, name: &str) -> bool {
        self.items_required.iter().any(|required| required == name)
    }
}

impl PricingScheme for GroupedPricing {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money {
        let matched = items
            .iter()
            .filter(|item| self.is_required(item.name()))
            .count();
        if matched != self.items_required.len() {
            return plain_total(items);
        }

        items
            .iter()
            .map(|item| {
                if self.is_required(item.name()) {
                    item.price().apply_discount(self.discount)
                } else {
                    item.price()
                }
            })
            .sum()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// Percentage off the first matching item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    item_name: String,
    discount: DiscountRate,
}

impl Coupon {
    pub fn new(item_name: impl Into<String>, discount: DiscountRate) -> Self {
        Coupon {
            item_name: item_name.into(),
            discount,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }
}

impl PricingScheme for Coupon {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money {
        charge_first_match(items, &self.item_name, |price| {
            price.apply_discount(self.discount)
        })
    }
}

// =============================================================================
// Rain Check
// =============================================================================

/// Honors an earlier sale price for the first matching item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainCheck {
    item_name: String,
    discounted_price: Money,
}

impl RainCheck {
    pub fn new(item_name: impl Into<String>, discounted_price_cents: i64) -> ValidationResult<Self> {
        validate_price_cents("discounted price", discounted_price_cents)?;
        Ok(RainCheck {
            item_name: item_name.into(),
            discounted_price: Money::from_cents(discounted_price_cents),
        })
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn discounted_price(&self) -> Money {
        self.discounted_price
    }
}

impl PricingScheme for RainCheck {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money {
        charge_first_match(items, &self.item_name, |_| self.discounted_price)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// The closed set of rules a register can be configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingRule {
    TwoForOne(TwoForOnePricing),
    Grouped(GroupedPricing),
    Coupon(Coupon),
    RainCheck(RainCheck),
}

impl PricingRule {
    /// Short machine name, as used in settings files.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingRule::TwoForOne(_) => "two_for_one",
            PricingRule::Grouped(_) => "grouped",
            PricingRule::Coupon(_) => "coupon",
            PricingRule::RainCheck(_) => "rain_check",
        }
    }
}

impl PricingScheme for PricingRule {
    fn apply(&self, items: &[Box<dyn Priceable>]) -> Money {
        match self {
            PricingRule::TwoForOne(rule) => rule.apply(items),
            PricingRule::Grouped(rule) => rule.apply(items),
            PricingRule::Coupon(rule) => rule.apply(items),
            PricingRule::RainCheck(rule) => rule.apply(items),
        }
    }
}

impl From<TwoForOnePricing> for PricingRule {
    fn from(rule: TwoForOnePricing) -> Self {
        PricingRule::TwoForOne(rule)
    }
}

impl From<GroupedPricing> for PricingRule {
    fn from(rule: GroupedPricing) -> Self {
        PricingRule::Grouped(rule)
    }
}

impl From<Coupon> for PricingRule {
    fn from(rule: Coupon) -> Self {
        PricingRule::Coupon(rule)
    }
}

impl From<RainCheck> for PricingRule {
    fn from(rule: RainCheck) -> Self {
        PricingRule::RainCheck(rule)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
