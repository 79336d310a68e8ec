//! # Declarative Configuration
//!
//! Serde descriptions of items and pricing rules, as they appear in settings
//! files or on the command line, and their conversion into runtime types.
//!
//! ## Settings Example (TOML)
//! ```toml
//! [register.pricing]
//! kind = "coupon"
//! item_name = "Milk"
//! discount = 0.15
//!
//! [[basket]]
//! name = "Milk"
//! price_cents = 200
//!
//! [[basket]]
//! name = "Beef"
//! price_cents = 500
//! weight = 1.999
//! ```
//!
//! Reading the file is the binary's job; this module only validates and
//! converts what was read.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, CoreError, CoreResult};
use crate::item::{Item, Priceable, Taxed, WeightedItem};
use crate::pricing::{Coupon, GroupedPricing, PricingRule, RainCheck, TwoForOnePricing};
use crate::register::Register;
use crate::types::{DiscountRate, TaxRate};
use crate::validation::ValidationResult;

/// Suffix marking an item argument as taxable: `Lamp=1999+tax`.
const TAXABLE_SUFFIX: &str = "+tax";

// =============================================================================
// Items
// =============================================================================

/// An item to scan, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    /// Unit price, or price per unit of weight when `weight` is set.
    pub price_cents: i64,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub taxable: bool,
    /// Overrides the default 10% rate for taxable items.
    #[serde(default)]
    pub tax_rate_bps: Option<u32>,
}

impl ItemConfig {
    /// Builds the runtime item.
    pub fn to_priceable(&self) -> CoreResult<Box<dyn Priceable>> {
        self.build().map_err(|source| CoreError::InvalidItem {
            name: self.name.clone(),
            source,
        })
    }

    fn build(&self) -> ValidationResult<Box<dyn Priceable>> {
        let rate = self.tax_rate_bps.map(TaxRate::from_bps).unwrap_or_default();

        match self.weight {
            Some(weight) => {
                let item = WeightedItem::new(self.name.as_str(), self.price_cents, weight)?;
                self.wrap(item, rate)
            }
            None => {
                let item = Item::new(self.name.as_str(), self.price_cents)?;
                self.wrap(item, rate)
            }
        }
    }

    fn wrap<P: Priceable + 'static>(
        &self,
        item: P,
        rate: TaxRate,
    ) -> ValidationResult<Box<dyn Priceable>> {
        if self.taxable {
            Ok(Box::new(Taxed::with_rate(item, rate)?))
        } else {
            Ok(Box::new(item))
        }
    }
}

/// Parses the command-line form `NAME=CENTS[@WEIGHT][+tax]`.
///
/// ## Example
/// ```rust
/// use store_core::config::ItemConfig;
///
/// let beef: ItemConfig = "Beef=500@1.999".parse().unwrap();
/// assert_eq!(beef.price_cents, 500);
/// assert_eq!(beef.weight, Some(1.999));
///
/// let lamp: ItemConfig = "Lamp=1999+tax".parse().unwrap();
/// assert!(lamp.taxable);
/// ```
impl FromStr for ItemConfig {
    type Err = ConfigurationError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigurationError::InvalidFormat {
            field: format!("item '{arg}'"),
            reason: reason.to_string(),
        };

        let (body, taxable) = match arg.strip_suffix(TAXABLE_SUFFIX) {
            Some(body) => (body, true),
            None => (arg, false),
        };

        let (name, pricing) = body
            .rsplit_once('=')
            .ok_or_else(|| invalid("expected NAME=CENTS[@WEIGHT][+tax]"))?;

        let (price, weight) = match pricing.split_once('@') {
            Some((price, weight)) => {
                let weight = weight
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid("weight is not a number"))?;
                (price, Some(weight))
            }
            None => (pricing, None),
        };

        let price_cents = price
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("price must be whole cents"))?;

        Ok(ItemConfig {
            name: name.trim().to_string(),
            price_cents,
            weight,
            taxable,
            tax_rate_bps: None,
        })
    }
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// A pricing rule, tagged by `kind`.
///
/// Discounts are fractions of the price (`0.15` = 15% off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRuleConfig {
    TwoForOne {
        item_name: String,
        single_price_cents: i64,
    },
    Grouped {
        items_required: Vec<String>,
        discount: f64,
    },
    Coupon {
        item_name: String,
        discount: f64,
    },
    RainCheck {
        item_name: String,
        discounted_price_cents: i64,
    },
}

impl PricingRuleConfig {
    fn kind(&self) -> &'static str {
        match self {
            PricingRuleConfig::TwoForOne { .. } => "two_for_one",
            PricingRuleConfig::Grouped { .. } => "grouped",
            PricingRuleConfig::Coupon { .. } => "coupon",
            PricingRuleConfig::RainCheck { .. } => "rain_check",
        }
    }

    fn build(&self) -> ValidationResult<PricingRule> {
        let rule: PricingRule = match self {
            PricingRuleConfig::TwoForOne {
                item_name,
                single_price_cents,
            } => TwoForOnePricing::new(item_name.as_str(), *single_price_cents)?.into(),
            PricingRuleConfig::Grouped {
                items_required,
                discount,
            } => {
                let discount = DiscountRate::from_fraction(*discount)?;
                GroupedPricing::new(items_required.iter().cloned(), discount).into()
            }
            PricingRuleConfig::Coupon {
                item_name,
                discount,
            } => Coupon::new(item_name.as_str(), DiscountRate::from_fraction(*discount)?).into(),
            PricingRuleConfig::RainCheck {
                item_name,
                discounted_price_cents,
            } => RainCheck::new(item_name.as_str(), *discounted_price_cents)?.into(),
        };
        Ok(rule)
    }
}

impl TryFrom<&PricingRuleConfig> for PricingRule {
    type Error = CoreError;

    fn try_from(config: &PricingRuleConfig) -> Result<Self, Self::Error> {
        config.build().map_err(|source| CoreError::InvalidPricingRule {
            kind: config.kind(),
            source,
        })
    }
}

// =============================================================================
// Register
// =============================================================================

/// How to set up a register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Absent means plain-sum pricing.
    #[serde(default)]
    pub pricing: Option<PricingRuleConfig>,
}

impl RegisterConfig {
    /// Builds a register with an empty receipt.
    pub fn build(&self) -> CoreResult<Register> {
        match &self.pricing {
            Some(pricing) => Ok(Register::with_scheme(PricingRule::try_from(pricing)?)),
            None => Ok(Register::new()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingScheme;

    #[test]
    fn test_parse_item_argument() {
        let beans: ItemConfig = "Beans=499".parse().unwrap();
        assert_eq!(
            beans,
            ItemConfig {
                name: "Beans".to_string(),
                price_cents: 499,
                weight: None,
                taxable: false,
                tax_rate_bps: None,
            }
        );

        let beef: ItemConfig = "Ground Beef = 500 @ 1.999".parse().unwrap();
        assert_eq!(beef.name, "Ground Beef");
        assert_eq!(beef.weight, Some(1.999));

        let charcoal: ItemConfig = "Charcoal=300@2+tax".parse().unwrap();
        assert!(charcoal.taxable);
        assert_eq!(charcoal.weight, Some(2.0));
    }

    #[test]
    fn test_parse_item_argument_errors() {
        assert!(matches!(
            "Beans".parse::<ItemConfig>(),
            Err(ConfigurationError::InvalidFormat { .. })
        ));
        assert!("Beans=4.99".parse::<ItemConfig>().is_err());
        assert!("Beef=500@heavy".parse::<ItemConfig>().is_err());
    }

    #[test]
    fn test_item_config_builds_variants() {
        let beef: ItemConfig = "Beef=500@1.999".parse().unwrap();
        assert_eq!(beef.to_priceable().unwrap().price().cents(), 999);

        let lamp: ItemConfig = "Lamp=1005+tax".parse().unwrap();
        let lamp = lamp.to_priceable().unwrap();
        assert_eq!(lamp.as_taxable().map(|t| t.tax().cents()), Some(101));

        let plain: ItemConfig = "Bread=300".parse().unwrap();
        assert!(plain.to_priceable().unwrap().as_taxable().is_none());
    }

    #[test]
    fn test_item_config_custom_tax_rate() {
        let config = ItemConfig {
            name: "Lamp".to_string(),
            price_cents: 1000,
            weight: None,
            taxable: true,
            tax_rate_bps: Some(825),
        };
        let lamp = config.to_priceable().unwrap();
        assert_eq!(lamp.as_taxable().map(|t| t.tax().cents()), Some(83));
    }

    #[test]
    fn test_item_config_validation_error_names_item() {
        let config: ItemConfig = "Beef=-500@1".parse().unwrap();
        let err = config.to_priceable().unwrap_err();
        assert!(matches!(err, CoreError::InvalidItem { ref name, .. } if name == "Beef"));
    }

    #[test]
    fn test_pricing_rule_config_from_json() {
        let json = r#"{"kind":"grouped","items_required":["Bread","Butter"],"discount":0.2}"#;
        let config: PricingRuleConfig = serde_json::from_str(json).unwrap();
        let rule = PricingRule::try_from(&config).unwrap();

        assert_eq!(
            rule,
            PricingRule::Grouped(GroupedPricing::new(
                ["Bread", "Butter"],
                DiscountRate::from_bps(2000).unwrap()
            ))
        );
    }

    #[test]
    fn test_pricing_rule_config_rejects_bad_discount() {
        let config = PricingRuleConfig::Coupon {
            item_name: "Milk".to_string(),
            discount: 1.5,
        };
        let err = PricingRule::try_from(&config).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidPricingRule { kind: "coupon", .. }
        ));
    }

    #[test]
    fn test_pricing_rule_config_keeps_discount_exact() {
        let config = PricingRuleConfig::Coupon {
            item_name: "Milk".to_string(),
            discount: 0.00004,
        };
        let rule = PricingRule::try_from(&config).unwrap();
        let items: Vec<Box<dyn Priceable>> = vec![Box::new(Item::new("Milk", 100_000).unwrap())];
        assert_eq!(rule.apply(&items).cents(), 99_996);
    }

    #[test]
    fn test_register_config_build() {
        let register = RegisterConfig::default().build().unwrap();
        assert!(register.scheme().is_none());

        let config = RegisterConfig {
            pricing: Some(PricingRuleConfig::RainCheck {
                item_name: "Eggs".to_string(),
                discounted_price_cents: 250,
            }),
        };
        let mut register = config.build().unwrap();
        register.scan(Item::new("Eggs", 400).unwrap());
        assert_eq!(register.subtotal().cents(), 250);
    }

    #[test]
    fn test_register_config_rejects_negative_price() {
        let config = RegisterConfig {
            pricing: Some(PricingRuleConfig::TwoForOne {
                item_name: "Soap".to_string(),
                single_price_cents: -100,
            }),
        };
        assert!(config.build().is_err());
    }
}
