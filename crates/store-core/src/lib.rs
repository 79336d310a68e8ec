//! # store-core: Pure Business Logic for the Store Register
//!
//! This crate is the **heart** of the register. It contains the pricing
//! engine and the transaction lifecycle as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Register Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  register binary (apps/register)                │   │
//! │  │     settings file + --item specs ──► scan ──► print receipt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ store-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │  pricing  │  │  receipt  │  │ register  │  │   │
//! │  │   │ Priceable │  │ Coupon    │  │  Receipt  │  │ scan      │  │   │
//! │  │   │ Taxable   │  │ RainCheck │  │  output   │  │ subtotal  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Tax and discount rates, receipt snapshots
//! - [`item`] - `Priceable`, `Item`, `WeightedItem`, `Taxable`
//! - [`pricing`] - Pricing rules applied over a whole receipt
//! - [`receipt`] - The record of one transaction
//! - [`register`] - Scan, subtotal and total
//! - [`config`] - Serde descriptions of items and rules
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time checks
//!
//! ## Example Usage
//!
//! ```rust
//! use store_core::{Coupon, DiscountRate, Item, Register};
//!
//! let coupon = Coupon::new("Milk", DiscountRate::from_fraction(0.15).unwrap());
//! let mut register = Register::with_scheme(coupon);
//!
//! register.scan(Item::new("Milk", 200).unwrap());
//! register.scan(Item::new("Milk", 200).unwrap());
//!
//! // 15% off the first carton only
//! assert_eq!(register.subtotal().cents(), 370);
//!
//! let receipt = register.total();
//! assert_eq!(receipt.len(), 2);
//! assert!(register.subtotal().is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use store_core::Money` instead of
// `use store_core::money::Money`

pub use config::{ItemConfig, PricingRuleConfig, RegisterConfig};
pub use error::{ConfigurationError, CoreError, CoreResult};
pub use item::{Item, Priceable, Taxable, Taxed, WeightedItem};
pub use money::Money;
pub use pricing::{
    Coupon, GroupedPricing, PricingRule, PricingScheme, RainCheck, TwoForOnePricing,
};
pub use receipt::Receipt;
pub use register::Register;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate applied to taxable items unless one is given, in basis points.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;
