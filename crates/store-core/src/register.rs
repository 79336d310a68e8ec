//! # Register
//!
//! Owns the open receipt and the register's pricing rule.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Operations                                  │
//! │                                                                         │
//! │  Caller Action            Register Method        State Change           │
//! │  ─────────────            ───────────────        ────────────           │
//! │                                                                         │
//! │  Swipe item ────────────► scan(item) ──────────► receipt.add(item)     │
//! │                                                                         │
//! │  Show running total ────► subtotal() ──────────► (read only)           │
//! │                                                                         │
//! │  Close transaction ─────► total() ─────────────► old receipt returned, │
//! │                                                  new empty one opened   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `scan` and `total` take `&mut self`. Sharing one register between threads
//! needs a `Mutex<Register>` around it.

use tracing::{debug, info};

use crate::item::Priceable;
use crate::money::Money;
use crate::pricing::{PricingRule, PricingScheme};
use crate::receipt::Receipt;

/// A point-of-sale register.
#[derive(Debug, Default)]
pub struct Register {
    receipt: Receipt,
    scheme: Option<PricingRule>,
}

impl Register {
    /// Creates a register that charges plain sums.
    pub fn new() -> Self {
        Register {
            receipt: Receipt::new(),
            scheme: None,
        }
    }

    /// Creates a register that prices every receipt with `scheme`.
    pub fn with_scheme(scheme: impl Into<PricingRule>) -> Self {
        Register {
            receipt: Receipt::new(),
            scheme: Some(scheme.into()),
        }
    }

    /// The configured pricing rule, if any.
    pub fn scheme(&self) -> Option<&PricingRule> {
        self.scheme.as_ref()
    }

    /// Read-only view of the open receipt.
    pub fn current(&self) -> &Receipt {
        &self.receipt
    }

    /// Adds an item to the open receipt.
    pub fn scan<P: Priceable + 'static>(&mut self, item: P) {
        debug!(
            receipt_id = %self.receipt.id(),
            item = item.name(),
            price_cents = item.price().cents(),
            "Item scanned"
        );
        self.receipt.add(Box::new(item));
    }

    /// Amount due for the open receipt so far.
    ///
    /// Uses the pricing rule when one is configured, otherwise the plain sum.
    pub fn subtotal(&self) -> Money {
        match &self.scheme {
            Some(scheme) => scheme.apply(self.receipt.items()),
            None => self.receipt.total(),
        }
    }

    /// Closes the transaction.
    ///
    /// Returns the open receipt and starts a new empty one. Only the new
    /// receipt is affected by later scans.
    pub fn total(&mut self) -> Receipt {
        let finished = std::mem::take(&mut self.receipt);
        info!(
            receipt_id = %finished.id(),
            items = finished.len(),
            total_cents = finished.total().cents(),
            "Receipt finalized"
        );
        finished
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
