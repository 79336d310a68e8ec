//! # Receipt
//!
//! The ordered record of one transaction.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Register::new() ──► Receipt (current) ◄── Register::scan() appends    │
//! │                            │                                            │
//! │                            │ Register::total()                          │
//! │                            ▼                                            │
//! │                       Receipt (finalized, owned by caller)              │
//! │                       read-only: items, total, output, summary          │
//! │                                                                         │
//! │   Appending is crate-internal, so once a receipt leaves its register    │
//! │   nothing can add to it.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::item::Priceable;
use crate::money::Money;
use crate::pricing::plain_total;
use crate::types::{ReceiptLine, ReceiptSummary};

/// Separator printed between the item lines and the total.
pub const RECEIPT_SEPARATOR: &str = "------------------";

/// Items scanned during one transaction, in scan order.
#[derive(Debug)]
pub struct Receipt {
    id: Uuid,
    opened_at: DateTime<Utc>,
    items: Vec<Box<dyn Priceable>>,
}

impl Receipt {
    /// Creates a new empty receipt.
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Appends an item. O(1), no validation.
    pub(crate) fn add(&mut self, item: Box<dyn Priceable>) {
        self.items.push(item);
    }

    /// The items as scanned.
    pub fn items(&self) -> &[Box<dyn Priceable>] {
        &self.items
    }

    /// Plain sum of item prices; pricing rules are the register's concern.
    pub fn total(&self) -> Money {
        plain_total(&self.items)
    }

    /// Sum of tax over the taxable items.
    pub fn tax_total(&self) -> Money {
        self.items
            .iter()
            .filter_map(|item| item.as_taxable())
            .map(|taxable| taxable.tax())
            .sum()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the receipt as text.
    ///
    /// ## Format
    /// ```text
    /// Receipt:
    /// Beans: $4.99
    /// Pencil: $0.99
    /// ------------------
    /// TOTAL: $5.98
    /// ```
    pub fn output(&self) -> String {
        let mut text = String::from("Receipt:\n");
        for item in &self.items {
            text.push_str(&format!("{}: {}\n", item.name(), item.price()));
        }
        text.push_str(RECEIPT_SEPARATOR);
        text.push('\n');
        text.push_str(&format!("TOTAL: {}", self.total()));
        text
    }

    /// Serializable snapshot of this receipt.
    pub fn summary(&self) -> ReceiptSummary {
        let lines = self
            .items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name().to_string(),
                price_cents: item.price().cents(),
                tax_cents: item.as_taxable().map(|taxable| taxable.tax().cents()),
            })
            .collect();

        ReceiptSummary {
            id: self.id,
            opened_at: self.opened_at,
            lines,
            total_cents: self.total().cents(),
            tax_cents: self.tax_total().cents(),
        }
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}
