//! # Cart Types
//!
//! The shopping cart held in the browser session between the
//! create-payment and execute-payment legs.

use crate::money::{Currency, Price};
use serde::{Deserialize, Serialize};

/// Quantity is pinned for every item: the storefront only submits a name
/// and a unit price per line.
pub const ITEM_QUANTITY: u32 = 1;

/// A single item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name (e.g. "Rose")
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl CartItem {
    /// Create a cart item
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An ordered sequence of cart items.
///
/// Owned by the active browser session for the duration between payment
/// creation and execution; it is never persisted anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create a cart from items
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Calculate the cart total: the sum of all item prices.
    ///
    /// An empty cart totals zero.
    pub fn total(&self) -> Price {
        let amount: i64 = self.items.iter().map(|item| item.price.amount).sum();
        Price::from_cents(amount, self.currency())
    }

    /// The cart's currency. Single-currency shop, so this is fixed.
    pub fn currency(&self) -> Currency {
        Currency::USD
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get item count
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
