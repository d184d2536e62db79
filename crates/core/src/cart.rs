//! Cart lines and the pricing rules.
//!
//! A [`Cart`] is an ordered collection of [`CartLine`]s plus the cart-wide
//! [`PaymentMethod`]. Subtotals are derived (`unit price × quantity`), never
//! stored, so the subtotal invariant holds after any mutation.
//!
//! Pricing, in order:
//! 1. Item total: sum of all line subtotals.
//! 2. Surcharge: item total × the payment method's multiplier.
//! 3. Delivery fee: a flat unit price × the number of distinct tags across
//!    all cart lines. Distinct *tags*, not distinct items - a coffee tagged
//!    `tradicional` and `gelado` contributes two units on its own.
//! 4. Grand total: surcharged item total + delivery fee.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CoffeeId, CurrencyCode, Money, PaymentMethod};

/// Flat delivery fee charged per distinct tag in the cart.
#[must_use]
pub fn delivery_unit_price() -> Decimal {
    Decimal::new(375, 2) // 3.75
}

/// One coffee in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog identifier of the coffee.
    pub id: CoffeeId,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Category tags, as delivered by the catalog.
    pub tags: Vec<String>,
    /// Price for a single unit.
    pub unit_price: Money,
    /// Image path for display.
    pub image: String,
    /// Units of this coffee in the cart. Never below 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: `unit price × quantity`, exact decimal arithmetic.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        Money::new(
            self.unit_price.amount * Decimal::from(self.quantity),
            self.unit_price.currency_code,
        )
    }
}

/// The shopping cart: selected coffees plus the payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    payment_method: PaymentMethod,
}

impl Cart {
    /// Create an empty cart. Payment defaults to credit until the customer
    /// picks another method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The cart-wide payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Select the payment method for the whole cart.
    pub const fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Look up a line by coffee id.
    #[must_use]
    pub fn line(&self, id: &CoffeeId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Add a line to the cart.
    ///
    /// Adding a coffee that is already in the cart merges into the existing
    /// line by summing quantities. Quantities below 1 are clamped to 1.
    pub fn add_line(&mut self, mut line: CartLine) {
        line.quantity = line.quantity.max(1);
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Increment a line's quantity. Unbounded. Returns `false` if the line
    /// is not in the cart.
    pub fn increment(&mut self, id: &CoffeeId) -> bool {
        match self.lines.iter_mut().find(|line| &line.id == id) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement a line's quantity, flooring at 1. Returns `false` if the
    /// line is not in the cart.
    pub fn decrement(&mut self, id: &CoffeeId) -> bool {
        match self.lines.iter_mut().find(|line| &line.id == id) {
            Some(line) => {
                if line.quantity > 1 {
                    line.quantity -= 1;
                }
                true
            }
            None => false,
        }
    }

    /// Remove the line with this id. Returns `false` if no such line.
    pub fn remove(&mut self, id: &CoffeeId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        self.lines.len() != before
    }

    /// Currency of the cart. Falls back to the default currency for an
    /// empty cart.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.lines
            .first()
            .map_or_else(CurrencyCode::default, |line| line.unit_price.currency_code)
    }

    /// Sum of all line subtotals, before any adjustment.
    #[must_use]
    pub fn item_total(&self) -> Money {
        let total = self
            .lines
            .iter()
            .map(|line| line.subtotal().amount)
            .sum::<Decimal>();
        Money::new(total, self.currency())
    }

    /// Number of distinct tags across all cart lines.
    #[must_use]
    pub fn distinct_tag_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|line| line.tags.iter())
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Delivery fee: flat unit price × distinct tag count.
    #[must_use]
    pub fn delivery_fee(&self) -> Money {
        let count = Decimal::from(self.distinct_tag_count());
        Money::new(delivery_unit_price() * count, self.currency())
    }

    /// Item total after the payment-method surcharge.
    #[must_use]
    pub fn surcharged_item_total(&self) -> Money {
        Money::new(
            self.item_total().amount * self.payment_method.surcharge_rate(),
            self.currency(),
        )
    }

    /// Grand total: surcharged item total + delivery fee.
    #[must_use]
    pub fn grand_total(&self) -> Money {
        Money::new(
            self.surcharged_item_total().amount + self.delivery_fee().amount,
            self.currency(),
        )
    }
}
