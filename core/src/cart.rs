//! The session cart and order placement.
//!
//! A cart lives only inside the visitor's session. Checkout validates the
//! billing address, stamps the cart with an order number and billing details,
//! and hands back a snapshot for the confirmation page and email.

use crate::environment::OrderNumberGenerator;
use crate::error::{Error, Result};
use crate::session::SessionData;
use crate::validation::{validate_email, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order identifier assigned at checkout. Always a string of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Wrap an already-generated order number.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// The order number as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who pays for the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    /// Name as submitted, possibly empty.
    pub name: String,
    /// Validated email address.
    pub email: String,
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product or tour code.
    pub sku: String,
    /// Display name.
    pub name: String,
    /// How many.
    pub quantity: u32,
}

/// Session-scoped shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, in the order they were added.
    pub items: Vec<CartItem>,
    /// Billing details, set at checkout.
    pub billing: Option<Billing>,
    /// Order number, set at checkout.
    pub number: Option<OrderNumber>,
}

impl Cart {
    /// Add `item`, merging quantities when the SKU is already present.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.sku == item.sku) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns `true` when the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Place the order held in `session`.
///
/// Steps, in order: require a cart, validate `email`, assign a fresh order
/// number, attach billing. Nothing is written to the session unless every
/// check passes.
///
/// # Errors
///
/// - [`Error::CartMissing`] when the session has no cart
/// - [`Error::InvalidEmail`] when `email` fails validation
pub fn checkout(
    session: &mut SessionData,
    name: &str,
    email: &str,
    numbers: &dyn OrderNumberGenerator,
) -> Result<Cart> {
    let cart = session.cart_mut().ok_or(Error::CartMissing)?;

    if let Validation::Invalid(reason) = validate_email(email) {
        return Err(Error::InvalidEmail { reason });
    }

    cart.number = Some(numbers.next_order_number());
    cart.billing = Some(Billing {
        name: name.to_string(),
        email: email.to_string(),
    });

    Ok(cart.clone())
}
