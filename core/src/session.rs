//! Typed view of a visitor's session.
//!
//! The web layer loads a [`SessionData`] when a request starts, lets handlers
//! mutate it through the methods below, and writes it back before responding.
//! Concurrent requests from the same visitor each load their own copy, so the
//! last one to write wins.

use crate::cart::Cart;
use crate::flash::FlashMessage;
use serde::{Deserialize, Serialize};

/// Everything the site keeps per visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    flash: Option<FlashMessage>,
    cart: Option<Cart>,
}

impl SessionData {
    /// Store `message` for the next rendered page, replacing any pending one.
    pub fn set_flash(&mut self, message: FlashMessage) {
        self.flash = Some(message);
    }

    /// Take the pending flash message, leaving none behind.
    pub fn consume_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }

    /// Peek at the pending flash message without consuming it.
    #[must_use]
    pub const fn pending_flash(&self) -> Option<&FlashMessage> {
        self.flash.as_ref()
    }

    /// The visitor's cart, if one has been started.
    #[must_use]
    pub const fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Mutable access to the visitor's cart, if one has been started.
    pub fn cart_mut(&mut self) -> Option<&mut Cart> {
        self.cart.as_mut()
    }

    /// The visitor's cart, starting an empty one if needed.
    pub fn cart_or_default(&mut self) -> &mut Cart {
        self.cart.get_or_insert_with(Cart::default)
    }

    /// Replace the visitor's cart.
    pub fn put_cart(&mut self, cart: Cart) {
        self.cart = Some(cart);
    }
}
