//! # Meadowlark Core
//!
//! Domain logic for the Meadowlark Travel site, free of HTTP plumbing.
//!
//! Every form on the site follows the same Post/Redirect/Get lifecycle:
//!
//! ```text
//! RECEIVED ─▶ VALIDATING ─┬─▶ VALID ─▶ ACTING ─┬─▶ ACTED_OK   ─▶ RESPOND_SUCCESS
//!                         │                    └─▶ ACTED_FAIL ─▶ RESPOND_FAILURE
//!                         └─▶ INVALID ──────────────────────────▶ RESPOND_FAILURE
//! ```
//!
//! This crate owns the pieces of that lifecycle that can be decided without
//! I/O:
//!
//! - [`validation`]: the shared email validator
//! - [`negotiation`]: JSON-vs-document reply mode from request headers
//! - [`flash`] and [`session`]: one-shot notifications carried across a redirect
//! - [`cart`]: the session cart and order placement
//! - [`newsletter`]: signup records and the repository seam
//! - [`reply`]: JSON bodies returned to script-driven clients
//! - [`environment`]: injected clock and order number generator
//!
//! The web crate is the imperative shell: it loads the [`session::SessionData`]
//! at request start, calls into this crate, and writes the session back.

pub mod cart;
pub mod environment;
pub mod error;
pub mod flash;
#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;
pub mod negotiation;
pub mod newsletter;
pub mod reply;
pub mod session;
pub mod validation;

pub use cart::{Billing, Cart, CartItem, OrderNumber};
pub use environment::{Clock, OrderNumberGenerator, RandomOrderNumbers, SystemClock};
pub use error::{Error, Result};
pub use flash::{FlashKind, FlashMessage};
pub use negotiation::{negotiate, ReplyMode};
pub use newsletter::{
    NewsletterSignup, NoopSignupRepository, SaveError, SignupOutcome, SignupRepository,
};
pub use reply::JsonReply;
pub use session::SessionData;
pub use validation::{validate_email, Validation};
