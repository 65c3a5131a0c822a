//! Cart and checkout.
//!
//! Checkout places the order held in the session, then sends the
//! confirmation email in the background. The reply never waits on mail
//! delivery, and a delivery failure never reaches the visitor.

use crate::error::AppError;
use crate::extractors::{Negotiated, Page, Submission};
use crate::session::VisitorSession;
use crate::state::AppState;
use crate::views::{PageContext, View};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use meadowlark_core::{cart, Cart, CartItem, FlashMessage, JsonReply, ReplyMode};
use meadowlark_mail::Email;
use serde::Deserialize;

/// Subject line of the order confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Thank you for booking your trip with Meadowlark";

const CART_PATH: &str = "/cart";

/// "Add to cart" form fields. A body that is not a form reads as an empty
/// SKU with one traveller.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemForm {
    /// Product code.
    #[serde(default)]
    pub sku: String,
    /// Display name; defaults to the SKU.
    #[serde(default)]
    pub name: String,
    /// Number of travellers.
    #[serde(default = "one")]
    pub quantity: u32,
}

const fn one() -> u32 {
    1
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            quantity: one(),
        }
    }
}

/// Checkout form fields. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingForm {
    /// Billing name.
    #[serde(default)]
    pub name: String,
    /// Billing email.
    #[serde(default)]
    pub email: String,
}

/// `GET /cart`
pub async fn show(State(state): State<AppState>, page: Page) -> Result<Html<String>, AppError> {
    let cart = page.visitor.data.cart().cloned();
    page.render(&state, View::Cart { cart: cart.as_ref() }).await
}

/// `POST /cart/add`
///
/// # Errors
///
/// Only fails if the session cannot be written.
pub async fn add(
    Negotiated(mode): Negotiated,
    mut visitor: VisitorSession,
    Submission(form): Submission<AddItemForm>,
) -> Result<Response, AppError> {
    let sku = form.sku.trim();
    if sku.is_empty() || form.quantity == 0 {
        return match mode {
            ReplyMode::Structured => {
                Ok(Json(JsonReply::error("Invalid cart item.")).into_response())
            }
            ReplyMode::Document => {
                visitor.data.set_flash(FlashMessage::danger(
                    "Sorry!",
                    "We could not add that tour to your cart.",
                ));
                visitor.save().await?;
                Ok(Redirect::to(CART_PATH).into_response())
            }
        };
    }

    let name = if form.name.trim().is_empty() {
        sku.to_string()
    } else {
        form.name.trim().to_string()
    };
    visitor.data.cart_or_default().add(CartItem {
        sku: sku.to_string(),
        name,
        quantity: form.quantity,
    });
    visitor.save().await?;
    tracing::debug!(%sku, quantity = form.quantity, "Added item to cart");

    match mode {
        ReplyMode::Structured => Ok(Json(JsonReply::success()).into_response()),
        ReplyMode::Document => Ok(Redirect::to(CART_PATH).into_response()),
    }
}

/// `POST /cart/checkout`
///
/// # Errors
///
/// - No cart in the session: error page, no email
/// - Invalid billing email: error page, no email
/// - Session write failure
pub async fn checkout(
    State(state): State<AppState>,
    Negotiated(mode): Negotiated,
    mut page: Page,
    Submission(billing): Submission<BillingForm>,
) -> Result<Response, AppError> {
    let cart = cart::checkout(
        &mut page.visitor.data,
        &billing.name,
        &billing.email,
        state.order_numbers.as_ref(),
    )?;
    page.visitor.save().await?;

    if let Some(number) = &cart.number {
        tracing::info!(order_number = %number, items = cart.items.len(), "Order placed");
    }
    send_confirmation(&state, &cart);

    match mode {
        ReplyMode::Structured => {
            let reply = cart
                .number
                .clone()
                .map_or_else(JsonReply::success, JsonReply::order_placed);
            Ok(Json(reply).into_response())
        }
        ReplyMode::Document => {
            let html = page.render(&state, View::CartThankYou { cart: &cart }).await?;
            Ok(html.into_response())
        }
    }
}

/// Render the confirmation email and hand it to the dispatcher.
///
/// A template failure is logged and the email skipped.
fn send_confirmation(state: &AppState, cart: &Cart) {
    let Some(billing) = &cart.billing else {
        return;
    };

    match state
        .renderer
        .render(&View::CartThankYouEmail { cart }, &PageContext::default())
    {
        Ok(body) => {
            drop(
                state
                    .mailer
                    .dispatch(Email::new(&billing.email, CONFIRMATION_SUBJECT, body)),
            );
        }
        Err(error) => tracing::error!(%error, "Error in email template"),
    }
}
