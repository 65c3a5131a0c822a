//! JSON bodies for [`ReplyMode::Structured`](crate::negotiation::ReplyMode) clients.
//!
//! Failures are reported with a 200 status and an `error` field, so a script
//! only has to look at the body.

use crate::cart::OrderNumber;
use serde::Serialize;

/// Body of a structured reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JsonReply {
    /// `{"success": true}`, optionally with the placed order's number.
    Success {
        /// Always `true`.
        success: bool,
        /// Present after checkout.
        #[serde(rename = "orderNumber", skip_serializing_if = "Option::is_none")]
        order_number: Option<OrderNumber>,
    },
    /// `{"error": "..."}`.
    Error {
        /// User-facing description.
        error: String,
    },
}

impl JsonReply {
    /// `{"success": true}`.
    #[must_use]
    pub const fn success() -> Self {
        Self::Success {
            success: true,
            order_number: None,
        }
    }

    /// `{"success": true, "orderNumber": "..."}`.
    #[must_use]
    pub const fn order_placed(number: OrderNumber) -> Self {
        Self::Success {
            success: true,
            order_number: Some(number),
        }
    }

    /// `{"error": message}`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
