//! Views and the renderer seam.
//!
//! Handlers describe *what* to show as a [`View`] value; a [`Renderer`] turns
//! it into HTML. The production renderer is [`MaudRenderer`]; tests can swap
//! in their own (for instance one that fails on purpose).

mod templates;

pub use templates::MaudRenderer;

use meadowlark_core::{Cart, FlashMessage};

/// Everything a page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Landing page.
    Home,
    /// About page.
    About,
    /// Hood River tour.
    HoodRiver,
    /// Oregon Coast tour.
    OregonCoast,
    /// Group rate request form.
    RequestGroupRate,
    /// Generic thank-you page.
    ThankYou,
    /// Generic "something went wrong" page.
    Error,
    /// Newsletter signup form.
    Newsletter,
    /// Newsletter archive; the redirect target after signup.
    NewsletterArchive,
    /// Nursery rhyme filled in from `/data/nursery-rhyme` by a page script.
    NurseryRhyme,
    /// Photo contest entry form.
    VacationPhoto {
        /// Year embedded in the form action.
        year: i32,
        /// Month (1-12) embedded in the form action.
        month: u32,
    },
    /// Cart contents with the checkout form.
    Cart {
        /// The visitor's cart, if any.
        cart: Option<&'a Cart>,
    },
    /// Order confirmation page.
    CartThankYou {
        /// The placed order.
        cart: &'a Cart,
    },
    /// Order confirmation email body.
    CartThankYouEmail {
        /// The placed order.
        cart: &'a Cart,
    },
    /// 404 page.
    NotFound,
    /// 500 page.
    ServerError,
}

impl View<'_> {
    /// Template-style name, used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::HoodRiver => "tours/hood-river",
            Self::OregonCoast => "tours/oregon-coast",
            Self::RequestGroupRate => "tours/request-group-rate",
            Self::ThankYou => "thank-you",
            Self::Error => "error",
            Self::Newsletter => "newsletter",
            Self::NewsletterArchive => "newsletter/archive",
            Self::NurseryRhyme => "nursery-rhyme",
            Self::VacationPhoto { .. } => "contest/vacation-photo",
            Self::Cart { .. } => "cart",
            Self::CartThankYou { .. } => "cart-thank-you",
            Self::CartThankYouEmail { .. } => "email/cart-thank-you",
            Self::NotFound => "404",
            Self::ServerError => "500",
        }
    }
}

/// Per-request data every page layout sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Flash message consumed for this page.
    pub flash: Option<FlashMessage>,
    /// Whether to include the browser test harness.
    pub show_tests: bool,
}

/// Rendering failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to render {view}: {reason}")]
pub struct RenderError {
    /// Which view failed.
    pub view: &'static str,
    /// Why.
    pub reason: String,
}

/// Turns views into HTML.
pub trait Renderer: Send + Sync {
    /// Render `view` with the shared page `context`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the view cannot be produced.
    fn render(&self, view: &View<'_>, context: &PageContext) -> Result<String, RenderError>;
}
