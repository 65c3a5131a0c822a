//! HTML templates built with `maud`.

use super::{PageContext, RenderError, Renderer, View};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use meadowlark_core::Cart;

/// Compile-time templates for every [`View`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MaudRenderer;

impl Renderer for MaudRenderer {
    fn render(&self, view: &View<'_>, context: &PageContext) -> Result<String, RenderError> {
        let markup = match *view {
            View::CartThankYouEmail { cart } => order_email(cart),
            View::Home => layout("", context, home()),
            View::About => layout("About", context, about()),
            View::HoodRiver => layout(
                "Hood River",
                context,
                tour(
                    "Hood River Day Trip",
                    "hood-river",
                    "Spend a day sailing on the Columbia and enjoying craft beers in Hood River.",
                ),
            ),
            View::OregonCoast => layout(
                "Oregon Coast",
                context,
                tour(
                    "Oregon Coast Getaway",
                    "oregon-coast",
                    "Enjoy the ocean air and quaint coastal towns.",
                ),
            ),
            View::RequestGroupRate => layout("Request Group Rate", context, request_group_rate()),
            View::ThankYou => layout("Thank You", context, thank_you()),
            View::Error => layout("Error", context, error_page()),
            View::Newsletter => layout("Newsletter", context, newsletter()),
            View::NewsletterArchive => {
                layout("Newsletter Archive", context, newsletter_archive())
            }
            View::NurseryRhyme => layout("Nursery Rhyme", context, nursery_rhyme()),
            View::VacationPhoto { year, month } => {
                layout("Vacation Photo Contest", context, vacation_photo(year, month))
            }
            View::Cart { cart } => layout("Your Cart", context, cart_page(cart)),
            View::CartThankYou { cart } => layout("Thank You", context, cart_thank_you(cart)),
            View::NotFound => layout("Not Found", context, not_found()),
            View::ServerError => layout("Server Error", context, server_error()),
        };
        Ok(markup.into_string())
    }
}

fn layout(title: &str, context: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title {
                    "Meadowlark Travel"
                    @if !title.is_empty() { " - " (title) }
                }
                link rel="stylesheet" href="/css/main.css";
            }
            body {
                header.site-header {
                    a.brand href="/" { "Meadowlark Travel" }
                    nav {
                        a href="/about" { "About" }
                        a href="/tours/hood-river" { "Hood River" }
                        a href="/tours/oregon-coast" { "Oregon Coast" }
                        a href="/newsletter" { "Newsletter" }
                        a href="/contest/vacation-photo" { "Photo Contest" }
                        a href="/cart" { "Cart" }
                    }
                }
                @if let Some(flash) = &context.flash {
                    div
                        class={ "alert alert-dismissible alert-" (flash.kind.as_str()) }
                        role="alert"
                    {
                        strong { (flash.intro) }
                        " "
                        (flash.message)
                    }
                }
                main { (content) }
                @if context.show_tests {
                    div #mocha {}
                    script src="/qa/global-tests.js" {}
                }
                footer { "Meadowlark Travel, Portland, Oregon" }
            }
        }
    }
}

fn home() -> Markup {
    html! {
        h1 { "Welcome to Meadowlark Travel" }
        p { "Tours of the Pacific Northwest, from the coast to the gorge." }
        ul {
            li { a href="/tours/hood-river" { "Hood River Day Trip" } }
            li { a href="/tours/oregon-coast" { "Oregon Coast Getaway" } }
        }
    }
}

fn about() -> Markup {
    html! {
        h1 { "About Meadowlark Travel" }
        p { "Meadowlark Travel has been guiding visitors around Oregon since 2014." }
        p { a href="/contest/vacation-photo" { "Enter our vacation photo contest!" } }
    }
}

fn tour(name: &str, sku: &str, blurb: &str) -> Markup {
    html! {
        h1 { (name) }
        p { (blurb) }
        form.add-to-cart action="/cart/add" method="POST" {
            input type="hidden" name="sku" value=(sku);
            input type="hidden" name="name" value=(name);
            label for="quantity" { "Travellers" }
            input #quantity type="number" name="quantity" value="1" min="1";
            button type="submit" { "Add to cart" }
        }
        p { a href="/tours/request-group-rate" { "Request group rate" } }
    }
}

fn request_group_rate() -> Markup {
    html! {
        h1 { "Request Group Rate" }
        form action="/process" method="POST" {
            label for="groupName" { "Group name" }
            input #groupName type="text" name="groupName";
            label for="groupSize" { "Group size" }
            input #groupSize type="number" name="groupSize" min="2";
            label for="email" { "Email" }
            input #email type="email" name="email";
            button type="submit" { "Submit" }
        }
    }
}

fn thank_you() -> Markup {
    html! {
        h1 { "Thank you" }
        p { "We have received your request." }
        p { a href="/" { "Back to home" } }
    }
}

fn error_page() -> Markup {
    html! {
        h1 { "Something went wrong" }
        p { "We could not process your request. Please try again." }
    }
}

fn newsletter() -> Markup {
    html! {
        h1 { "Sign up for our newsletter" }
        form.newsletter action="/newsletter" method="POST" {
            label for="name" { "Name" }
            input #name type="text" name="name";
            label for="email" { "Email" }
            input #email type="email" name="email" required;
            button type="submit" { "Register" }
        }
    }
}

fn newsletter_archive() -> Markup {
    html! {
        h1 { "Newsletter Archive" }
        p { "Past issues will appear here." }
    }
}

/// Fills the blanks from the JSON data endpoint.
const NURSERY_RHYME_SCRIPT: &str = r#"
fetch('/data/nursery-rhyme', { headers: { Accept: 'application/json' } })
    .then(function (res) { return res.json(); })
    .then(function (words) {
        document.querySelectorAll('[data-word]').forEach(function (el) {
            el.textContent = words[el.dataset.word];
        });
    });
"#;

fn nursery_rhyme() -> Markup {
    html! {
        h1 { "Nursery Rhyme" }
        p.nursery-rhyme {
            "Mary had a little " span data-word="animal" { "..." } ". "
            "Its " span data-word="bodyPart" { "..." } " was " span data-word="adjective" { "..." }
            " as " span data-word="noun" { "..." } "."
        }
        script { (PreEscaped(NURSERY_RHYME_SCRIPT)) }
    }
}

fn vacation_photo(year: i32, month: u32) -> Markup {
    html! {
        h1 { "Vacation Photo Contest" }
        form
            action={ "/contest/vacation-photo/" (year) "/" (month) }
            method="POST"
            enctype="multipart/form-data"
        {
            label for="fieldName" { "Name" }
            input #fieldName type="text" name="name";
            label for="fieldEmail" { "Email" }
            input #fieldEmail type="email" name="email";
            label for="fieldPhoto" { "Vacation photo" }
            input #fieldPhoto type="file" name="photo" accept="image/*";
            button type="submit" { "Submit" }
        }
    }
}

fn cart_lines(cart: &Cart) -> Markup {
    html! {
        table.cart {
            thead { tr { th { "Tour" } th { "Travellers" } } }
            tbody {
                @for item in &cart.items {
                    tr { td { (item.name) } td { (item.quantity) } }
                }
            }
        }
    }
}

fn cart_page(cart: Option<&Cart>) -> Markup {
    html! {
        h1 { "Your Cart" }
        @match cart.filter(|c| !c.is_empty()) {
            Some(cart) => {
                (cart_lines(cart))
                form.checkout action="/cart/checkout" method="POST" {
                    label for="name" { "Name" }
                    input #name type="text" name="name";
                    label for="email" { "Email" }
                    input #email type="email" name="email" required;
                    button type="submit" { "Check out" }
                }
            }
            None => {
                p { "Your cart is empty. " a href="/" { "Browse our tours." } }
            }
        }
    }
}

fn cart_thank_you(cart: &Cart) -> Markup {
    html! {
        h1 { "Thank you for booking your trip with Meadowlark Travel" }
        @if let Some(billing) = &cart.billing {
            p { "A confirmation has been sent to " (billing.email) "." }
        }
        @if let Some(number) = &cart.number {
            p { "Your order number is " strong.order-number { (number.as_str()) } "." }
        }
        (cart_lines(cart))
    }
}

fn order_email(cart: &Cart) -> Markup {
    html! {
        (DOCTYPE)
        html {
            body {
                h2 { "Thank you for booking your trip with Meadowlark Travel" }
                @if let Some(billing) = &cart.billing {
                    p { "Dear " (billing.name) "," }
                }
                @if let Some(number) = &cart.number {
                    p { "Your order number is " strong { (number.as_str()) } "." }
                }
                (cart_lines(cart))
                p { "We look forward to travelling with you." }
            }
        }
    }
}

fn not_found() -> Markup {
    html! {
        h1 { "404 - Not Found" }
        p { "We could not find that page." }
        p { a href="/" { "Back to home" } }
    }
}

fn server_error() -> Markup {
    html! {
        h1 { "500 - Server Error" }
        p { "Something went wrong on our end. Please try again later." }
    }
}
