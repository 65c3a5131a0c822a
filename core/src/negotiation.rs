//! Content negotiation between JSON and document replies.
//!
//! A request is answered in one of two modes, decided once from its headers
//! and then threaded through the handler:
//!
//! - [`ReplyMode::Structured`]: a script-driven client, answered with a JSON body
//! - [`ReplyMode::Document`]: a browser, answered with a rendered page or redirect
//!
//! The decision mirrors what a browser form and an XHR call actually send:
//! an `X-Requested-With: XMLHttpRequest` header always selects JSON; otherwise
//! the `Accept` header is resolved against `json` and `html`, in that order of
//! preference.

/// How a request expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// Emit a JSON body.
    Structured,
    /// Render a view or issue a redirect.
    Document,
}

impl ReplyMode {
    /// Returns `true` for [`ReplyMode::Structured`].
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Structured)
    }
}

/// Value of `X-Requested-With` sent by XHR libraries.
pub const XHR_MARKER: &str = "XMLHttpRequest";

/// Offered media types, in preference order.
const OFFERED: [(&str, &str); 2] = [("application", "json"), ("text", "html")];

/// Decide the reply mode from the raw `X-Requested-With` and `Accept` header
/// values.
#[must_use]
pub fn negotiate(requested_with: Option<&str>, accept: Option<&str>) -> ReplyMode {
    if requested_with.is_some_and(|value| value.trim().eq_ignore_ascii_case(XHR_MARKER)) {
        return ReplyMode::Structured;
    }

    if prefers_json(accept.unwrap_or("*/*")) {
        ReplyMode::Structured
    } else {
        ReplyMode::Document
    }
}

/// Resolve `accept` against the offered types and report whether `json` wins.
///
/// Each offered type takes the quality of the most specific media range that
/// matches it. The highest quality wins; ties go to the earlier offer. When
/// nothing is acceptable the answer is `false`.
fn prefers_json(accept: &str) -> bool {
    let ranges: Vec<MediaRange<'_>> = accept.split(',').filter_map(MediaRange::parse).collect();

    let mut best: Option<(usize, f32)> = None;
    for (index, (kind, subtype)) in OFFERED.iter().enumerate() {
        let quality = ranges
            .iter()
            .filter_map(|range| range.specificity(kind, subtype).map(|s| (s, range.quality)))
            .max_by_key(|(specificity, _)| *specificity)
            .map_or(0.0, |(_, quality)| quality);

        if quality <= 0.0 {
            continue;
        }
        if best.is_none_or(|(_, best_quality)| quality > best_quality) {
            best = Some((index, quality));
        }
    }

    matches!(best, Some((0, _)))
}

/// A single `type/subtype;q=x` entry of an `Accept` header.
#[derive(Debug)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    quality: f32,
}

impl<'a> MediaRange<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
                }
            }
        }

        Some(Self {
            kind,
            subtype,
            quality,
        })
    }

    /// How specifically this range matches `kind/subtype`, or `None`.
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        match (self.kind, self.subtype) {
            ("*", "*") => Some(0),
            (k, "*") if k.eq_ignore_ascii_case(kind) => Some(1),
            (k, s) if k.eq_ignore_ascii_case(kind) && s.eq_ignore_ascii_case(subtype) => Some(2),
            _ => None,
        }
    }
}
