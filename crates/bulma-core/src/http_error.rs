//! Canned error pages keyed by HTTP status, and the error-boundary helper
//! that picks one.

use std::error::Error as StdError;

use thiserror::Error;

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::color::BulmaColor;

/// Column wrapping every error page.
pub const ERROR_COLUMN_CLASS: &str = "column is-12-tablet is-10-desktop is-10-widescreen";

/// Icon, title, colour and message of one error page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorPage {
    /// HTTP status, `None` for the fallback page.
    pub status: Option<u16>,
    /// Material icon.
    pub icon: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Icon and heading colour.
    pub color: BulmaColor,
    /// Body text; lines are separated by `\n`.
    pub message: &'static str,
}

const fn page(status: u16, icon: &'static str, title: &'static str, color: BulmaColor, message: &'static str) -> ErrorPage {
    ErrorPage {
        status: Some(status),
        icon,
        title,
        color,
        message,
    }
}

/// Shown when the status is missing or not in [`ERROR_PAGES`].
pub const UNKNOWN_ERROR_PAGE: ErrorPage = ErrorPage {
    status: None,
    icon: "help",
    title: "Unknown",
    color: BulmaColor::Red,
    message: "An unknown error occurred.\nContact support for additional help.",
};

/// Every page with a dedicated layout.
pub const ERROR_PAGES: [ErrorPage; 14] = [
    page(
        401,
        "block",
        "Unauthorized",
        BulmaColor::Red,
        "Your credentials to the requested resource are invalid.\nTry logging in to complete the request.",
    ),
    page(
        403,
        "disabled_visible",
        "Forbidden",
        BulmaColor::Red,
        "You do not have the correct permissions to access the requested resource.\nContact your manager to request access.",
    ),
    page(404, "troubleshoot", "Not Found", BulmaColor::Yellow, "Could not find the information you requested."),
    page(405, "disabled_visible", "Method Not Allowed", BulmaColor::Red, "Your request cannot be completed."),
    page(
        408,
        "hourglass_disabled",
        "Request Timeout",
        BulmaColor::Yellow,
        "Your request timed out waiting for the server to respond.",
    ),
    page(
        409,
        "warning_amber",
        "Conflict",
        BulmaColor::Yellow,
        "A database concurrency issue occurred, please refresh and try again.",
    ),
    page(
        422,
        "error_outline",
        "Unprocessable Entity",
        BulmaColor::Red,
        "Your submission contained one or more errors.\nPlease try again.",
    ),
    page(423, "lock", "Locked", BulmaColor::Yellow, "The requested resource is locked."),
    page(
        426,
        "browser_updated",
        "Upgrade Required",
        BulmaColor::Cyan,
        "Your application is out of date.\nPlease ensure you are on the latest version.",
    ),
    page(
        429,
        "timer_off",
        "Too Many Requests",
        BulmaColor::Yellow,
        "You have sent too many requests.\nPlease try again later.",
    ),
    page(
        500,
        "warning_amber",
        "Internal Server Error",
        BulmaColor::Yellow,
        "An unknown error occurred during your request.\nContact support for additional help.",
    ),
    page(502, "router", "Bad Gateway", BulmaColor::Yellow, "The server received an invalid response."),
    page(
        503,
        "signal_disconnected",
        "Service Unavailable",
        BulmaColor::Yellow,
        "The server is not currently available.\nPlease make sure you are connected to the Internet or try again later.",
    ),
    page(
        504,
        "hourglass_disabled",
        "Gateway Timeout",
        BulmaColor::Yellow,
        "Your request timed out waiting for the server to respond.",
    ),
];

impl ErrorPage {
    /// Page for a status, falling back to [`UNKNOWN_ERROR_PAGE`].
    #[must_use]
    pub fn for_status(status: Option<u16>) -> &'static Self {
        status
            .and_then(|code| ERROR_PAGES.iter().find(|page| page.status == Some(code)))
            .unwrap_or(&UNKNOWN_ERROR_PAGE)
    }

    /// Message split into display lines.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.message.lines()
    }

    /// Icon colour class.
    #[must_use]
    pub fn text_class(&self) -> String {
        self.color.text_class(None)
    }
}

/// Column class plus the caller's class.
#[must_use]
pub fn error_column_class(attrs: &Attributes) -> String {
    ClassList::new(ERROR_COLUMN_CLASS).with(attrs.class("class")).build()
}

/// A failed HTTP request, raised by callers that want a matching error page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed with status {status}: {message}")]
pub struct HttpFailure {
    /// Response status.
    pub status: u16,
    /// Server or client supplied reason.
    pub message: String,
}

/// What an error boundary knows about a caught error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    /// `Display` of the outermost error.
    pub message: String,
    /// Status of the first [`HttpFailure`] in the source chain.
    pub status: Option<u16>,
}

impl ErrorReport {
    /// Inspect an error and its sources.
    #[must_use]
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut status = None;
        let mut current = Some(err);
        while let Some(cause) = current {
            if let Some(failure) = cause.downcast_ref::<HttpFailure>() {
                status = Some(failure.status);
                break;
            }
            current = cause.source();
        }
        Self {
            message: err.to_string(),
            status,
        }
    }

    /// Page to render for the report.
    #[must_use]
    pub fn page(&self) -> &'static ErrorPage {
        ErrorPage::for_status(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("loading the dashboard failed")]
    struct Wrapped(#[source] HttpFailure);

    #[test]
    fn catalog_lookup_falls_back_to_unknown() {
        let page = ErrorPage::for_status(Some(426));
        assert_eq!(page.icon, "browser_updated");
        assert_eq!(page.color, BulmaColor::Cyan);
        assert_eq!(page.lines().count(), 2);
        assert_eq!(ErrorPage::for_status(Some(418)), &UNKNOWN_ERROR_PAGE);
        assert_eq!(ErrorPage::for_status(None).title, "Unknown");
        assert_eq!(ErrorPage::for_status(Some(404)).text_class(), "has-text-warning");
    }

    #[test]
    fn report_finds_status_in_source_chain() {
        let err = Wrapped(HttpFailure {
            status: 503,
            message: "offline".into(),
        });
        let report = ErrorReport::from_error(&err);
        assert_eq!(report.message, "loading the dashboard failed");
        assert_eq!(report.status, Some(503));
        assert_eq!(report.page().title, "Service Unavailable");

        let plain = std::io::Error::other("disk");
        assert_eq!(ErrorReport::from_error(&plain).status, None);
    }

    #[test]
    fn column_class_appends_caller_class() {
        let attrs = Attributes::new().with("class", "mx-auto");
        assert_eq!(error_column_class(&attrs), format!("{ERROR_COLUMN_CLASS} mx-auto"));
    }
}
