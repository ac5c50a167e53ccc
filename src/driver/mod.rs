//! Driver interface consumed by the element finder
//!
//! The finder never talks to a browser directly. Everything it needs from a live page
//! goes through the `Driver` trait: one query primitive per `By` variant plus a few
//! element property reads. `ChromeDriver` implements it over a `headless_chrome` tab.

pub mod chrome;

#[cfg(test)]
pub(crate) mod scripted;

pub use chrome::{ChromeDriver, ChromeElement};

use crate::error::Result;
use crate::locator::By;
use std::fmt::Debug;

/// Narrow view of a browser session used to resolve locators.
///
/// Implementations must be read-only with respect to the page. A handle returned by
/// `query` may go stale once the page mutates; using it afterwards must fail with
/// `BrowserError::StaleElement` rather than silently matching something else.
pub trait Driver {
    /// Opaque reference to a live element, owned by the driver session
    type Handle: Clone + Debug;

    /// Run one query primitive, scoped to `scope` when given, otherwise to the document.
    /// Results are in document order; no match is an empty vector.
    fn query(&self, by: By, value: &str, scope: Option<&Self::Handle>) -> Result<Vec<Self::Handle>>;

    /// Lowercase tag name of the element
    fn tag_name(&self, handle: &Self::Handle) -> Result<String>;

    /// Attribute value, `None` when the attribute is absent
    fn get_attribute(&self, handle: &Self::Handle, name: &str) -> Result<Option<String>>;

    /// Whether the element can receive user interaction
    fn is_enabled(&self, handle: &Self::Handle) -> Result<bool>;

    /// Short human readable description used in error messages
    fn describe(&self, handle: &Self::Handle) -> String {
        format!("{:?}", handle)
    }
}
