//! Element lookup
//!
//! `ElementFinder` maps a parsed `Locator` onto one driver query primitive, runs it
//! against the document or a parent element, filters by tag and applies cardinality.
//! Nothing is cached between calls and nothing is retried.

pub mod tag_filter;

pub use tag_filter::TagFilter;

use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use crate::locator::{By, Locator, LocatorParser, Strategy, escape_xpath_value};

/// Resolves locators against a `Driver`
#[derive(Debug, Clone, Default)]
pub struct ElementFinder {
    parser: LocatorParser,
}

impl ElementFinder {
    /// Create a finder with the default locator vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with a custom parser
    pub fn with_parser(parser: LocatorParser) -> Self {
        Self { parser }
    }

    /// Get the locator parser
    pub fn parser(&self) -> &LocatorParser {
        &self.parser
    }

    /// Parse a locator expression with this finder's vocabulary
    pub fn parse(&self, expression: &str) -> Result<Locator> {
        self.parser.parse(expression)
    }

    /// Driver primitive and query string used for `locator`
    pub fn query_for(&self, locator: &Locator) -> (By, String) {
        let value = locator.value.as_str();
        match locator.strategy {
            Strategy::Identifier => {
                let literal = escape_xpath_value(value);
                (By::XPath, format!(".//*[@id={0} or @name={0}]", literal))
            }
            Strategy::Id => (By::Id, value.to_string()),
            Strategy::Name => (By::Name, value.to_string()),
            Strategy::Class => (By::ClassName, value.to_string()),
            Strategy::Tag => (By::TagName, value.to_string()),
            Strategy::XPath => (By::XPath, value.to_string()),
            Strategy::Css => (By::CssSelector, value.to_string()),
            Strategy::LinkText => (By::LinkText, value.to_string()),
            Strategy::PartialLinkText => (By::PartialLinkText, value.to_string()),
            Strategy::Default => default_query(value),
        }
    }

    /// Run `locator` against `driver`.
    ///
    /// With `find_all` false at most one element (the first in document order) is
    /// returned. With `required` true an empty result is an `ElementNotFound` error
    /// naming the locator and the parent scope.
    pub fn find<D: Driver>(
        &self,
        driver: &D,
        locator: &Locator,
        tag: Option<&str>,
        find_all: bool,
        required: bool,
        parent: Option<&D::Handle>,
    ) -> Result<Vec<D::Handle>> {
        let (by, query) = self.query_for(locator);
        log::debug!(
            "Finding '{}' via {} '{}' (tag={:?}, all={}, required={}, scoped={})",
            locator,
            by,
            query,
            tag,
            find_all,
            required,
            parent.is_some()
        );

        let candidates = driver.query(by, &query, parent)?;
        let filter = tag.map(TagFilter::new);

        let mut found = Vec::new();
        for handle in candidates {
            if let Some(filter) = &filter {
                if !filter.matches(driver, &handle)? {
                    continue;
                }
            }
            found.push(handle);
            if !find_all {
                break;
            }
        }

        log::debug!("Locator '{}' matched {} element(s)", locator, found.len());

        if found.is_empty() && required {
            return Err(BrowserError::ElementNotFound {
                locator: locator.expression.clone(),
                parent: parent.map(|p| driver.describe(p)),
            });
        }

        Ok(found)
    }
}

/// Implicit strategy: raw XPath when the value looks like one, otherwise a match on
/// the usual key attributes or the element's own text
fn default_query(value: &str) -> (By, String) {
    let trimmed = value.trim();
    if trimmed.starts_with("//") || trimmed.starts_with("(//") {
        return (By::XPath, trimmed.to_string());
    }

    let literal = escape_xpath_value(trimmed);
    let query = format!(
        ".//*[@id={0} or @name={0} or @value={0} or @href={0} or @src={0} or @alt={0} or @title={0} \
         or text()[normalize-space(.)={0}]]",
        literal
    );
    (By::XPath, query)
}
