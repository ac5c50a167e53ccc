use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use crate::finder::ElementFinder;
use crate::locator::{Locator, Strategy, escape_xpath_value};

/// Element queries against one driver session.
///
/// Holds only borrowed references to the driver and the finder; every call parses its
/// locator afresh and queries the live page, so nothing observed by one call leaks into
/// the next.
pub struct QueryContext<'a, D: Driver> {
    driver: &'a D,
    element_finder: &'a ElementFinder,
}

impl<'a, D: Driver> QueryContext<'a, D> {
    /// Create a context over `driver` using `element_finder` for resolution
    pub fn new(driver: &'a D, element_finder: &'a ElementFinder) -> Self {
        Self { driver, element_finder }
    }

    /// Get the driver
    pub fn driver(&self) -> &'a D {
        self.driver
    }

    /// Get the element finder
    pub fn element_finder(&self) -> &'a ElementFinder {
        self.element_finder
    }

    /// Find the first element matching `locator`.
    ///
    /// `tag` limits the search to one kind of element and `parent` scopes it to a
    /// subtree. Returns `Ok(None)` when nothing matches and `required` is false;
    /// fails with `ElementNotFound` when nothing matches and `required` is true.
    pub fn find_element(
        &self,
        locator: &str,
        tag: Option<&str>,
        required: bool,
        parent: Option<&D::Handle>,
    ) -> Result<Option<D::Handle>> {
        let locator = self.element_finder.parse(locator)?;
        self.find_first(&locator, tag, required, parent)
    }

    /// Find every element matching `locator`; an empty vector when nothing matches
    pub fn find_elements(&self, locator: &str, tag: Option<&str>, parent: Option<&D::Handle>) -> Result<Vec<D::Handle>> {
        let locator = self.element_finder.parse(locator)?;
        self.element_finder.find(self.driver, &locator, tag, true, false, parent)
    }

    /// Whether any element on the page contains `text`
    pub fn is_text_present(&self, text: &str) -> Result<bool> {
        let locator = Locator::new(Strategy::XPath, format!("//*[contains(., {})]", escape_xpath_value(text)));
        Ok(self.find_first(&locator, None, false, None)?.is_some())
    }

    /// Whether the element is enabled and not read-only.
    ///
    /// The element must exist; a missing element is an `ElementNotFound` error.
    pub fn is_element_enabled(&self, locator: &str, tag: Option<&str>) -> Result<bool> {
        let locator = self.element_finder.parse(locator)?;
        let element = self.find_first(&locator, tag, true, None)?.ok_or_else(|| BrowserError::ElementNotFound {
            locator: locator.expression.clone(),
            parent: None,
        })?;

        Ok(self.driver.is_enabled(&element)? && self.driver.get_attribute(&element, "readonly")?.is_none())
    }

    fn find_first(
        &self,
        locator: &Locator,
        tag: Option<&str>,
        required: bool,
        parent: Option<&D::Handle>,
    ) -> Result<Option<D::Handle>> {
        let found = self.element_finder.find(self.driver, locator, tag, false, required, parent)?;
        Ok(found.into_iter().next())
    }
}
