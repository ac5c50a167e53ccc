//! # element-locator
//!
//! Resolves compact, strategy-prefixed locator strings (`id:login`, `css:form > input`,
//! `xpath://li[2]`, or a bare `Submit`) into live elements of a Chrome page driven over
//! the Chrome DevTools Protocol, and answers a few derived questions about them.
//!
//! ## Locator syntax
//!
//! A locator is `strategy:value` (or `strategy=value`). Prefixes are case-insensitive:
//! `identifier`, `id`, `name`, `class`, `tag`, `xpath`, `css`, `link`, `partial link`.
//! A string without a prefix is matched by its key attributes (`id`, `name`, `value`,
//! `href`, `src`, `alt`, `title`) or own text, or run as XPath when it starts with `//`.
//! An unknown prefix is an error, never a silent fallback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use element_locator::{BrowserSession, LaunchOptions, QueryContext};
//!
//! # fn main() -> element_locator::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://example.com")?;
//! session.wait_for_navigation()?;
//!
//! let driver = session.driver()?;
//! let ctx = QueryContext::new(&driver, session.element_finder());
//!
//! let heading = ctx.find_element("tag:h1", None, true, None)?;
//! let links = ctx.find_elements("css:a", None, None)?;
//! println!("{:?} with {} link(s)", heading, links.len());
//!
//! assert!(ctx.is_text_present("Example Domain")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`locator`]: locator parsing, strategy vocabulary, XPath literal escaping
//! - [`finder`]: strategy dispatch, tag filtering and cardinality
//! - [`context`]: `find_element`, `find_elements`, `is_text_present`, `is_element_enabled`
//! - [`driver`]: the `Driver` trait and its Chrome implementation
//! - [`browser`]: launching or attaching to Chrome
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod context;
pub mod driver;
pub mod error;
pub mod finder;
pub mod locator;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use context::QueryContext;
pub use driver::{ChromeDriver, ChromeElement, Driver};
pub use error::{BrowserError, Result};
pub use finder::{ElementFinder, TagFilter};
pub use locator::{By, Locator, LocatorParser, ParserConfig, Strategy, escape_xpath_value};
