//! Locator expressions
//!
//! A locator is a `strategy:value` string such as `id:login` or `css:form > input`.
//! This module turns those strings into typed `Locator` values:
//! - Strategy / By: the strategy vocabulary and the driver primitives behind it
//! - LocatorParser: prefix parsing with a configurable vocabulary
//! - escape_xpath_value: safe embedding of arbitrary text in XPath expressions

pub mod parser;
pub mod strategy;
pub mod xpath;

pub use parser::{Locator, LocatorParser, ParserConfig};
pub use strategy::{By, Strategy};
pub use xpath::escape_xpath_value;
