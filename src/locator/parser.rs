use crate::error::{BrowserError, Result};
use crate::locator::strategy::Strategy;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed locator expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    /// Strategy selected by the prefix, or `Strategy::Default`
    pub strategy: Strategy,

    /// Search value with the prefix removed
    pub value: String,

    /// The expression as written by the caller, kept for error messages
    pub expression: String,
}

impl Locator {
    /// Create a locator directly, bypassing prefix parsing
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        let value = value.into();
        let expression = match strategy {
            Strategy::Default => value.clone(),
            other => format!("{}:{}", other.name(), value),
        };
        Self { strategy, value, expression }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

/// Prefix vocabulary and separators used by `LocatorParser`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Lowercase prefix to strategy
    #[serde(default = "default_aliases")]
    pub aliases: IndexMap<String, Strategy>,

    /// Characters accepted between prefix and value
    #[serde(default = "default_separators")]
    pub separators: Vec<char>,
}

fn default_aliases() -> IndexMap<String, Strategy> {
    [
        ("identifier", Strategy::Identifier),
        ("id", Strategy::Id),
        ("name", Strategy::Name),
        ("class", Strategy::Class),
        ("tag", Strategy::Tag),
        ("xpath", Strategy::XPath),
        ("css", Strategy::Css),
        ("link", Strategy::LinkText),
        ("link text", Strategy::LinkText),
        ("partial link", Strategy::PartialLinkText),
        ("partial link text", Strategy::PartialLinkText),
    ]
    .into_iter()
    .map(|(alias, strategy)| (alias.to_string(), strategy))
    .collect()
}

fn default_separators() -> Vec<char> {
    vec![':', '=']
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { aliases: default_aliases(), separators: default_separators() }
    }
}

impl ParserConfig {
    /// Load a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: ParserConfig = serde_json::from_str(json)
            .map_err(|e| BrowserError::InvalidConfig(format!("Invalid parser config: {}", e)))?;
        config.aliases = config.aliases.into_iter().map(|(alias, strategy)| (normalize_prefix(&alias), strategy)).collect();
        Ok(config)
    }
}

/// Turns locator expressions into `Locator` values
#[derive(Debug, Clone, Default)]
pub struct LocatorParser {
    config: ParserConfig,
}

impl LocatorParser {
    /// Create a parser with the default vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from an explicit configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Builder method: register an extra prefix
    pub fn with_alias(mut self, alias: &str, strategy: Strategy) -> Self {
        self.config.aliases.insert(normalize_prefix(alias), strategy);
        self
    }

    /// Get the active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `expression` into a strategy and value.
    ///
    /// A word before the first separator must be a registered prefix; anything else
    /// (no separator, or text that cannot be a prefix such as `//div[@a='b']`) is
    /// taken verbatim under `Strategy::Default`.
    pub fn parse(&self, expression: &str) -> Result<Locator> {
        if expression.trim().is_empty() {
            return Err(BrowserError::invalid_locator(expression, "locator is empty"));
        }

        let Some((prefix, rest)) = self.split_prefix(expression) else {
            log::trace!("Locator '{}' has no prefix, using default strategy", expression);
            return Ok(Locator {
                strategy: Strategy::Default,
                value: expression.to_string(),
                expression: expression.to_string(),
            });
        };

        let key = normalize_prefix(prefix);
        let strategy = *self
            .config
            .aliases
            .get(&key)
            .ok_or_else(|| BrowserError::invalid_locator(expression, format!("unknown strategy '{}'", prefix.trim())))?;

        let value = rest.trim();
        if value.is_empty() {
            return Err(BrowserError::invalid_locator(expression, format!("empty value for strategy '{}'", strategy)));
        }

        Ok(Locator { strategy, value: value.to_string(), expression: expression.to_string() })
    }

    fn split_prefix<'a>(&self, expression: &'a str) -> Option<(&'a str, &'a str)> {
        let (index, separator) = expression.char_indices().find(|(_, c)| self.config.separators.contains(c))?;
        let prefix = &expression[..index];
        if !looks_like_prefix(prefix) {
            return None;
        }
        Some((prefix, &expression[index + separator.len_utf8()..]))
    }
}

fn looks_like_prefix(prefix: &str) -> bool {
    let trimmed = prefix.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        }
        _ => false,
    }
}

fn normalize_prefix(prefix: &str) -> String {
    prefix.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
