use serde::{Deserialize, Serialize};
use std::fmt;

/// Search strategy selected by a locator prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Match on either the `id` or the `name` attribute
    Identifier,
    Id,
    Name,
    Class,
    Tag,
    #[serde(rename = "xpath")]
    XPath,
    Css,
    LinkText,
    PartialLinkText,
    /// Implicit strategy used when the expression carries no prefix
    Default,
}

impl Strategy {
    /// Canonical prefix for this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Identifier => "identifier",
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::Class => "class",
            Strategy::Tag => "tag",
            Strategy::XPath => "xpath",
            Strategy::Css => "css",
            Strategy::LinkText => "link",
            Strategy::PartialLinkText => "partial link",
            Strategy::Default => "default",
        }
    }

    /// Whether the value is embedded in an XPath expression before dispatch
    pub fn builds_xpath(&self) -> bool {
        matches!(self, Strategy::Identifier | Strategy::Default)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Query primitive exposed by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum By {
    Id,
    Name,
    ClassName,
    TagName,
    CssSelector,
    #[serde(rename = "xpath")]
    XPath,
    LinkText,
    PartialLinkText,
}

impl By {
    /// Wire name understood by the in-page query script
    pub fn as_str(&self) -> &'static str {
        match self {
            By::Id => "id",
            By::Name => "name",
            By::ClassName => "class_name",
            By::TagName => "tag_name",
            By::CssSelector => "css_selector",
            By::XPath => "xpath",
            By::LinkText => "link_text",
            By::PartialLinkText => "partial_link_text",
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::PartialLinkText.to_string(), "partial link");
        assert_eq!(Strategy::XPath.name(), "xpath");
    }

    #[test]
    fn test_builds_xpath() {
        assert!(Strategy::Default.builds_xpath());
        assert!(Strategy::Identifier.builds_xpath());
        assert!(!Strategy::Css.builds_xpath());
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&Strategy::PartialLinkText).unwrap();
        assert_eq!(json, "\"partial_link_text\"");

        let strategy: Strategy = serde_json::from_str("\"xpath\"").unwrap();
        assert_eq!(strategy, Strategy::XPath);
    }

    #[test]
    fn test_by_wire_names() {
        assert_eq!(By::CssSelector.as_str(), "css_selector");
        assert_eq!(serde_json::to_string(&By::XPath).unwrap(), "\"xpath\"");
    }
}
