use crate::driver::Driver;
use crate::error::Result;

/// `type` values an `<input>` can have and still count as a text field
const TEXT_FIELD_TYPES: &[&str] = &["text", "password", "email", "number", "search", "tel", "url"];

/// Every `type` value HTML defines for `<input>`; browsers render anything else as `text`
const INPUT_TYPES: &[&str] = &[
    "button", "checkbox", "color", "date", "datetime-local", "email", "file", "hidden", "image", "month", "number",
    "password", "radio", "range", "reset", "search", "submit", "tel", "text", "time", "url", "week",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct TagRule {
    tag: &'static str,
    types: Option<&'static [&'static str]>,
}

impl TagRule {
    const fn tag(tag: &'static str) -> Self {
        Self { tag, types: None }
    }

    const fn input(types: &'static [&'static str]) -> Self {
        Self { tag: "input", types: Some(types) }
    }
}

/// Keyword-style tag names and the elements they stand for
const TAG_ALIASES: &[(&str, &[TagRule])] = &[
    ("link", &[TagRule::tag("a")]),
    ("image", &[TagRule::tag("img")]),
    ("list", &[TagRule::tag("select")]),
    ("text area", &[TagRule::tag("textarea")]),
    ("text field", &[TagRule::input(TEXT_FIELD_TYPES)]),
    ("radio button", &[TagRule::input(&["radio"])]),
    ("checkbox", &[TagRule::input(&["checkbox"])]),
    ("file upload", &[TagRule::input(&["file"])]),
    ("button", &[TagRule::tag("button"), TagRule::input(&["button", "submit", "reset"])]),
];

/// Post-query filter restricting results to one kind of element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    /// Plain tag name when the filter is not an alias
    name: String,
    rules: &'static [TagRule],
}

impl TagFilter {
    /// Build a filter from a tag name or one of the aliases (`link`, `text field`, ...)
    pub fn new(tag: &str) -> Self {
        let name = tag.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let rules = TAG_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[]);
        Self { name, rules }
    }

    /// Whether the filter resolved to an alias
    pub fn is_alias(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Check one element against the filter
    pub fn matches<D: Driver>(&self, driver: &D, handle: &D::Handle) -> Result<bool> {
        let tag_name = driver.tag_name(handle)?.to_lowercase();

        if !self.is_alias() {
            return Ok(tag_name == self.name);
        }

        for rule in self.rules.iter().filter(|rule| rule.tag == tag_name) {
            let Some(types) = rule.types else {
                return Ok(true);
            };

            // A missing or unknown type attribute means a text input
            let input_type = driver
                .get_attribute(handle, "type")?
                .map(|t| t.trim().to_lowercase())
                .filter(|t| INPUT_TYPES.contains(&t.as_str()))
                .unwrap_or_else(|| "text".to_string());

            if types.contains(&input_type.as_str()) {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
