use thiserror::Error;

/// Errors raised while resolving locators against a browser session
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The browser process could not be started
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Could not attach to an already running browser
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab listing, creation or closing failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation did not complete
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// A locator expression could not be parsed
    #[error("Invalid locator '{locator}': {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// A required search matched nothing
    #[error("{}", not_found_message(.locator, .parent))]
    ElementNotFound { locator: String, parent: Option<String> },

    /// An element handle outlived the DOM node it pointed to
    #[error("Stale element reference: {0}")]
    StaleElement(String),

    /// The driver rejected or failed a query primitive
    #[error("Query by {by} failed: {reason}")]
    QueryFailed { by: String, reason: String },

    /// A configuration document could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An in-page script failed or returned something unexpected
    #[error("Script evaluation failed: {0}")]
    ScriptFailed(String),
}

fn not_found_message(locator: &str, parent: &Option<String>) -> String {
    match parent {
        Some(parent) => format!("Element with locator '{}' not found under {}", locator, parent),
        None => format!("Element with locator '{}' not found", locator),
    }
}

impl BrowserError {
    /// Build an `InvalidLocator` error
    pub fn invalid_locator(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocator { locator: locator.into(), reason: reason.into() }
    }

    /// Whether this error means "nothing matched" rather than a broken query
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;
