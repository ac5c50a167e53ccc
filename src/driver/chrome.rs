use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use crate::locator::By;
use headless_chrome::Tab;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::{Arc, Mutex}};

/// In-page helper that runs queries and keeps the handle registry
const ELEMENT_OPS_JS: &str = include_str!("element_ops.js");

/// Handle to an element found through a `ChromeDriver`.
///
/// The id indexes a registry kept inside the page, so a handle is only meaningful for
/// the document it was found in. After navigation or removal of the node it is stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChromeElement {
    /// Registry id assigned by the page
    pub id: u64,

    /// Token of the document whose registry issued `id`; ids restart on every new document
    pub document: String,

    /// Lowercase tag name at the time of the query
    pub tag_name: String,
}

impl fmt::Display for ChromeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> (handle {})", self.tag_name, self.id)
    }
}

#[derive(Debug, Serialize)]
struct ScriptArgs<'a> {
    op: &'a str,
    handle: Option<HandleRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by: Option<By>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct HandleRef<'a> {
    id: u64,
    document: &'a str,
}

impl<'a> From<&'a ChromeElement> for HandleRef<'a> {
    fn from(element: &'a ChromeElement) -> Self {
        Self { id: element.id, document: &element.document }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ScriptReply {
    Ok { value: serde_json::Value },
    Stale,
    Error { message: String },
}

/// `Driver` backed by a single Chrome tab
pub struct ChromeDriver {
    tab: Arc<Tab>,

    /// Commands against one tab are issued one at a time
    command_lock: Mutex<()>,
}

impl ChromeDriver {
    /// Create a driver for the given tab
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab, command_lock: Mutex::new(()) }
    }

    /// Get the underlying tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    fn run(&self, args: &ScriptArgs<'_>) -> Result<ScriptReply> {
        let args_json = serde_json::to_string(args)
            .map_err(|e| BrowserError::ScriptFailed(format!("Failed to encode script arguments: {}", e)))?;
        let expression = format!("({})({})", ELEMENT_OPS_JS.trim(), args_json);
        log::trace!("Running element script op={} handle={:?}", args.op, args.handle.as_ref().map(|h| h.id));

        let _guard = self
            .command_lock
            .lock()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Driver lock poisoned: {}", e)))?;

        let result = self
            .tab
            .evaluate(&expression, false)
            .map_err(|e| BrowserError::ScriptFailed(format!("Failed to execute element script: {}", e)))?;

        let json_value = result
            .value
            .ok_or_else(|| BrowserError::ScriptFailed("No value returned from element script".to_string()))?;

        // The script returns a JSON string so nested values survive the protocol round trip
        let json_str: String = serde_json::from_value(json_value)
            .map_err(|e| BrowserError::ScriptFailed(format!("Failed to get JSON string: {}", e)))?;

        serde_json::from_str(&json_str)
            .map_err(|e| BrowserError::ScriptFailed(format!("Failed to parse script reply: {}", e)))
    }

    fn run_on(&self, handle: &ChromeElement, op: &str, name: Option<&str>) -> Result<serde_json::Value> {
        let args = ScriptArgs { op, handle: Some(handle.into()), by: None, value: None, name };
        match self.run(&args)? {
            ScriptReply::Ok { value } => Ok(value),
            ScriptReply::Stale => Err(BrowserError::StaleElement(handle.to_string())),
            ScriptReply::Error { message } => Err(BrowserError::ScriptFailed(message)),
        }
    }
}

impl Driver for ChromeDriver {
    type Handle = ChromeElement;

    fn query(&self, by: By, value: &str, scope: Option<&ChromeElement>) -> Result<Vec<ChromeElement>> {
        let args =
            ScriptArgs { op: "query", handle: scope.map(HandleRef::from), by: Some(by), value: Some(value), name: None };

        match self.run(&args)? {
            ScriptReply::Ok { value: found } => serde_json::from_value(found)
                .map_err(|e| BrowserError::ScriptFailed(format!("Failed to decode element handles: {}", e))),
            ScriptReply::Stale => Err(BrowserError::StaleElement(
                scope.map(ToString::to_string).unwrap_or_else(|| "document".to_string()),
            )),
            ScriptReply::Error { message } => Err(BrowserError::QueryFailed { by: by.to_string(), reason: message }),
        }
    }

    fn tag_name(&self, handle: &ChromeElement) -> Result<String> {
        Ok(handle.tag_name.clone())
    }

    fn get_attribute(&self, handle: &ChromeElement, name: &str) -> Result<Option<String>> {
        match self.run_on(handle, "attribute", Some(name))? {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(value) => Ok(Some(value)),
            other => Err(BrowserError::ScriptFailed(format!("Unexpected attribute value: {}", other))),
        }
    }

    fn is_enabled(&self, handle: &ChromeElement) -> Result<bool> {
        self.run_on(handle, "enabled", None)?
            .as_bool()
            .ok_or_else(|| BrowserError::ScriptFailed("Enabled check did not return a boolean".to_string()))
    }

    fn describe(&self, handle: &ChromeElement) -> String {
        handle.to_string()
    }
}
