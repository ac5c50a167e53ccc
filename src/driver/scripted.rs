//! In-memory driver with canned query responses, used by unit tests

use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use crate::locator::By;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FakeHandle(pub usize);

#[derive(Debug, Clone)]
struct FakeElement {
    tag_name: String,
    attributes: HashMap<String, String>,
    enabled: bool,
    stale: bool,
}

type QueryKey = (By, String, Option<usize>);

#[derive(Debug, Default)]
pub(crate) struct ScriptedDriver {
    elements: RefCell<Vec<FakeElement>>,
    responses: HashMap<QueryKey, Vec<usize>>,
    calls: RefCell<Vec<QueryKey>>,
}

impl ScriptedDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its handle
    pub(crate) fn element(&mut self, tag_name: &str, attributes: &[(&str, &str)]) -> FakeHandle {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            tag_name: tag_name.to_string(),
            attributes: attributes.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            enabled: true,
            stale: false,
        });
        FakeHandle(elements.len() - 1)
    }

    pub(crate) fn disable(&mut self, handle: FakeHandle) {
        self.elements.borrow_mut()[handle.0].enabled = false;
    }

    /// Detach an element from the page, as if the DOM had been rebuilt
    pub(crate) fn remove(&self, handle: FakeHandle) {
        self.elements.borrow_mut()[handle.0].stale = true;
    }

    /// Answer `by`/`value` (under `scope`) with `handles`
    pub(crate) fn respond(&mut self, by: By, value: &str, scope: Option<FakeHandle>, handles: &[FakeHandle]) {
        self.responses
            .insert((by, value.to_string(), scope.map(|h| h.0)), handles.iter().map(|h| h.0).collect());
    }

    /// Queries issued so far, in order
    pub(crate) fn calls(&self) -> Vec<(By, String, Option<usize>)> {
        self.calls.borrow().clone()
    }

    fn live(&self, handle: &FakeHandle) -> Result<FakeElement> {
        let elements = self.elements.borrow();
        let element = &elements[handle.0];
        if element.stale {
            return Err(BrowserError::StaleElement(self.describe(handle)));
        }
        Ok(element.clone())
    }
}

impl Driver for ScriptedDriver {
    type Handle = FakeHandle;

    fn query(&self, by: By, value: &str, scope: Option<&FakeHandle>) -> Result<Vec<FakeHandle>> {
        if let Some(scope) = scope {
            self.live(scope)?;
        }

        let key = (by, value.to_string(), scope.map(|h| h.0));
        self.calls.borrow_mut().push(key.clone());

        let elements = self.elements.borrow();
        Ok(self
            .responses
            .get(&key)
            .map(|ids| ids.iter().filter(|&&id| !elements[id].stale).map(|&id| FakeHandle(id)).collect())
            .unwrap_or_default())
    }

    fn tag_name(&self, handle: &FakeHandle) -> Result<String> {
        Ok(self.live(handle)?.tag_name)
    }

    fn get_attribute(&self, handle: &FakeHandle, name: &str) -> Result<Option<String>> {
        Ok(self.live(handle)?.attributes.get(name).cloned())
    }

    fn is_enabled(&self, handle: &FakeHandle) -> Result<bool> {
        Ok(self.live(handle)?.enabled)
    }

    fn describe(&self, handle: &FakeHandle) -> String {
        let elements = self.elements.borrow();
        format!("<{} #{}>", elements[handle.0].tag_name, handle.0)
    }
}
