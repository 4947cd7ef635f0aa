//! Host capabilities the preference logic needs from its environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser these are backed by `localStorage`, `document.cookie` and
//! the `:root` element's inline style (see the `client` crate). The in-memory
//! implementations here stand in for them in native tests and anywhere no
//! browser exists.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use crate::error::StoreError;

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Origin-scoped persistent key/value storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the host rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `document.cookie`-style access: reads return every visible cookie as
/// `a=b; c=d`, writes take a single `name=value; attr...` assignment.
pub trait CookieSource {
    fn cookie_string(&self) -> String;

    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the host rejects the assignment.
    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError>;
}

/// The styleable root of the current page.
pub trait Page {
    fn set_style_property(&self, name: &str, value: &str);
    fn reload(&self);
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

impl<T: CookieSource + ?Sized> CookieSource for &T {
    fn cookie_string(&self) -> String {
        (**self).cookie_string()
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError> {
        (**self).set_cookie(assignment)
    }
}

impl<T: Page + ?Sized> Page for &T {
    fn set_style_property(&self, name: &str, value: &str) {
        (**self).set_style_property(name, value);
    }

    fn reload(&self) {
        (**self).reload();
    }
}

/// Value of the last `name=` entry in a `document.cookie` string.
#[must_use]
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .last()
}

// =============================================================================
// IN-MEMORY HOSTS
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, like a browser with storage disabled.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: RefCell::default(), read_only: true }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Storage(format!("storage is read-only: {key}")));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Cookie jar that applies assignments the way a browser would (attributes
/// are dropped, the name/value pair replaces any earlier one) and records
/// every raw assignment.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    jar: RefCell<Vec<(String, String)>>,
    assignments: RefCell<Vec<String>>,
}

impl MemoryCookies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated from a `a=b; c=d` string.
    #[must_use]
    pub fn from_cookie_string(cookies: &str) -> Self {
        let jar = cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        Self { jar: RefCell::new(jar), assignments: RefCell::default() }
    }

    /// Every assignment written so far, verbatim.
    #[must_use]
    pub fn assignments(&self) -> Vec<String> {
        self.assignments.borrow().clone()
    }
}

impl CookieSource for MemoryCookies {
    fn cookie_string(&self) -> String {
        self.jar
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError> {
        let pair = assignment.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.trim().split_once('=') else {
            return Err(StoreError::Storage(format!("malformed cookie assignment: {assignment}")));
        };

        let mut jar = self.jar.borrow_mut();
        jar.retain(|(existing, _)| existing != name);
        jar.push((name.to_owned(), value.to_owned()));
        self.assignments.borrow_mut().push(assignment.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    vars: RefCell<BTreeMap<String, String>>,
    reloads: Cell<usize>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    /// Snapshot of every inline custom property set on the root.
    #[must_use]
    pub fn style_properties(&self) -> BTreeMap<String, String> {
        self.vars.borrow().clone()
    }

    #[must_use]
    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }
}

impl Page for MemoryPage {
    fn set_style_property(&self, name: &str, value: &str) {
        self.vars.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}
