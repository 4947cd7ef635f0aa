//! Category checkbox selection.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// JSON body of `POST <page>/categories`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCategories {
    pub categories: Vec<String>,
}

/// One checkbox on the settings page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkbox {
    pub name: String,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), checked }
    }
}

/// Checked names in page order, plus how many checkboxes there were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySelection {
    pub selected: Vec<String>,
    pub total: usize,
}

impl CategorySelection {
    pub fn from_checkboxes<'a>(boxes: impl IntoIterator<Item = &'a Checkbox>) -> Self {
        let mut selected = Vec::new();
        let mut total = 0;
        for checkbox in boxes {
            total += 1;
            if checkbox.checked {
                selected.push(checkbox.name.clone());
            }
        }
        Self { selected, total }
    }

    #[must_use]
    pub fn payload(&self) -> SelectedCategories {
        SelectedCategories { categories: self.selected.clone() }
    }

    /// Confirmation text shown to the user after submitting.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Selected {} out of {} categories.", self.selected.len(), self.total)
    }

    #[must_use]
    pub fn endpoint(base_url: &str) -> String {
        format!("{}/categories", base_url.trim_end_matches('/'))
    }

    /// Post the selection to `<base_url>/categories`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] on transport failure and
    /// [`StoreError::Status`] on a non-success response.
    pub async fn submit(&self, client: &reqwest::Client, base_url: &str) -> Result<(), StoreError> {
        let resp = client
            .post(Self::endpoint(base_url))
            .json(&self.payload())
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16() });
        }
        Ok(())
    }
}
