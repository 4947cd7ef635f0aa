//! Click-driven light/dark toggle.
//!
//! DESIGN
//! ======
//! Two states, one transition. The current state is always read from the
//! store, never from the page, so nothing outside the store can desync it.
//! Whether the new state is applied in place or by reloading is decided by
//! the store's [`Refresh`] mode.
//!
//! ERROR HANDLING
//! ==============
//! A failed write is returned to the caller. In-place stores get the
//! previous palette re-applied; reload stores never reload on failure.

use crate::applier::ThemeApplier;
use crate::error::StoreError;
use crate::host::Page;
use crate::preference::Preference;
use crate::store::{PreferenceStore, Refresh};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Result of a successful toggle or set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub preference: Preference,
    /// `true` when the page was reloaded instead of restyled.
    pub reloaded: bool,
}

pub struct ToggleController<S, P> {
    store: S,
    page: P,
    applier: ThemeApplier,
}

impl<S: PreferenceStore, P: Page> ToggleController<S, P> {
    pub fn new(store: S, page: P, applier: ThemeApplier) -> Self {
        Self { store, page, applier }
    }

    /// Apply the stored preference per the applier's init policy.
    pub fn init(&self) -> Preference {
        self.applier.init(&self.page, self.store.read())
    }

    #[must_use]
    pub fn current(&self) -> Preference {
        Preference::resolve(self.store.read())
    }

    /// Flip the stored preference.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub async fn toggle(&mut self) -> Result<ToggleOutcome, StoreError> {
        let next = self.current().toggled();
        self.set(next).await
    }

    /// Store `next` and make it visible.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub async fn set(&mut self, next: Preference) -> Result<ToggleOutcome, StoreError> {
        match self.store.refresh() {
            Refresh::InPlace => {
                let previous = self.current();
                self.applier.apply(&self.page, next);
                if let Err(e) = self.store.write(next).await {
                    log::warn!("theme write failed, restoring {previous}: {e}");
                    self.applier.apply(&self.page, previous);
                    return Err(e);
                }
                Ok(ToggleOutcome { preference: next, reloaded: false })
            }
            Refresh::Reload => {
                self.store.write(next).await?;
                self.page.reload();
                Ok(ToggleOutcome { preference: next, reloaded: true })
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}
