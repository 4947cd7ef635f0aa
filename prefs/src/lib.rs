//! Theme preference model shared by the browser client and the server.
//!
//! A [`Preference`] lives in exactly one [`store::PreferenceStore`] per
//! configuration. The [`controller::ToggleController`] reads it from that
//! store, flips it, pushes the matching [`palette::Palette`] onto the page
//! through a [`host::Page`], and writes it back. The DOM is always derived
//! from the store and never read back as truth.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | The light/dark value and its store encodings |
//! | [`palette`] | Static CSS custom property tables per theme |
//! | [`host`] | Traits over browser state plus in-memory implementations |
//! | [`store`] | `PreferenceStore` and the local, cookie, and remote backends |
//! | [`applier`] | Palette application and the initialization policy |
//! | [`controller`] | The click-driven two-state toggle |
//! | [`config`] | Variant selection by trigger id |
//! | [`selection`] | Category checkbox selection payloads |

pub mod applier;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod palette;
pub mod preference;
pub mod selection;
pub mod store;

pub use applier::{InitPolicy, ThemeApplier};
pub use config::{PaletteKind, StoreKind, ToggleConfig};
pub use controller::{ToggleController, ToggleOutcome};
pub use error::StoreError;
pub use palette::{Palette, PaletteSet};
pub use preference::Preference;
pub use selection::{CategorySelection, Checkbox, SelectedCategories};
pub use store::{CookieStore, LocalStore, PreferenceStore, Refresh, RemoteStore};
