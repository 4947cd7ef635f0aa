//! Domain services behind the HTTP routes.

pub mod cookies;
pub mod page;
