use prefs::{InitPolicy, PaletteKind, PaletteSet};

use super::*;

#[test]
fn answer_display_flips_between_block_and_none() {
    assert_eq!(next_answer_display("block"), "none");
    assert_eq!(next_answer_display("none"), "block");
    assert_eq!(next_answer_display(""), "block");
}

#[test]
fn stylesheet_href_names_rendered_theme() {
    assert_eq!(theme_from_stylesheet_href("/css/lightMode.css"), Some(Preference::Light));
    assert_eq!(theme_from_stylesheet_href("/css/darkMode.css?v=2"), Some(Preference::Dark));
    assert_eq!(theme_from_stylesheet_href("http://h/css/darkMode.css"), Some(Preference::Dark));
}

#[test]
fn stylesheet_href_rejects_other_files() {
    assert_eq!(theme_from_stylesheet_href("/css/trivia.css"), None);
    assert_eq!(theme_from_stylesheet_href("/css/lightMode"), None);
}

#[test]
fn resolve_store_prefers_attribute() {
    let kind = resolve_store(Some("cookie"), |id| id == "set-theme");
    assert_eq!(kind, Some(StoreKind::Cookie));
}

#[test]
fn resolve_store_checks_remote_before_local() {
    let present = ["set-theme", "dark-mode", "light-mode"];
    let kind = resolve_store(None, |id| present.contains(&id));
    assert_eq!(kind, Some(StoreKind::Remote));
}

#[test]
fn resolve_store_falls_back_on_unknown_attribute() {
    let kind = resolve_store(Some("session"), |id| id == "dark-mode");
    assert_eq!(kind, Some(StoreKind::Local));
}

#[test]
fn resolve_store_none_without_triggers() {
    assert_eq!(resolve_store(None, |_| false), None);
}

#[test]
fn resolve_config_uses_store_defaults_without_attributes() {
    let cfg = resolve_config(StoreKind::Local, None, None);
    assert_eq!(cfg.palette, PaletteKind::Solarized);
    assert_eq!(cfg.init, InitPolicy::LightOnly);
}

#[test]
fn resolve_config_reads_palette_and_init_attributes() {
    let cfg = resolve_config(StoreKind::Local, Some("contrast"), Some("always"));
    assert_eq!(cfg.store, StoreKind::Local);
    assert_eq!(cfg.applier().palettes, PaletteSet::CONTRAST);
    assert_eq!(cfg.applier().policy, InitPolicy::Always);
}

#[test]
fn resolve_config_ignores_unknown_attribute_values() {
    let cfg = resolve_config(StoreKind::Remote, Some("neon"), Some(""));
    assert_eq!(cfg.palette, PaletteKind::Solarized);
    assert_eq!(cfg.init, InitPolicy::Never);
}
