use super::*;

fn root() -> ThemeRoot {
    ThemeRoot { store: StoreKind::Cookie, palette: PaletteKind::Solarized, init: None }
}

fn settings<'a>(theme: Preference, categories: &'a [String], enabled: &'a [String]) -> SettingsView<'a> {
    SettingsView { version: "1", theme, root: root(), categories, enabled }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn render_links_stylesheet_for_theme() {
    let categories = names(&["Art"]);
    let html = render_settings(&SettingsView {
        version: "0.1.0",
        theme: Preference::Light,
        root: root(),
        categories: &categories,
        enabled: &categories,
    });
    assert!(html.contains(r#"<link rel="stylesheet" href="/css/lightMode.css" />"#));
    assert!(html.contains("<title>Trivia v0.1.0</title>"));
    assert!(html.contains(r#"<html lang="en-US" data-theme-store="remote" data-theme-palette="solarized">"#));
}

#[test]
fn render_settings_advertises_palette_and_init() {
    let view = SettingsView {
        root: ThemeRoot { store: StoreKind::Local, palette: PaletteKind::Contrast, init: Some(InitPolicy::Always) },
        ..settings(Preference::Dark, &[], &[])
    };
    let html = render_settings(&view);
    assert!(html.contains(r#"data-theme-store="remote" data-theme-palette="contrast" data-theme-init="always""#));
}

#[test]
fn render_checks_current_theme_radio() {
    let html = render_settings(&settings(Preference::Dark, &[], &[]));
    assert!(html.contains(r#"id="dark-mode" name="theme" value="darkMode" checked"#));
    assert!(html.contains(r#"id="light-mode" name="theme" value="lightMode" />"#));
    assert!(html.contains(r#"id="set-theme""#));
}

#[test]
fn render_marks_enabled_categories() {
    let categories = names(&["Art", "History", "Science"]);
    let enabled = names(&["History"]);
    let html = render_settings(&settings(Preference::Dark, &categories, &enabled));
    assert!(html.contains(r#"<input type="checkbox" name="History" checked>History"#));
    assert!(html.contains(r#"<input type="checkbox" name="Art">Art"#));
    assert!(html.contains(r#"id="set-categories""#));
}

#[test]
fn render_escapes_category_names() {
    let categories = names(&["<script>"]);
    let html = render_settings(&settings(Preference::Dark, &categories, &categories));
    assert!(html.contains(r#"name="&lt;script&gt;" checked>&lt;script&gt;"#));
    assert!(!html.contains("<script>"));
}

#[test]
fn render_home_carries_cookie_toggle_and_answer() {
    let html = render_home(&HomeView { version: "1", theme: Preference::Light, root: root() });
    assert!(html.contains(r#"data-theme-store="cookie""#));
    assert!(html.contains(r#"<button id="toggle-theme">"#));
    assert!(html.contains(r#"<button id="toggle-answer">"#));
    assert!(html.contains(r#"<div id="answer"><p>lightMode</p></div>"#));
    assert!(html.contains(r#"href="/css/lightMode.css""#));
    assert!(!html.contains(r#"id="dark-mode""#));
}

#[test]
fn render_home_uses_local_trigger_for_local_store() {
    let root = ThemeRoot { store: StoreKind::Local, palette: PaletteKind::Solarized, init: Some(InitPolicy::LightOnly) };
    let html = render_home(&HomeView { version: "1", theme: Preference::Dark, root });
    assert!(html.contains(r#"<button id="dark-mode">"#));
    assert!(html.contains(r#"data-theme-init="light_only""#));
    assert!(!html.contains("toggle-theme"));
}
