use super::*;

#[test]
fn toggled_is_an_involution() {
    for pref in [Preference::Light, Preference::Dark] {
        assert_ne!(pref.toggled(), pref);
        assert_eq!(pref.toggled().toggled(), pref);
    }
}

#[test]
fn default_is_dark() {
    assert_eq!(Preference::default(), Preference::Dark);
    assert_eq!(Preference::resolve(None), Preference::Dark);
    assert_eq!(Preference::resolve(Some(Preference::Light)), Preference::Light);
}

#[test]
fn mode_spellings_match_local_storage_values() {
    assert_eq!(Preference::Light.as_mode(), "light");
    assert_eq!(Preference::Dark.as_mode(), "dark");
    assert_eq!(Preference::from_mode("light"), Some(Preference::Light));
    assert_eq!(Preference::from_mode("dark"), Some(Preference::Dark));
}

#[test]
fn theme_name_spellings_match_cookie_values() {
    assert_eq!(Preference::Light.as_theme_name(), "lightMode");
    assert_eq!(Preference::Dark.as_theme_name(), "darkMode");
    assert_eq!(Preference::from_theme_name("lightMode"), Some(Preference::Light));
    assert_eq!(Preference::from_theme_name("darkMode"), Some(Preference::Dark));
}

#[test]
fn parsing_does_not_cross_spellings() {
    assert_eq!(Preference::from_mode("lightMode"), None);
    assert_eq!(Preference::from_theme_name("light"), None);
    assert_eq!(Preference::from_mode("Light"), None);
    assert_eq!(Preference::from_theme_name(""), None);
}

#[test]
fn serde_uses_lowercase_mode_names() {
    let json = serde_json::to_string(&Preference::Light).unwrap();
    assert_eq!(json, "\"light\"");
    let back: Preference = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(back, Preference::Dark);
}
