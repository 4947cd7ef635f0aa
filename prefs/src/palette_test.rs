use super::*;

#[test]
fn solarized_palettes_share_variable_names() {
    let light: Vec<_> = SOLARIZED_LIGHT.vars.iter().map(|(name, _)| *name).collect();
    let dark: Vec<_> = SOLARIZED_DARK.vars.iter().map(|(name, _)| *name).collect();
    assert_eq!(light, dark);
    assert_eq!(light, ["--background", "--highlight", "--comment", "--content", "--emphasis"]);
}

#[test]
fn contrast_palettes_are_two_variables() {
    assert_eq!(CONTRAST_LIGHT.vars.len(), 2);
    assert_eq!(CONTRAST_DARK.vars.len(), 2);
    assert_eq!(CONTRAST_DARK.get("--foreground"), Some("#ffffff"));
    assert_eq!(CONTRAST_LIGHT.get("--foreground"), Some("#000000"));
}

#[test]
fn for_preference_selects_matching_table() {
    let set = PaletteSet::SOLARIZED;
    assert_eq!(set.for_preference(Preference::Light).get("--background"), Some("#fdf6e3"));
    assert_eq!(set.for_preference(Preference::Dark).get("--background"), Some("#002b36"));
}

#[test]
fn get_returns_none_for_unknown_variable() {
    assert_eq!(SOLARIZED_DARK.get("--accent"), None);
}

#[test]
fn to_css_renders_root_rule() {
    assert_eq!(
        CONTRAST_LIGHT.to_css(),
        ":root {\n  --foreground: #000000;\n  --background: #ffffff;\n}\n"
    );
}
