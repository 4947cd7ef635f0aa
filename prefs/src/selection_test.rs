use super::*;

fn five_with_two_checked() -> Vec<Checkbox> {
    vec![
        Checkbox::new("name1", true),
        Checkbox::new("other1", false),
        Checkbox::new("name2", true),
        Checkbox::new("other2", false),
        Checkbox::new("other3", false),
    ]
}

#[test]
fn two_of_five_payload_and_summary() {
    let selection = CategorySelection::from_checkboxes(&five_with_two_checked());
    let body = serde_json::to_string(&selection.payload()).unwrap();
    assert_eq!(body, r#"{"categories":["name1","name2"]}"#);
    assert_eq!(selection.summary(), "Selected 2 out of 5 categories.");
}

#[test]
fn nothing_checked_posts_empty_list() {
    let boxes = vec![Checkbox::new("a", false)];
    let selection = CategorySelection::from_checkboxes(&boxes);
    assert!(selection.payload().categories.is_empty());
    assert_eq!(selection.summary(), "Selected 0 out of 1 categories.");
}

#[test]
fn endpoint_appends_categories_path() {
    assert_eq!(CategorySelection::endpoint("http://h/settings"), "http://h/settings/categories");
    assert_eq!(CategorySelection::endpoint("http://h/settings/"), "http://h/settings/categories");
}

#[test]
fn payload_deserializes_from_wire_shape() {
    let parsed: SelectedCategories = serde_json::from_str(r#"{"categories":["x","y"]}"#).unwrap();
    assert_eq!(parsed.categories, vec!["x", "y"]);
}
