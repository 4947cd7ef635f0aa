use super::*;
use crate::host::{MemoryCookies, MemoryStorage};

#[tokio::test]
async fn local_store_round_trips_both_values() {
    let storage = MemoryStorage::new();
    let mut store = LocalStore::new(&storage);
    for pref in [Preference::Light, Preference::Dark] {
        store.write(pref).await.unwrap();
        assert_eq!(store.read(), Some(pref));
    }
    assert_eq!(storage.get_item(MODE_KEY).as_deref(), Some("dark"));
}

#[test]
fn local_store_reads_absent_on_first_visit() {
    let store = LocalStore::new(MemoryStorage::new());
    assert_eq!(store.read(), None);
    assert_eq!(store.refresh(), Refresh::InPlace);
}

#[test]
fn local_store_treats_unknown_value_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item(MODE_KEY, "sepia").unwrap();
    assert_eq!(LocalStore::new(&storage).read(), None);
}

#[tokio::test]
async fn local_store_surfaces_storage_failure() {
    let mut store = LocalStore::new(MemoryStorage::read_only());
    let err = store.write(Preference::Light).await.unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn cookie_store_round_trips_both_values() {
    let cookies = MemoryCookies::new();
    let mut store = CookieStore::new(&cookies);
    for pref in [Preference::Light, Preference::Dark] {
        store.write(pref).await.unwrap();
        assert_eq!(store.read(), Some(pref));
    }
}

#[tokio::test]
async fn cookie_store_writes_raw_expires_assignment() {
    let cookies = MemoryCookies::from_cookie_string("colorTheme=darkMode");
    let mut store = CookieStore::new(&cookies);
    assert_eq!(store.read(), Some(Preference::Dark));

    store.write(Preference::Light).await.unwrap();
    assert_eq!(cookies.assignments(), vec!["colorTheme=lightMode; expires=31536000; path=/"]);
    assert_eq!(store.refresh(), Refresh::Reload);
}

#[test]
fn cookie_store_ignores_other_cookies() {
    let store = CookieStore::new(MemoryCookies::from_cookie_string("enabledCategories=abc; session=1"));
    assert_eq!(store.read(), None);
}

#[test]
fn remote_store_builds_theme_endpoint_from_page_url() {
    let store = RemoteStore::new("http://localhost:8080/settings", None);
    assert_eq!(store.theme_endpoint(Preference::Light), "http://localhost:8080/settings/theme/lightMode");

    let trailing = RemoteStore::new("http://localhost:8080/settings/", None);
    assert_eq!(trailing.theme_endpoint(Preference::Dark), "http://localhost:8080/settings/theme/darkMode");
}

#[test]
fn remote_store_reads_rendered_preference() {
    let store = RemoteStore::new("http://localhost/settings", Some(Preference::Light));
    assert_eq!(store.read(), Some(Preference::Light));
    assert_eq!(store.refresh(), Refresh::Reload);
}

#[tokio::test]
async fn remote_store_reports_unreachable_endpoint() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let mut store = RemoteStore::new("http://127.0.0.1:9/settings", Some(Preference::Dark));
    let err = store.write(Preference::Light).await.unwrap_err();
    assert!(matches!(err, StoreError::Request(_)));
    assert_eq!(store.read(), Some(Preference::Dark));
}
