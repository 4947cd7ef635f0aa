//! Click handler wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! One WASM module serves every page. The page's theme variant comes from
//! the root `data-theme-store` attribute or, failing that, from which
//! trigger element exists (see [`resolve_store`]). Elements a page lacks are
//! skipped with a debug log instead of aborting the rest of the wiring.
//!
//! Each controller sits behind an async mutex so a second click waits for
//! the first toggle's network round trip instead of racing it.

use std::rc::Rc;

use futures::lock::Mutex;
use prefs::{
    CategorySelection, Checkbox, CookieStore, LocalStore, Preference, PreferenceStore, RemoteStore, StoreError,
    StoreKind, ToggleController, ToggleOutcome,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::browser::{BrowserCookies, BrowserPage, BrowserStorage};
use crate::markup::{
    ANSWER_ID, CHECKBOX_SELECTOR, CHECKED_THEME_SELECTOR, COUNT_CATEGORIES_ID, INIT_ATTRIBUTE, PALETTE_ATTRIBUTE,
    SELECT_ALL_ID, SELECT_NONE_ID, SET_CATEGORIES_ID, STORE_ATTRIBUTE, THEME_STYLESHEET_SELECTOR, TOGGLE_ANSWER_ID,
    next_answer_display, resolve_config, resolve_store, theme_from_stylesheet_href,
};

type SharedController<S> = Rc<Mutex<ToggleController<S, BrowserPage>>>;

/// Run `run` now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn when_ready(document: &Document, run: fn(&Document)) {
    if document.ready_state() != "loading" {
        run(document);
        return;
    }

    let doc = document.clone();
    let cb = Closure::wrap(Box::new(move || run(&doc)) as Box<dyn FnMut()>);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    } else {
        log::warn!("could not listen for DOMContentLoaded");
    }
}

pub fn bind_all(document: &Document) {
    bind_theme(document);
    on_click(document, TOGGLE_ANSWER_ID, toggle_answer);
    bind_categories(document);
}

fn on_click(document: &Document, id: &str, handler: impl FnMut() + 'static) -> bool {
    let Some(element) = document.get_element_by_id(id) else {
        log::debug!("#{id} not on this page");
        return false;
    };

    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if element
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not bind click on #{id}");
        return false;
    }
    cb.forget();
    true
}

// =============================================================================
// THEME
// =============================================================================

fn bind_theme(document: &Document) {
    let root = document.document_element();
    let attribute = |name: &str| root.as_ref().and_then(|root| root.get_attribute(name));
    let store = attribute(STORE_ATTRIBUTE);
    let Some(kind) = resolve_store(store.as_deref(), |id| document.get_element_by_id(id).is_some()) else {
        return;
    };
    let Some(page) = BrowserPage::current() else {
        log::warn!("no styleable root; theme toggle disabled");
        return;
    };
    let config = resolve_config(kind, attribute(PALETTE_ATTRIBUTE).as_deref(), attribute(INIT_ATTRIBUTE).as_deref());
    log::debug!("theme variant {} ({:?} palette, {:?} init)", kind.as_str(), config.palette, config.init);
    let applier = config.applier();

    match kind {
        StoreKind::Local => {
            let Some(storage) = BrowserStorage::local() else {
                log::warn!("localStorage unavailable; theme toggle disabled");
                return;
            };
            let controller = ToggleController::new(LocalStore::new(storage), page, applier);
            controller.init();
            bind_toggle(document, kind.trigger(), controller);
        }
        StoreKind::Cookie => {
            let Some(cookies) = BrowserCookies::current() else {
                log::warn!("document.cookie unavailable; theme toggle disabled");
                return;
            };
            let controller = ToggleController::new(CookieStore::new(cookies), page, applier);
            controller.init();
            bind_toggle(document, kind.trigger(), controller);
        }
        StoreKind::Remote => {
            let Some(base_url) = page.href() else {
                log::warn!("page URL unavailable; theme setting disabled");
                return;
            };
            let store = RemoteStore::new(base_url, rendered_theme(document));
            let controller = ToggleController::new(store, page, applier);
            controller.init();
            bind_theme_choice(document, kind.trigger(), controller);
        }
    }
}

fn bind_toggle<S: PreferenceStore + 'static>(
    document: &Document,
    trigger: &str,
    controller: ToggleController<S, BrowserPage>,
) {
    let controller: SharedController<S> = Rc::new(Mutex::new(controller));
    on_click(document, trigger, move || {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let mut controller = controller.lock().await;
            report(controller.toggle().await);
        });
    });
}

/// The remote variant sets whichever theme radio is checked rather than
/// flipping the current value.
fn bind_theme_choice(document: &Document, trigger: &str, controller: ToggleController<RemoteStore, BrowserPage>) {
    let controller: SharedController<RemoteStore> = Rc::new(Mutex::new(controller));
    let doc = document.clone();
    on_click(document, trigger, move || {
        let Some(choice) = checked_theme(&doc) else {
            log::warn!("no theme radio checked");
            return;
        };
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let mut controller = controller.lock().await;
            report(controller.set(choice).await);
        });
    });
}

fn report(result: Result<ToggleOutcome, StoreError>) {
    match result {
        Ok(outcome) => log::info!("theme set to {} (reload: {})", outcome.preference, outcome.reloaded),
        Err(e) => log::warn!("theme change failed: {e}"),
    }
}

fn checked_theme(document: &Document) -> Option<Preference> {
    let input = document
        .query_selector(CHECKED_THEME_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Preference::from_theme_name(&input.value())
}

fn rendered_theme(document: &Document) -> Option<Preference> {
    let link = document.query_selector(THEME_STYLESHEET_SELECTOR).ok().flatten()?;
    theme_from_stylesheet_href(&link.get_attribute("href")?)
}

// =============================================================================
// ANSWER
// =============================================================================

fn toggle_answer() {
    let answer = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ANSWER_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(answer) = answer else {
        log::warn!("#{ANSWER_ID} missing");
        return;
    };

    let style = answer.style();
    let current = style.get_property_value("display").unwrap_or_default();
    let _ = style.set_property("display", next_answer_display(&current));
}

// =============================================================================
// CATEGORIES
// =============================================================================

fn bind_categories(document: &Document) {
    for id in [SET_CATEGORIES_ID, COUNT_CATEGORIES_ID] {
        let doc = document.clone();
        on_click(document, id, move || submit_categories(&doc));
    }

    let doc = document.clone();
    on_click(document, SELECT_ALL_ID, move || set_all_checked(&doc, true));
    let doc = document.clone();
    on_click(document, SELECT_NONE_ID, move || set_all_checked(&doc, false));
}

fn checkboxes(document: &Document) -> Vec<HtmlInputElement> {
    let Ok(list) = document.query_selector_all(CHECKBOX_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

fn set_all_checked(document: &Document, checked: bool) {
    for input in checkboxes(document) {
        input.set_checked(checked);
    }
}

fn submit_categories(document: &Document) {
    let boxes: Vec<Checkbox> = checkboxes(document)
        .iter()
        .map(|input| Checkbox::new(input.name(), input.checked()))
        .collect();
    let selection = CategorySelection::from_checkboxes(&boxes);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(base_url) = window.location().href() else {
        log::warn!("page URL unavailable; categories not sent");
        return;
    };

    let summary = selection.summary();
    spawn_local(async move {
        if let Err(e) = selection.submit(&reqwest::Client::new(), &base_url).await {
            log::warn!("category submit failed: {e}");
        }
    });
    let _ = window.alert_with_message(&summary);
}
