//! Dark/light theme toggle, persisted in localStorage under `theme` and
//! applied as a `data-theme` attribute on the document root.

use web_sys as web;

use crate::dom;

const STORAGE_KEY: &str = "theme";
const SUN_ICON: &str = "<i class=\"fas fa-sun\"></i>";
const MOON_ICON: &str = "<i class=\"fas fa-moon\"></i>";

pub fn init(document: &web::Document) {
    let theme = stored_theme().unwrap_or_else(|| "dark".to_string());
    apply(document, &theme);
    set_toggle_icon(document, &theme);

    let doc = document.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        let current = doc
            .document_element()
            .and_then(|el| el.get_attribute("data-theme"))
            .unwrap_or_else(|| "dark".to_string());
        let next = if current == "dark" { "light" } else { "dark" };
        apply(&doc, next);
        persist(next);
        set_toggle_icon(&doc, next);
    });
}

fn apply(document: &web::Document, theme: &str) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme);
    }
}

fn set_toggle_icon(document: &web::Document, theme: &str) {
    if let Some(button) = document.get_element_by_id("theme-toggle") {
        button.set_inner_html(if theme == "light" { SUN_ICON } else { MOON_ICON });
    }
}

fn stored_theme() -> Option<String> {
    web::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

fn persist(theme: &str) {
    if let Some(w) = web::window() {
        if let Ok(Some(storage)) = w.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme);
        }
    }
}
