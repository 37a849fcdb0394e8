use std::sync::Mutex;

use folio_core::contact;
use folio_core::glow::{self, Section};
use folio_core::model::{ProjectStore, QueryState, StoreError};
use folio_core::reveal::RevealRegistry;
use folio_core::views::render_cards;
use folio_protocol::{Point, ThemeMode};
use wasm_bindgen::prelude::*;

/// Page-wide state behind the bridge. Single-threaded on the page; the
/// mutex only satisfies the static's Sync bound.
struct PageState {
    store: ProjectStore,
    query: QueryState,
    reveals: RevealRegistry,
    theme: ThemeMode,
}

static PAGE: Mutex<Option<PageState>> = Mutex::new(None);

fn with_page<T>(f: impl FnOnce(&mut PageState) -> T) -> Result<T, JsError> {
    let mut page = PAGE.lock().unwrap();
    let state = page
        .as_mut()
        .ok_or_else(|| JsError::new("page not initialized; call init_page first"))?;
    Ok(f(state))
}

/// Build the project store from the built-in seed records and reset the
/// query state. Returns the number of records loaded.
#[wasm_bindgen]
pub fn init_page(saved_theme: Option<String>) -> Result<usize, JsError> {
    let store = ProjectStore::seed().map_err(|e: StoreError| JsError::new(&e.to_string()))?;
    let count = store.len();
    let mut page = PAGE.lock().unwrap();
    *page = Some(PageState {
        store,
        query: QueryState::new(),
        reveals: RevealRegistry::new(),
        theme: ThemeMode::from_saved(saved_theme.as_deref()),
    });
    Ok(count)
}

/// Chip-click adapter: "all" or a category key. The caller re-renders next.
#[wasm_bindgen]
pub fn set_filter(key: &str) -> Result<(), JsError> {
    with_page(|page| page.query.set_filter(key))
}

/// Search-box adapter: a missing control value means an empty query.
#[wasm_bindgen]
pub fn set_query(value: Option<String>) -> Result<(), JsError> {
    with_page(|page| page.query.set_query(value.as_deref()))
}

/// Run the filter pipeline and return the card list as JSON for the
/// DOM-sync layer.
#[wasm_bindgen]
pub fn render_page() -> Result<String, JsError> {
    let list = with_page(|page| render_cards(&page.store, &page.query))?;
    serde_json::to_string(&list).map_err(|e| JsError::new(&e.to_string()))
}

/// Re-arm scroll-reveal observation for a freshly inserted card node.
/// Returns whether the node actually needs an observer (idempotent).
#[wasm_bindgen]
pub fn observe_reveal(node_id: &str) -> Result<bool, JsError> {
    with_page(|page| page.reveals.observe(node_id))
}

/// IntersectionObserver callback: returns whether the node just crossed
/// the reveal threshold and should get its permanent revealed class.
#[wasm_bindgen]
pub fn reveal_intersection(node_id: &str, ratio: f64) -> Result<bool, JsError> {
    with_page(|page| page.reveals.on_intersection(node_id, ratio))
}

/// Flip dark/light and return the string to persist and set on the document.
#[wasm_bindgen]
pub fn toggle_theme() -> Result<String, JsError> {
    with_page(|page| {
        page.theme = page.theme.toggle();
        page.theme.as_str().to_owned()
    })
}

/// The currently active theme string.
#[wasm_bindgen]
pub fn current_theme() -> Result<String, JsError> {
    with_page(|page| page.theme.as_str().to_owned())
}

/// The contact email the copy button writes to the clipboard.
#[wasm_bindgen]
pub fn contact_email() -> String {
    contact::CONTACT_EMAIL.to_owned()
}

/// Toast JSON for the copy button, picked by whether the clipboard write
/// succeeded. Failure never propagates past this boundary.
#[wasm_bindgen]
pub fn copy_toast(copied: bool) -> Result<String, JsError> {
    let toast = if copied {
        contact::copied_toast()
    } else {
        contact::copy_failed_toast()
    };
    serde_json::to_string(&toast).map_err(|e| JsError::new(&e.to_string()))
}

/// Glow target for a section key as JSON `{x, y}`, with the caller's
/// jitter applied and clamped. Unknown keys fall back to the top section.
#[wasm_bindgen]
pub fn glow_target(section_key: &str, jitter_x: f64, jitter_y: f64) -> Result<String, JsError> {
    let section = Section::from_key(section_key).unwrap_or(Section::Top);
    let target = glow::zone_target(section, Point::new(jitter_x, jitter_y));
    serde_json::to_string(&target).map_err(|e| JsError::new(&e.to_string()))
}

/// Glow opacity for the current scroll progress in [0, 1].
#[wasm_bindgen]
pub fn glow_opacity(scroll_progress: f64) -> f64 {
    glow::scroll_opacity(scroll_progress)
}

/// Pick the section the glow should drift toward from observer callback
/// entries, passed as a JSON array of `[section_key, intersection_ratio]`
/// pairs. Returns the winning key, or nothing when no section intersects;
/// unknown keys are ignored.
#[wasm_bindgen]
pub fn glow_dominant_section(entries_json: &str) -> Result<Option<String>, JsError> {
    let raw: Vec<(String, f64)> =
        serde_json::from_str(entries_json).map_err(|e| JsError::new(&e.to_string()))?;
    let entries: Vec<(Section, f64)> = raw
        .iter()
        .filter_map(|(key, ratio)| Section::from_key(key).map(|section| (section, *ratio)))
        .collect();
    Ok(glow::dominant_section(&entries).map(|section| section.key().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_section_crosses_the_bridge() {
        let json = r#"[["top", 0.2], ["work", 0.55], ["nav", 0.9]]"#;
        let winner = glow_dominant_section(json).unwrap_or(None);
        assert_eq!(winner.as_deref(), Some("work"));
    }

    #[test]
    fn all_hidden_sections_pick_nothing() {
        let json = r#"[["top", 0.0], ["about", 0.0]]"#;
        let winner = glow_dominant_section(json).unwrap_or(Some("unexpected".into()));
        assert_eq!(winner, None);
    }

    #[test]
    fn malformed_entries_error() {
        assert!(glow_dominant_section("not json").is_err());
    }
}
