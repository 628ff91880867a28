//! Last-submitted custom input and the durable first-run flag.
//!
//! The flag alone gates the first-time welcome flow across page reloads.
//! The full record is also persisted as JSON so the form can restore a
//! returning user's values after a reload, not just within one session.

use std::cell::RefCell;

use common::CustomInputSet;
use web_sys::window;

const HAS_CUSTOM_LOCATION_KEY: &str = "viralcast_has_custom_location";
const LAST_INPUT_KEY: &str = "viralcast_last_custom_input";

thread_local! {
    static LAST_INPUT: RefCell<Option<CustomInputSet>> = const { RefCell::new(None) };
}

/// Record a successful submission. Overwrites the single retained record and
/// sets the durable flag. The flag is never unset.
pub fn save(input: &CustomInputSet) {
    LAST_INPUT.with(|cell| *cell.borrow_mut() = Some(input.clone()));

    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; custom input will not survive reload");
        return;
    };

    if storage.set_item(HAS_CUSTOM_LOCATION_KEY, "true").is_err() {
        log::warn!("Failed to persist first-run flag");
    }

    match serde_json::to_string(input) {
        Ok(json) => {
            if storage.set_item(LAST_INPUT_KEY, &json).is_err() {
                log::warn!("Failed to persist custom input record");
            }
        }
        Err(e) => log::warn!("Failed to serialize custom input: {}", e),
    }
}

/// The most recently saved record, if any. Prefers the in-memory copy and
/// falls back to the persisted one.
pub fn load() -> Option<CustomInputSet> {
    let cached = LAST_INPUT.with(|cell| cell.borrow().clone());
    if cached.is_some() {
        return cached;
    }

    let storage = local_storage()?;
    let json = storage.get_item(LAST_INPUT_KEY).ok().flatten()?;
    match serde_json::from_str::<CustomInputSet>(&json) {
        Ok(input) => {
            LAST_INPUT.with(|cell| *cell.borrow_mut() = Some(input.clone()));
            Some(input)
        }
        Err(e) => {
            log::warn!("Ignoring unreadable stored custom input: {}", e);
            None
        }
    }
}

/// Whether any custom submission has ever happened on this browser.
/// Reads the durable flag only; presence of the key is what counts.
pub fn has_ever_submitted() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(HAS_CUSTOM_LOCATION_KEY).ok().flatten())
        .is_some()
}

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}
