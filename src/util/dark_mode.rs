//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates the class. While no explicit preference is stored, the OS
//! preference is mirrored. Requires a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "eduvault.dark";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// True once the user has explicitly chosen a mode.
pub fn has_stored_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}

/// Mirror OS color-scheme changes while no explicit choice is stored.
///
/// The listener is installed once per page load by the navbar and lives for
/// the rest of the page.
#[cfg(feature = "hydrate")]
pub fn watch_system(on_change: impl Fn(bool) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(mq)) = window.match_media("(prefers-color-scheme: dark)") else {
        return;
    };

    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
        move |ev: web_sys::MediaQueryListEvent| {
            if has_stored_preference() {
                return;
            }
            let dark = ev.matches();
            apply(dark);
            on_change(dark);
        },
    );
    if mq
        .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        handler.forget();
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn watch_system(on_change: impl Fn(bool) + 'static) {
    let _ = on_change;
}
