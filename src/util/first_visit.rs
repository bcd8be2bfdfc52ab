//! First-visit flag backed by `localStorage`.
//!
//! The auth form opens in login mode for anyone who has logged in from
//! this browser before, and in signup mode otherwise. The flag is read
//! once when the form state is constructed and set after the first
//! successful login. Requires a browser environment; on the server it
//! reads as `false`.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "hasEverLoggedIn";

/// Read the flag from localStorage. `false` on the server or when the key
/// is absent.
pub fn has_ever_logged_in() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist the flag after a successful login. Storage failures are
/// ignored; the worst case is seeing the signup form again next visit.
pub fn mark_logged_in() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, "true");
            }
        }
    }
}
