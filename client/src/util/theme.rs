//! Theme preference persistence.
//!
//! Reads the stored preference from `localStorage` and applies it as a
//! `data-theme` attribute on `<html>`. Toggling writes the literal
//! `"light"`/`"dark"` back. Storage failures (private mode, disabled storage)
//! degrade to the in-memory theme; SSR paths no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

/// Read the stored theme. Absent, unreadable, or unknown values mean dark.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(crate::consts::THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        match root {
            Some(el) => {
                if let Err(err) = el.set_attribute("data-theme", theme.as_str()) {
                    log::warn!("failed to apply theme: {err:?}");
                }
            }
            None => log::warn!("no document element to apply theme to"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(crate::consts::THEME_STORAGE_KEY, next.as_str()).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }
    next
}
