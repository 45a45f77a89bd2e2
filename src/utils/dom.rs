//! DOM and Web API utility functions.
//!
//! Provides safe access to browser globals: every accessor degrades to a
//! no-op when the window or document is unavailable.

use crate::models::Theme;

/// Get the browser window object.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// Mirror the theme onto the document root class.
///
/// This is the single write site for the document-wide presentation flag
/// ([`Theme::ROOT_CLASS`]); no other code touches that class. A missing
/// window, document, or root element makes this a no-op: failing to re-skin
/// the page is non-fatal to navigation.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = if theme.is_dark() {
        classes.add_1(Theme::ROOT_CLASS)
    } else {
        classes.remove_1(Theme::ROOT_CLASS)
    };
}

/// Native stand-in so state transitions stay testable off-wasm.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_class(_theme: Theme) {}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_root_class_tracks_theme() {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .expect("test runner provides a document");

        apply_theme_class(Theme::Dark);
        assert!(root.class_list().contains(Theme::ROOT_CLASS));

        apply_theme_class(Theme::Light);
        assert!(!root.class_list().contains(Theme::ROOT_CLASS));
    }
}
