//! Root application module.
//!
//! Contains the main App component and [`ShellState`], the shell-scoped UI
//! state (theme and drawer flags) shared through Leptos context.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::shell::RouteContext;
use crate::models::Theme;
use crate::utils::dom;

// ============================================================================
// ShellState
// ============================================================================

/// Writer for the document-wide presentation flag.
///
/// Injected into [`ShellState`] so tests can substitute an in-memory stub for
/// the real DOM write; production uses [`dom::apply_theme_class`].
pub type ThemeTarget = fn(Theme);

/// Shell UI state managed with Leptos signals.
///
/// Owns the two pieces of ephemeral state the frame needs: the light/dark
/// theme and the open flag of the narrow-viewport drawer. Both live for the
/// lifetime of the shell and reset on a full reload; nothing is persisted.
///
/// # Note
///
/// This struct is `Copy` because its fields are Leptos signals (cheap handles
/// to the underlying reactive state) and a function pointer.
#[derive(Clone, Copy)]
pub struct ShellState {
    /// Current visual theme. Mirrored onto the document root class on every
    /// transition; [`ShellState::toggle_theme`] is the only writer of that
    /// flag.
    pub theme: RwSignal<Theme>,
    /// Whether the drawer overlay is open. Only rendered below the responsive
    /// breakpoint; retained (but not shown as an overlay) above it.
    pub drawer_open: RwSignal<bool>,
    theme_target: ThemeTarget,
}

impl ShellState {
    /// Creates shell state wired to the real document flag.
    pub fn new() -> Self {
        Self::with_theme_target(dom::apply_theme_class)
    }

    /// Creates shell state with a custom presentation-flag writer.
    pub fn with_theme_target(theme_target: ThemeTarget) -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            drawer_open: RwSignal::new(false),
            theme_target,
        }
    }

    /// Flips the theme and mirrors the new value onto the document flag
    /// before returning, so no render can observe the signal and the
    /// document disagreeing.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        (self.theme_target)(next);
    }

    /// Flips the drawer between open and closed.
    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    /// Closes the drawer, e.g. after a navigation while it is open.
    pub fn close_drawer(&self) {
        if self.drawer_open.get_untracked() {
            self.drawer_open.set(false);
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global ShellState
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, with placeholder page content in the main slot
#[component]
pub fn App() -> impl IntoView {
    let shell = ShellState::new();
    provide_context(shell);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter>
                <PagePlaceholder />
            </AppRouter>
        </ErrorBoundary>
    }
}

/// Stand-in page content for the main region.
///
/// Real pages are supplied by the host application; the shell renders
/// whatever occupies the slot without inspecting it. This placeholder just
/// echoes the current path so navigation is visible during development.
#[component]
fn PagePlaceholder() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    view! {
        <section>
            <h2>{move || route_ctx.0.with(|route| route.path().to_string())}</h2>
            <p>"Page content renders here."</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    thread_local! {
        static FLAG: Cell<Option<Theme>> = const { Cell::new(None) };
    }

    fn recording_target(theme: Theme) {
        FLAG.with(|flag| flag.set(Some(theme)));
    }

    fn flag() -> Option<Theme> {
        FLAG.with(|flag| flag.get())
    }

    #[test]
    fn test_initial_state() {
        let shell = ShellState::with_theme_target(recording_target);
        assert_eq!(shell.theme.get_untracked(), Theme::Light);
        assert!(!shell.drawer_open.get_untracked());
    }

    #[test]
    fn test_toggle_theme_mirrors_flag_synchronously() {
        FLAG.with(|flag| flag.set(None));
        let shell = ShellState::with_theme_target(recording_target);

        shell.toggle_theme();
        assert_eq!(shell.theme.get_untracked(), Theme::Dark);
        assert_eq!(flag(), Some(Theme::Dark));
        // Theme transitions leave the drawer alone
        assert!(!shell.drawer_open.get_untracked());

        shell.toggle_theme();
        assert_eq!(shell.theme.get_untracked(), Theme::Light);
        assert_eq!(flag(), Some(Theme::Light));
    }

    #[test]
    fn test_even_number_of_theme_toggles_restores_initial() {
        let shell = ShellState::with_theme_target(recording_target);

        for _ in 0..4 {
            shell.toggle_theme();
        }
        assert_eq!(shell.theme.get_untracked(), Theme::Light);

        // An odd count flips exactly once net
        for _ in 0..3 {
            shell.toggle_theme();
        }
        assert_eq!(shell.theme.get_untracked(), Theme::Dark);
    }

    #[test]
    fn test_toggle_drawer_is_involution() {
        let shell = ShellState::with_theme_target(recording_target);

        shell.toggle_drawer();
        assert!(shell.drawer_open.get_untracked());
        shell.toggle_drawer();
        assert!(!shell.drawer_open.get_untracked());
    }

    #[test]
    fn test_close_drawer_is_idempotent() {
        let shell = ShellState::with_theme_target(recording_target);

        shell.close_drawer();
        assert!(!shell.drawer_open.get_untracked());

        shell.toggle_drawer();
        shell.close_drawer();
        shell.close_drawer();
        assert!(!shell.drawer_open.get_untracked());
    }
}
