//! Application router component.
//!
//! Keeps a route signal in sync with the URL hash and hands it to the shell.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current path is derived from
//!   `#/path` on every navigation
//! - **Shell never re-renders on navigation**: only the route signal changes
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::ShellState;
use crate::components::shell::Shell;
use crate::models::Route;

/// Main application router.
///
/// Seeds the route signal from the current URL hash, subscribes to
/// `hashchange`, and renders the shell around the supplied page content.
#[component]
pub fn AppRouter(children: Children) -> impl IntoView {
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Dismiss the drawer overlay once a navigation lands, so selecting a menu
    // entry on a narrow viewport reveals the page it navigated to.
    let shell = use_context::<ShellState>().expect("ShellState must be provided at root");
    Effect::new(move |prev: Option<Route>| {
        let current = route.get();
        if prev.is_some_and(|prev| prev != current) {
            shell.close_drawer();
        }
        current
    });

    // Convert to Memo for Shell (which expects Memo<Route>)
    let route_memo = Memo::new(move |_| route.get());

    view! { <Shell route=route_memo>{children()}</Shell> }
}
