//! Main shell component.
//!
//! The persistent frame around every page: side panel, narrow-viewport
//! header, and the main content region. Receives the current route from the
//! router and shares it with child components via context.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::ShellState;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::config;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/shell.module.css");

// ============================================================================
// Route Context
// ============================================================================

/// Context for accessing the current route from any component.
///
/// This allows child components (Sidebar, page content) to access the
/// current route without prop drilling.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<Route>);

// ============================================================================
// Shell Component
// ============================================================================

/// Shell component composing the frame around the content slot.
///
/// This is a container component that:
/// - Receives the current route from the Router
/// - Provides route context to child components
/// - Renders the side panel, which collapses into a drawer overlay below the
///   responsive breakpoint
/// - Renders the content slot unmodified inside the main region
///
/// # Props
/// - `route`: The current application route (derived from URL)
/// - `children`: The page content supplied by the host
#[component]
pub fn Shell(route: Memo<Route>, children: Children) -> impl IntoView {
    let shell = use_context::<ShellState>().expect("ShellState must be provided at root");

    // Provide route context for child components
    provide_context(RouteContext(route));

    // Drawer semantics only exist below the breakpoint; above it the side
    // panel is always visible and the flag is retained but not rendered.
    let is_narrow = use_media_query(config::NARROW_VIEWPORT_QUERY);
    let drawer_visible = Signal::derive(move || is_narrow.get() && shell.drawer_open.get());

    let on_backdrop = move |_: leptos::ev::MouseEvent| shell.close_drawer();

    view! {
        <div class=css::frame>
            <Show when=move || drawer_visible.get()>
                <div class=css::backdrop on:click=on_backdrop></div>
            </Show>

            <Sidebar open=drawer_visible />

            <main class=css::main>
                <Header />
                <div class=css::content>{children()}</div>
            </main>
        </div>
    }
}
