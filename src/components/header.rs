//! Narrow-viewport header component.
//!
//! Shows the drawer trigger and the app title. Hidden by CSS at or above the
//! responsive breakpoint, where the side panel is always visible.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ShellState;
use crate::components::icons as ic;
use crate::config;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar with the drawer trigger.
#[component]
pub fn Header() -> impl IntoView {
    let shell = use_context::<ShellState>().expect("ShellState must be provided at root");

    let on_trigger = move |_: leptos::ev::MouseEvent| shell.toggle_drawer();

    view! {
        <header class=css::bar>
            <button class=css::trigger on:click=on_trigger title="Toggle navigation">
                {move || if shell.drawer_open.get() {
                    view! { <Icon icon=ic::CLOSE /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MENU /> }.into_any()
                }}
            </button>
            <h1 class=css::title>{config::APP_NAME}</h1>
        </header>
    }
}
