//! Side panel component.
//!
//! Brand header, navigation menu with active-entry highlighting, showcase
//! badges, and a footer with the theme toggle and source link. Rendered as a
//! fixed panel on wide viewports and as a drawer overlay below the
//! breakpoint.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ShellState;
use crate::components::icons as ic;
use crate::components::shell::RouteContext;
use crate::config;
use crate::models::{NavEntry, Route, Theme, active_entry};

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

/// Side panel with brand, navigation, and footer sections.
///
/// # Props
/// - `open`: whether the panel is currently shown as a drawer overlay
///   (always false at or above the breakpoint, where CSS keeps the panel
///   visible regardless)
#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    let panel_class = move || {
        if open.get() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };

    view! {
        <aside class=panel_class>
            <div class=css::brand>
                <span class=css::brandMark><Icon icon=ic::BRAND /></span>
                <div>
                    <h2 class=css::brandName>{config::APP_NAME}</h2>
                    <p class=css::brandTagline>{config::APP_TAGLINE}</p>
                </div>
            </div>

            <nav class=css::menu>
                <span class=css::groupLabel>"Navigation"</span>
                <NavMenu />

                <span class=css::groupLabel>"Technical Showcase"</span>
                <ShowcaseBadges />
            </nav>

            <SidebarFooter />
        </aside>
    }
}

/// Navigation menu with exactly the active entry highlighted.
#[component]
fn NavMenu() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    // Path of the active entry, or None when the current page is not in the
    // menu (valid state: nothing is highlighted).
    let active_path = Memo::new(move |_| {
        route_ctx
            .0
            .with(|route| active_entry(route.path(), config::nav_entries()).map(|entry| entry.path))
    });

    view! {
        <ul class=css::menuList>
            {config::nav_entries()
                .iter()
                .copied()
                .map(|entry| view! { <NavMenuItem entry=entry active_path=active_path /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

/// A single menu entry. Activating it requests navigation to the entry path.
#[component]
fn NavMenuItem(entry: NavEntry, active_path: Memo<Option<&'static str>>) -> impl IntoView {
    let item_class = move || {
        if active_path.get() == Some(entry.path) {
            format!("{} {}", css::menuItem, css::menuItemActive)
        } else {
            css::menuItem.to_string()
        }
    };

    view! {
        <li>
            <button
                class=item_class
                on:click=move |_| Route::new(entry.path).navigate()
                title=entry.label
            >
                <span class=css::menuIcon><Icon icon=entry.icon /></span>
                <span class=css::menuLabel>{entry.label}</span>
            </button>
        </li>
    }
}

/// Static badge rows mirroring the project's stack. Display only.
#[component]
fn ShowcaseBadges() -> impl IntoView {
    view! {
        <div class=css::showcase>
            {config::SHOWCASE_BADGES
                .iter()
                .map(|(name, value)| view! {
                    <div class=css::showcaseRow>
                        <span class=css::showcaseName>{*name}</span>
                        <span class=css::badge>{*value}</span>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Footer with the theme toggle and source link.
#[component]
fn SidebarFooter() -> impl IntoView {
    let shell = use_context::<ShellState>().expect("ShellState must be provided at root");

    let on_toggle_theme = move |_: leptos::ev::MouseEvent| shell.toggle_theme();

    // The control advertises the state a press would switch to.
    let toggle_title = Signal::derive(move || match shell.theme.get() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    });

    view! {
        <div class=css::footer>
            <div class=css::footerActions>
                <button
                    class=css::footerButton
                    on:click=on_toggle_theme
                    title=toggle_title
                >
                    {move || match shell.theme.get() {
                        Theme::Light => view! { <Icon icon=ic::THEME_DARK /> }.into_any(),
                        Theme::Dark => view! { <Icon icon=ic::THEME_LIGHT /> }.into_any(),
                    }}
                </button>
                <a
                    class=css::footerButton
                    href=config::GITHUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    title="View source on GitHub"
                >
                    <Icon icon=ic::GITHUB />
                </a>
            </div>
            <span class=css::badge>"Portfolio"</span>
        </div>
    }
}
