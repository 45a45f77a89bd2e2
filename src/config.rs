//! Application configuration.
//!
//! Centralizes the constants used throughout the shell: branding, external
//! links, the responsive breakpoint, the icon theme, and the navigation menu.

use crate::components::icons as ic;
use crate::models::NavEntry;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the sidebar brand and the narrow-viewport header.
pub const APP_NAME: &str = "SolanaFund";

/// Tagline shown under the brand name.
pub const APP_TAGLINE: &str = "Decentralized Crowdfunding";

/// Source repository link in the sidebar footer.
pub const GITHUB_URL: &str = "https://github.com/solanafund/solanafund";

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query below which the side panel collapses into a drawer.
///
/// Must stay in sync with the 768px breakpoint in the component stylesheets.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 767px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Navigation
// =============================================================================

/// The fixed navigation menu, in display order.
///
/// Paths are unique; each doubles as the link target and the active-match key.
const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        path: "/dashboard",
        icon: ic::DASHBOARD,
    },
    NavEntry {
        label: "Create Campaign",
        path: "/create-campaign",
        icon: ic::NEW_CAMPAIGN,
    },
    NavEntry {
        label: "My Wallet",
        path: "/wallet",
        icon: ic::WALLET,
    },
    NavEntry {
        label: "Analytics",
        path: "/analytics",
        icon: ic::ANALYTICS,
    },
    NavEntry {
        label: "Code & Docs",
        path: "/docs",
        icon: ic::CODE,
    },
];

/// Get the configured navigation entries.
///
/// The list is fixed at compile time and never mutated at runtime; repeated
/// calls return the same entries in the same order.
pub fn nav_entries() -> &'static [NavEntry] {
    NAV_ENTRIES
}

/// Rows shown in the sidebar's "Technical Showcase" group. Display only.
pub const SHOWCASE_BADGES: &[(&str, &str)] = &[
    ("Framework", "Anchor"),
    ("Language", "Rust"),
    ("Network", "Devnet"),
];
