//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChartColumn as Analytics, LuCode as Code, LuGithub as Github,
        LuLayoutDashboard as Dashboard, LuMenu as Menu, LuMoon as ThemeDark,
        LuPlus as NewCampaign, LuSun as ThemeLight, LuWallet as Wallet, LuX as Close,
        LuZap as Brand,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBarChart as Analytics, BsCodeSlash as Code, BsGithub as Github,
        BsLightningChargeFill as Brand, BsList as Menu, BsMoon as ThemeDark,
        BsPlusLg as NewCampaign, BsSpeedometer2 as Dashboard, BsSun as ThemeLight,
        BsWallet2 as Wallet, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BRAND, Brand);
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(NEW_CAMPAIGN, NewCampaign);
themed_icon!(WALLET, Wallet);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(CODE, Code);
themed_icon!(THEME_LIGHT, ThemeLight);
themed_icon!(THEME_DARK, ThemeDark);
themed_icon!(GITHUB, Github);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
