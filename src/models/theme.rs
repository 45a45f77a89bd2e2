//! Light/dark presentation state.

/// Visual theme applied to the whole document.
///
/// The shell starts in [`Theme::Light`]; the only transition is an explicit
/// toggle from the sidebar control. The active theme is mirrored onto the
/// document root as the [`Theme::ROOT_CLASS`] class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class present on the document root element while dark mode is active.
    pub const ROOT_CLASS: &'static str = "dark";

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The state reached by a single toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
