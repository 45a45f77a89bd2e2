//! Navigation menu model and active-entry derivation.

use icondata::Icon;

/// A single entry in the side panel menu.
///
/// The entry list is fixed at compile time (see [`crate::config::nav_entries`])
/// and never mutated while the shell is mounted. `path` doubles as the link
/// target and the active-match key and is unique within the list.
#[derive(Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

/// Find the entry whose path exactly equals `path`.
///
/// `None` means the current page is not in the menu, which is a valid state:
/// nothing gets highlighted. Paths are unique by construction; if that is
/// ever violated, the first match in list order wins.
pub fn active_entry<'a>(path: &str, entries: &'a [NavEntry]) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| entry.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry {
                label: "Dashboard",
                path: "/dashboard",
                icon: icondata::LuLayoutDashboard,
            },
            NavEntry {
                label: "Wallet",
                path: "/wallet",
                icon: icondata::LuWallet,
            },
        ]
    }

    #[test]
    fn test_exact_path_matches() {
        let entries = entries();
        let active = active_entry("/wallet", &entries);
        assert_eq!(active.map(|e| e.label), Some("Wallet"));
        assert_eq!(active.map(|e| e.path), Some("/wallet"));
    }

    #[test]
    fn test_unknown_path_matches_nothing() {
        let entries = entries();
        assert!(active_entry("/unknown", &entries).is_none());
        assert!(active_entry("", &entries).is_none());
    }

    #[test]
    fn test_prefix_and_suffix_are_not_matches() {
        let entries = entries();
        assert!(active_entry("/wall", &entries).is_none());
        assert!(active_entry("/wallet/", &entries).is_none());
        assert!(active_entry("/wallet/history", &entries).is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_paths() {
        let duplicated = vec![
            NavEntry {
                label: "First",
                path: "/wallet",
                icon: icondata::LuWallet,
            },
            NavEntry {
                label: "Second",
                path: "/wallet",
                icon: icondata::LuWallet,
            },
        ];
        assert_eq!(
            active_entry("/wallet", &duplicated).map(|e| e.label),
            Some("First")
        );
    }

    #[test]
    fn test_configured_entries_are_stable_and_unique() {
        let first: Vec<&str> = crate::config::nav_entries().iter().map(|e| e.path).collect();
        let second: Vec<&str> = crate::config::nav_entries().iter().map(|e| e.path).collect();
        assert_eq!(first, second);

        let mut paths = first.clone();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), first.len(), "nav entry paths must be unique");
    }

    #[test]
    fn test_every_configured_entry_is_its_own_active_match() {
        let entries = crate::config::nav_entries();
        for entry in entries {
            assert_eq!(
                active_entry(entry.path, entries).map(|e| e.path),
                Some(entry.path)
            );
        }
    }
}
