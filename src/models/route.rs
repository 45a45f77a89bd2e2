//! Hash-based routing for static-host-compatible navigation.
//!
//! The shell needs exactly two things from a router: the current path and a
//! way to request navigation to a path. Hash URLs (`#/wallet`) provide both
//! while keeping the app servable from static storage, and browser
//! back/forward keeps working through the `hashchange` event.

/// Current route as a normalized path (leading `/`, no hash prefix).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Route {
    /// Creates a route from a path, normalizing to a leading `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim();
        let path = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { path }
    }

    /// Parse a URL hash into a route. Empty hashes map to the root path.
    pub fn from_hash(hash: &str) -> Self {
        Self::new(hash.trim_start_matches('#'))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Convert this route to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Request navigation to this route by updating the URL hash.
    ///
    /// Setting `location.hash` fires `hashchange`, so the router signal picks
    /// this up the same way it picks up back/forward navigation.
    pub fn navigate(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash("").path(), "/");
        assert_eq!(Route::from_hash("#").path(), "/");
        assert_eq!(Route::from_hash("#/").path(), "/");
        assert_eq!(Route::from_hash("#/wallet").path(), "/wallet");
        assert_eq!(
            Route::from_hash("#/create-campaign").path(),
            "/create-campaign"
        );
        // Missing leading slash is normalized
        assert_eq!(Route::from_hash("#wallet").path(), "/wallet");
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::new("/").to_hash(), "#/");
        assert_eq!(Route::new("/wallet").to_hash(), "#/wallet");
        assert_eq!(Route::new("analytics").to_hash(), "#/analytics");
    }

    #[test]
    fn test_hash_round_trip() {
        for hash in ["#/", "#/dashboard", "#/wallet", "#/docs"] {
            assert_eq!(Route::from_hash(hash).to_hash(), hash);
        }
    }
}
