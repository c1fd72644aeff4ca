//! Service endpoint selection.

use crate::layout::{ClientState, StateError};

/// Local development instance.
const LOCAL_BASE_URL: &str = "http://localhost:10240/";

/// Production instance.
const PRODUCTION_BASE_URL: &str = "https://godbolt.org/";

/// Which Compiler Explorer instance a deck talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// A Compiler Explorer running on `localhost:10240`.
    Local,
    /// The public godbolt.org instance.
    #[default]
    Production,
}

impl Endpoint {
    /// Pick the endpoint from the host name serving the deck.
    ///
    /// Any host containing `localhost` (case-insensitive) gets the local
    /// instance; everything else goes to production.
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        if host.to_ascii_lowercase().contains("localhost") {
            Self::Local
        } else {
            Self::Production
        }
    }

    /// Base URL of this instance, with a trailing slash.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Local => LOCAL_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Full URL opening the given client state in this instance.
    pub fn url_for(self, state: &ClientState) -> Result<String, StateError> {
        Ok(format!("{}#{}", self.base_url(), state.fragment()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_localhost() {
        assert_eq!(Endpoint::from_host("localhost"), Endpoint::Local);
        assert_eq!(Endpoint::from_host("localhost:8000"), Endpoint::Local);
        assert_eq!(Endpoint::from_host("LOCALHOST:8000"), Endpoint::Local);
    }

    #[test]
    fn test_from_host_production() {
        assert_eq!(Endpoint::from_host("slides.example.com"), Endpoint::Production);
        assert_eq!(Endpoint::from_host(""), Endpoint::Production);
        assert_eq!(Endpoint::from_host("127.0.0.1:8000"), Endpoint::Production);
    }

    #[test]
    fn test_url_for_joins_base_and_fragment() {
        let state = ClientState::new("int x;\n", "g8", "-O2");

        let url = Endpoint::Production.url_for(&state).expect("url builds");
        assert!(url.starts_with("https://godbolt.org/#%7B"));

        let url = Endpoint::Local.url_for(&state).expect("url builds");
        assert!(url.starts_with("http://localhost:10240/#%7B"));
    }
}
