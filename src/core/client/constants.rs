//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo news site base (the `xhr/ncp` stream endpoint hangs off of this).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://finance.yahoo.com/";
