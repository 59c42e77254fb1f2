//! Error types for the `pokedex` binary.
//!
//! [`CliError`] wraps every subsystem error so command functions can
//! propagate with `?`.

/// Top-level error for the `pokedex` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pokedex_core::ConfigError,
    },

    /// The catalog listing could not be fetched.
    #[error("fetch error: {source}")]
    Fetch {
        /// The underlying fetch error.
        #[from]
        source: pokedex_fetch::FetchError,
    },

    /// Rendering or writing the site failed.
    #[error("site error: {source}")]
    Site {
        /// The underlying site error.
        #[from]
        source: pokedex_site::SiteError,
    },

    /// The preview server failed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: pokedex_site::ServerError,
    },
}
