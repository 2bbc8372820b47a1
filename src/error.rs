use thiserror::Error;

/// Errors returned by clustering algorithms in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The view handle could not resolve a zoom level.
    ///
    /// Clustering never guesses a zoom: the surrounding map must guarantee a
    /// valid zoom during any clustering pass, so an unresolved zoom fails the
    /// whole `calculate` call instead of producing a misleading layout.
    #[error("map zoom is unresolved")]
    ZoomUnresolved,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
