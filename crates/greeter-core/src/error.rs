use std::num::ParseIntError;

/// Errors raised while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}
