use std::env::{self, VarError};
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Startup configuration, resolved once before the server binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// An unset `PORT` falls back to [`DEFAULT_PORT`]. A value that is set
    /// but is not a valid port number is an error, never a silent default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is set to a value that does not
    /// parse as a `u16`, or is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Same resolution as [`Config::from_env`], against an arbitrary lookup
    /// shaped like [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when the looked-up value is not a
    /// valid port, or [`ConfigError::NotUnicode`] when the lookup reports a
    /// non-unicode value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match lookup(PORT_ENV) {
            Ok(value) => Self::parse_port(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: PORT_ENV }),
        }
    }

    fn parse_port(value: &str) -> Result<Self, ConfigError> {
        let port = value
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort {
                var: PORT_ENV,
                value: value.to_string(),
                source,
            })?;
        Ok(Self { port })
    }

    /// Address the server binds: every IPv4 interface on the configured port.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
