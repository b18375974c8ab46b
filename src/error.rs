// std imports
use std::io::{self, Write};
use std::net::IpAddr;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to resolve {name:?}: {source}")]
    Resolve { name: String, source: io::Error },
    #[error("host {name:?} not found")]
    HostNotFound { name: String },
    #[error("no name found for address {addr}")]
    AddressNotFound { addr: IpAddr },
    #[error("reverse lookup of {addr} is not available")]
    ReverseLookupUnavailable { addr: IpAddr },
}

impl Error {
    /// Writes the error to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    /// Writes the error to the given target.
    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "error: {}", self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
