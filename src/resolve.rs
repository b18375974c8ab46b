// std imports
use std::net::{IpAddr, ToSocketAddrs};

// third-party imports
use itertools::Itertools;

// local imports
use crate::error::{Error, Result};
use crate::settings::HostEntry;

// ---

/// Resolves host names to addresses and back.
pub trait Resolver {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>>;
    fn reverse(&self, addr: IpAddr) -> Result<String>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        (**self).resolve(name)
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        (**self).reverse(addr)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        (**self).resolve(name)
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        (**self).reverse(addr)
    }
}

// ---

/// Resolver backed by the operating system.
///
/// Only forward lookups are supported.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        let addrs = (name, 0).to_socket_addrs().map_err(|source| Error::Resolve {
            name: name.to_owned(),
            source,
        })?;

        let addrs = addrs.map(|addr| addr.ip()).unique().collect_vec();
        if addrs.is_empty() {
            return Err(Error::HostNotFound { name: name.to_owned() });
        }

        Ok(addrs)
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        Err(Error::ReverseLookupUnavailable { addr })
    }
}

// ---

/// Resolver backed by a fixed table of host names.
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    entries: Vec<HostEntry>,
}

impl StaticResolver {
    pub fn new(entries: impl IntoIterator<Item = HostEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.addresses.clone())
            .ok_or_else(|| Error::HostNotFound { name: name.to_owned() })
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        self.entries
            .iter()
            .find(|entry| entry.addresses.contains(&addr))
            .map(|entry| entry.name.clone())
            .ok_or(Error::AddressNotFound { addr })
    }
}

// ---

/// Tries the primary resolver first and falls back to the secondary one on failure.
#[derive(Debug, Default, Clone)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> Fallback<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Resolver, S: Resolver> Resolver for Fallback<P, S> {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        self.primary.resolve(name).or_else(|err| {
            log::debug!("primary resolver failed: {}", err);
            self.secondary.resolve(name)
        })
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        self.primary.reverse(addr).or_else(|err| {
            log::debug!("primary resolver failed: {}", err);
            self.secondary.reverse(addr)
        })
    }
}

// ---

/// Resolver that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResolver;

impl Resolver for NoResolver {
    fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        Err(Error::HostNotFound { name: name.to_owned() })
    }

    fn reverse(&self, addr: IpAddr) -> Result<String> {
        Err(Error::AddressNotFound { addr })
    }
}

#[cfg(test)]
mod tests;
