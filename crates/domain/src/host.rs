use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Port a seed uses when none is given.
pub const DEFAULT_PORT: u16 = 3000;

/// A candidate node as supplied by the caller, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub port: u16,
}

impl Host {
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.contains(':') {
            write!(f, "[{}]:{}", self.name, self.port)
        } else {
            write!(f, "{}:{}", self.name, self.port)
        }
    }
}

impl FromStr for Host {
    type Err = DomainError;

    /// Accepts `name`, `name:port`, `[v6]:port` and bare IPv6 literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidHost("empty host".to_string()));
        }

        if let Some(rest) = s.strip_prefix('[') {
            let (name, tail) = rest
                .split_once(']')
                .ok_or_else(|| DomainError::InvalidHost(format!("unclosed bracket in {}", s)))?;
            let port = match tail {
                "" => DEFAULT_PORT,
                _ => {
                    let port = tail.strip_prefix(':').ok_or_else(|| {
                        DomainError::InvalidHost(format!("unexpected text after ']' in {}", s))
                    })?;
                    parse_port(s, port)?
                }
            };
            return non_empty(s, name).map(|name| Self::new(name, port));
        }

        if s.parse::<IpAddr>().is_ok() {
            return Ok(Self::new(s, DEFAULT_PORT));
        }

        match s.rsplit_once(':') {
            Some((name, port)) => {
                let port = parse_port(s, port)?;
                non_empty(s, name).map(|name| Self::new(name, port))
            }
            None => Ok(Self::new(s, DEFAULT_PORT)),
        }
    }
}

fn parse_port(input: &str, port: &str) -> Result<u16, DomainError> {
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(DomainError::InvalidHost(format!(
            "invalid port '{}' in {}",
            port, input
        ))),
        Ok(port) => Ok(port),
    }
}

fn non_empty<'a>(input: &str, name: &'a str) -> Result<&'a str, DomainError> {
    if name.is_empty() {
        Err(DomainError::InvalidHost(format!(
            "missing host name in {}",
            input
        )))
    } else {
        Ok(name)
    }
}

/// One resolved address candidate for a host, paired with the host's port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    pub address: IpAddr,
    pub port: u16,
}

impl Alias {
    pub fn new(address: IpAddr, port: u16) -> Self {
        Self { address, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl From<SocketAddr> for Alias {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip(), addr.port())
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}
