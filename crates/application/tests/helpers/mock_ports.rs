#![allow(dead_code)]

use async_trait::async_trait;
use nodeval_application::ports::{
    AddressResolver, Authenticator, InfoClient, InfoMap, NodeConnection, NodeTransport,
};
use nodeval_domain::{Alias, Credentials, DomainError, Host};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn alias(addr: &str) -> Alias {
    Alias::from(addr.parse::<SocketAddr>().unwrap())
}

pub fn info_map(pairs: &[(&str, &str)]) -> InfoMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ── resolver ───────────────────────────────────────────────────────────────

pub struct MockAddressResolver {
    response: Mutex<Result<Vec<Alias>, DomainError>>,
    calls: AtomicUsize,
}

impl MockAddressResolver {
    pub fn with_aliases(aliases: Vec<Alias>) -> Self {
        Self {
            response: Mutex::new(Ok(aliases)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve(&self, _host: &Host) -> Result<Vec<Alias>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

// ── transport ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnEvent {
    Open(SocketAddr),
    Close(SocketAddr),
}

type EventLog = Arc<Mutex<Vec<ConnEvent>>>;

pub struct MockConnection {
    peer: SocketAddr,
    events: EventLog,
}

#[async_trait]
impl NodeConnection for MockConnection {
    fn peer(&self) -> SocketAddr {
        self.peer
    }

    async fn write_all(&mut self, _buf: &[u8]) -> Result<(), DomainError> {
        Ok(())
    }

    async fn read_exact(&mut self, _buf: &mut [u8]) -> Result<(), DomainError> {
        Ok(())
    }

    fn close(&mut self) {
        self.events.lock().unwrap().push(ConnEvent::Close(self.peer));
    }
}

/// Aliases are unreachable unless registered with `reachable`.
#[derive(Default)]
pub struct MockNodeTransport {
    reachable: Mutex<Vec<SocketAddr>>,
    events: EventLog,
    last_timeout: Mutex<Option<Duration>>,
}

impl MockNodeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reachable(self, addr: &str) -> Self {
        self.reachable.lock().unwrap().push(addr.parse().unwrap());
        self
    }

    /// Opens and closes in the order they happened.
    pub fn events(&self) -> Vec<ConnEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn open_count(&self) -> usize {
        self.opened().len()
    }

    pub fn opened(&self) -> Vec<SocketAddr> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConnEvent::Open(addr) => Some(addr),
                ConnEvent::Close(_) => None,
            })
            .collect()
    }

    pub fn close_count(&self, addr: &str) -> usize {
        let addr: SocketAddr = addr.parse().unwrap();
        self.events()
            .into_iter()
            .filter(|event| *event == ConnEvent::Close(addr))
            .count()
    }

    pub fn total_closes(&self) -> usize {
        self.events()
            .into_iter()
            .filter(|event| matches!(event, ConnEvent::Close(_)))
            .count()
    }

    pub fn last_timeout(&self) -> Option<Duration> {
        *self.last_timeout.lock().unwrap()
    }
}

#[async_trait]
impl NodeTransport for MockNodeTransport {
    async fn open(
        &self,
        alias: &Alias,
        timeout: Duration,
    ) -> Result<Box<dyn NodeConnection>, DomainError> {
        let addr = alias.socket_addr();
        *self.last_timeout.lock().unwrap() = Some(timeout);

        if !self.reachable.lock().unwrap().contains(&addr) {
            return Err(DomainError::connection(addr, "connection refused"));
        }

        self.events.lock().unwrap().push(ConnEvent::Open(addr));
        Ok(Box::new(MockConnection {
            peer: addr,
            events: Arc::clone(&self.events),
        }))
    }
}

// ── authentication ─────────────────────────────────────────────────────────

/// Accepts every alias except those marked with `reject`.
#[derive(Default)]
pub struct MockAuthenticator {
    rejected: Mutex<Vec<SocketAddr>>,
    calls: Mutex<Vec<(SocketAddr, String)>>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(self, addr: &str) -> Self {
        self.rejected.lock().unwrap().push(addr.parse().unwrap());
        self
    }

    pub fn calls(&self) -> Vec<(SocketAddr, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(
        &self,
        conn: &mut dyn NodeConnection,
        credentials: &Credentials,
    ) -> Result<(), DomainError> {
        let peer = conn.peer();
        self.calls
            .lock()
            .unwrap()
            .push((peer, credentials.user.clone()));

        if self.rejected.lock().unwrap().contains(&peer) {
            return Err(DomainError::authentication(peer, "result code 65"));
        }
        Ok(())
    }
}

// ── info ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockInfoClient {
    responses: Mutex<HashMap<SocketAddr, Result<InfoMap, DomainError>>>,
    hanging: Mutex<Vec<SocketAddr>>,
    requests: Mutex<Vec<(SocketAddr, Vec<String>)>>,
}

impl MockInfoClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, addr: &str, pairs: &[(&str, &str)]) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(addr.parse().unwrap(), Ok(info_map(pairs)));
        self
    }

    pub fn fail(self, addr: &str, error: DomainError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(addr.parse().unwrap(), Err(error));
        self
    }

    /// Requests to `addr` never complete.
    pub fn hang(self, addr: &str) -> Self {
        self.hanging.lock().unwrap().push(addr.parse().unwrap());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<(SocketAddr, Vec<String>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InfoClient for MockInfoClient {
    async fn request(
        &self,
        conn: &mut dyn NodeConnection,
        keys: &[&str],
    ) -> Result<InfoMap, DomainError> {
        let peer = conn.peer();
        self.requests
            .lock()
            .unwrap()
            .push((peer, keys.iter().map(|k| k.to_string()).collect()));

        let hangs = self.hanging.lock().unwrap().contains(&peer);
        if hangs {
            return std::future::pending().await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(&peer)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::protocol(peer, "no mock response")))
    }
}
