use super::header::{frame, read_message, MessageType};
use async_trait::async_trait;
use nodeval_application::ports::{InfoClient, InfoMap, NodeConnection};
use nodeval_domain::DomainError;
use tracing::debug;

/// Text info protocol: requested names one per line, answered as `name\tvalue` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoProtocolClient;

impl InfoProtocolClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InfoClient for InfoProtocolClient {
    async fn request(
        &self,
        conn: &mut dyn NodeConnection,
        keys: &[&str],
    ) -> Result<InfoMap, DomainError> {
        let peer = conn.peer();
        let request = frame(MessageType::Info, &encode_request(keys));
        conn.write_all(&request).await?;

        debug!(server = %peer, keys = ?keys, "Info request sent");

        let body = read_message(conn, MessageType::Info).await?;
        let text = std::str::from_utf8(&body)
            .map_err(|e| DomainError::protocol(peer, format!("response is not UTF-8: {}", e)))?;

        let map = parse_response(text);
        debug!(server = %peer, entries = map.len(), "Info response received");
        Ok(map)
    }
}

pub fn encode_request(keys: &[&str]) -> Vec<u8> {
    let mut body = Vec::with_capacity(keys.iter().map(|k| k.len() + 1).sum());
    for key in keys {
        body.extend_from_slice(key.as_bytes());
        body.push(b'\n');
    }
    body
}

/// A line without a tab maps its name to an empty value.
pub fn parse_response(text: &str) -> InfoMap {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}
