use bytes::{BufMut, BytesMut};
use nodeval_application::ports::NodeConnection;
use nodeval_domain::DomainError;

pub const PROTO_VERSION: u8 = 2;
pub const HEADER_SIZE: usize = 8;
pub const MAX_BODY_SIZE: u64 = 2 * 1024 * 1024;

const LENGTH_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Admin,
}

impl MessageType {
    pub fn code(self) -> u8 {
        match self {
            MessageType::Info => 1,
            MessageType::Admin => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MessageType::Info),
            2 => Some(MessageType::Admin),
            _ => None,
        }
    }
}

/// The 8-byte frame header: version, message type, 48-bit big-endian body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtoHeader {
    pub version: u8,
    pub message_type: u8,
    pub body_len: u64,
}

impl ProtoHeader {
    pub fn new(message_type: MessageType, body_len: usize) -> Self {
        Self {
            version: PROTO_VERSION,
            message_type: message_type.code(),
            body_len: body_len as u64 & LENGTH_MASK,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        let word = (u64::from(self.version) << 56)
            | (u64::from(self.message_type) << 48)
            | (self.body_len & LENGTH_MASK);
        buf.put_u64(word);
    }

    pub fn decode(bytes: [u8; HEADER_SIZE]) -> Self {
        let word = u64::from_be_bytes(bytes);
        Self {
            version: (word >> 56) as u8,
            message_type: (word >> 48) as u8,
            body_len: word & LENGTH_MASK,
        }
    }
}

/// Frames `body` behind a header of the given type.
pub fn frame(message_type: MessageType, body: &[u8]) -> BytesMut {
    let mut buf = BytesMut::with_capacity(HEADER_SIZE + body.len());
    ProtoHeader::new(message_type, body.len()).encode(&mut buf);
    buf.put_slice(body);
    buf
}

/// Reads one framed message and returns its body.
pub async fn read_message(
    conn: &mut dyn NodeConnection,
    expected: MessageType,
) -> Result<Vec<u8>, DomainError> {
    let peer = conn.peer();

    let mut header_buf = [0u8; HEADER_SIZE];
    conn.read_exact(&mut header_buf).await?;
    let header = ProtoHeader::decode(header_buf);

    if header.version != PROTO_VERSION {
        return Err(DomainError::protocol(
            peer,
            format!("unsupported protocol version {}", header.version),
        ));
    }

    if MessageType::from_code(header.message_type) != Some(expected) {
        return Err(DomainError::protocol(
            peer,
            format!(
                "unexpected message type {} (wanted {})",
                header.message_type,
                expected.code()
            ),
        ));
    }

    if header.body_len > MAX_BODY_SIZE {
        return Err(DomainError::protocol(
            peer,
            format!(
                "response too large: {} bytes (max {})",
                header.body_len, MAX_BODY_SIZE
            ),
        ));
    }

    let mut body = vec![0u8; header.body_len as usize];
    conn.read_exact(&mut body).await?;
    Ok(body)
}
