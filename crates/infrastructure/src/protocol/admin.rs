use super::header::{frame, read_message, MessageType};
use async_trait::async_trait;
use bytes::{BufMut, BytesMut};
use nodeval_application::ports::{Authenticator, NodeConnection};
use nodeval_domain::{Credentials, DomainError};
use tracing::debug;

pub const ADMIN_HEADER_SIZE: usize = 16;

const AUTHENTICATE: u8 = 0;
const FIELD_USER: u8 = 0;
const FIELD_CREDENTIAL: u8 = 3;

/// Sends the admin `AUTHENTICATE` command and checks the reply result code.
///
/// The configured password goes into the credential field as cleartext. Servers
/// that expect a hashed credential will reject it, so this only authenticates
/// against nodes configured to accept the raw password.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdminAuthenticator;

impl AdminAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for AdminAuthenticator {
    async fn authenticate(
        &self,
        conn: &mut dyn NodeConnection,
        credentials: &Credentials,
    ) -> Result<(), DomainError> {
        let peer = conn.peer();
        let request = frame(MessageType::Admin, &encode_authenticate(credentials));
        conn.write_all(&request).await?;

        let body = read_message(conn, MessageType::Admin).await?;
        if body.len() < ADMIN_HEADER_SIZE {
            return Err(DomainError::protocol(
                peer,
                format!("admin reply too short: {} bytes", body.len()),
            ));
        }

        match body[1] {
            0 => {
                debug!(server = %peer, user = %credentials.user, "Authenticated");
                Ok(())
            }
            code => Err(DomainError::authentication(peer, describe_result_code(code))),
        }
    }
}

pub fn encode_authenticate(credentials: &Credentials) -> BytesMut {
    let mut body = BytesMut::with_capacity(
        ADMIN_HEADER_SIZE + 10 + credentials.user.len() + credentials.password.len(),
    );
    body.put_slice(&[0, 0, AUTHENTICATE, 2]);
    body.put_bytes(0, ADMIN_HEADER_SIZE - 4);
    put_field(&mut body, FIELD_USER, credentials.user.as_bytes());
    put_field(&mut body, FIELD_CREDENTIAL, credentials.password.as_bytes());
    body
}

fn put_field(buf: &mut BytesMut, id: u8, data: &[u8]) {
    buf.put_u32(data.len() as u32 + 1);
    buf.put_u8(id);
    buf.put_slice(data);
}

fn describe_result_code(code: u8) -> String {
    let text = match code {
        52 => "security not enabled",
        60 => "invalid user",
        62 => "invalid password",
        63 => "expired password",
        65 => "invalid credential",
        80 => "not authenticated",
        _ => return format!("result code {}", code),
    };
    format!("{} (result code {})", text, code)
}
