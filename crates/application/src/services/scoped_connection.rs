use crate::ports::NodeConnection;
use tracing::debug;

/// Owns a connection for the duration of one alias attempt and closes it
/// exactly once, either explicitly or when dropped.
pub struct ScopedConnection {
    conn: Box<dyn NodeConnection>,
    closed: bool,
}

impl ScopedConnection {
    pub fn new(conn: Box<dyn NodeConnection>) -> Self {
        Self {
            conn,
            closed: false,
        }
    }

    pub fn get(&mut self) -> &mut dyn NodeConnection {
        self.conn.as_mut()
    }

    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        debug!(peer = %self.conn.peer(), "Closing node connection");
        self.conn.close();
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        self.close();
    }
}
