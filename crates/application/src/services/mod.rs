mod scoped_connection;

pub use scoped_connection::ScopedConnection;
