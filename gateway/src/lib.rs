//! Authenticated request gateway for the orgdesk admin backend.
//!
//! The gateway sits between the typed service clients and a raw HTTP
//! [`Transport`]. On the way out it attaches the bearer header for the
//! current session; on the way in it unwraps the backend's
//! `{status, data, message}` envelope. When the backend rejects the
//! access token it runs the shared refresh protocol: exactly one refresh
//! call per expiry, concurrent callers queued and replayed in order, and
//! a forced sign-out when the refresh itself fails.

mod error;
mod gateway;
mod http;
mod notify;
mod request;
mod session;
mod transport;

pub use error::Error;
pub use error::Result;
pub use gateway::REFRESH_PATH;
pub use gateway::SessionGateway;
pub use http::ReqwestTransport;
pub use notify::TracingNotifier;
pub use notify::UserNotifier;
pub use request::ApiRequest;
pub use request::Method;
pub use session::Session;
pub use session::SessionListener;
pub use session::SessionStore;
pub use transport::Transport;
pub use transport::WireRequest;
pub use transport::WireResponse;
