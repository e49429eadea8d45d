//! Typed REST clients for the orgdesk admin backend.
//!
//! Each client is a thin wrapper over [`orgdesk_gateway::SessionGateway`]:
//! it pins an endpoint, decodes `data` into protocol types, and leaves
//! auth, envelope handling, and refresh entirely to the gateway.

mod auth;
mod departments;
mod groups;
mod health;
mod resource;
mod users;

pub use auth::AuthClient;
pub use departments::DepartmentClient;
pub use groups::GroupClient;
pub use health::HealthClient;
pub use resource::ResourceClient;
pub use users::UserClient;
