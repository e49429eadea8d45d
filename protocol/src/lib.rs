//! Wire-level types shared by the orgdesk gateway and service clients.
//!
//! Everything here mirrors the JSON the admin backend actually emits:
//! the `{status, data, message}` response envelope, the token pair
//! returned by the auth endpoints, and the entities managed through the
//! console (users, departments, groups).

mod auth;
mod entity;
mod envelope;
mod health;
mod pagination;

pub use auth::SignInRequest;
pub use auth::SignInResponse;
pub use auth::SignUpRequest;
pub use auth::TokenPair;
pub use entity::Department;
pub use entity::Group;
pub use entity::Permission;
pub use entity::UserInfo;
pub use envelope::Envelope;
pub use envelope::ResultStatus;
pub use health::HealthReport;
pub use health::HealthStatus;
pub use health::Indicator;
pub use health::IndicatorStatus;
pub use pagination::Paginated;
