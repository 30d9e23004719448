//! API endpoint modules.

pub mod admin;
pub mod dashboard;
pub mod health;
pub mod openapi;
pub mod session;

pub use admin::configure_admin_routes;
pub use dashboard::configure_dashboard_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use session::configure_session_routes;
