//! Business logic services.

pub mod aggregator;

pub use aggregator::{collect_dashboard_data, DashboardData};
