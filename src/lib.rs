//! Team, roster, attendance and schedule store for a school sports and
//! activities dashboard.
//!
//! [`DataStore`] owns every collection. The other modules read from it:
//! [`access`] decides which views a role is offered, [`dashboard`] aggregates,
//! [`attendance`] runs an attendance-taking session, [`export`] and [`import`]
//! move rosters in and out, and [`insight`] asks a language model for a summary.

pub mod access;
pub mod attendance;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod import;
pub mod insight;
mod model;
mod store;

pub use attendance::AttendanceSheet;
pub use config::InsightConfig;
pub use dashboard::DashboardStats;
pub use error::{Result, RosterError};
pub use insight::{InsightClient, InsightGate};
pub use model::*;
pub use store::{DataStore, Snapshot, WritePolicy};
