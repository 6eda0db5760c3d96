//! Test fixtures providing entity models without database insertion.
//!
//! Fixtures build in-memory `Model` values with consistent defaults. They back the
//! factory defaults and are useful for testing conversions without a database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let vessel = fixture::vessel::entity();
//! assert_eq!(vessel.name, "Test Vessel");
//! ```

pub mod app_user;
pub mod appointment;
pub mod task;
pub mod vessel;
