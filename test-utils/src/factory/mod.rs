//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, taken from the `fixture` module,
//! and handle foreign key dependencies so tests stay short.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let vessel = factory::create_vessel(db).await?;
//! let appointment = factory::create_appointment(db, vessel.id).await?;
//!
//! // Or everything at once
//! let (vessel, appointment, task) = factory::helpers::create_task_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let appointment = factory::appointment::AppointmentFactory::new(db, vessel.id)
//!     .port(3)
//!     .status(2)
//!     .build()
//!     .await?;
//! ```

pub mod app_user;
pub mod appointment;
pub mod helpers;
pub mod task;
pub mod vessel;

pub use app_user::create_user;
pub use appointment::create_appointment;
pub use task::create_task;
pub use vessel::create_vessel;
