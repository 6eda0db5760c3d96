pub use super::app_user::Entity as AppUser;
pub use super::appointment::Entity as Appointment;
pub use super::task::Entity as Task;
pub use super::vessel::Entity as Vessel;
