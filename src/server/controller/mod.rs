//! HTTP handlers.
//!
//! Controllers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into validated parameters, call a service and wrap the result
//! in the [`ResponseDto`](crate::model::api::ResponseDto) envelope. Each handler carries a
//! `#[utoipa::path]` annotation collected by [`ApiDoc`](crate::server::docs::ApiDoc).

pub mod appointment;
pub mod auth;
pub mod task;
pub mod user;
pub mod vessel;
