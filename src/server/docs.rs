//! OpenAPI document for the REST API.
//!
//! Every handler carries a `#[utoipa::path]` annotation; [`ApiDoc`] collects them with the
//! DTO schemas and registers the session cookie as the security scheme. The document is
//! served as JSON at `/api/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::ApiErrorDto,
        appointment::{
            AppointmentDto, AppointmentToReturnDto, AppointmentsDto, CreateOrUpdateAppointmentDto,
        },
        task::{CreateOrUpdateTaskDto, PaginatedTasksDto, TaskDto, TaskToReturnDto},
        user::{
            CreateOrUpdateUserDto, LoginDto, PasswordDto, TokenDto, UpdatePasswordDto, UserDto,
            UserResponseDto, UserToReturnDto, UsersDto,
        },
        vessel::{RegisterOrUpdateVesselDto, VesselDto, VesselToReturnDto, VesselsDto},
    },
    server::controller::{appointment, auth, task, user, vessel},
};

/// Name of the session cookie set by tower-sessions.
const SESSION_COOKIE: &str = "id";

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE,
                "Session cookie issued by POST /api/auth/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieAddon),
    info(
        title = "Port call appointments API",
        description = "Vessels, port-call appointments, their tasks and the accounts that manage them."
    ),
    security(("SessionCookie" = [])),
    paths(
        auth::login,
        auth::logout,
        appointment::get_appointments,
        appointment::get_appointment,
        appointment::create_appointment,
        appointment::update_appointment,
        appointment::delete_appointment,
        task::get_tasks,
        task::get_task,
        task::create_task,
        task::update_task,
        task::delete_task,
        vessel::get_vessels,
        vessel::get_vessel,
        vessel::create_vessel,
        vessel::update_vessel,
        vessel::delete_vessel,
        user::get_users,
        user::get_current_user,
        user::get_user,
        user::register_user,
        user::update_user,
        user::update_password,
        user::reset_password,
        user::delete_user,
    ),
    components(schemas(
        ApiErrorDto,
        AppointmentDto,
        AppointmentsDto,
        AppointmentToReturnDto,
        CreateOrUpdateAppointmentDto,
        TaskDto,
        TaskToReturnDto,
        PaginatedTasksDto,
        CreateOrUpdateTaskDto,
        VesselDto,
        VesselsDto,
        VesselToReturnDto,
        RegisterOrUpdateVesselDto,
        UserDto,
        UsersDto,
        UserToReturnDto,
        CreateOrUpdateUserDto,
        UpdatePasswordDto,
        LoginDto,
        TokenDto,
        UserResponseDto,
        PasswordDto,
    )),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "appointment", description = "Port-call appointments"),
        (name = "task", description = "Tasks attached to appointments"),
        (name = "vessel", description = "Registered vessels"),
        (name = "user", description = "Account management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/login",
            "/api/appointments",
            "/api/appointments/{id}",
            "/api/tasks",
            "/api/vessels/{id}",
            "/api/users/current",
            "/api/users/password",
            "/api/users/{id}/password_reset",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn registers_session_cookie_scheme() {
        let doc = ApiDoc::openapi();

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("SessionCookie"));
        assert!(components.schemas.contains_key("PaginatedTasksDto"));
    }
}
