use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        appointment::{
            create_appointment, delete_appointment, get_appointment, get_appointments,
            update_appointment,
        },
        auth::{login, logout},
        task::{create_task, delete_task, get_task, get_tasks, update_task},
        user::{
            delete_user, get_current_user, get_user, get_users, register_user, reset_password,
            update_password, update_user,
        },
        vessel::{create_vessel, delete_vessel, get_vessel, get_vessels, update_vessel},
    },
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route(
            "/api/appointments",
            get(get_appointments).post(create_appointment),
        )
        .route(
            "/api/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/api/tasks", get(get_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/vessels", get(get_vessels).post(create_vessel))
        .route(
            "/api/vessels/{id}",
            get(get_vessel).put(update_vessel).delete(delete_vessel),
        )
        .route("/api/users", get(get_users).post(register_user))
        .route("/api/users/current", get(get_current_user))
        .route("/api/users/password", put(update_password))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/{id}/password_reset", post(reset_password))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
