//! JSON REST handlers for users.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use userbase_app::ports::UserRepository;
use userbase_domain::id::UserId;
use userbase_domain::user::{NewUser, User, UserChanges};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body shared by create and update.
///
/// Both fields are optional at the wire level: create rejects absent or
/// empty values, update writes them through as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body returned after a successful delete.
///
/// Key and message stay in Spanish to match the existing clients.
#[derive(Debug, Serialize)]
pub struct DeletedUser {
    pub message: &'static str,
    pub usuario: User,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeletedUser>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/users`
pub async fn list<UR>(State(state): State<AppState<UR>>) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/users/:id`
pub async fn get<UR>(
    State(state): State<AppState<UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from_str(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<UR>(
    State(state): State<AppState<UR>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = NewUser::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(email) = req.email {
        builder = builder.email(email);
    }

    let user = builder.build()?;
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/users/:id` — overwrite both fields of an existing user.
pub async fn update<UR>(
    State(state): State<AppState<UR>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from_str(&id)?;
    let Json(req) = payload?;

    let changes = UserChanges {
        name: req.name,
        email: req.email,
    };
    let updated = state.user_service.update_user(user_id, changes).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/users/:id`
pub async fn delete<UR>(
    State(state): State<AppState<UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from_str(&id)?;
    let deleted = state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Ok(Json(DeletedUser {
        message: "Usuario eliminado",
        usuario: deleted,
    })))
}
