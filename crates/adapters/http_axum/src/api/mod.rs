//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use userbase_app::ports::UserRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR>() -> Router<AppState<UR>>
where
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/users", get(users::list::<UR>).post(users::create::<UR>))
        .route(
            "/users/{id}",
            get(users::get::<UR>)
                .put(users::update::<UR>)
                .delete(users::delete::<UR>),
        )
}
