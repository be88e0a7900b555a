//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, UserResponse, UserView};

/// OpenAPI documentation for the User Accounts API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Accounts API",
        version = "0.1.0",
        description = "CRUD API for user accounts built on Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserView,
            UserResponse,
            CreateUser,
            UpdateUser,
            user_handler::DeleteResponse,
        )
    ),
    tags(
        (name = "Users", description = "User account management")
    )
)]
pub struct ApiDoc;
