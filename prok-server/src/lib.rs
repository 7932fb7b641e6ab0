pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, signup},
        login_request::LoginRequest,
        login_response::LoginResponse,
        message_response::MessageResponse,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    profile::{
        image::upload_profile_image,
        image_upload_response::ImageUploadResponse,
        profile::{get_profile, update_profile},
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        profile_with_user_response::ProfileWithUserResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
