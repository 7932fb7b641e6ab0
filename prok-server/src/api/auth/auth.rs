//! Signup and login REST API handlers

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::message_response::MessageResponse;
use crate::api::auth::signup_request::SignupRequest;
use crate::{ApiError, ApiResult, UserDto};
use crate::state::AppState;

use prok_core::User;
use prok_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use log::{debug, info};

/// POST /api/signup
///
/// Create a user. Any non-empty username/email/password is accepted; the
/// only further check is uniqueness of username and email.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    debug!(
        "/api/signup received for username '{}'",
        request.username.as_deref().unwrap_or("")
    );

    let (username, email, password) = match (
        non_empty(request.username),
        non_empty(request.email),
        non_empty(request.password),
    ) {
        (Some(username), Some(email), Some(password)) => (username, email, password),
        _ => {
            return Err(ApiError::Validation {
                message: "Missing required fields.".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let repo = UserRepository::new(state.pool.clone());

    // Check uniqueness (single disjunctive lookup)
    if repo.username_or_email_taken(&username, &email).await? {
        return Err(ApiError::Conflict {
            message: "Username or email already exists.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = prok_auth::hash_password(&password)?;
    let user = User::new(username, email, password_hash);
    repo.create(&user).await?;

    info!("Created user {} ('{}')", user.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully.".to_string(),
        }),
    ))
}

/// POST /api/login
///
/// Exchange credentials for a bearer token. Unknown identifier and wrong
/// password answer with the same generic 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let identifier = request.identifier().map(str::to_string);
    let password = request.password.as_deref().filter(|p| !p.is_empty());

    let (Some(identifier), Some(password)) = (identifier, password) else {
        return Err(ApiError::Validation {
            message: "Missing credentials.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let repo = UserRepository::new(state.pool.clone());

    let Some(user) = repo.find_by_identifier(&identifier).await? else {
        return Err(bad_credentials());
    };
    if !prok_auth::verify_password(password, &user.password_hash)? {
        return Err(bad_credentials());
    }

    let token = state.token_issuer.issue(user.id)?;
    info!("Issued token for user {}", user.id);

    Ok(Json(LoginResponse {
        token,
        user: UserDto::from(user),
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[track_caller]
fn bad_credentials() -> ApiError {
    ApiError::Auth {
        message: "Incorrect username/email or password.".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
