//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Authenticated caller, resolved from the `Authorization: Bearer` token.
///
/// Rejects with 401 on a missing header, wrong scheme, or a token that
/// fails signature/expiry/subject checks. Handlers still decide whether
/// the resolved user exists (404 when it is gone).
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| ApiError::Auth {
                    message: "Missing authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| ApiError::Auth {
                message: "Invalid authorization header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = value.strip_prefix("Bearer ").ok_or_else(|| ApiError::Auth {
                message: "Invalid authorization scheme: expected 'Bearer'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let claims = state.jwt_validator.validate(token)?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Auth {
                message: "Invalid token subject".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            Ok(AuthUser(user_id))
        }
    }
}
