use crate::{ProfileDto, UserDto};

use serde::Serialize;

/// Profile plus the owning user's public view
#[derive(Debug, Serialize)]
pub struct ProfileWithUserResponse {
    pub profile: ProfileDto,
    pub user: UserDto,
}
