use serde::Deserialize;

/// Login payload. The identifier is accepted under any of three field
/// names; the first non-empty one wins.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usernameOrEmail", default)]
    pub username_or_email: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn identifier(&self) -> Option<&str> {
        [
            self.username_or_email.as_deref(),
            self.username.as_deref(),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
    }
}
