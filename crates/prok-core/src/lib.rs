pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::profile::Profile;
pub use models::profile_update::ProfileUpdate;
pub use models::user::User;

#[cfg(test)]
mod tests;
