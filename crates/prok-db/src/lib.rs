pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations, run once at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
