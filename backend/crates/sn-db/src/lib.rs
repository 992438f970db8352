pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::follow_repository::FollowRepository;
pub use repositories::profile_repository::ProfileRepository;
