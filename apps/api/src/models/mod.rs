pub mod problem;
pub mod resume;
pub mod user;

use serde::Deserialize;
use uuid::Uuid;

/// `?user_id=` query string carried by every per-user endpoint.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}
