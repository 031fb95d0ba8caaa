use chrono::{DateTime, Utc};

/// Member record - created once by delegation, never updated or deleted
///
/// `coordinator_phone` is a non-owning back-reference: unregistering or
/// re-registering the coordinator leaves member records in place (known
/// inconsistency, reproduced from the delegation flow's source behavior).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Member {
    pub phone_number: String,
    pub token: String,
    pub coordinator_phone: String,
    /// Denormalized copy of the delegating coordinator's project
    pub project_name: String,
    pub created_at: DateTime<Utc>,
}
