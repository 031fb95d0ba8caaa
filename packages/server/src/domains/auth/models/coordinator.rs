use chrono::{DateTime, Utc};

/// Coordinator record - one per phone number, bound to exactly one project
///
/// `token` stays empty until the coordinator logs in; every successful login
/// overwrites it, invalidating the previous one.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Coordinator {
    pub phone_number: String,
    /// Stored percent-decoded
    pub project_name: String,
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Coordinator {
    /// Fresh binding with no session token (pre-login state)
    pub fn new(phone_number: String, project_name: String) -> Self {
        Self {
            phone_number,
            project_name,
            token: None,
            created_at: Utc::now(),
        }
    }
}
