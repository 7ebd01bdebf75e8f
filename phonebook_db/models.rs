use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub requested_location: String,
    pub status: i16,
    pub contact_count: i64,
    pub phone_number_count: i64,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub company: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ContactInformation {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub info_type: i16,
    pub info_content: String,
}
