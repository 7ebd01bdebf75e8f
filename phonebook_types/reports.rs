use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Preparing,
    Completed,
}

/// A persisted request for location statistics and its eventual result.
///
/// Invariant: `completed_at` is `Some` if and only if `status` is
/// `Completed`. The status never reverts once `Completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub requested_location: String,
    pub status: ReportStatus,
    pub contact_count: i64,
    pub phone_number_count: i64,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn new(requested_location: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            requested_location,
            status: ReportStatus::Preparing,
            contact_count: 0,
            phone_number_count: 0,
            requested_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Applies the completion outcome. Re-applying the same counts to an
    /// already completed report is a no-op in effect (the timestamp is only
    /// set on the first transition).
    pub fn complete(&mut self, contact_count: i64, phone_number_count: i64) {
        if self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
        self.status = ReportStatus::Completed;
        self.contact_count = contact_count;
        self.phone_number_count = phone_number_count;
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReportStatus::Completed
    }
}
