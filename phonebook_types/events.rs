use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reports::Report;

/// The durable fact that a report was requested, delivered at-least-once on
/// the "report-requested" channel. Self-contained: the worker reads the
/// location from the event, never back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequested {
    pub report_id: Uuid,
    pub requested_location: String,
    pub requested_at: DateTime<Utc>,
}

impl ReportRequested {
    pub fn for_report(report: &Report) -> Self {
        Self {
            report_id: report.id,
            requested_location: report.requested_location.clone(),
            requested_at: report.requested_at,
        }
    }
}
