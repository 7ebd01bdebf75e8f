use std::sync::Arc;
use uuid::Uuid;

use phonebook_types::errors::ApplicationError;
use phonebook_types::events::ReportRequested;
use phonebook_types::reports::Report;

use crate::messaging::ReportRequestedPublisher;
use crate::repository::ReportRepository;

/// Request path and read path for reports.
///
/// Requesting a report records it durably *before* the event is emitted, so
/// a consumer can always find the report the event refers to. The caller
/// gets the `Preparing` report back immediately and never waits on the
/// worker.
pub struct ReportService {
    reports: Arc<dyn ReportRepository>,
    publisher: Arc<dyn ReportRequestedPublisher>,
    max_location_len: usize,
}

impl ReportService {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        publisher: Arc<dyn ReportRequestedPublisher>,
        max_location_len: usize,
    ) -> Self {
        Self {
            reports,
            publisher,
            max_location_len,
        }
    }

    pub async fn request_report(&self, location: &str) -> Result<Report, ApplicationError> {
        let location = location.trim();

        if location.is_empty() {
            return Err(ApplicationError::Validation(
                "location must not be empty".to_string(),
            ));
        }
        if location.len() > self.max_location_len {
            return Err(ApplicationError::Validation(format!(
                "location must not exceed {} characters",
                self.max_location_len
            )));
        }

        let report = Report::new(location.to_string());
        self.reports.create(&report).await?;

        self.publisher
            .publish(ReportRequested::for_report(&report))
            .await?;

        tracing::info!(report_id = %report.id, %location, "Report requested.");

        Ok(report)
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, ApplicationError> {
        self.reports.list_all().await
    }

    pub async fn get_report(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
        self.reports.get_by_id(report_id).await
    }
}
