use std::sync::Arc;

use phonebook_types::errors::ApplicationError;
use phonebook_types::events::ReportRequested;

use crate::repository::ReportRepository;
use crate::statistics::LocationStatisticsClient;

/// What the worker did with one delivery. The messaging adapter
/// acknowledges both variants; only an `Err` triggers redelivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The report was (re)written as completed.
    Completed,
    /// Benign no-op: report absent or already completed.
    Skipped,
}

/// Consumes `ReportRequested` events: looks up the statistics for the
/// event's location and transitions the report `Preparing -> Completed`.
///
/// There is no failure state and no internal retry. Any failed step leaves
/// the report untouched in `Preparing` and surfaces as an `Err`, which the
/// messaging layer turns into a redelivery. Processing is idempotent: the
/// completed values are re-derived from the same inputs on every attempt,
/// so re-applying them is safe.
pub struct ReportCompletionWorker {
    reports: Arc<dyn ReportRepository>,
    statistics: Arc<dyn LocationStatisticsClient>,
}

impl ReportCompletionWorker {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        statistics: Arc<dyn LocationStatisticsClient>,
    ) -> Self {
        Self {
            reports,
            statistics,
        }
    }

    pub async fn process(
        &self,
        event: &ReportRequested,
    ) -> Result<ProcessOutcome, ApplicationError> {
        let report_id = event.report_id;
        let location = &event.requested_location;

        tracing::info!(%report_id, %location, "Processing report request.");

        let mut report = match self.reports.get_by_id(report_id).await {
            Ok(report) => report,
            Err(ApplicationError::NotFound { .. }) => {
                // The record was removed or never committed. Acknowledge
                // instead of retrying forever against a missing id.
                tracing::warn!(%report_id, "Report not found, skipping.");
                return Ok(ProcessOutcome::Skipped);
            }
            Err(e) => return Err(e),
        };

        if report.is_completed() {
            tracing::debug!(%report_id, "Report already completed, skipping lookup.");
            return Ok(ProcessOutcome::Skipped);
        }

        let stats = self.statistics.lookup(location).await?;

        report.complete(stats.contact_count, stats.phone_number_count);
        self.reports.update(&report).await?;

        tracing::info!(
            %report_id,
            contacts = report.contact_count,
            phones = report.phone_number_count,
            "Report completed."
        );

        Ok(ProcessOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use phonebook_types::reports::{Report, ReportStatus};

    use crate::test_utils::{InMemoryReportRepository, StubStatisticsClient};

    fn worker_with(
        reports: Arc<InMemoryReportRepository>,
        statistics: Arc<StubStatisticsClient>,
    ) -> ReportCompletionWorker {
        ReportCompletionWorker::new(reports, statistics)
    }

    async fn seeded_report(reports: &InMemoryReportRepository, location: &str) -> Report {
        let report = Report::new(location.to_string());
        reports.create(&report).await.unwrap();
        report
    }

    #[tokio::test]
    async fn completes_report_with_lookup_counts() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let statistics = Arc::new(StubStatisticsClient::with_counts(5, 8));
        let worker = worker_with(reports.clone(), statistics);

        let report = seeded_report(&reports, "Ankara").await;
        let event = ReportRequested::for_report(&report);

        let outcome = worker.process(&event).await.unwrap();

        assert_eq!(outcome, ProcessOutcome::Completed);
        let stored = reports.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Completed);
        assert_eq!(stored.contact_count, 5);
        assert_eq!(stored.phone_number_count, 8);
        assert!(stored.completed_at.is_some());
    }

    #[tokio::test]
    async fn missing_report_is_a_benign_skip() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let statistics = Arc::new(StubStatisticsClient::with_counts(1, 1));
        let worker = worker_with(reports.clone(), statistics.clone());

        let event = ReportRequested {
            report_id: Uuid::new_v4(),
            requested_location: "Ankara".to_string(),
            requested_at: chrono::Utc::now(),
        };

        let outcome = worker.process(&event).await.unwrap();

        assert_eq!(outcome, ProcessOutcome::Skipped);
        assert_eq!(statistics.calls(), 0);
        assert!(reports.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_leaves_report_preparing() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let statistics = Arc::new(StubStatisticsClient::failing());
        let worker = worker_with(reports.clone(), statistics);

        let report = seeded_report(&reports, "Izmir").await;
        let event = ReportRequested::for_report(&report);

        let result = worker.process(&event).await;

        assert!(matches!(result, Err(ApplicationError::Lookup(_))));
        let stored = reports.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Preparing);
        assert_eq!(stored.contact_count, 0);
        assert_eq!(stored.phone_number_count, 0);
        assert!(stored.completed_at.is_none());
    }

    #[tokio::test]
    async fn failure_then_redelivery_completes() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let statistics = Arc::new(StubStatisticsClient::with_counts(3, 4).fail_times(1));
        let worker = worker_with(reports.clone(), statistics);

        let report = seeded_report(&reports, "Bursa").await;
        let event = ReportRequested::for_report(&report);

        assert!(worker.process(&event).await.is_err());
        let outcome = worker.process(&event).await.unwrap();

        assert_eq!(outcome, ProcessOutcome::Completed);
        let stored = reports.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Completed);
        assert_eq!(stored.contact_count, 3);
        assert_eq!(stored.phone_number_count, 4);
    }

    #[tokio::test]
    async fn redelivery_after_completion_is_idempotent() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let statistics = Arc::new(StubStatisticsClient::with_counts(5, 8));
        let worker = worker_with(reports.clone(), statistics.clone());

        let report = seeded_report(&reports, "Ankara").await;
        let event = ReportRequested::for_report(&report);

        worker.process(&event).await.unwrap();
        let first = reports.get_by_id(report.id).await.unwrap();

        let outcome = worker.process(&event).await.unwrap();

        assert_eq!(outcome, ProcessOutcome::Skipped);
        assert_eq!(statistics.calls(), 1);
        let second = reports.get_by_id(report.id).await.unwrap();
        assert_eq!(second.status, ReportStatus::Completed);
        assert_eq!(second.contact_count, first.contact_count);
        assert_eq!(second.phone_number_count, first.phone_number_count);
        assert_eq!(second.completed_at, first.completed_at);
    }
}
