#[cfg(test)]
pub mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use uuid::Uuid;

    use phonebook_app::{
        messaging::{ChannelConsumer, report_requested_channel},
        repository::ReportRepository,
        services::{ContactService, ReportService},
        test_utils::{InMemoryContactRepository, InMemoryReportRepository, StubStatisticsClient},
        worker::ReportCompletionWorker,
    };
    use phonebook_types::reports::{Report, ReportStatus};
    use phonebook_web::AppState;

    pub const MAX_LOCATION_LEN: usize = 128;

    /// The full pipeline over in-memory collaborators: request path, channel,
    /// consumer and worker, sharing one report store.
    pub struct Pipeline {
        pub reports: Arc<InMemoryReportRepository>,
        pub report_service: Arc<ReportService>,
    }

    pub fn setup_pipeline(statistics: StubStatisticsClient, max_attempts: u32) -> Pipeline {
        let reports = Arc::new(InMemoryReportRepository::new());
        let (publisher, receiver) = report_requested_channel();

        let worker = Arc::new(ReportCompletionWorker::new(
            reports.clone(),
            Arc::new(statistics),
        ));
        ChannelConsumer::new(
            worker,
            publisher.clone(),
            receiver,
            Duration::from_millis(20),
            max_attempts,
        )
        .run();

        let report_service = Arc::new(ReportService::new(
            reports.clone(),
            Arc::new(publisher),
            MAX_LOCATION_LEN,
        ));

        Pipeline {
            reports,
            report_service,
        }
    }

    /// In-memory web state on top of the same pipeline.
    pub fn setup_web_state(statistics: StubStatisticsClient, max_attempts: u32) -> (AppState, Pipeline) {
        let pipeline = setup_pipeline(statistics, max_attempts);
        let contacts = Arc::new(ContactService::new(Arc::new(
            InMemoryContactRepository::new(),
        )));
        let state = AppState::new(contacts, pipeline.report_service.clone());

        (state, pipeline)
    }

    /// Polls the store until the report leaves `Preparing` or the deadline
    /// passes. Returns the last observed state either way.
    pub async fn wait_for_completion(
        reports: &InMemoryReportRepository,
        report_id: Uuid,
        deadline: Duration,
    ) -> Report {
        let started = tokio::time::Instant::now();

        loop {
            let report = reports.get_by_id(report_id).await.unwrap();
            if report.status == ReportStatus::Completed || started.elapsed() > deadline {
                return report;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}
