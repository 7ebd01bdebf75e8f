mod test_utils;

#[cfg(test)]
pub mod tests {
    use std::time::Duration;

    use phonebook_app::repository::ReportRepository;
    use phonebook_app::test_utils::StubStatisticsClient;
    use phonebook_types::reports::ReportStatus;

    use super::test_utils::tests::{setup_pipeline, wait_for_completion};

    #[tokio::test]
    async fn requested_report_is_completed_asynchronously() {
        let pipeline = setup_pipeline(StubStatisticsClient::with_counts(5, 8), 5);

        let report = pipeline
            .report_service
            .request_report("Ankara")
            .await
            .unwrap();

        // The caller observes Preparing immediately.
        assert_eq!(report.status, ReportStatus::Preparing);
        assert_eq!(report.contact_count, 0);
        assert!(report.completed_at.is_none());

        let completed =
            wait_for_completion(&pipeline.reports, report.id, Duration::from_secs(2)).await;

        assert_eq!(completed.status, ReportStatus::Completed);
        assert_eq!(completed.contact_count, 5);
        assert_eq!(completed.phone_number_count, 8);
        assert!(completed.completed_at.is_some());
        assert_eq!(completed.requested_at, report.requested_at);
    }

    #[tokio::test]
    async fn transient_lookup_failure_is_recovered_by_redelivery() {
        let pipeline = setup_pipeline(StubStatisticsClient::with_counts(3, 4).fail_times(2), 5);

        let report = pipeline
            .report_service
            .request_report("Izmir")
            .await
            .unwrap();

        let completed =
            wait_for_completion(&pipeline.reports, report.id, Duration::from_secs(2)).await;

        assert_eq!(completed.status, ReportStatus::Completed);
        assert_eq!(completed.contact_count, 3);
        assert_eq!(completed.phone_number_count, 4);
    }

    #[tokio::test]
    async fn exhausted_redelivery_leaves_report_preparing() {
        let pipeline = setup_pipeline(StubStatisticsClient::failing(), 3);

        let report = pipeline
            .report_service
            .request_report("Bursa")
            .await
            .unwrap();

        // Give the consumer time to burn through every attempt.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let stored = pipeline.reports.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Preparing);
        assert_eq!(stored.contact_count, 0);
        assert_eq!(stored.phone_number_count, 0);
        assert!(stored.completed_at.is_none());
    }

    #[tokio::test]
    async fn concurrent_requests_complete_independently() {
        let pipeline = setup_pipeline(StubStatisticsClient::with_counts(1, 2), 5);

        let first = pipeline
            .report_service
            .request_report("Ankara")
            .await
            .unwrap();
        let second = pipeline
            .report_service
            .request_report("Izmir")
            .await
            .unwrap();

        let first_done =
            wait_for_completion(&pipeline.reports, first.id, Duration::from_secs(2)).await;
        let second_done =
            wait_for_completion(&pipeline.reports, second.id, Duration::from_secs(2)).await;

        assert_eq!(first_done.status, ReportStatus::Completed);
        assert_eq!(second_done.status, ReportStatus::Completed);
        assert_eq!(first_done.requested_location, "Ankara");
        assert_eq!(second_done.requested_location, "Izmir");
    }

    #[tokio::test]
    async fn rejected_request_never_enters_the_pipeline() {
        let pipeline = setup_pipeline(StubStatisticsClient::with_counts(1, 1), 5);

        let result = pipeline.report_service.request_report("").await;

        assert!(result.is_err());
        assert!(pipeline.reports.list_all().await.unwrap().is_empty());
    }
}
