use uuid::Uuid;

use phonebook_types::errors::ApplicationError;
use phonebook_types::reports::Report;

/// Durable record of report requests and their resolved statistics.
/// No business logic; absence is signalled with `ApplicationError::NotFound`.
#[async_trait::async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persists a new report in the `Preparing` state.
    async fn create(&self, report: &Report) -> Result<(), ApplicationError>;

    /// Returns a report by id.
    async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError>;

    /// Returns all reports, most recently requested first.
    async fn list_all(&self) -> Result<Vec<Report>, ApplicationError>;

    /// Persists the mutated fields (status, counts, completed_at) for an
    /// existing report.
    async fn update(&self, report: &Report) -> Result<(), ApplicationError>;
}
