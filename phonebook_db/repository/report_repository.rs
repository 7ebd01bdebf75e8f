use uuid::Uuid;

use phonebook_app::repository::ReportRepository;
use phonebook_types::errors::ApplicationError;
use phonebook_types::reports::Report;

use crate::connection::DbPool;
use crate::mapping::status_to_i16;
use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresReportRepository {
    pool: DbPool,
}

impl PostgresReportRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn create(&self, report: &Report) -> Result<(), ApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO reports (id, requested_location, status, contact_count, phone_number_count, requested_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(report.id)
        .bind(&report.requested_location)
        .bind(status_to_i16(report.status))
        .bind(report.contact_count)
        .bind(report.phone_number_count)
        .bind(report.requested_at)
        .bind(report.completed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
        let row = sqlx::query_as::<_, db_models::Report>(
            r#"
            SELECT id, requested_location, status, contact_count, phone_number_count, requested_at, completed_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Report", report_id))
    }

    async fn list_all(&self) -> Result<Vec<Report>, ApplicationError> {
        let rows = sqlx::query_as::<_, db_models::Report>(
            r#"
            SELECT id, requested_location, status, contact_count, phone_number_count, requested_at, completed_at
            FROM reports
            ORDER BY requested_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, report: &Report) -> Result<(), ApplicationError> {
        let result = sqlx::query(
            r#"
            UPDATE reports
            SET status = $2, contact_count = $3, phone_number_count = $4, completed_at = $5
            WHERE id = $1
            "#,
        )
        .bind(report.id)
        .bind(status_to_i16(report.status))
        .bind(report.contact_count)
        .bind(report.phone_number_count)
        .bind(report.completed_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::not_found("Report", report.id));
        }

        Ok(())
    }
}
