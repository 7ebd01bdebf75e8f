mod contact_repository;
mod report_repository;

pub use contact_repository::PostgresContactRepository;
pub use report_repository::PostgresReportRepository;
