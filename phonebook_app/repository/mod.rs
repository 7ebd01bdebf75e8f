mod contact_repository;
mod report_repository;

pub use contact_repository::ContactRepository;
pub use report_repository::ReportRepository;
