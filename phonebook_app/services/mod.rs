mod contact_service;
mod report_service;

pub use contact_service::ContactService;
pub use report_service::ReportService;
