//! Row <-> domain conversions. Enums are stored as SMALLINT.

use phonebook_types::contacts::{self as domain_contacts, ContactInfoType};
use phonebook_types::reports::{Report, ReportStatus};

use crate::models as db_models;

pub fn status_to_i16(status: ReportStatus) -> i16 {
    match status {
        ReportStatus::Preparing => 0,
        ReportStatus::Completed => 1,
    }
}

pub fn status_from_i16(value: i16) -> ReportStatus {
    match value {
        1 => ReportStatus::Completed,
        _ => ReportStatus::Preparing,
    }
}

pub fn info_type_to_i16(info_type: ContactInfoType) -> i16 {
    match info_type {
        ContactInfoType::PhoneNumber => 0,
        ContactInfoType::EmailAddress => 1,
        ContactInfoType::Location => 2,
    }
}

pub fn info_type_from_i16(value: i16) -> ContactInfoType {
    match value {
        1 => ContactInfoType::EmailAddress,
        2 => ContactInfoType::Location,
        _ => ContactInfoType::PhoneNumber,
    }
}

impl From<db_models::Report> for Report {
    fn from(row: db_models::Report) -> Self {
        Report {
            id: row.id,
            requested_location: row.requested_location,
            status: status_from_i16(row.status),
            contact_count: row.contact_count,
            phone_number_count: row.phone_number_count,
            requested_at: row.requested_at,
            completed_at: row.completed_at,
        }
    }
}

impl From<db_models::Contact> for domain_contacts::Contact {
    fn from(row: db_models::Contact) -> Self {
        domain_contacts::Contact {
            id: row.id,
            name: row.name,
            surname: row.surname,
            company: row.company,
        }
    }
}

impl From<db_models::ContactInformation> for domain_contacts::ContactInformation {
    fn from(row: db_models::ContactInformation) -> Self {
        domain_contacts::ContactInformation {
            id: row.id,
            contact_id: row.contact_id,
            info_type: info_type_from_i16(row.info_type),
            info_content: row.info_content,
        }
    }
}
