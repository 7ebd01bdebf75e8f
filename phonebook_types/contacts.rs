use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactInfoType {
    PhoneNumber,
    EmailAddress,
    Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub company: String,
}

impl Contact {
    pub fn new(name: String, surname: String, company: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            surname,
            company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInformation {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub info_type: ContactInfoType,
    pub info_content: String,
}

impl ContactInformation {
    pub fn new(contact_id: Uuid, info_type: ContactInfoType, info_content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact_id,
            info_type,
            info_content,
        }
    }
}

/// A contact together with its informations, as returned by the detail query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    pub contact: Contact,
    pub informations: Vec<ContactInformation>,
}

/// Aggregate counts for one location, the payload fetched by the
/// statistics lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationStatistics {
    pub location: String,
    #[serde(default)]
    pub contact_count: i64,
    #[serde(default)]
    pub phone_number_count: i64,
}
