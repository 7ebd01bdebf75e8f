use std::sync::Arc;
use uuid::Uuid;

use phonebook_types::contacts::{
    Contact, ContactDetail, ContactInfoType, ContactInformation, LocationStatistics,
};
use phonebook_types::errors::ApplicationError;

use crate::repository::ContactRepository;

/// CRUD over contacts plus the location statistics aggregation that the
/// report pipeline consumes through the statistics endpoint.
pub struct ContactService {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApplicationError> {
        self.contacts.list_all().await
    }

    pub async fn get_contact_detail(
        &self,
        contact_id: Uuid,
    ) -> Result<ContactDetail, ApplicationError> {
        self.contacts.get_with_details(contact_id).await
    }

    pub async fn create_contact(
        &self,
        name: &str,
        surname: &str,
        company: &str,
    ) -> Result<Contact, ApplicationError> {
        if name.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        let contact = Contact::new(
            name.trim().to_string(),
            surname.trim().to_string(),
            company.trim().to_string(),
        );
        self.contacts.create(&contact).await?;

        Ok(contact)
    }

    pub async fn delete_contact(&self, contact_id: Uuid) -> Result<(), ApplicationError> {
        if self.contacts.delete(contact_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found("Contact", contact_id))
        }
    }

    pub async fn add_contact_information(
        &self,
        contact_id: Uuid,
        info_type: ContactInfoType,
        info_content: &str,
    ) -> Result<ContactInformation, ApplicationError> {
        if info_content.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "info content must not be empty".to_string(),
            ));
        }
        if !self.contacts.exists(contact_id).await? {
            return Err(ApplicationError::not_found("Contact", contact_id));
        }

        let info = ContactInformation::new(contact_id, info_type, info_content.trim().to_string());
        self.contacts.add_information(&info).await?;

        Ok(info)
    }

    pub async fn remove_contact_information(&self, info_id: Uuid) -> Result<(), ApplicationError> {
        if self.contacts.remove_information(info_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found("ContactInformation", info_id))
        }
    }

    /// Aggregate counts for one location: distinct contacts holding a
    /// matching Location information, and the phone numbers registered
    /// across those contacts.
    pub async fn location_statistics(
        &self,
        location: &str,
    ) -> Result<LocationStatistics, ApplicationError> {
        let location_infos = self.contacts.informations_by_location(location).await?;

        let mut contact_ids: Vec<Uuid> = location_infos.iter().map(|ci| ci.contact_id).collect();
        contact_ids.sort_unstable();
        contact_ids.dedup();

        let mut phone_number_count: i64 = 0;
        for contact_id in &contact_ids {
            let detail = self.contacts.get_with_details(*contact_id).await?;
            phone_number_count += detail
                .informations
                .iter()
                .filter(|ci| ci.info_type == ContactInfoType::PhoneNumber)
                .count() as i64;
        }

        Ok(LocationStatistics {
            location: location.to_string(),
            contact_count: contact_ids.len() as i64,
            phone_number_count,
        })
    }
}
