use uuid::Uuid;

use phonebook_types::contacts::{Contact, ContactDetail, ContactInformation};
use phonebook_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<(), ApplicationError>;

    async fn list_all(&self) -> Result<Vec<Contact>, ApplicationError>;

    /// Returns a contact together with its informations.
    async fn get_with_details(&self, contact_id: Uuid) -> Result<ContactDetail, ApplicationError>;

    async fn exists(&self, contact_id: Uuid) -> Result<bool, ApplicationError>;

    /// Returns `false` when the contact was already absent.
    async fn delete(&self, contact_id: Uuid) -> Result<bool, ApplicationError>;

    async fn add_information(&self, info: &ContactInformation) -> Result<(), ApplicationError>;

    /// Returns `false` when the information was already absent.
    async fn remove_information(&self, info_id: Uuid) -> Result<bool, ApplicationError>;

    /// All Location-typed informations whose content matches `location`.
    async fn informations_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<ContactInformation>, ApplicationError>;
}
