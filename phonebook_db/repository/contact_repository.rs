use uuid::Uuid;

use phonebook_app::repository::ContactRepository;
use phonebook_types::contacts::{Contact, ContactDetail, ContactInformation};
use phonebook_types::errors::ApplicationError;

use crate::connection::DbPool;
use crate::mapping::info_type_to_i16;
use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: DbPool,
}

impl PostgresContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: &Contact) -> Result<(), ApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, surname, company)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(&contact.surname)
        .bind(&contact.company)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ApplicationError> {
        let rows = sqlx::query_as::<_, db_models::Contact>(
            "SELECT id, name, surname, company FROM contacts ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_with_details(&self, contact_id: Uuid) -> Result<ContactDetail, ApplicationError> {
        let contact = sqlx::query_as::<_, db_models::Contact>(
            "SELECT id, name, surname, company FROM contacts WHERE id = $1",
        )
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Contact", contact_id))?;

        let informations = sqlx::query_as::<_, db_models::ContactInformation>(
            r#"
            SELECT id, contact_id, info_type, info_content
            FROM contact_informations
            WHERE contact_id = $1
            "#,
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ContactDetail {
            contact: contact.into(),
            informations: informations.into_iter().map(Into::into).collect(),
        })
    }

    async fn exists(&self, contact_id: Uuid) -> Result<bool, ApplicationError> {
        let row: Option<db_models::Contact> = sqlx::query_as(
            "SELECT id, name, surname, company FROM contacts WHERE id = $1",
        )
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    async fn delete(&self, contact_id: Uuid) -> Result<bool, ApplicationError> {
        // contact_informations rows go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_information(&self, info: &ContactInformation) -> Result<(), ApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO contact_informations (id, contact_id, info_type, info_content)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(info.id)
        .bind(info.contact_id)
        .bind(info_type_to_i16(info.info_type))
        .bind(&info.info_content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_information(&self, info_id: Uuid) -> Result<bool, ApplicationError> {
        let result = sqlx::query("DELETE FROM contact_informations WHERE id = $1")
            .bind(info_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn informations_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<ContactInformation>, ApplicationError> {
        use phonebook_types::contacts::ContactInfoType;

        let rows = sqlx::query_as::<_, db_models::ContactInformation>(
            r#"
            SELECT id, contact_id, info_type, info_content
            FROM contact_informations
            WHERE info_type = $1 AND LOWER(info_content) = LOWER($2)
            "#,
        )
        .bind(info_type_to_i16(ContactInfoType::Location))
        .bind(location)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
