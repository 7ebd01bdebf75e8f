use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use phonebook_types::contacts::{
    Contact, ContactDetail, ContactInfoType, ContactInformation, LocationStatistics,
};

use super::ApiError;
use crate::http::AppState;

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Deserialize)]
pub struct CreateContactInformationRequest {
    pub info_type: ContactInfoType,
    pub info_content: String,
}

#[derive(Deserialize)]
pub struct StatisticsQuery {
    #[serde(default)]
    pub location: String,
}

pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contacts.list_contacts().await?))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactDetail>, ApiError> {
    Ok(Json(state.contacts.get_contact_detail(id).await?))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(body): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let contact = state
        .contacts
        .create_contact(&body.name, &body.surname, &body.company)
        .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_contact_information(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateContactInformationRequest>,
) -> Result<(StatusCode, Json<ContactInformation>), ApiError> {
    let info = state
        .contacts
        .add_contact_information(id, body.info_type, &body.info_content)
        .await?;

    Ok((StatusCode::CREATED, Json(info)))
}

pub async fn remove_contact_information(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.contacts.remove_contact_information(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn location_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<LocationStatistics>, ApiError> {
    Ok(Json(
        state.contacts.location_statistics(&query.location).await?,
    ))
}
