use axum::{
    Router,
    routing::{delete, get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use phonebook_app::services::{ContactService, ReportService};
use phonebook_types::{Result, errors::ApplicationError};

use crate::handlers::{
    add_contact_information, create_contact, delete_contact, get_contact, get_report,
    list_contacts, list_reports, location_statistics, remove_contact_information, request_report,
};

#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService>,
    pub reports: Arc<ReportService>,
}

impl AppState {
    pub fn new(contacts: Arc<ContactService>, reports: Arc<ReportService>) -> AppState {
        AppState { contacts, reports }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/api/contacts", get(list_contacts).post(create_contact))
            .route("/api/contacts/statistics", get(location_statistics))
            .route(
                "/api/contacts/{id}",
                get(get_contact).delete(delete_contact),
            )
            .route(
                "/api/contacts/{id}/informations",
                post(add_contact_information),
            )
            .route(
                "/api/contacts/informations/{id}",
                delete(remove_contact_information),
            )
            .route("/api/reports", get(list_reports).post(request_report))
            .route("/api/reports/{id}", get(get_report))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
