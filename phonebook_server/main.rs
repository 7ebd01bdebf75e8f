use std::sync::Arc;

use phonebook_app::{
    config::Config,
    messaging::{ChannelConsumer, report_requested_channel},
    services::{ContactService, ReportService},
    statistics::HttpLocationStatisticsClient,
    worker::ReportCompletionWorker,
};
use phonebook_db::{PostgresContactRepository, PostgresReportRepository, establish_connection_pool};
use phonebook_types::{Result, errors::ApplicationError};
use phonebook_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, state, consumer) = setup_app().await?;

    consumer.run();
    WebRouter::serve(state, config.http_port).await
}

async fn setup_app() -> Result<(Arc<Config>, AppState, ChannelConsumer), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let db_pool = establish_connection_pool().await?;

    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
    tracing::info!("Database migrations applied.");

    let contact_repo = Arc::new(PostgresContactRepository::new(db_pool.clone()));
    let report_repo = Arc::new(PostgresReportRepository::new(db_pool));

    let (publisher, receiver) = report_requested_channel();

    let contacts = Arc::new(ContactService::new(contact_repo));
    let reports = Arc::new(ReportService::new(
        report_repo.clone(),
        Arc::new(publisher.clone()),
        config.max_location_len,
    ));

    let statistics = Arc::new(HttpLocationStatisticsClient::new(
        &config.contact_api_base_url,
    ));
    let worker = Arc::new(ReportCompletionWorker::new(report_repo, statistics));
    let consumer = ChannelConsumer::new(
        worker,
        publisher,
        receiver,
        config.redelivery_delay,
        config.max_delivery_attempts,
    );

    let state = AppState::new(contacts, reports);

    Ok((config, state, consumer))
}
